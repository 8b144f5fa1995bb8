use crate::random::INPUT_MAX_SIZE_CEILING;

pub trait Input: Clone + Send + Sync + std::fmt::Debug + 'static {
    fn as_bytes(&self) -> &[u8];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

impl Input for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

/// An input that a mutation pass may edit in place.
///
/// The buffer never grows past `max_size()`; geometry primitives clamp every
/// request before calling `set_size`.
pub trait MutableInput: Input {
    fn as_mut_bytes(&mut self) -> &mut [u8];

    /// Capacity ceiling imposed by the fuzzer configuration.
    fn max_size(&self) -> usize;

    /// Resizes the logical buffer, keeping the first `min(old, new)` bytes.
    ///
    /// # Panics
    /// If `new_size` is greater than `max_size()`.
    fn set_size(&mut self, new_size: usize);
}

/// Growable byte buffer bounded by a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynInput {
    data: Vec<u8>,
    max_size: usize,
}

fn check_capacity(max_size: usize) {
    assert!(
        max_size <= INPUT_MAX_SIZE_CEILING,
        "max input size {} exceeds INPUT_MAX_SIZE_CEILING ({})",
        max_size,
        INPUT_MAX_SIZE_CEILING
    );
}

impl DynInput {
    /// # Panics
    /// If `max_size` is above [`INPUT_MAX_SIZE_CEILING`].
    pub fn new(max_size: usize) -> Self {
        check_capacity(max_size);
        Self {
            data: Vec::new(),
            max_size,
        }
    }

    /// Builds a buffer from existing bytes, truncating them to `max_size`.
    ///
    /// # Panics
    /// If `max_size` is above [`INPUT_MAX_SIZE_CEILING`].
    pub fn from_bytes(bytes: &[u8], max_size: usize) -> Self {
        check_capacity(max_size);
        let keep = bytes.len().min(max_size);
        let mut data = Vec::with_capacity(keep);
        data.extend_from_slice(&bytes[..keep]);
        Self { data, max_size }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Input for DynInput {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    fn len(&self) -> usize {
        self.data.len()
    }
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl MutableInput for DynInput {
    fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn max_size(&self) -> usize {
        self.max_size
    }

    fn set_size(&mut self, new_size: usize) {
        assert!(
            new_size <= self.max_size,
            "set_size({}) exceeds max input size {}",
            new_size,
            self.max_size
        );
        self.data.resize(new_size, 0);
    }
}
