//! Capacity-bounded buffer geometry used by the mangle operators.
//!
//! Every primitive clamps its arguments against the current size and the input's
//! capacity, so no operator can push the buffer past `max_size()` or write outside
//! `[0, size)`.

use crate::input::MutableInput;
use crate::mutator::MangleEnv;
use crate::random::{self, INPUT_MAX_SIZE_CEILING, to_printable};
use rand::Rng;

/// One mutation pass over one buffer.
///
/// Bundles the buffer, the random source and the shared collaborators so operators
/// can be written as plain methods.
pub struct MangleRun<'r, 'e, I: MutableInput, R: Rng> {
    pub(crate) input: &'r mut I,
    pub(crate) rng: &'r mut R,
    pub(crate) env: MangleEnv<'e>,
}

impl<'r, 'e, I: MutableInput, R: Rng> MangleRun<'r, 'e, I, R> {
    pub fn new(input: &'r mut I, rng: &'r mut R, env: MangleEnv<'e>) -> Self {
        Self { input, rng, env }
    }

    pub fn input(&self) -> &I {
        &*self.input
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.input.max_size()
    }

    #[inline]
    pub(crate) fn coin(&mut self) -> bool {
        random::coin(&mut *self.rng)
    }

    #[inline]
    pub(crate) fn uniform(&mut self, lo: u64, hi: u64) -> u64 {
        random::uniform(&mut *self.rng, lo, hi)
    }

    #[inline]
    pub(crate) fn get_len(&mut self, max: usize) -> usize {
        random::biased_len(&mut *self.rng, max)
    }

    #[inline]
    pub(crate) fn offset(&mut self) -> usize {
        random::biased_offset(&mut *self.rng, self.input.len())
    }

    #[inline]
    pub(crate) fn offset_inclusive_end(&mut self) -> usize {
        random::biased_offset_inclusive_end(&mut *self.rng, self.input.len(), INPUT_MAX_SIZE_CEILING)
    }

    /// Bytes remaining after `off`, excluding the byte at `off` itself.
    ///
    /// # Panics
    /// If `off` is not inside the buffer.
    pub fn len_left(&self, off: usize) -> usize {
        let size = self.size();
        assert!(off < size, "Offset is too large: off:{} >= len:{}", off, size);
        size - off - 1
    }

    /// Shifts up to `len` bytes from `from` to `to`; overlapping ranges are fine.
    pub fn move_bytes(&mut self, from: usize, to: usize, len: usize) {
        let size = self.size();
        if from >= size || to >= size || from == to {
            return;
        }
        let len = len.min(size - from).min(size - to);
        self.input.as_mut_bytes().copy_within(from..from + len, to);
    }

    /// Copies as much of `src` as fits at `off`.
    pub fn overwrite(&mut self, off: usize, src: &[u8], printable: bool) {
        let size = self.size();
        if src.is_empty() || off >= size {
            return;
        }
        let len = src.len().min(size - off);
        let dst = &mut self.input.as_mut_bytes()[off..off + len];
        dst.copy_from_slice(&src[..len]);
        if printable {
            to_printable(dst);
        }
    }

    /// Opens a gap of up to `len` bytes at `off` and returns the gap's real length.
    ///
    /// The result is 0 when the buffer is already at capacity. Callers must use the
    /// returned length, not the requested one.
    pub fn inflate(&mut self, off: usize, len: usize, printable: bool) -> usize {
        let size = self.size();
        let max_size = self.max_size();
        if size >= max_size {
            return 0;
        }
        let len = len.min(max_size - size);
        let off = off.min(size);

        self.input.set_size(size + len);
        self.move_bytes(off, off + len, size + len);
        if printable {
            self.input.as_mut_bytes()[off..off + len].fill(b' ');
        }
        len
    }

    pub fn insert(&mut self, off: usize, val: &[u8], printable: bool) {
        let len = self.inflate(off, val.len(), printable);
        self.overwrite(off, &val[..len], printable);
    }

    /// Places `val` either over existing bytes or as an insertion, at a biased offset.
    pub fn use_value(&mut self, val: &[u8], printable: bool) {
        if self.coin() {
            let off = self.offset();
            self.overwrite(off, val, printable);
        } else {
            let off = self.offset_inclusive_end();
            self.insert(off, val, printable);
        }
    }

    /// Same as [`use_value`](Self::use_value) at a caller-chosen offset.
    pub fn use_value_at(&mut self, off: usize, val: &[u8], printable: bool) {
        if self.coin() {
            self.overwrite(off, val, printable);
        } else {
            self.insert(off, val, printable);
        }
    }
}
