use crate::random::uniform;
use rand::Rng;
use std::sync::atomic::{AtomicU8, AtomicU32, AtomicUsize, Ordering};

/// Number of slots in the comparison feedback table.
pub const CMP_FEEDBACK_SLOTS: usize = 1024;
/// Width of a single slot value in bytes.
pub const CMP_FEEDBACK_VALUE_LEN: usize = 32;

/// Read access to a table of byte strings collected by comparison instrumentation.
///
/// The table is shared with producers running concurrently in other workers, so every
/// read is a relaxed snapshot: the count and any slot may change between two calls.
pub trait FeedbackDictionary: Send + Sync {
    /// Number of slots published so far. May exceed `capacity()`.
    fn count(&self) -> usize;

    fn capacity(&self) -> usize;

    /// Copies the value stored in `index` into `out` and returns its length.
    /// A length of 0 means the slot holds nothing usable.
    fn read_slot(&self, index: usize, out: &mut Vec<u8>) -> usize;
}

/// Picks a random published value, or `None` when nothing usable is available.
pub fn feedback_value<R: Rng + ?Sized>(
    dictionary: &dyn FeedbackDictionary,
    rng: &mut R,
) -> Option<Vec<u8>> {
    let count = dictionary.count();
    if count == 0 {
        return None;
    }
    let count = count.min(dictionary.capacity());
    if count == 0 {
        return None;
    }
    let choice = uniform(rng, 0, count as u64 - 1) as usize;
    let mut value = Vec::with_capacity(CMP_FEEDBACK_VALUE_LEN);
    if dictionary.read_slot(choice, &mut value) == 0 {
        return None;
    }
    Some(value)
}

#[derive(Debug)]
struct CmpFeedbackSlot {
    len: AtomicUsize,
    val: [AtomicU8; CMP_FEEDBACK_VALUE_LEN],
}

impl CmpFeedbackSlot {
    fn new() -> Self {
        Self {
            len: AtomicUsize::new(0),
            val: std::array::from_fn(|_| AtomicU8::new(0)),
        }
    }

    fn matches(&self, value: &[u8]) -> bool {
        let len = self.len.load(Ordering::Acquire);
        len == value.len()
            && self
                .val
                .iter()
                .zip(value)
                .all(|(slot, byte)| slot.load(Ordering::Relaxed) == *byte)
    }
}

/// Lock-free comparison feedback table.
///
/// Producers reserve a slot with an atomic increment, fill its bytes and then publish
/// the length with release ordering. Readers load the length with acquire ordering
/// before copying bytes; a slot whose length is still 0 is treated as empty.
#[derive(Debug)]
pub struct CmpFeedbackMap {
    cnt: AtomicU32,
    slots: Box<[CmpFeedbackSlot]>,
}

impl CmpFeedbackMap {
    pub fn new() -> Self {
        Self::with_capacity(CMP_FEEDBACK_SLOTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let slots: Vec<CmpFeedbackSlot> = (0..capacity).map(|_| CmpFeedbackSlot::new()).collect();
        Self {
            cnt: AtomicU32::new(0),
            slots: slots.into_boxed_slice(),
        }
    }

    /// Records a compared operand. Values longer than a slot are truncated.
    ///
    /// Returns `false` when the value is empty, already present or the table is full.
    pub fn add(&self, value: &[u8]) -> bool {
        if value.is_empty() {
            return false;
        }
        let value = &value[..value.len().min(CMP_FEEDBACK_VALUE_LEN)];

        let published = (self.cnt.load(Ordering::Acquire) as usize).min(self.slots.len());
        if self.slots[..published].iter().any(|slot| slot.matches(value)) {
            return false;
        }

        let index = self.cnt.fetch_add(1, Ordering::AcqRel) as usize;
        if index >= self.slots.len() {
            self.cnt.store(self.slots.len() as u32, Ordering::Release);
            return false;
        }
        let slot = &self.slots[index];
        for (cell, byte) in slot.val.iter().zip(value) {
            cell.store(*byte, Ordering::Relaxed);
        }
        slot.len.store(value.len(), Ordering::Release);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for CmpFeedbackMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackDictionary for CmpFeedbackMap {
    fn count(&self) -> usize {
        self.cnt.load(Ordering::Acquire) as usize
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn read_slot(&self, index: usize, out: &mut Vec<u8>) -> usize {
        out.clear();
        let Some(slot) = self.slots.get(index) else {
            return 0;
        };
        let len = slot.len.load(Ordering::Acquire).min(CMP_FEEDBACK_VALUE_LEN);
        out.extend(slot.val[..len].iter().map(|b| b.load(Ordering::Relaxed)));
        len
    }
}
