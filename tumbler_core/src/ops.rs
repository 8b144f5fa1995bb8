//! The mangle operator library.
//!
//! Every operator is a method on [`MangleRun`] and goes through the geometry
//! primitives, so size and bounds guarantees hold for all of them. Operators that
//! need an unavailable collaborator (empty dictionary, no feedback, no corpus entry)
//! fall back to [`MangleOp::Bytes`].

use crate::feedback::feedback_value;
use crate::geometry::MangleRun;
use crate::input::{Input, MutableInput};
use crate::random::{fill_printable, fill_random, is_printable, printable_byte, to_printable};
use crate::tables::{MAGIC_VALUES, RSBOX};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MangleOp {
    Shrink,
    Expand,
    Bit,
    IncByte,
    DecByte,
    NegByte,
    AddSub,
    MemSet,
    MemClr,
    MemSwap,
    MemCopy,
    Bytes,
    AsciiNum,
    AsciiNumChange,
    ByteRepeat,
    Magic,
    StaticDict,
    ConstFeedbackDict,
    RandomBuf,
    Splice,
    /// Only used to seed an empty buffer; not part of [`MangleOp::LIBRARY`].
    Resize,
}

impl MangleOp {
    /// Operators the orchestrator draws from uniformly.
    pub const LIBRARY: [MangleOp; 20] = [
        MangleOp::Shrink,
        MangleOp::Expand,
        MangleOp::Bit,
        MangleOp::IncByte,
        MangleOp::DecByte,
        MangleOp::NegByte,
        MangleOp::AddSub,
        MangleOp::MemSet,
        MangleOp::MemClr,
        MangleOp::MemSwap,
        MangleOp::MemCopy,
        MangleOp::Bytes,
        MangleOp::AsciiNum,
        MangleOp::AsciiNumChange,
        MangleOp::ByteRepeat,
        MangleOp::Magic,
        MangleOp::StaticDict,
        MangleOp::ConstFeedbackDict,
        MangleOp::RandomBuf,
        MangleOp::Splice,
    ];
}

/// Transformations applied to a decimal number found in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumTransform {
    Increment,
    Decrement,
    Double,
    Halve,
    Random,
    AddSmall,
    SubSmall,
    Complement,
}

impl NumTransform {
    pub const ALL: [NumTransform; 8] = [
        NumTransform::Increment,
        NumTransform::Decrement,
        NumTransform::Double,
        NumTransform::Halve,
        NumTransform::Random,
        NumTransform::AddSmall,
        NumTransform::SubSmall,
        NumTransform::Complement,
    ];

    pub fn apply<R: Rng + ?Sized>(self, val: u64, rng: &mut R) -> u64 {
        match self {
            NumTransform::Increment => val.wrapping_add(1),
            NumTransform::Decrement => val.wrapping_sub(1),
            NumTransform::Double => val.wrapping_mul(2),
            NumTransform::Halve => val / 2,
            NumTransform::Random => rng.next_u64(),
            NumTransform::AddSmall => val.wrapping_add(rng.random_range(1..=256)),
            NumTransform::SubSmall => val.wrapping_sub(rng.random_range(1..=256)),
            NumTransform::Complement => !val,
        }
    }
}

/// Adds `$delta` to the `$ty`-wide integer at `$off`, in native or swapped byte order.
macro_rules! add_sub_wide {
    ($run:ident, $ty:ty, $off:expr, $delta:expr, $printable:expr) => {{
        const WIDTH: usize = std::mem::size_of::<$ty>();
        let mut raw = [0u8; WIDTH];
        raw.copy_from_slice(&$run.input.as_bytes()[$off..$off + WIDTH]);
        let val = <$ty>::from_ne_bytes(raw);
        let val = if $run.coin() {
            val.wrapping_add($delta as $ty)
        } else {
            val.swap_bytes().wrapping_add($delta as $ty).swap_bytes()
        };
        $run.overwrite($off, &val.to_ne_bytes(), $printable);
    }};
}

impl<I: MutableInput, R: Rng> MangleRun<'_, '_, I, R> {
    /// Applies a single operator.
    ///
    /// Every operator except [`MangleOp::Resize`] expects a non-empty buffer.
    pub fn apply(&mut self, op: MangleOp, printable: bool) {
        log::trace!("applying {:?} (size {})", op, self.size());
        match op {
            MangleOp::Shrink => self.shrink(),
            MangleOp::Expand => self.expand(printable),
            MangleOp::Bit => self.bit(printable),
            MangleOp::IncByte => self.inc_byte(printable),
            MangleOp::DecByte => self.dec_byte(printable),
            MangleOp::NegByte => self.neg_byte(printable),
            MangleOp::AddSub => self.add_sub(printable),
            MangleOp::MemSet => self.mem_set(printable),
            MangleOp::MemClr => self.mem_clr(printable),
            MangleOp::MemSwap => self.mem_swap(),
            MangleOp::MemCopy => self.mem_copy(printable),
            MangleOp::Bytes => self.bytes(printable),
            MangleOp::AsciiNum => self.ascii_num(printable),
            MangleOp::AsciiNumChange => self.ascii_num_change(printable),
            MangleOp::ByteRepeat => self.byte_repeat(printable),
            MangleOp::Magic => self.magic(printable),
            MangleOp::StaticDict => self.static_dict(printable),
            MangleOp::ConstFeedbackDict => self.const_feedback_dict(printable),
            MangleOp::RandomBuf => self.random_buf(printable),
            MangleOp::Splice => self.splice(printable),
            MangleOp::Resize => self.resize(printable),
        }
    }

    fn shrink(&mut self) {
        let size = self.size();
        if size <= 2 {
            return;
        }
        let off_start = self.offset();
        let left = self.len_left(off_start);
        if left == 0 {
            return;
        }
        let len = if self.uniform(0, 15) != 0 {
            self.get_len(left.min(16))
        } else {
            self.get_len(left)
        };
        let off_end = off_start + len;
        self.move_bytes(off_end, off_start, size - off_end);
        self.input.set_size(size - len);
    }

    fn expand(&mut self, printable: bool) {
        let off = self.offset();
        let room = self.max_size() - off;
        let len = if self.uniform(0, 15) != 0 {
            self.get_len(room.min(16))
        } else {
            self.get_len(room)
        };
        self.inflate(off, len, printable);
    }

    fn bit(&mut self, printable: bool) {
        let off = self.offset();
        let bit = self.uniform(0, 7);
        let data = self.input.as_mut_bytes();
        data[off] ^= 1u8 << bit;
        if printable {
            to_printable(&mut data[off..off + 1]);
        }
    }

    fn inc_byte(&mut self, printable: bool) {
        let off = self.offset();
        let byte = &mut self.input.as_mut_bytes()[off];
        *byte = if printable {
            ((*byte as i32 - 32 + 1).rem_euclid(95) + 32) as u8
        } else {
            byte.wrapping_add(1)
        };
    }

    fn dec_byte(&mut self, printable: bool) {
        let off = self.offset();
        let byte = &mut self.input.as_mut_bytes()[off];
        *byte = if printable {
            ((*byte as i32 - 32 - 1).rem_euclid(95) + 32) as u8
        } else {
            byte.wrapping_sub(1)
        };
    }

    fn neg_byte(&mut self, printable: bool) {
        let off = self.offset();
        let byte = &mut self.input.as_mut_bytes()[off];
        *byte = if printable {
            ((94 - (*byte as i32 - 32)).rem_euclid(95) + 32) as u8
        } else {
            !*byte
        };
    }

    fn add_sub(&mut self, printable: bool) {
        let off = self.offset();
        let mut width = 1usize << self.uniform(0, 3);
        if self.size() - off < width {
            width = 1;
        }
        let range = match width {
            1 => 16,
            2 => 4096,
            4 => 1_048_576,
            8 => 268_435_456,
            other => panic!("Invalid operand size: {}", other),
        };
        self.add_sub_with_range(off, width, range, printable);
    }

    pub(crate) fn add_sub_with_range(&mut self, off: usize, width: usize, range: u64, printable: bool) {
        let delta = self.uniform(0, range * 2) as i64 - range as i64;
        match width {
            1 => {
                let byte = self.input.as_bytes()[off].wrapping_add(delta as u8);
                self.overwrite(off, &[byte], printable);
            }
            2 => add_sub_wide!(self, i16, off, delta, printable),
            4 => add_sub_wide!(self, i32, off, delta, printable),
            8 => add_sub_wide!(self, i64, off, delta, printable),
            other => panic!("Invalid operand size: {}", other),
        }
    }

    fn mem_set(&mut self, printable: bool) {
        let value = if printable {
            printable_byte(&mut *self.rng)
        } else {
            self.uniform(0, 255) as u8
        };
        self.fill_run(value, printable);
    }

    fn mem_clr(&mut self, printable: bool) {
        self.fill_run(if printable { b' ' } else { 0 }, printable);
    }

    fn fill_run(&mut self, value: u8, printable: bool) {
        let off = self.offset();
        let mut len = self.get_len(self.size() - off);
        if self.coin() {
            len = self.inflate(off, len, printable);
        }
        self.input.as_mut_bytes()[off..off + len].fill(value);
    }

    fn mem_swap(&mut self) {
        let size = self.size();
        let off1 = self.offset();
        let off2 = self.offset();
        let len = self.get_len((size - off1).min(size - off2));
        if off1 == off2 {
            return;
        }
        self.swap_regions(off1, off2, len);
    }

    /// Exchanges two runs, folding the inverse S-box into the bytes moved forward.
    pub(crate) fn swap_regions(&mut self, off1: usize, off2: usize, len: usize) {
        let data = self.input.as_mut_bytes();
        for i in 0..len / 2 {
            let (head1, head2) = (off1 + i, off2 + i);
            let (tail1, tail2) = (off1 + len - 1 - i, off2 + len - 1 - i);
            let left = data[head2];
            let right = data[tail2];
            let mixed = RSBOX[left as usize].rotate_left(5) ^ right;
            data[head2] = data[head1];
            data[head1] = mixed;
            data[tail2] = data[tail1];
            data[tail1] = left;
        }
    }

    fn mem_copy(&mut self, printable: bool) {
        let off = self.offset();
        let len = self.get_len(self.size() - off);
        let run = self.input.as_bytes()[off..off + len].to_vec();
        self.use_value(&run, printable);
    }

    fn bytes(&mut self, printable: bool) {
        let mut buf = [0u8; 2];
        if printable {
            fill_printable(&mut *self.rng, &mut buf);
        } else {
            fill_random(&mut *self.rng, &mut buf);
        }
        let count = self.uniform(1, 2) as usize;
        self.use_value(&buf[..count], printable);
    }

    fn ascii_num(&mut self, printable: bool) {
        let text = format!("{:<19}", self.rng.random::<i64>());
        let len = self.uniform(2, 8) as usize;
        self.use_value(&text.as_bytes()[..len], printable);
    }

    fn ascii_num_change(&mut self, printable: bool) {
        let start = self.offset();
        let Some(off) = self.input.as_bytes()[start..]
            .iter()
            .position(u8::is_ascii_digit)
            .map(|pos| start + pos)
        else {
            return;
        };
        let idx = self.uniform(0, NumTransform::ALL.len() as u64 - 1) as usize;
        self.change_ascii_number_at(off, NumTransform::ALL[idx], printable);
    }

    /// Transforms the digit run starting at `off` and writes it back over the run or
    /// inserted in front of it.
    pub(crate) fn change_ascii_number_at(&mut self, off: usize, transform: NumTransform, printable: bool) {
        if let Some(text) = self.transformed_number_at(off, transform) {
            self.use_value_at(off, &text, printable);
        }
    }

    /// Parses up to 20 digits at `off` and renders the transformed value with the
    /// same width as the run. `None` when `off` holds no digit.
    pub(crate) fn transformed_number_at(&mut self, off: usize, transform: NumTransform) -> Option<Vec<u8>> {
        let digits: Vec<u8> = self.input.as_bytes()[off..]
            .iter()
            .take(20)
            .take_while(|b| b.is_ascii_digit())
            .copied()
            .collect();
        if digits.is_empty() {
            return None;
        }
        let val = digits
            .iter()
            .fold(0u64, |acc, d| acc.wrapping_mul(10).wrapping_add(u64::from(d - b'0')));
        let val = transform.apply(val, &mut *self.rng);
        let text = format!("{:<20}", val);
        Some(text.as_bytes()[..digits.len()].to_vec())
    }

    fn byte_repeat(&mut self, printable: bool) {
        let off = self.offset();
        let dest = off + 1;
        let room = self.size() - dest;
        if room == 0 {
            self.bytes(printable);
            return;
        }
        let mut len = self.get_len(room);
        if self.coin() {
            len = self.inflate(dest, len, printable);
        }
        let mut value = self.input.as_bytes()[off];
        if printable && !is_printable(value) {
            value = value % 95 + 32;
        }
        self.input.as_mut_bytes()[dest..dest + len].fill(value);
    }

    fn magic(&mut self, printable: bool) {
        let idx = self.uniform(0, MAGIC_VALUES.len() as u64 - 1) as usize;
        let magic = MAGIC_VALUES[idx];
        self.use_value(magic.as_bytes(), printable);
    }

    fn static_dict(&mut self, printable: bool) {
        let dictionary = self.env.dictionary;
        if dictionary.is_empty() {
            log::debug!("static dictionary is empty, falling back to random bytes");
            self.bytes(printable);
            return;
        }
        let idx = self.uniform(0, dictionary.len() as u64 - 1) as usize;
        self.use_value(&dictionary.entries()[idx], printable);
    }

    fn const_feedback_dict(&mut self, printable: bool) {
        let value = match self.env.feedback {
            Some(feedback) => feedback_value(feedback, &mut *self.rng),
            None => None,
        };
        match value {
            Some(value) => self.use_value(&value, printable),
            None => {
                log::debug!("no feedback value available, falling back to random bytes");
                self.bytes(printable);
            }
        }
    }

    fn random_buf(&mut self, printable: bool) {
        let off = self.offset();
        let mut len = self.get_len(self.size() - off);
        if self.coin() {
            len = self.inflate(off, len, printable);
        }
        let region = &mut self.input.as_mut_bytes()[off..off + len];
        if printable {
            fill_printable(&mut *self.rng, region);
        } else {
            fill_random(&mut *self.rng, region);
        }
    }

    fn splice(&mut self, printable: bool) {
        let Some(corpus) = self.env.corpus else {
            log::debug!("no corpus attached, falling back to random bytes");
            self.bytes(printable);
            return;
        };
        let Some((id, other)) = corpus.random_select(&mut *self.rng) else {
            log::warn!("corpus returned no input for splicing");
            self.bytes(printable);
            return;
        };
        let other = other.as_bytes();
        let other = &other[..other.len().min(self.max_size())];
        if other.is_empty() {
            log::debug!("corpus entry {} is empty, falling back to random bytes", id);
            self.bytes(printable);
            return;
        }
        let remote_off = self.get_len(other.len()) - 1;
        let len = self.get_len(other.len() - remote_off);
        self.use_value(&other[remote_off..remote_off + len], printable);
    }

    fn resize(&mut self, printable: bool) {
        let choice = self.uniform(0, 32);
        self.resize_with_choice(choice, printable);
    }

    pub(crate) fn resize_with_choice(&mut self, choice: u64, printable: bool) {
        let old_size = self.size();
        let max_size = self.max_size() as i64;
        let current = old_size as i64;
        let new_size = match choice {
            0 => self.uniform(1, max_size as u64) as i64,
            1..=4 => current + self.uniform(0, 8) as i64,
            5 => current + self.uniform(9, 128) as i64,
            6..=9 => current - self.uniform(0, 8) as i64,
            10 => current - self.uniform(9, 128) as i64,
            11..=32 => current,
            other => panic!("Illegal resize choice: {}", other),
        };
        let new_size = new_size.clamp(1, max_size) as usize;
        self.input.set_size(new_size);
        if printable && new_size > old_size {
            self.input.as_mut_bytes()[old_size..new_size].fill(b' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MutateConfig;
    use crate::corpus::{Corpus, CorpusEntryMetadata, InMemoryCorpus};
    use crate::dictionary::Dictionary;
    use crate::feedback::CmpFeedbackMap;
    use crate::input::DynInput;
    use crate::mutator::MangleEnv;
    use crate::random::is_printable;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    fn apply_once(env: MangleEnv<'_>, bytes: &[u8], max_size: usize, seed: u64, op: MangleOp, printable: bool) -> DynInput {
        let mut input = DynInput::from_bytes(bytes, max_size);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        MangleRun::new(&mut input, &mut rng, env).apply(op, printable);
        input
    }

    fn corpus_of(entries: &[&[u8]]) -> InMemoryCorpus<Vec<u8>> {
        let mut corpus = InMemoryCorpus::new();
        for entry in entries {
            corpus
                .add(entry.to_vec(), CorpusEntryMetadata::new("test"))
                .unwrap();
        }
        corpus
    }

    #[test]
    fn library_has_twenty_distinct_operators_without_resize() {
        let distinct: std::collections::HashSet<_> = MangleOp::LIBRARY.iter().collect();
        assert_eq!(distinct.len(), 20);
        assert!(!MangleOp::LIBRARY.contains(&MangleOp::Resize));
        assert_eq!(MangleOp::LIBRARY[0], MangleOp::Shrink);
        assert_eq!(MangleOp::LIBRARY[19], MangleOp::Splice);
    }

    #[test]
    fn mem_swap_worked_example() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let mut input = DynInput::from_bytes(&[0, 1, 2, 3, 4, 5, 6, 7], 16);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary)).swap_regions(0, 4, 4);
        assert_eq!(input.as_bytes(), &[0x01, 0xC0, 0x05, 0x04, 0x00, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn ascii_number_is_incremented_in_place() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let mut input = DynInput::from_bytes(b"abc123xyz", 64);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut run = MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary));
        let text = run.transformed_number_at(3, NumTransform::Increment).unwrap();
        assert_eq!(text, b"124");
        run.overwrite(3, &text, false);
        assert_eq!(input.as_bytes(), b"abc124xyz");
    }

    #[test]
    fn ascii_number_keeps_run_length_when_value_grows() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let mut input = DynInput::from_bytes(b"x99y", 64);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut run = MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary));
        assert_eq!(run.transformed_number_at(1, NumTransform::Increment), Some(b"10".to_vec()));
        assert_eq!(run.transformed_number_at(0, NumTransform::Increment), None);
    }

    #[test]
    fn ascii_number_is_overwritten_or_inserted() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let mut overwritten = 0;
        let mut inserted = 0;
        for seed in 0..64 {
            let mut input = DynInput::from_bytes(b"abc123xyz", 64);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary)).change_ascii_number_at(
                3,
                NumTransform::Increment,
                false,
            );
            match input.as_bytes() {
                b"abc124xyz" => overwritten += 1,
                b"abc124123xyz" => inserted += 1,
                other => panic!("unexpected result {:?}", String::from_utf8_lossy(other)),
            }
        }
        assert!(overwritten > 0 && inserted > 0, "{} overwritten, {} inserted", overwritten, inserted);
    }

    #[test]
    fn ascii_num_change_can_grow_the_buffer() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let grew = (0..256).any(|seed| {
            apply_once(MangleEnv::new(&config, &dictionary), b"123", 64, seed, MangleOp::AsciiNumChange, false).len() > 3
        });
        assert!(grew);
    }

    #[test]
    fn ascii_num_change_without_digits_is_noop() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        for seed in 0..32 {
            let out = apply_once(MangleEnv::new(&config, &dictionary), b"no digits", 64, seed, MangleOp::AsciiNumChange, false);
            assert_eq!(out.as_bytes(), b"no digits");
        }
    }

    #[test]
    fn num_transforms_wrap() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(NumTransform::Increment.apply(u64::MAX, &mut rng), 0);
        assert_eq!(NumTransform::Decrement.apply(0, &mut rng), u64::MAX);
        assert_eq!(NumTransform::Double.apply(1 << 63, &mut rng), 0);
        assert_eq!(NumTransform::Halve.apply(7, &mut rng), 3);
        assert_eq!(NumTransform::Complement.apply(0, &mut rng), u64::MAX);
        let added = NumTransform::AddSmall.apply(10, &mut rng);
        assert!((11..=266).contains(&added));
    }

    #[test]
    fn resize_outcome_zero_stays_in_bounds() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        for seed in 0..200 {
            let mut input = DynInput::from_bytes(b"seed", 100);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary)).resize_with_choice(0, false);
            assert!((1..=100).contains(&input.len()));
            if input.len() >= 4 {
                assert_eq!(&input.as_bytes()[..4], b"seed");
            }
        }
    }

    #[test]
    fn resize_clamps_and_space_fills() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        for choice in 0..=32 {
            let mut input = DynInput::new(10);
            let mut rng = ChaCha8Rng::seed_from_u64(choice);
            MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary)).resize_with_choice(choice, true);
            assert!((1..=10).contains(&input.len()), "choice {}", choice);
            assert!(input.as_bytes().iter().all(|b| *b == b' '));
        }
    }

    #[test]
    #[should_panic(expected = "Illegal resize choice")]
    fn resize_choice_out_of_range_is_fatal() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let mut input = DynInput::from_bytes(b"a", 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary)).resize_with_choice(33, false);
    }

    #[test]
    #[should_panic(expected = "Invalid operand size")]
    fn add_sub_invalid_width_is_fatal() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let mut input = DynInput::from_bytes(b"abcdefgh", 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary)).add_sub_with_range(0, 3, 16, false);
    }

    #[test]
    fn add_sub_stays_within_range() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        for seed in 0..64 {
            let mut input = DynInput::from_bytes(&[100], 8);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            MangleRun::new(&mut input, &mut rng, MangleEnv::new(&config, &dictionary)).add_sub_with_range(0, 1, 16, false);
            let byte = input.as_bytes()[0];
            assert!((84..=116).contains(&byte), "byte {}", byte);
        }
    }

    #[test]
    fn printable_byte_arithmetic_wraps_inside_range() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let env = MangleEnv::new(&config, &dictionary);
        assert_eq!(apply_once(env, &[126], 4, 0, MangleOp::IncByte, true).as_bytes(), &[32]);
        assert_eq!(apply_once(env, &[32], 4, 0, MangleOp::DecByte, true).as_bytes(), &[126]);
        assert_eq!(apply_once(env, &[32], 4, 0, MangleOp::NegByte, true).as_bytes(), &[126]);
        assert_eq!(apply_once(env, &[0xff], 4, 0, MangleOp::IncByte, false).as_bytes(), &[0]);
        assert_eq!(apply_once(env, &[0x0f], 4, 0, MangleOp::NegByte, false).as_bytes(), &[0xf0]);
    }

    #[test]
    fn bit_flips_exactly_one_bit() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        for seed in 0..32 {
            let out = apply_once(MangleEnv::new(&config, &dictionary), &[0x5A], 4, seed, MangleOp::Bit, false);
            assert_eq!((out.as_bytes()[0] ^ 0x5A).count_ones(), 1);
        }
    }

    #[test]
    fn shrink_never_touches_tiny_buffers() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        for seed in 0..32 {
            let out = apply_once(MangleEnv::new(&config, &dictionary), b"ab", 8, seed, MangleOp::Shrink, false);
            assert_eq!(out.as_bytes(), b"ab");
            let out = apply_once(MangleEnv::new(&config, &dictionary), b"abcdefgh", 8, seed, MangleOp::Shrink, false);
            assert!(out.len() < 8 || out.as_bytes() == b"abcdefgh");
        }
    }

    #[test]
    fn expand_is_bounded_by_capacity() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        for seed in 0..32 {
            let out = apply_once(MangleEnv::new(&config, &dictionary), b"abcd", 6, seed, MangleOp::Expand, false);
            assert!((5..=6).contains(&out.len()));
            let out = apply_once(MangleEnv::new(&config, &dictionary), b"abcd", 4, seed, MangleOp::Expand, false);
            assert_eq!(out.as_bytes(), b"abcd");
        }
    }

    #[test]
    fn collaborator_values_reach_the_buffer() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::from_entries([b"Z".to_vec()]);
        let feedback = CmpFeedbackMap::with_capacity(4);
        feedback.add(b"Q");
        let corpus = corpus_of(&[b"S".as_slice()]);
        let env = MangleEnv::new(&config, &dictionary)
            .with_feedback(&feedback)
            .with_corpus(&corpus);

        let blank = [b'.'; 16];
        for seed in 0..32 {
            let out = apply_once(env, &blank, 64, seed, MangleOp::StaticDict, false);
            assert!(out.as_bytes().contains(&b'Z'));
            let out = apply_once(env, &blank, 64, seed, MangleOp::ConstFeedbackDict, false);
            assert!(out.as_bytes().contains(&b'Q'));
            let out = apply_once(env, &blank, 64, seed, MangleOp::Splice, false);
            assert!(out.as_bytes().contains(&b'S'));
        }
    }

    #[test]
    fn missing_collaborators_fall_back_to_bytes() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::new();
        let empty_corpus = corpus_of(&[]);
        let empty_entry = corpus_of(&[b"".as_slice()]);
        let feedback = CmpFeedbackMap::with_capacity(4);
        let envs = [
            MangleEnv::new(&config, &dictionary),
            MangleEnv::new(&config, &dictionary)
                .with_corpus(&empty_corpus)
                .with_feedback(&feedback),
            MangleEnv::new(&config, &dictionary).with_corpus(&empty_entry),
        ];
        for env in envs {
            for op in [MangleOp::StaticDict, MangleOp::ConstFeedbackDict, MangleOp::Splice] {
                for seed in 0..16 {
                    let out = apply_once(env, b"abcdefgh", 16, seed, op, false);
                    // Bytes writes or inserts one or two bytes.
                    assert!((8..=10).contains(&out.len()), "{:?} produced {} bytes", op, out.len());
                }
            }
        }
    }

    #[test]
    fn every_operator_respects_capacity() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::from_entries([b"a long dictionary token".to_vec()]);
        let feedback = CmpFeedbackMap::with_capacity(4);
        feedback.add(&[0xEE; 32]);
        let corpus = corpus_of(&[&[0x41u8; 300][..]]);
        let env = MangleEnv::new(&config, &dictionary)
            .with_feedback(&feedback)
            .with_corpus(&corpus);

        for op in MangleOp::LIBRARY.into_iter().chain([MangleOp::Resize]) {
            for seed in 0..64 {
                let mut input = DynInput::from_bytes(b"0123456789abcdef", 24);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let mut run = MangleRun::new(&mut input, &mut rng, env);
                for _ in 0..8 {
                    run.apply(op, false);
                    assert!((1..=24).contains(&run.size()), "{:?} left size {}", op, run.size());
                }
            }
        }
    }

    #[test]
    fn printable_mode_keeps_buffer_printable() {
        let config = MutateConfig::default();
        let dictionary = Dictionary::from_entries([vec![0x00, 0x01, 0xff, 0x7f]]);
        let feedback = CmpFeedbackMap::with_capacity(4);
        feedback.add(&[0x80, 0x90, 0x0a]);
        let corpus = corpus_of(&[&[0x00u8, 0x10, 0xC3, 0xFF, 0x7F][..]]);
        let env = MangleEnv::new(&config, &dictionary)
            .with_feedback(&feedback)
            .with_corpus(&corpus);

        let ops = MangleOp::LIBRARY
            .into_iter()
            .filter(|op| *op != MangleOp::MemSwap)
            .chain([MangleOp::Resize]);
        for op in ops {
            for seed in 0..64 {
                let mut input = DynInput::from_bytes(b"GET /index.html?id=42 HTTP/1.1", 64);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let mut run = MangleRun::new(&mut input, &mut rng, env);
                for _ in 0..4 {
                    run.apply(op, true);
                }
                assert!(
                    input.as_bytes().iter().all(|b| is_printable(*b)),
                    "{:?} produced {:?}",
                    op,
                    input.as_bytes()
                );
            }
        }
    }
}
