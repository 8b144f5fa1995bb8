//! Biased sampling primitives shared by every mangle operator.

use rand::Rng;

/// Hard upper bound for any length handed to the sampler (1 GiB).
pub const INPUT_MAX_SIZE_CEILING: usize = 1024 * 1024 * 1024;

/// Lowest and highest printable ASCII bytes.
pub const PRINTABLE_MIN: u8 = 32;
pub const PRINTABLE_MAX: u8 = 126;

/// Uniform integer in `[lo, hi]`, both ends inclusive.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: u64, hi: u64) -> u64 {
    assert!(lo <= hi, "uniform: empty range [{lo}, {hi}]");
    rng.random_range(lo..=hi)
}

/// A fair coin.
#[inline]
pub fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.next_u64() & 1 == 1
}

/// Returns a length in `[1, max]` that prefers small values but can still reach `max`.
///
/// Half of the draws are uniform over the whole range. The other half first pick an
/// upper bound uniformly and then draw uniformly below it, which concentrates mass
/// near 1.
///
/// # Panics
/// If `max` is 0 or larger than [`INPUT_MAX_SIZE_CEILING`].
pub fn biased_len<R: Rng + ?Sized>(rng: &mut R, max: usize) -> usize {
    assert!(max != 0, "biased_len: max == 0");
    assert!(
        max <= INPUT_MAX_SIZE_CEILING,
        "biased_len: max ({}) > INPUT_MAX_SIZE_CEILING ({})",
        max,
        INPUT_MAX_SIZE_CEILING
    );
    if max == 1 {
        return 1;
    }

    let max = max as u64;
    if coin(rng) {
        return uniform(rng, 1, max) as usize;
    }
    let bound = uniform(rng, 1, max);
    uniform(rng, 1, bound) as usize
}

/// An offset strictly below `size`, biased toward the start of the buffer.
#[inline]
pub fn biased_offset<R: Rng + ?Sized>(rng: &mut R, size: usize) -> usize {
    biased_len(rng, size) - 1
}

/// An offset in `[0, size]`; `size` itself is a valid insertion point.
#[inline]
pub fn biased_offset_inclusive_end<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    capacity: usize,
) -> usize {
    biased_len(rng, (size + 1).min(capacity)) - 1
}

#[inline]
pub fn printable_byte<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(PRINTABLE_MIN..=PRINTABLE_MAX)
}

pub fn fill_printable<R: Rng + ?Sized>(rng: &mut R, buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = printable_byte(rng);
    }
}

pub fn fill_random<R: Rng + ?Sized>(rng: &mut R, buf: &mut [u8]) {
    rng.fill_bytes(buf);
}

/// Folds every byte into `[32, 126]`.
pub fn to_printable(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = *byte % 95 + PRINTABLE_MIN;
    }
}

#[inline]
pub fn is_printable(byte: u8) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&byte)
}
