use crate::types::Address;

/// Compute the address of the first byte of the cache line strictly after the
/// one containing `base`.
///
/// Integer floor division guarantees the result is a multiple of
/// `cache_line_size` and strictly greater than `base`; it can exceed `base`
/// by at most `cache_line_size` bytes, so a block of two cache lines is
/// always large enough to hold a word at the returned address.
pub fn next_line_start(base: Address, cache_line_size: usize) -> Address {
    (base / cache_line_size + 1) * cache_line_size
}

/// Step an aligned address back into the tail of the preceding cache line.
///
/// With a negative `offset` whose magnitude is smaller than the word size,
/// the word at the returned address covers bytes on both sides of the line
/// boundary at `aligned`.
pub fn apply_unaligned_offset(aligned: Address, offset: isize) -> Address {
    (aligned as isize + offset) as Address
}
