/// The number of bytes the target CPU's cache manages as a unit.
///
/// Fixed at 64 bytes, which is what every x86_64 part and most other common
/// parts use. The benchmark does not try to detect the real line size at
/// runtime.
pub const CACHE_LINE_SIZE: usize = 64;

/// The distance, in bytes, from the aligned address back to the unaligned one.
///
/// The magnitude must be smaller than both the word size and the cache-line
/// size: a word written 5 bytes before a line boundary covers the last 5
/// bytes of one line and the first 3 bytes of the next, which is exactly the
/// placement the unaligned trials measure.
pub const UNALIGNED_OFFSET: isize = -5;

/// How many toggle iterations the writer performs per trial.
pub const WRITER_ITERATIONS: u64 = 1_000_000;

/// The knobs for one benchmark run, resolved once at startup and passed
/// explicitly into the components which need them.
#[derive(Debug, Clone)]
pub struct Params {
    /// See [CACHE_LINE_SIZE].
    pub cache_line_size: usize,

    /// See [UNALIGNED_OFFSET].
    pub unaligned_offset: isize,

    /// See [WRITER_ITERATIONS].
    pub iterations: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            cache_line_size: CACHE_LINE_SIZE,
            unaligned_offset: UNALIGNED_OFFSET,
            iterations: WRITER_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Word;
    use core::mem;

    #[test]
    fn test_default_offset_keeps_a_word_astride_the_boundary() {
        let params: Params = Params::default();

        assert!(params.unaligned_offset < 0);
        let magnitude: usize = params.unaligned_offset.unsigned_abs();
        assert!(magnitude < mem::size_of::<Word>());
        assert!(magnitude < params.cache_line_size);
    }
}
