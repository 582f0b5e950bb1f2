/// A raw memory address inside the benchmark's allocated block.
///
/// Addresses are carried around as plain integers because the only property
/// of an address which matters here is its arithmetic relationship to a
/// cache-line boundary, not what it points at.
pub type Address = usize;

/// The machine word the writer toggles and the reader samples.
///
/// A signed 64-bit word so that the two sentinel values can be `1` and `-1`,
/// whose byte patterns differ in every single byte. Any sample which mixes
/// bytes of the two sentinels is therefore distinguishable from both.
pub type Word = i64;
