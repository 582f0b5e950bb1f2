//! A benchmark quantifying torn reads: a reader observing a value that was
//! never written, because the write straddled a cache-line boundary and the
//! hardware split it into two transactions.
//!
//! One writer thread toggles a shared word between two sentinel values while
//! one reader thread samples it and tallies every sample matching neither
//! sentinel. The word is placed either wholly inside one cache line or
//! across a line boundary, and is accessed either with plain loads and
//! stores or with interlocked (hardware atomic) primitives, giving a
//! four-way matrix. The interlocked trials are expected to tally zero torn
//! reads at either alignment; the plain trial at the straddling address is
//! where tearing shows up.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_arch = "x86_64")] {
        #[path = "arch/x86_64.rs"]
        pub(crate) mod arch;
    } else {
        #[path = "arch/generic.rs"]
        pub(crate) mod arch;
    }
}

pub mod align;
pub mod block;
pub mod cell;
pub mod config;
pub mod err;
pub mod matrix;
pub mod trial;
mod types;

pub use crate::block::MemoryBlock;
pub use crate::cell::{AccessStrategy, Interlocked, Plain, SharedCell};
pub use crate::config::Params;
pub use crate::err::Error;
pub use crate::matrix::{run_matrix, Experiment};
pub use crate::trial::{run_trial, TrialResult, SENTINEL_HIGH, SENTINEL_LOW};
pub use crate::types::{Address, Word};
