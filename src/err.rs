use displaydoc::Display;
use std::io;

/// Any error which can abort a benchmark run.
///
/// There is no recovery path for any of these: the benchmark is a one-shot
/// measurement tool, so every variant propagates out of `main` and terminates
/// the process with a visible message.
#[derive(Debug, Display)]
pub enum Error {
    /// a block of {size} bytes does not form a valid allocation layout
    InvalidBlockSize { size: usize },

    /// the allocator could not provide a block of {size} bytes
    AllocationFailed { size: usize },

    /// failed to spawn the {role} worker thread: {error}
    SpawnFailed {
        role: &'static str,
        error: io::Error,
    },

    /// the {role} worker thread panicked before completing its protocol
    WorkerPanicked { role: &'static str },
}
