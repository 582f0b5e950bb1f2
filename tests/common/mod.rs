#![allow(dead_code)]

use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tornread::{
    align, AccessStrategy, MemoryBlock, Params, SharedCell, TrialResult,
};

pub(crate) fn test_params(iterations: u64) -> Params {
    Params {
        iterations,
        ..Params::default()
    }
}

/// Allocate a fresh two-line block, derive one of the two trial addresses
/// from it, and run a single trial there.
pub(crate) fn run_single_trial<S: AccessStrategy>(
    straddle_boundary: bool,
    iterations: u64,
) -> TrialResult {
    let params: Params = test_params(iterations);

    let block: MemoryBlock = MemoryBlock::allocate(2 * params.cache_line_size).unwrap();
    let aligned: usize = align::next_line_start(block.base_address(), params.cache_line_size);
    let address: usize = if straddle_boundary {
        align::apply_unaligned_offset(aligned, params.unaligned_offset)
    } else {
        aligned
    };

    let cell: SharedCell = unsafe { SharedCell::new(address) };
    tornread::run_trial::<S>(cell, &params).unwrap()
}

/// Run `trial` on its own thread and panic if it has not produced a result
/// within `limit`.
pub(crate) fn finishes_within(
    limit: Duration,
    trial: impl FnOnce() -> TrialResult + Send + 'static,
) -> TrialResult {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let _ = sender.send(trial());
    });
    receiver
        .recv_timeout(limit)
        .expect("the trial did not terminate within the timeout")
}
