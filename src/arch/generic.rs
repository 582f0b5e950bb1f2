//! Portable word access primitives.
//!
//! Targets other than x86_64 get no inline-assembly path. Plain access falls
//! back to unaligned pointer reads and writes, which keeps the harness
//! running but leaves the compiler free to assume the accesses are
//! race-free, so torn-read counts measured through this module are only
//! indicative. Interlocked access is emulated by serializing every operation
//! through one process-wide spin lock, the same approach `crossbeam`'s
//! `AtomicCell` takes for types with no native atomic support; it preserves
//! the observable contract that interlocked access never tears.

use crate::types::Word;
use core::hint;
use core::sync::atomic::{AtomicBool, Ordering};

static STRATEGY_LOCK: AtomicBool = AtomicBool::new(false);

fn with_lock<R>(operation: impl FnOnce() -> R) -> R {
    while STRATEGY_LOCK
        .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
        .is_err()
    {
        hint::spin_loop();
    }
    let result: R = operation();
    STRATEGY_LOCK.store(false, Ordering::Release);
    result
}

/// Load the word at `address` without synchronization.
///
/// # Safety
/// `address` must be valid for a word-sized read.
pub(crate) unsafe fn plain_load(address: *const Word) -> Word {
    address.read_unaligned()
}

/// Store `value` to the word at `address` without synchronization.
///
/// # Safety
/// `address` must be valid for a word-sized write.
pub(crate) unsafe fn plain_store(address: *mut Word, value: Word) {
    address.write_unaligned(value);
}

/// Replace the word at `address` with `value` under the strategy lock,
/// returning the previous word.
///
/// # Safety
/// `address` must be valid for word-sized reads and writes.
pub(crate) unsafe fn interlocked_exchange(address: *mut Word, value: Word) -> Word {
    with_lock(|| {
        let previous: Word = unsafe { address.read_unaligned() };
        unsafe { address.write_unaligned(value) };
        previous
    })
}

/// Load the word at `address` under the strategy lock.
///
/// # Safety
/// `address` must be valid for a word-sized read.
pub(crate) unsafe fn interlocked_load(address: *mut Word) -> Word {
    with_lock(|| unsafe { address.read_unaligned() })
}
