use crate::align::{apply_unaligned_offset, next_line_start};
use crate::block::MemoryBlock;
use crate::cell::{Interlocked, Plain, SharedCell};
use crate::config::Params;
use crate::err::Error;
use crate::trial::{run_trial, TrialResult};
use crate::types::Address;
use core::fmt::{Display, Formatter};
use tracing::{debug, instrument};

/// One of the four experiments, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experiment {
    /// Plain access to a word contained in a single cache line.
    PlainAligned,
    /// Plain access to a word straddling a cache-line boundary.
    PlainUnaligned,
    /// Interlocked access to a word contained in a single cache line.
    InterlockedAligned,
    /// Interlocked access to a word straddling a cache-line boundary.
    InterlockedUnaligned,
}

impl Experiment {
    pub fn label(&self) -> &'static str {
        match self {
            Experiment::PlainAligned => "Aligned",
            Experiment::PlainUnaligned => "Unaligned",
            Experiment::InterlockedAligned => "Interlocked Aligned",
            Experiment::InterlockedUnaligned => "Interlocked Unaligned",
        }
    }
}

impl Display for Experiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Run the full four-way matrix: each access strategy against each alignment,
/// sequentially, in the order reported.
///
/// One block of two cache lines is allocated up front and both trial
/// addresses are derived from it; the block outlives all four trials and is
/// freed when this function returns. The trials themselves share nothing
/// else.
#[instrument]
pub fn run_matrix(params: &Params) -> Result<Vec<(Experiment, TrialResult)>, Error> {
    let block: MemoryBlock = MemoryBlock::allocate(2 * params.cache_line_size)?;

    let aligned: Address = next_line_start(block.base_address(), params.cache_line_size);
    let unaligned: Address = apply_unaligned_offset(aligned, params.unaligned_offset);
    debug!(
        base = block.base_address(),
        aligned, unaligned, "derived trial addresses"
    );
    debug_assert!(block.contains_word(aligned));
    debug_assert!(block.contains_word(unaligned));

    // Safety: both addresses carry a full word inside `block`, which outlives
    // every trial, and each trial runs exactly one writer and one reader.
    let aligned_cell: SharedCell = unsafe { SharedCell::new(aligned) };
    let unaligned_cell: SharedCell = unsafe { SharedCell::new(unaligned) };

    let results: Vec<(Experiment, TrialResult)> = vec![
        (
            Experiment::PlainAligned,
            run_trial::<Plain>(aligned_cell, params)?,
        ),
        (
            Experiment::PlainUnaligned,
            run_trial::<Plain>(unaligned_cell, params)?,
        ),
        (
            Experiment::InterlockedAligned,
            run_trial::<Interlocked>(aligned_cell, params)?,
        ),
        (
            Experiment::InterlockedUnaligned,
            run_trial::<Interlocked>(unaligned_cell, params)?,
        ),
    ];
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_labels_match_report_order() {
        let experiments: [Experiment; 4] = [
            Experiment::PlainAligned,
            Experiment::PlainUnaligned,
            Experiment::InterlockedAligned,
            Experiment::InterlockedUnaligned,
        ];
        let labels: Vec<&'static str> = experiments.iter().map(Experiment::label).collect();
        assert_eq!(
            labels,
            vec![
                "Aligned",
                "Unaligned",
                "Interlocked Aligned",
                "Interlocked Unaligned"
            ]
        );
    }
}
