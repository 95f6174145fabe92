use std::collections::BTreeMap;

use crate::envelope::Classification;

/// Valid/invalid tallies for one camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraCounts {
    pub valid: u64,
    pub invalid: u64,
}

/// Per-camera pass/fail counts, ordered by camera id.
///
/// Entries are created explicitly: a camera whose input folder exists gets
/// an entry (possibly `(0, 0)`) via `ensure_camera`, a camera whose folder
/// is absent gets none at all.
#[derive(Debug, Clone, Default)]
pub struct SummaryReport {
    counts: BTreeMap<u32, CameraCounts>,
}

impl SummaryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a zeroed entry for this camera if it has none yet.
    pub fn ensure_camera(&mut self, camera_id: u32) {
        self.counts.entry(camera_id).or_default();
    }

    /// Count one classified image for this camera.
    pub fn record(&mut self, camera_id: u32, outcome: Classification) {
        let counts = self.counts.entry(camera_id).or_default();
        match outcome {
            Classification::Valid => counts.valid += 1,
            Classification::Invalid => counts.invalid += 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, CameraCounts)> + '_ {
        self.counts.iter().map(|(&id, &counts)| (id, counts))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, camera_id: u32) -> Option<CameraCounts> {
        self.counts.get(&camera_id).copied()
    }

    /// Totals summed across all cameras.
    pub fn totals(&self) -> CameraCounts {
        self.counts
            .values()
            .fold(CameraCounts::default(), |acc, c| CameraCounts {
                valid: acc.valid + c.valid,
                invalid: acc.invalid + c.invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_creates_and_increments() {
        let mut report = SummaryReport::new();
        report.record(2, Classification::Valid);
        report.record(2, Classification::Invalid);
        report.record(2, Classification::Valid);
        assert_eq!(
            report.get(2),
            Some(CameraCounts {
                valid: 2,
                invalid: 1
            })
        );
    }

    #[test]
    fn ensure_camera_yields_zero_entry() {
        let mut report = SummaryReport::new();
        report.ensure_camera(5);
        assert_eq!(report.get(5), Some(CameraCounts::default()));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn absent_camera_has_no_entry() {
        let report = SummaryReport::new();
        assert_eq!(report.get(1), None);
        assert!(report.is_empty());
    }

    #[test]
    fn iteration_is_ordered_by_camera_id() {
        let mut report = SummaryReport::new();
        report.record(7, Classification::Valid);
        report.record(0, Classification::Invalid);
        report.record(3, Classification::Valid);
        let ids: Vec<u32> = report.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 3, 7]);
    }

    #[test]
    fn totals_sum_across_cameras() {
        let mut report = SummaryReport::new();
        report.record(0, Classification::Valid);
        report.record(0, Classification::Invalid);
        report.record(1, Classification::Valid);
        let totals = report.totals();
        assert_eq!(totals.valid, 2);
        assert_eq!(totals.invalid, 1);
    }
}
