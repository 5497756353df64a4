//! Phase boundaries - how cycle days map onto phases.

use serde::Serialize;
use std::ops::RangeInclusive;

use super::{CycleLength, CyclePhase};

/// The ovulation window opens after `L - 16`.
pub const OVULATION_WINDOW_START_OFFSET: i64 = 16;

/// The ovulation window closes at `L - 12`.
pub const OVULATION_WINDOW_END_OFFSET: i64 = 12;

/// Last day of each phase for a given period and cycle length.
///
/// Classification is evaluated in order (menstruation, follicular,
/// ovulation, luteal), so every day in `[1, L]` gets exactly one phase even
/// when the ends are not increasing. A short cycle (roughly `L < 17`) or a
/// long period pushes later ends below earlier ones; the affected phases
/// then simply cover no days. [`PhaseBoundaries::is_well_formed`] reports
/// that situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseBoundaries {
    menstruation_end: i64,
    follicular_end: i64,
    ovulation_end: i64,
    cycle_end: i64,
}

impl PhaseBoundaries {
    pub fn new(period_length: u32, cycle_length: CycleLength) -> Self {
        let cycle_end = cycle_length.as_i64();
        Self {
            menstruation_end: i64::from(period_length),
            follicular_end: cycle_end - OVULATION_WINDOW_START_OFFSET,
            ovulation_end: cycle_end - OVULATION_WINDOW_END_OFFSET,
            cycle_end,
        }
    }

    /// Classifies a cycle day (1-based).
    pub fn classify(&self, day: u32) -> CyclePhase {
        let day = i64::from(day);
        if day <= self.menstruation_end {
            CyclePhase::Menstruation
        } else if day <= self.follicular_end {
            CyclePhase::Follicular
        } else if day <= self.ovulation_end {
            CyclePhase::Ovulation
        } else {
            CyclePhase::Luteal
        }
    }

    /// True when `p < L-16 < L-12 < L`, i.e. every phase covers at least one day.
    pub fn is_well_formed(&self) -> bool {
        self.menstruation_end >= 1
            && self.menstruation_end < self.follicular_end
            && self.follicular_end < self.ovulation_end
            && self.ovulation_end < self.cycle_end
    }

    /// Days actually classified as `phase`, or `None` when it covers none.
    pub fn days_for(&self, phase: CyclePhase) -> Option<RangeInclusive<u32>> {
        let (start, end) = match phase {
            CyclePhase::Menstruation => (1, self.menstruation_end),
            CyclePhase::Follicular => (self.menstruation_end + 1, self.follicular_end),
            CyclePhase::Ovulation => (
                self.menstruation_end.max(self.follicular_end) + 1,
                self.ovulation_end,
            ),
            CyclePhase::Luteal => (
                self.menstruation_end
                    .max(self.follicular_end)
                    .max(self.ovulation_end)
                    + 1,
                self.cycle_end,
            ),
        };
        let start = start.max(1);
        let end = end.min(self.cycle_end);
        if start > end {
            return None;
        }
        Some(u32::try_from(start).ok()?..=u32::try_from(end).ok()?)
    }

    pub fn menstruation_end(&self) -> i64 {
        self.menstruation_end
    }

    pub fn follicular_end(&self) -> i64 {
        self.follicular_end
    }

    pub fn ovulation_end(&self) -> i64 {
        self.ovulation_end
    }

    pub fn cycle_end(&self) -> i64 {
        self.cycle_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boundaries(period: u32, cycle: u32) -> PhaseBoundaries {
        PhaseBoundaries::new(period, CycleLength::new(cycle).unwrap())
    }

    #[test]
    fn default_cycle_matches_documented_ranges() {
        let b = boundaries(5, 28);
        assert!(b.is_well_formed());
        assert_eq!(b.days_for(CyclePhase::Menstruation), Some(1..=5));
        assert_eq!(b.days_for(CyclePhase::Follicular), Some(6..=12));
        assert_eq!(b.days_for(CyclePhase::Ovulation), Some(13..=16));
        assert_eq!(b.days_for(CyclePhase::Luteal), Some(17..=28));
    }

    #[test]
    fn classify_edges_of_default_cycle() {
        let b = boundaries(5, 28);
        assert_eq!(b.classify(1), CyclePhase::Menstruation);
        assert_eq!(b.classify(5), CyclePhase::Menstruation);
        assert_eq!(b.classify(6), CyclePhase::Follicular);
        assert_eq!(b.classify(12), CyclePhase::Follicular);
        assert_eq!(b.classify(13), CyclePhase::Ovulation);
        assert_eq!(b.classify(16), CyclePhase::Ovulation);
        assert_eq!(b.classify(17), CyclePhase::Luteal);
        assert_eq!(b.classify(28), CyclePhase::Luteal);
    }

    #[test]
    fn boundaries_scale_with_cycle_length() {
        let b = boundaries(5, 35);
        assert_eq!(b.days_for(CyclePhase::Follicular), Some(6..=19));
        assert_eq!(b.days_for(CyclePhase::Ovulation), Some(20..=23));
        assert_eq!(b.days_for(CyclePhase::Luteal), Some(24..=35));
    }

    #[test]
    fn short_cycle_drops_follicular_phase() {
        let b = boundaries(5, 20);
        assert!(!b.is_well_formed());
        assert_eq!(b.days_for(CyclePhase::Follicular), None);
        assert_eq!(b.days_for(CyclePhase::Ovulation), Some(6..=8));
        assert_eq!(b.classify(6), CyclePhase::Ovulation);
    }

    #[test]
    fn very_short_cycle_is_menstruation_then_luteal() {
        let b = boundaries(5, 10);
        assert!(!b.is_well_formed());
        assert_eq!(b.days_for(CyclePhase::Menstruation), Some(1..=5));
        assert_eq!(b.days_for(CyclePhase::Follicular), None);
        assert_eq!(b.days_for(CyclePhase::Ovulation), None);
        assert_eq!(b.days_for(CyclePhase::Luteal), Some(6..=10));
    }

    #[test]
    fn period_longer_than_cycle_is_all_menstruation() {
        let b = boundaries(10, 7);
        assert_eq!(b.days_for(CyclePhase::Menstruation), Some(1..=7));
        assert_eq!(b.days_for(CyclePhase::Luteal), None);
    }

    proptest! {
        #[test]
        fn every_day_belongs_to_exactly_one_range(cycle in 1u32..=120, period in 1u32..=40) {
            let b = boundaries(period, cycle);
            for day in 1..=cycle {
                let holders: Vec<CyclePhase> = CyclePhase::ALL
                    .into_iter()
                    .filter(|p| b.days_for(*p).map_or(false, |r| r.contains(&day)))
                    .collect();
                prop_assert_eq!(holders.len(), 1);
                prop_assert_eq!(holders[0], b.classify(day));
            }
        }

        #[test]
        fn ranges_are_contiguous_and_ordered(cycle in 1u32..=120, period in 1u32..=40) {
            let b = boundaries(period, cycle);
            let mut next_expected = 1u32;
            for phase in CyclePhase::ALL {
                if let Some(range) = b.days_for(phase) {
                    prop_assert_eq!(*range.start(), next_expected);
                    next_expected = range.end() + 1;
                }
            }
            prop_assert_eq!(next_expected, cycle + 1);
        }

        #[test]
        fn well_formed_means_all_phases_present(cycle in 1u32..=120, period in 1u32..=40) {
            let b = boundaries(period, cycle);
            let present = CyclePhase::ALL.iter().filter(|p| b.days_for(**p).is_some()).count();
            prop_assert_eq!(b.is_well_formed(), present == 4);
        }
    }
}
