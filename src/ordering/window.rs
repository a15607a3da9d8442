//! Busy-window reordering.
//!
//! Reorders classified patients so that, among patients contending for the
//! same bed slot, the one with the better urgency key is admitted first.
//! Patients separated by large arrival gaps are never reordered.
//!
//! # Comparator contract
//! An adjacent pair `(earlier, later)` is swapped only when all hold:
//! 1. they arrive at the same minute, or both arrive at or before the
//!    running horizon;
//! 2. `key(later) < key(earlier)` (strict, so equal keys keep input order);
//! 3. `earlier` is not an immediately-served patient with a different
//!    arrival time.
//!
//! The horizon is reset to 0 at the start of every pass and, after each
//! compared pair, set to the busy-window end of the patient now at the
//! earlier position.

use std::fmt::Debug;

use log::trace;

use super::{ClassifiedPatient, UrgencyKey};

/// A strategy that reorders classified patients in place.
pub trait ReorderStrategy: Send + Sync + Debug {
    /// Strategy name.
    fn name(&self) -> &'static str;

    /// Reorders `patients` in place using `key` under the comparator contract.
    fn reorder(&self, patients: &mut [ClassifiedPatient], key: &dyn UrgencyKey);
}

/// Whether `earlier` and `later` (adjacent, in that order) should swap.
pub fn should_swap(
    earlier: &ClassifiedPatient,
    later: &ClassifiedPatient,
    horizon: i64,
    key: &dyn UrgencyKey,
) -> bool {
    let same_arrival = earlier.record.arrival_time == later.record.arrival_time;
    let in_window = same_arrival
        || (earlier.record.arrival_time <= horizon && later.record.arrival_time <= horizon);
    let later_wins = key.key(&later.record) < key.key(&earlier.record);
    let protected = earlier.admitted_immediately && !same_arrival;

    in_window && later_wins && !protected
}

/// Bubble sort with early exit.
///
/// O(n²) worst case, O(n) on input that needs no swaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedBubbleSort;

impl ReorderStrategy for WindowedBubbleSort {
    fn name(&self) -> &'static str {
        "windowed-bubble"
    }

    fn reorder(&self, patients: &mut [ClassifiedPatient], key: &dyn UrgencyKey) {
        if patients.len() < 2 {
            return;
        }

        let mut passes = 0usize;
        loop {
            passes += 1;
            let mut swapped = false;
            let mut horizon = 0i64;

            for j in 1..patients.len() {
                if should_swap(&patients[j - 1], &patients[j], horizon, key) {
                    trace!(
                        "{}: patient {} moves ahead of patient {}",
                        key.name(),
                        patients[j].record.id,
                        patients[j - 1].record.id
                    );
                    patients.swap(j - 1, j);
                    swapped = true;
                }
                horizon = patients[j - 1].busy_until();
            }

            if !swapped {
                break;
            }
        }
        trace!("{}: reorder finished after {} passes", key.name(), passes);
    }
}
