//! Bed pool model.
//!
//! A fixed set of beds, each tracked only by the minute at which it next
//! becomes free. Index order is the bed's identity: scans always go left
//! to right, and reports number beds from 1.

use serde::{Deserialize, Serialize};

/// Free-time table for a fixed number of beds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BedPool {
    free_at: Vec<i64>,
}

impl BedPool {
    /// Creates a pool of `bed_count` beds, all free from t=0.
    pub fn new(bed_count: usize) -> Self {
        Self {
            free_at: vec![0; bed_count],
        }
    }

    /// Number of beds.
    #[inline]
    pub fn len(&self) -> usize {
        self.free_at.len()
    }

    /// Whether the pool has no beds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free_at.is_empty()
    }

    /// Minute at which bed `index` (0-based) becomes free.
    pub fn free_time(&self, index: usize) -> Option<i64> {
        self.free_at.get(index).copied()
    }

    /// Free times of all beds, in bed order.
    pub fn free_times(&self) -> &[i64] {
        &self.free_at
    }

    /// First bed (leftmost) that is free at or before `time`.
    pub fn first_free(&self, time: i64) -> Option<usize> {
        self.free_at.iter().position(|&free| free <= time)
    }

    /// Bed with the smallest free time; ties go to the leftmost bed.
    pub fn earliest(&self) -> Option<(usize, i64)> {
        let mut best: Option<(usize, i64)> = None;
        for (index, &free) in self.free_at.iter().enumerate() {
            match best {
                Some((_, best_free)) if best_free <= free => {}
                _ => best = Some((index, free)),
            }
        }
        best
    }

    /// Pushes bed `index`'s free time forward by `minutes`, saturating at
    /// `i64::MAX`.
    ///
    /// Returns the new free time, or `None` if the bed does not exist.
    pub fn extend(&mut self, index: usize, minutes: i64) -> Option<i64> {
        let slot = self.free_at.get_mut(index)?;
        *slot = slot.saturating_add(minutes);
        Some(*slot)
    }

    /// Overwrites bed `index`'s free time.
    pub fn set_free_time(&mut self, index: usize, free_at: i64) -> Option<i64> {
        let slot = self.free_at.get_mut(index)?;
        *slot = free_at;
        Some(free_at)
    }
}
