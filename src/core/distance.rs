//! Total distance between two location lists.
//!
//! Both lists are sorted independently, paired by rank, and the absolute
//! differences of each pair are summed. Inputs are never mutated; the sort
//! runs on copies.

use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    #[error("list lengths differ: left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },
}

/// A value that can be placed in a location list.
pub trait Coordinate: Copy {
    type Distance: Copy + Default + PartialEq + std::fmt::Debug;

    /// Total order used to rank values before pairing.
    fn rank(&self, other: &Self) -> Ordering;

    fn abs_diff(self, other: Self) -> Self::Distance;

    fn accumulate(total: Self::Distance, step: Self::Distance) -> Self::Distance;
}

impl Coordinate for i64 {
    type Distance = u64;

    fn rank(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn abs_diff(self, other: Self) -> u64 {
        i64::abs_diff(self, other)
    }

    // Saturates instead of wrapping on pathological inputs.
    fn accumulate(total: u64, step: u64) -> u64 {
        total.saturating_add(step)
    }
}

impl Coordinate for f64 {
    type Distance = f64;

    fn rank(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn abs_diff(self, other: Self) -> f64 {
        (self - other).abs()
    }

    fn accumulate(total: f64, step: f64) -> f64 {
        total + step
    }
}

fn sorted<T: Coordinate>(values: &[T]) -> Vec<T> {
    let mut copy = values.to_vec();
    copy.sort_by(T::rank);
    copy
}

/// Sum of `|sorted(list1)[i] - sorted(list2)[i]|` over every rank `i`.
///
/// Returns zero for two empty lists and [`DistanceError::LengthMismatch`]
/// when the lists differ in length.
///
/// ```
/// use chronicler::calculate_distance;
///
/// assert_eq!(calculate_distance(&[1i64, 3, 2], &[4, 1, 5]), Ok(4));
/// ```
pub fn calculate_distance<T: Coordinate>(
    list1: &[T],
    list2: &[T],
) -> Result<T::Distance, DistanceError> {
    if list1.len() != list2.len() {
        return Err(DistanceError::LengthMismatch {
            left: list1.len(),
            right: list2.len(),
        });
    }

    let total = sorted(list1)
        .into_iter()
        .zip(sorted(list2))
        .map(|(a, b)| a.abs_diff(b))
        .fold(T::Distance::default(), T::accumulate);

    Ok(total)
}
