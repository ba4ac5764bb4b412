//! Product review ratings.
//!
//! Ratings live on a 0-5 scale with half-point granularity (stars and half
//! stars). They are stored as a count of half steps so ordering is total
//! and exact; the serialized form is the familiar decimal value (`4.5`).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of half steps in the maximum rating (5.0 stars).
const MAX_HALF_STEPS: u8 = 10;

/// Error constructing a [`Rating`] from a raw value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    /// The value is outside the 0-5 scale.
    #[error("rating {0} is outside the 0-5 scale")]
    OutOfRange(f32),
    /// The value is not a multiple of 0.5.
    #[error("rating {0} is not a half-point value")]
    NotHalfPoint(f32),
}

/// A review rating between 0 and 5 stars, in half-point steps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(u8);

impl Rating {
    /// The minimum rating (0 stars).
    pub const MIN: Self = Self(0);

    /// The maximum rating (5 stars).
    pub const MAX: Self = Self(MAX_HALF_STEPS);

    /// Create a rating from a count of half steps (e.g. 9 = 4.5 stars).
    ///
    /// Counts above 10 are clamped to the maximum rating.
    #[must_use]
    pub fn from_half_steps(half_steps: u8) -> Self {
        Self(half_steps.min(MAX_HALF_STEPS))
    }

    /// The number of half steps (0..=10).
    #[must_use]
    pub const fn half_steps(&self) -> u8 {
        self.0
    }

    /// The rating as a decimal star value (0.0..=5.0).
    #[must_use]
    pub fn value(&self) -> f32 {
        f32::from(self.0) / 2.0
    }
}

impl TryFrom<f32> for Rating {
    type Error = RatingError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !(0.0..=5.0).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        let doubled = value * 2.0;
        if doubled.fract() != 0.0 {
            return Err(RatingError::NotHalfPoint(value));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // bounds checked above
        Ok(Self(doubled as u8))
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}
