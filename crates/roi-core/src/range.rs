//! Slider ranges for estimator inputs.
//!
//! Each input is driven by a bounded control with a fixed step. The view layer
//! uses these ranges to keep raw input inside the domain the estimator was
//! calibrated for.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range with a step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    /// Smallest accepted value.
    pub min: Decimal,
    /// Largest accepted value.
    pub max: Decimal,
    /// Distance between adjacent slider positions.
    pub step: Decimal,
}

impl FieldRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        Self { min, max, step }
    }

    /// Returns true if `value` lies within the range, bounds included.
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the range.
    pub fn span(&self) -> Decimal {
        self.max - self.min
    }

    /// Clamps `value` into the range.
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }

    /// Clamps `value`, then moves it to the nearest step position.
    ///
    /// Step positions are `min + k * step`; halfway values round up.
    pub fn snap(&self, value: Decimal) -> Decimal {
        let clamped = self.clamp(value);
        if self.step <= Decimal::ZERO {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        self.clamp(self.min + steps * self.step)
    }

    /// Position of `value` along the range as a percentage (0 at `min`, 100 at `max`).
    ///
    /// A degenerate range reports 0.
    pub fn fill_percent(&self, value: Decimal) -> Decimal {
        let span = self.span();
        if span.is_zero() {
            return Decimal::ZERO;
        }
        (value - self.min) / span * Decimal::ONE_HUNDRED
    }

    /// Every step position from `min` to `max`, inclusive.
    ///
    /// `max` is always the last tick even when the span is not a whole number
    /// of steps.
    pub fn ticks(&self) -> Vec<Decimal> {
        if self.step <= Decimal::ZERO || self.max <= self.min {
            return vec![self.min];
        }
        let mut ticks = Vec::new();
        let mut value = self.min;
        while value < self.max {
            ticks.push(value);
            value += self.step;
        }
        ticks.push(self.max);
        ticks
    }
}
