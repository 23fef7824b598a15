// SPDX-License-Identifier: MPL-2.0
//! Bounded year timeline backing the bottom panel slider.

use crate::config;

/// Integer year constrained to a closed range.
///
/// The bounds are fixed at construction; `value` is the only mutable field
/// and every write is clamped, so `min <= value <= max` holds at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    value: i32,
    min: i32,
    max: i32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(
            config::DEFAULT_TIMELINE_MIN_YEAR,
            config::DEFAULT_TIMELINE_MAX_YEAR,
            config::DEFAULT_TIMELINE_YEAR,
        )
    }
}

impl Timeline {
    /// Creates a timeline over `[min, max]` starting at `initial` (clamped).
    /// Reversed bounds are swapped so the range is always well-formed.
    pub fn new(min: i32, max: i32, initial: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: initial.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Sets the current year, clamped into the configured range.
    pub fn set(&mut self, year: i32) {
        self.value = year.clamp(self.min, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value_lies_within_bounds() {
        let timeline = Timeline::default();
        assert_eq!(timeline.value(), 2015);
        assert!(timeline.min() <= timeline.value() && timeline.value() <= timeline.max());
    }

    #[test]
    fn set_clamps_below_minimum() {
        let mut timeline = Timeline::default();
        timeline.set(1999);
        assert_eq!(timeline.value(), 2005);
    }

    #[test]
    fn set_clamps_above_maximum() {
        let mut timeline = Timeline::default();
        timeline.set(3000);
        assert_eq!(timeline.value(), 2025);
    }

    #[test]
    fn set_accepts_in_range_years() {
        let mut timeline = Timeline::default();
        for year in timeline.min()..=timeline.max() {
            timeline.set(year);
            assert_eq!(timeline.value(), year);
        }
    }

    #[test]
    fn constructor_clamps_initial_value() {
        let timeline = Timeline::new(2005, 2025, 1234);
        assert_eq!(timeline.value(), 2005);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let timeline = Timeline::new(2025, 2005, 2010);
        assert_eq!(timeline.min(), 2005);
        assert_eq!(timeline.max(), 2025);
        assert_eq!(timeline.value(), 2010);
    }
}
