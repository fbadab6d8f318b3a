// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A linear mapping from a domain interval onto a range interval.
///
/// `LinearScale` is a plain value: applying it never mutates anything, so a
/// scale can be shared freely between the main view and the overview.
///
/// When the domain is degenerate (`start == end`, or a non-finite span), every
/// input maps to the start of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// A scale with an empty domain and range; maps everything to `0`.
    pub const ZERO: Self = Self {
        domain_start: 0.0,
        domain_end: 0.0,
        range_start: 0.0,
        range_end: 0.0,
    };

    /// Creates a scale mapping `domain` linearly onto `range`.
    #[must_use]
    pub fn new(domain: Range<f64>, range: Range<f64>) -> Self {
        Self {
            domain_start: domain.start,
            domain_end: domain.end,
            range_start: range.start,
            range_end: range.end,
        }
    }

    /// Returns the domain interval.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain_start..self.domain_end
    }

    /// Returns the range interval.
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.range_start..self.range_end
    }

    /// Returns `true` if the domain has no usable span.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let span = self.domain_end - self.domain_start;
        span == 0.0 || !span.is_finite()
    }

    /// Maps a domain value into the range.
    ///
    /// A degenerate domain or a collapsed range maps everything to the range
    /// start.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        if self.is_degenerate() || self.range_end == self.range_start {
            return self.range_start;
        }
        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + t * (self.range_end - self.range_start)
    }

    /// Maps a range value back into the domain.
    ///
    /// A collapsed range (or a degenerate domain) inverts to the domain start.
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if self.is_degenerate() || span == 0.0 || !span.is_finite() {
            return self.domain_start;
        }
        let t = (value - self.range_start) / span;
        self.domain_start + t * (self.domain_end - self.domain_start)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_domain_endpoints_onto_range_endpoints() {
        let scale = LinearScale::new(0.0..10.0, 0.0..200.0);
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(10.0), 200.0);
        assert_eq!(scale.apply(5.0), 100.0);
    }

    #[test]
    fn extrapolates_outside_domain() {
        let scale = LinearScale::new(0.0..10.0, 0.0..100.0);
        assert_eq!(scale.apply(-1.0), -10.0);
        assert_eq!(scale.apply(11.0), 110.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new(3.0..3.0, 0.0..200.0);
        assert!(scale.is_degenerate());
        assert_eq!(scale.apply(3.0), 0.0);
        assert_eq!(scale.apply(-1e9), 0.0);
        assert_eq!(scale.apply(1e9), 0.0);
    }

    #[test]
    fn zero_scale_maps_everything_to_zero() {
        let scale = LinearScale::default();
        assert_eq!(scale, LinearScale::ZERO);
        assert_eq!(scale.apply(42.0), 0.0);
        assert_eq!(scale.invert(42.0), 0.0);
    }

    #[test]
    fn invert_undoes_apply() {
        let scale = LinearScale::new(-5.0..15.0, 0.0..400.0);
        for v in [-5.0, 0.0, 2.5, 15.0] {
            let back = scale.invert(scale.apply(v));
            assert!((back - v).abs() < 1e-9, "{v} came back as {back}");
        }
    }

    #[test]
    fn collapsed_range_inverts_to_domain_start() {
        let scale = LinearScale::new(1.0..2.0, 0.0..0.0);
        assert_eq!(scale.apply(2.0), 0.0);
        assert_eq!(scale.invert(0.0), 1.0);
    }

    #[test]
    fn accessors_report_intervals() {
        let scale = LinearScale::new(1.0..2.0, 0.0..50.0);
        assert_eq!(scale.domain(), 1.0..2.0);
        assert_eq!(scale.range(), 0.0..50.0);
    }
}
