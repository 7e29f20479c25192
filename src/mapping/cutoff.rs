//! Pinch distance to filter cutoff.
//!
//! The pinch is clamped to `[min_distance, max_distance]` pixels and then
//! mapped on a log scale onto the cutoff range, inverted: fingers together
//! open the filter, fingers apart close it.
//!
//! ```text
//! cutoff = max_hz - ln(d / min_distance) / ln(max_distance / min_distance) * span_hz
//! ```
//!
//! With the defaults this runs from 20 kHz at 15 px down to 10 Hz at 200 px.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PINCH_MIN_PX: f32 = 15.0;
pub const PINCH_MAX_PX: f32 = 200.0;
pub const CUTOFF_MAX_HZ: f32 = 20_000.0;
pub const CUTOFF_SPAN_HZ: f32 = 19_990.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffMap {
    /// Pinch distance (px) that maps to `max_hz`
    pub min_distance: f32,
    /// Pinch distance (px) that maps to `max_hz - span_hz`
    pub max_distance: f32,
    pub max_hz: f32,
    pub span_hz: f32,
}

impl Default for CutoffMap {
    fn default() -> Self {
        Self {
            min_distance: PINCH_MIN_PX,
            max_distance: PINCH_MAX_PX,
            max_hz: CUTOFF_MAX_HZ,
            span_hz: CUTOFF_SPAN_HZ,
        }
    }
}

impl CutoffMap {
    /// Lowest cutoff this map can produce.
    pub fn min_hz(&self) -> f32 {
        self.max_hz - self.span_hz
    }

    /// Map a pinch distance to a cutoff in Hz.
    ///
    /// Total for any input and any field values: the distance is clamped
    /// before the log so the argument stays positive, and NaN reads as a
    /// closed pinch. Inverted bounds are reordered. A map without a
    /// positive, finite, non-empty distance range always reads `max_hz`.
    pub fn cutoff(&self, distance: f32) -> f32 {
        let lo = self.min_distance.min(self.max_distance);
        let hi = self.min_distance.max(self.max_distance);
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && hi > lo) {
            return self.max_hz;
        }

        let d = if distance.is_nan() {
            lo
        } else {
            distance.clamp(lo, hi)
        };
        let position = (d / lo).ln() / (hi / lo).ln();
        self.max_hz - position * self.span_hz
    }
}

/// [`CutoffMap::cutoff`] with the default bounds.
pub fn cutoff_from_pinch(distance: f32) -> f32 {
    CutoffMap::default().cutoff(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert!((cutoff_from_pinch(15.0) - 20_000.0).abs() < 1e-2);
        assert!((cutoff_from_pinch(200.0) - 10.0).abs() < 1e-2);
    }

    #[test]
    fn clamps_before_log() {
        assert_eq!(cutoff_from_pinch(5.0), cutoff_from_pinch(15.0));
        assert_eq!(cutoff_from_pinch(500.0), cutoff_from_pinch(200.0));
        // Absent pinch reads as 0.0 px
        assert_eq!(cutoff_from_pinch(0.0), cutoff_from_pinch(15.0));
        assert_eq!(cutoff_from_pinch(-40.0), cutoff_from_pinch(15.0));
    }

    #[test]
    fn monotonically_decreasing_in_range() {
        let mut previous = f32::INFINITY;
        for step in 0..=185 {
            let d = 15.0 + step as f32;
            let hz = cutoff_from_pinch(d);
            assert!(hz <= previous, "cutoff rose at d={d}: {hz} > {previous}");
            assert!((10.0 - 1e-2..=20_000.0 + 1e-2).contains(&hz));
            previous = hz;
        }
    }

    #[test]
    fn non_finite_input_stays_in_range() {
        assert_eq!(cutoff_from_pinch(f32::NAN), cutoff_from_pinch(15.0));
        assert_eq!(cutoff_from_pinch(f32::INFINITY), cutoff_from_pinch(200.0));
        assert_eq!(cutoff_from_pinch(f32::NEG_INFINITY), cutoff_from_pinch(15.0));
    }

    #[test]
    fn inverted_bounds_are_reordered() {
        let inverted = CutoffMap {
            min_distance: PINCH_MAX_PX,
            max_distance: PINCH_MIN_PX,
            ..Default::default()
        };
        for d in [0.0, 15.0, 50.0, 120.0, 200.0, 900.0, f32::NAN] {
            assert_eq!(inverted.cutoff(d), cutoff_from_pinch(d));
        }
    }

    #[test]
    fn degenerate_bounds_read_max_hz() {
        let maps = [
            CutoffMap {
                min_distance: f32::NAN,
                ..Default::default()
            },
            CutoffMap {
                max_distance: f32::NAN,
                ..Default::default()
            },
            CutoffMap {
                min_distance: 0.0,
                ..Default::default()
            },
            CutoffMap {
                min_distance: -10.0,
                max_distance: -5.0,
                ..Default::default()
            },
            CutoffMap {
                min_distance: 40.0,
                max_distance: 40.0,
                ..Default::default()
            },
            CutoffMap {
                max_distance: f32::INFINITY,
                ..Default::default()
            },
        ];
        for map in maps {
            for d in [0.0, 15.0, 50.0, 500.0, f32::NAN, f32::INFINITY] {
                assert_eq!(map.cutoff(d), CUTOFF_MAX_HZ, "{map:?} at {d}");
            }
        }
    }

    #[test]
    fn midpoint_is_logarithmic() {
        // Geometric mean of the bounds sits halfway along the log scale
        let mid = (15.0f32 * 200.0).sqrt();
        let expected = 20_000.0 - 0.5 * 19_990.0;
        assert!((cutoff_from_pinch(mid) - expected).abs() < 0.5);
    }
}
