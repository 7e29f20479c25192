// Purpose: gesture metrics -> bounded synthesis parameters
// Every function here is total: any finite or non-finite input yields an in-range value

pub mod cutoff;

pub use cutoff::{cutoff_from_pinch, CutoffMap};

/// Clamp to `[0, 1]`, reading NaN as 0.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Linear map of `[lo, hi]` onto `[0, 1]`, clamped.
///
/// A degenerate range (`hi <= lo`) yields 0.
#[inline]
pub fn normalize(value: f32, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return 0.0;
    }
    clamp01((value - lo) / (hi - lo))
}

/// Filter resonance from a normalized hand span.
#[inline]
pub fn resonance_from_span(span: f32) -> f32 {
    clamp01(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_both_ends() {
        assert_eq!(normalize(20.0, 20.0, 150.0), 0.0);
        assert_eq!(normalize(150.0, 20.0, 150.0), 1.0);
        assert_eq!(normalize(85.0, 20.0, 150.0), 0.5);
        assert_eq!(normalize(-300.0, 20.0, 150.0), 0.0);
        assert_eq!(normalize(9000.0, 20.0, 150.0), 1.0);
    }

    #[test]
    fn normalize_degenerate_range() {
        assert_eq!(normalize(5.0, 10.0, 10.0), 0.0);
        assert_eq!(normalize(5.0, 10.0, 1.0), 0.0);
    }

    #[test]
    fn resonance_is_clamped() {
        assert_eq!(resonance_from_span(0.3), 0.3);
        assert_eq!(resonance_from_span(1.7), 1.0);
        assert_eq!(resonance_from_span(-0.2), 0.0);
        assert_eq!(resonance_from_span(f32::NAN), 0.0);
        assert_eq!(resonance_from_span(f32::INFINITY), 1.0);
    }
}
