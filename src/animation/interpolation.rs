// Interpolation between two keys of one curve segment

use crate::model::Interpolation;

/// Linear interpolation for scalars
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Value between two keys at normalized position `t` in [0, 1].
///
/// Bezier and Hermite tracks are exported without tangents, so they evaluate
/// like linear ones.
pub fn interpolate(mode: Interpolation, a: f32, b: f32, t: f32) -> f32 {
    match mode {
        Interpolation::None => a,
        Interpolation::Linear | Interpolation::Bezier | Interpolation::Hermite => lerp_f32(a, b, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_holds_first_value() {
        assert_eq!(interpolate(Interpolation::None, 1.0, 5.0, 0.9), 1.0);
    }

    #[test]
    fn test_linear_midpoint() {
        assert_eq!(interpolate(Interpolation::Linear, 0.0, 4.0, 0.5), 2.0);
        assert_eq!(interpolate(Interpolation::Hermite, 0.0, 4.0, 0.25), 1.0);
    }
}
