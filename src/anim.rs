//! Easing and interpolation helpers shared by page animations
//!
//! Pages compose these free functions instead of inheriting animation
//! behavior: the title drop-in, the logo slide and the staggered
//! audience bars are all one `ease_out` over a clamped progress factor.

use crate::render::Color;

/// Linear interpolation between `a` and `b`
pub fn interp(a: f32, b: f32, factor: f32) -> f32 {
    a + (b - a) * factor
}

/// Quadratic ease-in: starts slow, ends fast
pub fn ease_in(a: f32, b: f32, factor: f32) -> f32 {
    a + (b - a) * factor * factor
}

/// Quadratic ease-out: starts fast, settles into the target
pub fn ease_out(a: f32, b: f32, factor: f32) -> f32 {
    b + (a - b) * (1.0 - factor) * (1.0 - factor)
}

/// Clamps `value` into `[min, max]`
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Linear interpolation between two colors, per channel
pub fn interp_color(a: Color, b: Color, factor: f32) -> Color {
    Color::new(
        interp(f32::from(a.r), f32::from(b.r), factor) as u8,
        interp(f32::from(a.g), f32::from(b.g), factor) as u8,
        interp(f32::from(a.b), f32::from(b.b), factor) as u8,
    )
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_interp_endpoints() {
        assert_eq!(interp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(interp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(interp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_easing_hits_both_endpoints() {
        assert_eq!(ease_in(2.0, 8.0, 0.0), 2.0);
        assert_eq!(ease_in(2.0, 8.0, 1.0), 8.0);
        assert_eq!(ease_out(2.0, 8.0, 0.0), 2.0);
        assert_eq!(ease_out(2.0, 8.0, 1.0), 8.0);
    }

    #[test]
    fn test_ease_out_front_loads_motion() {
        let halfway = ease_out(0.0, 1.0, 0.5);
        assert!(halfway > 0.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_interp_color_endpoints() {
        let a = Color::new(0, 100, 200);
        let b = Color::new(200, 100, 0);
        assert_eq!(interp_color(a, b, 0.0), a);
        assert_eq!(interp_color(a, b, 1.0), b);
        assert_eq!(interp_color(a, b, 0.5), Color::new(100, 100, 100));
    }
}
