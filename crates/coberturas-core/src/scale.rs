//! Scale policy for the coverage drawing
//!
//! Each axis maps linearly to pixels and is capped so large dimensions
//! never outgrow the panel.

/// Pixels per metre of width
pub const WIDTH_FACTOR: f64 = 8.0;
/// Maximum drawn width in pixels
pub const WIDTH_CAP_PX: f64 = 200.0;
/// Pixels per metre of length
pub const LENGTH_FACTOR: f64 = 6.0;
/// Maximum drawn height in pixels
pub const LENGTH_CAP_PX: f64 = 150.0;

/// Pixel size of the drawn coverage rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledShape {
    pub width_px: f64,
    pub height_px: f64,
}

/// Scale real dimensions (metres) to capped pixel sizes
pub fn scale_shape(width: f64, length: f64) -> ScaledShape {
    ScaledShape {
        width_px: (width * WIDTH_FACTOR).min(WIDTH_CAP_PX),
        height_px: (length * LENGTH_FACTOR).min(LENGTH_CAP_PX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_below_cap_is_linear() {
        for width in [0.0, 1.0, 12.5, 25.0] {
            assert_eq!(scale_shape(width, 1.0).width_px, width * 8.0);
        }
    }

    #[test]
    fn test_width_above_25_hits_cap() {
        for width in [25.01, 30.0, 1_000.0] {
            assert_eq!(scale_shape(width, 1.0).width_px, 200.0);
        }
    }

    #[test]
    fn test_length_cap() {
        assert_eq!(scale_shape(1.0, 20.0).height_px, 120.0);
        assert_eq!(scale_shape(1.0, 25.0).height_px, 150.0);
        assert_eq!(scale_shape(1.0, 90.0).height_px, 150.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let shape = scale_shape(30.0, 10.0);
        assert_eq!(shape.width_px, 200.0);
        assert_eq!(shape.height_px, 60.0);
    }
}
