//! sRGB transfer function (IEC 61966-2-1) and its 8-bit codec.
//!
//! The simulators work on linear light. Pixels arrive as sRGB-encoded bytes,
//! are decoded with [`srgb_u8_to_linear`] and re-encoded with
//! [`linear_to_srgb_u8`] once the transform has been applied.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f32) -> f32;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f32) -> f32;
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <  0.04045 → V / 12.92
///              V >= 0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <  0.0031308 → L × 12.92
///              L >= 0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    /// Encoded value below which the curve is linear.
    pub const ENCODED_CUT: f32 = 0.04045;
    /// Linear value below which the curve is linear.
    pub const LINEAR_CUT: f32 = 0.003_130_8;
    const SLOPE: f32 = 12.92;
}

impl TransferFunction for SrgbTransfer {
    #[inline]
    fn to_linear(&self, encoded: f32) -> f32 {
        if encoded < Self::ENCODED_CUT {
            encoded / Self::SLOPE
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4)
        }
    }

    #[inline]
    fn to_encoded(&self, linear: f32) -> f32 {
        if linear < Self::LINEAR_CUT {
            linear * Self::SLOPE
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        }
    }
}

/// Decode an 8-bit sRGB channel value to linear light in `[0, 1]`.
#[inline]
pub fn srgb_u8_to_linear(value: u8) -> f32 {
    SrgbTransfer.to_linear(value as f32 / 255.0)
}

/// Encode a linear light value to an 8-bit sRGB channel value.
///
/// Out-of-gamut values are clamped first (`<= 0 → 0`, `>= 1 → 255`, NaN → 0).
/// Rounding is half-up (`+ 0.5` then truncate) so that results bit-match
/// reference images produced the same way.
#[inline]
pub fn linear_to_srgb_u8(linear: f32) -> u8 {
    // Written as a negated comparison so NaN also lands here.
    if !(linear > 0.0) {
        return 0;
    }
    if linear >= 1.0 {
        return 255;
    }
    let encoded = SrgbTransfer.to_encoded(linear);
    (encoded * 255.0 + 0.5) as u8
}

/// Decode the color channels of an RGBA pixel. Alpha is ignored.
#[inline]
pub fn decode_rgb(pixel: &[u8; 4]) -> [f32; 3] {
    [
        srgb_u8_to_linear(pixel[0]),
        srgb_u8_to_linear(pixel[1]),
        srgb_u8_to_linear(pixel[2]),
    ]
}

/// Encode linear RGB into the color channels of an RGBA pixel, leaving
/// alpha as it was.
#[inline]
pub fn encode_rgb_into(rgb: [f32; 3], pixel: &mut [u8; 4]) {
    pixel[0] = linear_to_srgb_u8(rgb[0]);
    pixel[1] = linear_to_srgb_u8(rgb[1]);
    pixel[2] = linear_to_srgb_u8(rgb[2]);
}
