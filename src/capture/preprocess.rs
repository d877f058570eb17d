//! Depth-generic grayscale transforms for OCR preprocessing.
//!
//! Free functions over single-channel buffers of any supported bit depth.
//! [`ScreenshotHelper`](super::ScreenshotHelper) delegates here for its
//! 8-bit working buffer; deeper captures can use these directly.

use image::{ImageBuffer, Luma, Primitive};

/// Single-channel grayscale buffer at bit depth `P`.
pub type GrayBuffer<P> = ImageBuffer<Luma<P>, Vec<P>>;

/// A grayscale sample type with a known native range.
///
/// Supplies what the transforms need to stay independent of bit depth: the
/// native maximum for normalization, and a truncating cast back from the
/// working `f64` scale.
pub trait GrayPixel: Primitive + 'static {
    /// Maximum representable sample value, as `f64`.
    const NATIVE_MAX: f64;

    fn to_f64(self) -> f64;

    /// Truncating cast from `f64`. Callers clamp first; values outside the
    /// native range saturate.
    fn from_f64(v: f64) -> Self;

    /// Bitwise complement: `v` becomes `max − v`.
    fn inverted(self) -> Self;
}

impl GrayPixel for u8 {
    const NATIVE_MAX: f64 = u8::MAX as f64;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        v.clamp(0.0, Self::NATIVE_MAX) as u8
    }

    fn inverted(self) -> Self {
        !self
    }
}

impl GrayPixel for u16 {
    const NATIVE_MAX: f64 = u16::MAX as f64;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        v.clamp(0.0, Self::NATIVE_MAX) as u16
    }

    fn inverted(self) -> Self {
        !self
    }
}

/// Inverts every pixel in place (`v` becomes `max − v`). Applying it twice
/// restores the buffer exactly.
pub fn invert<P: GrayPixel>(img: &mut GrayBuffer<P>) {
    for pixel in img.pixels_mut() {
        pixel[0] = pixel[0].inverted();
    }
}

/// Adjusts contrast (`alpha`) and brightness (`beta`) in place.
///
/// Each pixel is normalized from its native range to `[0, 1]`, rescaled to
/// the 8-bit `0–255` scale, then transformed as `v * alpha + beta` and
/// clamped to `[0, 255]` before the truncating cast back to `P`. The order
/// matters: normalization first makes the transform identical across bit
/// depths, and clamping (never wrapping) caps the result at pure black or
/// pure white.
///
/// `alpha == 1.0, beta == 0.0` leaves an 8-bit buffer unchanged. `alpha > 1`
/// increases contrast, `alpha < 1` decreases it; positive `beta` brightens,
/// negative darkens.
pub fn adjust_contrast_brightness<P: GrayPixel>(img: &mut GrayBuffer<P>, alpha: f64, beta: f64) {
    for pixel in img.pixels_mut() {
        let scaled = pixel[0].to_f64() / P::NATIVE_MAX * 255.0;
        let adjusted = (scaled * alpha + beta).clamp(0.0, 255.0);
        pixel[0] = P::from_f64(adjusted);
    }
}

/// Copies the rectangle bounded by `top_left` (inclusive) and
/// `bottom_right` (exclusive) out of `img`.
///
/// Both corners are clamped to the buffer bounds, so a rectangle reaching
/// past the edge shrinks to fit and a degenerate rectangle (corners crossed
/// or coincident) yields an empty buffer.
pub fn crop<P: GrayPixel>(
    img: &GrayBuffer<P>,
    top_left: (u32, u32),
    bottom_right: (u32, u32),
) -> GrayBuffer<P> {
    let (w, h) = img.dimensions();
    let x0 = top_left.0.min(w);
    let y0 = top_left.1.min(h);
    let x1 = bottom_right.0.clamp(x0, w);
    let y1 = bottom_right.1.clamp(y0, h);

    image::imageops::crop_imm(img, x0, y0, x1 - x0, y1 - y0).to_image()
}
