//! Screenshot acquisition and in-place preprocessing.

use image::GrayImage;
use log::debug;

use super::preprocess;
use super::{CaptureError, CaptureSource};

/// Holds the working grayscale screenshot and applies OCR preprocessing.
///
/// Two buffers are kept: `current`, which every transform mutates, and
/// `original`, the untouched frame from the most recent capture. [`reset`]
/// throws away accumulated edits by copying `original` back over `current`.
///
/// [`reset`]: ScreenshotHelper::reset
pub struct ScreenshotHelper<S> {
    source: S,
    current: GrayImage,
    original: GrayImage,
}

impl<S: CaptureSource> ScreenshotHelper<S> {
    /// Wraps a capture backend. Both buffers start empty (0×0) until the
    /// first [`capture`](ScreenshotHelper::capture).
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: GrayImage::new(0, 0),
            original: GrayImage::new(0, 0),
        }
    }

    /// Grabs one frame from the backend, converts it to grayscale, and
    /// makes it both the working and the reference buffer.
    ///
    /// A backend failure propagates immediately; the previous buffers are
    /// kept in that case.
    pub fn capture(&mut self) -> Result<(), CaptureError> {
        let frame = self.source.capture_frame()?;
        let gray = frame.to_luma8();
        debug!("captured {}x{} frame", gray.width(), gray.height());
        self.original = gray.clone();
        self.current = gray;
        Ok(())
    }

    /// Inverts the working buffer in place.
    pub fn invert(&mut self) {
        preprocess::invert(&mut self.current);
    }

    /// Applies contrast (`alpha`) and brightness (`beta`) to the working
    /// buffer. See [`preprocess::adjust_contrast_brightness`] for the exact
    /// semantics.
    pub fn adjust_contrast_brightness(&mut self, alpha: f64, beta: f64) {
        preprocess::adjust_contrast_brightness(&mut self.current, alpha, beta);
    }

    /// Restores the working buffer to the unedited state of the most recent
    /// capture, discarding every transform applied since.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    /// Copies the rectangle bounded by `top_left` (inclusive) and
    /// `bottom_right` (exclusive) out of the working buffer, which is left
    /// untouched. Corners are clamped to the buffer bounds.
    pub fn crop(&self, top_left: (u32, u32), bottom_right: (u32, u32)) -> GrayImage {
        preprocess::crop(&self.current, top_left, bottom_right)
    }

    /// The working buffer all transforms apply to.
    pub fn current(&self) -> &GrayImage {
        &self.current
    }

    /// The unedited frame from the most recent capture.
    pub fn original(&self) -> &GrayImage {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use image::{DynamicImage, Luma};

    /// Backend stub delivering a fixed sequence of frames.
    struct StubSource {
        frames: Vec<DynamicImage>,
    }

    impl CaptureSource for StubSource {
        fn capture_frame(&mut self) -> Result<DynamicImage, CaptureError> {
            if self.frames.is_empty() {
                return Err(CaptureError::Backend(anyhow!("no display attached")));
            }
            Ok(self.frames.remove(0))
        }
    }

    fn gray_frame(width: u32, height: u32, seed: u32) -> DynamicImage {
        let img = GrayImage::from_fn(width, height, |x, y| {
            Luma([(x * 3 + y * 11 + seed) as u8])
        });
        DynamicImage::ImageLuma8(img)
    }

    fn helper_with(frames: Vec<DynamicImage>) -> ScreenshotHelper<StubSource> {
        ScreenshotHelper::new(StubSource { frames })
    }

    #[test]
    fn test_capture_sets_both_buffers() {
        let mut helper = helper_with(vec![gray_frame(8, 4, 0)]);
        assert_eq!(helper.current().dimensions(), (0, 0));

        helper.capture().unwrap();
        assert_eq!(helper.current().dimensions(), (8, 4));
        assert_eq!(helper.current(), helper.original());
    }

    #[test]
    fn test_capture_converts_color_frames() {
        let rgb = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 100, 50]));
        let mut helper = helper_with(vec![DynamicImage::ImageRgb8(rgb)]);
        helper.capture().unwrap();
        // Single-channel output, luma of the RGB input
        let v = helper.current().get_pixel(0, 0)[0];
        assert!(v > 0 && v < 255);
    }

    #[test]
    fn test_transforms_touch_current_only() {
        let mut helper = helper_with(vec![gray_frame(8, 8, 5)]);
        helper.capture().unwrap();
        let captured = helper.original().clone();

        helper.invert();
        helper.adjust_contrast_brightness(1.3, -20.0);
        assert_ne!(helper.current(), &captured);
        assert_eq!(helper.original(), &captured);
    }

    #[test]
    fn test_reset_restores_bit_exact() {
        let mut helper = helper_with(vec![gray_frame(16, 16, 9)]);
        helper.capture().unwrap();
        let captured = helper.current().clone();

        helper.invert();
        helper.adjust_contrast_brightness(2.0, 40.0);
        helper.invert();
        helper.reset();
        assert_eq!(helper.current(), &captured);
    }

    #[test]
    fn test_double_invert_restores() {
        let mut helper = helper_with(vec![gray_frame(8, 8, 1)]);
        helper.capture().unwrap();
        let captured = helper.current().clone();
        helper.invert();
        helper.invert();
        assert_eq!(helper.current(), &captured);
    }

    #[test]
    fn test_recapture_replaces_reference() {
        let mut helper = helper_with(vec![gray_frame(8, 8, 0), gray_frame(8, 8, 100)]);
        helper.capture().unwrap();
        let first = helper.original().clone();

        helper.invert();
        helper.capture().unwrap();
        assert_ne!(helper.original(), &first);
        assert_eq!(helper.current(), helper.original());

        // reset now goes to the second capture, not the first
        helper.adjust_contrast_brightness(1.0, 30.0);
        helper.reset();
        assert_ne!(helper.current(), &first);
    }

    #[test]
    fn test_crop_leaves_current_untouched() {
        let mut helper = helper_with(vec![gray_frame(20, 20, 3)]);
        helper.capture().unwrap();
        let before = helper.current().clone();

        let region = helper.crop((5, 5), (15, 10));
        assert_eq!(region.dimensions(), (10, 5));
        assert_eq!(region.get_pixel(0, 0), before.get_pixel(5, 5));
        assert_eq!(helper.current(), &before);
    }

    #[test]
    fn test_backend_failure_propagates() {
        let mut helper = helper_with(vec![]);
        let err = helper.capture().unwrap_err();
        assert!(err.to_string().contains("no display attached"));
        // Buffers unchanged on failure
        assert_eq!(helper.current().dimensions(), (0, 0));
    }
}
