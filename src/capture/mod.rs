//! Screen capture boundary and screenshot preprocessing.
//!
//! The concrete capture backend (platform screen grab, window capture, test
//! stub) lives behind [`CaptureSource`]; everything else here works on the
//! delivered frame.

pub mod preprocess;
pub mod screenshot;

use image::DynamicImage;
use thiserror::Error;

pub use preprocess::{GrayBuffer, GrayPixel};
pub use screenshot::ScreenshotHelper;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// The capture backend failed to deliver a frame.
    #[error("screen capture failed: {0}")]
    Backend(#[source] anyhow::Error),
}

/// A source of screen frames.
///
/// One blocking grab per call; a failure propagates to the caller with no
/// retry or partial result. Implementations are expected to deliver frames
/// convertible to grayscale (any [`DynamicImage`] qualifies).
pub trait CaptureSource {
    fn capture_frame(&mut self) -> Result<DynamicImage, CaptureError>;
}
