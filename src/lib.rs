//! Screenshot OCR Core
//!
//! Data model for recognized words produced by a Tesseract-style OCR engine,
//! plus grayscale screenshot preprocessing (contrast/brightness, inversion,
//! crop) for feeding frames into that engine.
//!
//! The OCR engine itself and the concrete screen-capture backend are external
//! collaborators: the engine delivers 12-column TSV word records (parsed by
//! [`ocr::tsv`]), and capture backends implement [`capture::CaptureSource`].

pub mod capture;
pub mod ocr;

pub use capture::{CaptureError, CaptureSource, ScreenshotHelper};
pub use ocr::{AttrError, AttrValue, Word, WordList};
