//! Recognized-word data model: validated attribute records, text-keyed
//! grouping, and construction from Tesseract TSV output.

pub mod tsv;
pub mod word;
pub mod word_list;

pub use word::{AttrError, AttrValue, Word};
pub use word_list::WordList;
