//! One recognized word and its validated attribute record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a [`Word`] attribute access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttrError {
    #[error("`{0}` is not an attribute of Word")]
    UnknownField(String),
    #[error("attribute `{attribute}` expects {expected}, got {found}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("value {value} is out of range for attribute `{attribute}`")]
    OutOfRange { attribute: String, value: AttrValue },
}

/// A dynamically-typed attribute value crossing the validation boundary.
///
/// `Bool` is carried as its own variant so that boolean inputs are rejected
/// for every field: a boolean is never a number here, even though upstream
/// record sources may conflate the two.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Int(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Real(v) => write!(f, "{v}"),
            AttrValue::Text(v) => write!(f, "{v}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl AttrValue {
    /// Human-readable type name, used in `TypeMismatch` messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Int(_) => "integer",
            AttrValue::Real(_) => "real",
            AttrValue::Text(_) => "text",
            AttrValue::Bool(_) => "boolean",
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v as i64)
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Int(v as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Real(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

/// The fixed attribute set of one recognized word.
///
/// Field names and order match the 12 columns of Tesseract's TSV output:
/// level, page_num, block_num, par_num, line_num, word_num,
/// left, top, width, height, conf, text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct AttributeRecord {
    level: u32,
    page_num: u32,
    block_num: u32,
    par_num: u32,
    line_num: u32,
    word_num: u32,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
    conf: f64,
    text: String,
}

/// One recognized word: the validated attribute record plus geometric
/// derivations over its bounding box.
///
/// The field set is closed and every field keeps its declared type for the
/// life of the word; [`Word::update_attr`] enforces both. All count and
/// geometry fields are non-negative, and `conf` is either a percentage in
/// `[0, 100]` or the sentinel `-1.0` meaning "no confidence available".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "AttributeRecord", try_from = "AttributeRecord")]
pub struct Word {
    attrs: AttributeRecord,
}

/// `[0, 100]` or the −1 sentinel.
fn conf_in_range(conf: f64) -> bool {
    (0.0..=100.0).contains(&conf) || conf == -1.0
}

impl From<Word> for AttributeRecord {
    fn from(word: Word) -> Self {
        word.attrs
    }
}

/// Deserialized records pass the same validation as [`Word::update_attr`]:
/// the unsigned integer fields are non-negative by construction, so only
/// `conf` can smuggle an out-of-range value in.
impl TryFrom<AttributeRecord> for Word {
    type Error = AttrError;

    fn try_from(attrs: AttributeRecord) -> Result<Self, AttrError> {
        if !conf_in_range(attrs.conf) {
            return Err(AttrError::OutOfRange {
                attribute: "conf".to_string(),
                value: AttrValue::Real(attrs.conf),
            });
        }
        Ok(Self { attrs })
    }
}

impl Word {
    /// Creates a word with every attribute at its type-correct default:
    /// zero for the numeric fields, `0.0` for conf, empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a named attribute.
    ///
    /// The ten count/geometry fields come back as [`AttrValue::Int`], `conf`
    /// as [`AttrValue::Real`], and `text` as [`AttrValue::Text`]. Names are
    /// matched exactly and case-sensitively; anything else is
    /// [`AttrError::UnknownField`].
    pub fn get_attr(&self, attribute: &str) -> Result<AttrValue, AttrError> {
        match attribute {
            "level" => Ok(AttrValue::Int(self.attrs.level as i64)),
            "page_num" => Ok(AttrValue::Int(self.attrs.page_num as i64)),
            "block_num" => Ok(AttrValue::Int(self.attrs.block_num as i64)),
            "par_num" => Ok(AttrValue::Int(self.attrs.par_num as i64)),
            "line_num" => Ok(AttrValue::Int(self.attrs.line_num as i64)),
            "word_num" => Ok(AttrValue::Int(self.attrs.word_num as i64)),
            "left" => Ok(AttrValue::Int(self.attrs.left as i64)),
            "top" => Ok(AttrValue::Int(self.attrs.top as i64)),
            "width" => Ok(AttrValue::Int(self.attrs.width as i64)),
            "height" => Ok(AttrValue::Int(self.attrs.height as i64)),
            "conf" => Ok(AttrValue::Real(self.attrs.conf)),
            "text" => Ok(AttrValue::Text(self.attrs.text.clone())),
            other => Err(AttrError::UnknownField(other.to_string())),
        }
    }

    /// Validates and writes a new attribute value.
    ///
    /// Checks run in a fixed order: unknown field, then type, then range.
    /// `conf` accepts integer or real values in `[0, 100]` plus the `-1`
    /// sentinel; `text` accepts any string; every other field accepts only
    /// non-negative integers (a real is rejected where an integer is
    /// required, and a boolean is rejected everywhere). A failed update
    /// leaves the word unmodified.
    pub fn update_attr(
        &mut self,
        attribute: &str,
        value: impl Into<AttrValue>,
    ) -> Result<(), AttrError> {
        let value = value.into();
        match attribute {
            "conf" => {
                let conf = match value {
                    AttrValue::Int(i) => i as f64,
                    AttrValue::Real(r) => r,
                    other => {
                        return Err(AttrError::TypeMismatch {
                            attribute: attribute.to_string(),
                            expected: "integer or real",
                            found: other.type_name(),
                        });
                    }
                };
                if !conf_in_range(conf) {
                    return Err(AttrError::OutOfRange {
                        attribute: attribute.to_string(),
                        value: AttrValue::Real(conf),
                    });
                }
                self.attrs.conf = conf;
                Ok(())
            }
            "text" => match value {
                AttrValue::Text(s) => {
                    self.attrs.text = s;
                    Ok(())
                }
                other => Err(AttrError::TypeMismatch {
                    attribute: attribute.to_string(),
                    expected: "text",
                    found: other.type_name(),
                }),
            },
            _ => {
                // Resolve the field first so unknown names fail before any
                // type or range check.
                let field = self.counter_field_mut(attribute)?;
                let raw = match value {
                    AttrValue::Int(i) => i,
                    other => {
                        return Err(AttrError::TypeMismatch {
                            attribute: attribute.to_string(),
                            expected: "integer",
                            found: other.type_name(),
                        });
                    }
                };
                if raw < 0 || raw > u32::MAX as i64 {
                    return Err(AttrError::OutOfRange {
                        attribute: attribute.to_string(),
                        value: AttrValue::Int(raw),
                    });
                }
                *field = raw as u32;
                Ok(())
            }
        }
    }

    /// The word's text value, the grouping key used by
    /// [`WordList`](super::WordList).
    pub fn text(&self) -> &str {
        &self.attrs.text
    }

    /// Center of the word's bounding box in pixels, relative to the image
    /// the OCR engine saw. Coordinates originate at the top-left corner,
    /// x increasing rightward and y downward. Uses real division, so a
    /// box with odd width centers on a half pixel.
    pub fn center(&self) -> (f64, f64) {
        (
            self.attrs.left as f64 + self.attrs.width as f64 / 2.0,
            self.attrs.top as f64 + self.attrs.height as f64 / 2.0,
        )
    }

    /// Euclidean distance in pixels between this word's center and
    /// another's. Symmetric in its arguments.
    pub fn distance_between(&self, other: &Word) -> f64 {
        let (x0, y0) = self.center();
        let (x1, y1) = other.center();
        (x1 - x0).hypot(y1 - y0)
    }

    fn counter_field_mut(&mut self, attribute: &str) -> Result<&mut u32, AttrError> {
        match attribute {
            "level" => Ok(&mut self.attrs.level),
            "page_num" => Ok(&mut self.attrs.page_num),
            "block_num" => Ok(&mut self.attrs.block_num),
            "par_num" => Ok(&mut self.attrs.par_num),
            "line_num" => Ok(&mut self.attrs.line_num),
            "word_num" => Ok(&mut self.attrs.word_num),
            "left" => Ok(&mut self.attrs.left),
            "top" => Ok(&mut self.attrs.top),
            "width" => Ok(&mut self.attrs.width),
            "height" => Ok(&mut self.attrs.height),
            other => Err(AttrError::UnknownField(other.to_string())),
        }
    }
}
