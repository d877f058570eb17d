//! Builds [`Word`]s from Tesseract TSV output.
//!
//! Tesseract's `tsv` config emits one row per element with 12 tab-separated
//! columns: level, page_num, block_num, par_num, line_num, word_num, left,
//! top, width, height, conf, text. Every row is funneled through
//! [`Word::update_attr`], so records that violate the attribute contract
//! (negative geometry, conf outside `[0,100] ∪ {-1}`) are rejected here
//! rather than leaking into the data model.

use std::rc::Rc;

use anyhow::{Context, Result};
use log::debug;

use super::{Word, WordList};

/// Column names, in TSV order, for the ten integer fields.
const INT_COLUMNS: [&str; 10] = [
    "level", "page_num", "block_num", "par_num", "line_num", "word_num", "left", "top", "width",
    "height",
];

/// Parses a full TSV document into one [`Word`] per data row.
///
/// The header row is skipped, as are rows with fewer than 12 fields (logged
/// at debug level, matching how truncated rows are normally ignored).
/// Unparsable numeric columns and attribute-contract violations are hard
/// errors carrying the row number.
pub fn parse_tsv(tsv: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for (row, line) in tsv.lines().enumerate().skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 12 {
            debug!("skipping TSV row {} with {} fields", row, fields.len());
            continue;
        }
        words.push(
            parse_record(&fields).with_context(|| format!("TSV row {}: {:?}", row, line))?,
        );
    }

    debug!("parsed {} words from TSV", words.len());
    Ok(words)
}

/// Groups parsed words into a [`WordList`], preserving row order within
/// each text group.
pub fn index_words(words: Vec<Word>) -> WordList {
    let mut list = WordList::new();
    for word in words {
        list.append(Rc::new(word));
    }
    list
}

fn parse_record(fields: &[&str]) -> Result<Word> {
    let mut word = Word::new();

    for (column, raw) in INT_COLUMNS.into_iter().zip(fields.iter().copied()) {
        let value: i64 = raw
            .trim()
            .parse()
            .with_context(|| format!("column `{}` is not an integer: {:?}", column, raw))?;
        word.update_attr(column, value)?;
    }

    // conf is -1 for structural rows (page/block/par/line), a percentage
    // for word rows
    let conf: f64 = fields[10]
        .trim()
        .parse()
        .with_context(|| format!("column `conf` is not a number: {:?}", fields[10]))?;
    word.update_attr("conf", conf)?;
    word.update_attr("text", fields[11])?;

    Ok(word)
}
