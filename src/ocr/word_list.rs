//! Text-keyed grouping of recognized words.

use std::collections::HashMap;
use std::rc::Rc;

use super::Word;

/// A multi-map from text value to every word recognized with that text.
///
/// Words are held as shared, non-owning [`Rc`] handles; the list is a
/// secondary lookup structure over words that keep living independently.
/// Append/lookup only: nothing is ever removed or rewritten, and insertion
/// order is preserved within each text group.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashMap<String, Vec<Rc<Word>>>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word to the group keyed by its current text value, creating
    /// the group on first sight and appending at the end otherwise.
    pub fn append(&mut self, word: Rc<Word>) {
        self.words
            .entry(word.text().to_string())
            .or_default()
            .push(word);
    }

    /// Every word recognized with exactly `text`, in insertion order.
    ///
    /// Returns `None` for a text value that was never appended; a returned
    /// slice is never empty.
    pub fn get_words(&self, text: &str) -> Option<&[Rc<Word>]> {
        self.words.get(text).map(Vec::as_slice)
    }

    /// Number of distinct text values in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_with_text(text: &str, left: u32) -> Rc<Word> {
        let mut word = Word::new();
        word.update_attr("text", text).unwrap();
        word.update_attr("left", left).unwrap();
        Rc::new(word)
    }

    #[test]
    fn test_append_groups_by_text() {
        let mut list = WordList::new();
        list.append(word_with_text("score", 10));
        list.append(word_with_text("total", 20));
        list.append(word_with_text("score", 30));

        assert_eq!(list.len(), 2);
        let group = list.get_words("score").unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group[0].get_attr("left").unwrap(), crate::AttrValue::Int(10));
        assert_eq!(group[1].get_attr("left").unwrap(), crate::AttrValue::Int(30));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = WordList::new();
        for left in [1u32, 2, 3, 4, 5] {
            list.append(word_with_text("repeated", left));
        }
        let lefts: Vec<_> = list
            .get_words("repeated")
            .unwrap()
            .iter()
            .map(|w| w.get_attr("left").unwrap())
            .collect();
        assert_eq!(
            lefts,
            (1i64..=5).map(crate::AttrValue::Int).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_missing_key_is_none_not_empty() {
        let mut list = WordList::new();
        assert!(list.get_words("anything").is_none());
        list.append(word_with_text("present", 0));
        assert!(list.get_words("absent").is_none());
        // Exact match only
        assert!(list.get_words("Present").is_none());
    }

    #[test]
    fn test_empty_text_is_a_valid_key() {
        let mut list = WordList::new();
        list.append(word_with_text("", 7));
        assert_eq!(list.get_words("").unwrap().len(), 1);
    }

    #[test]
    fn test_words_live_independently() {
        let shared = word_with_text("shared", 99);
        let mut list = WordList::new();
        list.append(Rc::clone(&shared));
        drop(list);
        // The caller's handle survives the index
        assert_eq!(shared.text(), "shared");
    }
}
