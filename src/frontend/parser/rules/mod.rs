//! Recursive-descent rules
//!
//! Each rule returns `Ok(Some(node))` when it matched, `Ok(None)` when the
//! upcoming tokens do not start it (every token it read has been pushed
//! back), and `Err` on a fatal syntax or lexical error.

mod abstractions;
mod document;
mod interfaces;
mod types;

use super::error::ParseError;
use super::grammar::Rule;
use super::ordering::{canonical_sort, Ranked};
use super::state::ParserState;

impl<'a> ParserState<'a> {
    /// `NOTE item+`: the note opens the section and at least one item must
    /// follow it.
    fn parse_section<T>(
        &mut self,
        note: &str,
        expected: &str,
        rules: &[Rule],
        mut item: impl FnMut(&mut Self) -> Result<Option<T>, ParseError>,
    ) -> Result<Option<Vec<T>>, ParseError> {
        if !self.take_note(note)? {
            return Ok(None);
        }
        let first = item(self)?;
        let first = self.require(first, expected, rules)?;
        let mut items = vec![first];
        while let Some(next) = item(self)? {
            items.push(next);
        }
        Ok(Some(items))
    }

    /// A section whose items are put in canonical order
    fn parse_sorted_section<T: Ranked>(
        &mut self,
        note: &str,
        expected: &str,
        rules: &[Rule],
        item: impl FnMut(&mut Self) -> Result<Option<T>, ParseError>,
    ) -> Result<Option<Vec<T>>, ParseError> {
        let mut items = self.parse_section(note, expected, rules, item)?;
        if let Some(items) = items.as_mut() {
            canonical_sort(items);
        }
        Ok(items)
    }
}
