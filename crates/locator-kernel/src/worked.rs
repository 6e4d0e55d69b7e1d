//! Worked-set aggregation: deduplicating logged locators into squares and fields.

use std::collections::HashSet;

use crate::locator::field_prefix;

/// The deduplicated worked squares and fields extracted from a contact log.
///
/// Both sets keep first-seen order for deterministic iteration, backed by
/// hash sets so membership checks stay O(1) during rendering. The fields set
/// is derived from every entry's prefix independently, not projected from the
/// squares set. Grows only during aggregation, read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct WorkedSet {
    square_order: Vec<String>,
    squares: HashSet<String>,
    field_order: Vec<String>,
    fields: HashSet<String>,
    contacts: usize,
}

impl WorkedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw log entry.
    ///
    /// Entries that are empty after trimming are skipped: not counted as a
    /// contact, not inserted into either set. Everything else is taken
    /// verbatim; the log format owns the validity of individual locators, so
    /// a malformed entry becomes a malformed square/field entry.
    pub fn record(&mut self, raw: &str) {
        let locator = raw.trim();
        if locator.is_empty() {
            return;
        }
        self.contacts += 1;

        if self.squares.insert(locator.to_string()) {
            self.square_order.push(locator.to_string());
        }

        let field = field_prefix(locator);
        if self.fields.insert(field.to_string()) {
            self.field_order.push(field.to_string());
        }
    }

    /// Aggregate a whole sequence of raw locator strings in one pass.
    pub fn from_locators<I, S>(locators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for locator in locators {
            set.record(locator.as_ref());
        }
        set
    }

    pub fn is_worked_square(&self, square: &str) -> bool {
        self.squares.contains(square)
    }

    pub fn is_worked_field(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    /// Worked squares in first-seen order.
    pub fn squares(&self) -> &[String] {
        &self.square_order
    }

    /// Worked fields in first-seen order.
    pub fn fields(&self) -> &[String] {
        &self.field_order
    }

    pub fn square_count(&self) -> usize {
        self.square_order.len()
    }

    pub fn field_count(&self) -> usize {
        self.field_order.len()
    }

    /// Non-empty log entries seen, duplicates included.
    pub fn contacts(&self) -> usize {
        self.contacts
    }
}
