use crate::models::mark::Mark;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    /// Canonical date → mark. Dates without an entry are unmarked.
    pub marks: BTreeMap<String, Mark>,
}

impl Student {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            marks: BTreeMap::new(),
        }
    }

    pub fn set_mark(&mut self, date: &str, mark: Mark) {
        self.marks.insert(date.to_string(), mark);
    }

    pub fn mark_on(&self, date: &str) -> Option<Mark> {
        self.marks.get(date).copied()
    }

    pub fn is_unmarked_on(&self, date: &str) -> bool {
        !self.marks.contains_key(date)
    }
}
