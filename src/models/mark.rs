use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mark {
    Present,
    Absent,
}

impl Mark {
    pub fn from_present(is_present: bool) -> Self {
        if is_present {
            Mark::Present
        } else {
            Mark::Absent
        }
    }

    /// Value written into a CSV cell.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Present => "Present",
            Mark::Absent => "Absent",
        }
    }

    /// Parse a non-empty CSV cell (case-insensitive).
    pub fn from_cell(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("present") {
            Some(Mark::Present)
        } else if s.eq_ignore_ascii_case("absent") {
            Some(Mark::Absent)
        } else {
            None
        }
    }

    /// Cell text for an optional mark: unmarked cells are empty.
    pub fn cell(mark: Option<Mark>) -> &'static str {
        mark.map(|m| m.as_str()).unwrap_or("")
    }
}
