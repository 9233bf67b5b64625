//! Note model and the closed set of sort keys for note listings.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::NaiveDateTime;
#[cfg(feature = "server")]
use sqlx::FromRow;

/// Full note record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub note: String,
    pub priority: i64,
    pub created_at: NaiveDateTime,
}

#[cfg(feature = "server")]
impl Note {
    /// Convert to NoteInfo for client consumption.
    pub fn to_info(&self) -> NoteInfo {
        NoteInfo {
            id: self.id,
            note: self.note.clone(),
            priority: self.priority,
            created_at: self.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Note information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteInfo {
    pub id: i64,
    pub note: String,
    pub priority: i64,
    pub created_at: String,
}

/// Allowed sort keys for note listings.
///
/// Listing queries only ever order by one of these variants; the raw label
/// coming from the sort dropdown is parsed with [`NoteSort::from_label`] and
/// anything unrecognised falls back to [`NoteSort::Priority`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteSort {
    #[default]
    Priority,
    Date,
}

impl NoteSort {
    /// Parse a dropdown label into a sort key. Unknown labels sort by priority.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "date" => NoteSort::Date,
            _ => NoteSort::Priority,
        }
    }
}

/// Extract the numeric priority from a dropdown label such as `"2 - Medium"`.
///
/// Returns `None` when the label does not start with an integer in the 1–3 range.
pub fn parse_priority(label: &str) -> Option<i64> {
    let lead = label.split(" - ").next()?.trim();
    match lead.parse::<i64>() {
        Ok(p) if (1..=3).contains(&p) => Some(p),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_label_parsing() {
        assert_eq!(NoteSort::from_label("Priority"), NoteSort::Priority);
        assert_eq!(NoteSort::from_label("Date"), NoteSort::Date);
        assert_eq!(NoteSort::from_label("  date "), NoteSort::Date);
        // Anything outside the allow-list sorts by priority.
        assert_eq!(NoteSort::from_label("id; DROP TABLE notes"), NoteSort::Priority);
        assert_eq!(NoteSort::from_label(""), NoteSort::Priority);
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("1 - Low"), Some(1));
        assert_eq!(parse_priority("2 - Medium"), Some(2));
        assert_eq!(parse_priority("3 - High"), Some(3));
        assert_eq!(parse_priority("3"), Some(3));
        assert_eq!(parse_priority("0 - None"), None);
        assert_eq!(parse_priority("high"), None);
        assert_eq!(parse_priority(""), None);
    }
}
