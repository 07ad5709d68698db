//! Browse events: text search, exact-match filters, and sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Date, then start time.
    #[default]
    Date,
    /// Case-insensitive title.
    Title,
    /// Current attendee count.
    Attendees,
    /// Event type name.
    Type,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "title" => Ok(SortKey::Title),
            "attendees" => Ok(SortKey::Attendees),
            "type" => Ok(SortKey::Type),
            other => Err(format!(
                "unknown sort key '{}' (expected date, title, attendees or type)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Feed filter state. `None` filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    /// Case-insensitive substring over title, description and tags.
    pub search: String,
    pub event_type: Option<EventType>,
    pub department: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub sort_by: SortKey,
    pub direction: SortDirection,
}

impl EventQuery {
    pub fn matches(&self, event: &Event) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || event.title.to_lowercase().contains(&needle)
            || event.description.to_lowercase().contains(&needle)
            || event.tags.iter().any(|t| t.to_lowercase().contains(&needle));

        matches_search
            && self.event_type.is_none_or(|t| event.event_type == t)
            && self
                .department
                .as_deref()
                .is_none_or(|d| event.department == d)
            && self.date.as_deref().is_none_or(|d| event.date == d)
    }

    /// Filter and sort `events`. The sort is stable, so ties keep input order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut selected: Vec<&Event> = events.iter().filter(|e| self.matches(e)).collect();

        selected.sort_by(|a, b| {
            let ordering = compare(self.sort_by, a, b);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        selected
    }

    /// Number of type/department/date filters in effect (search excluded).
    pub fn active_filter_count(&self) -> usize {
        [
            self.event_type.is_some(),
            self.department.is_some(),
            self.date.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Clicking the current sort key flips direction; a new key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_by = key;
            self.direction = SortDirection::Asc;
        }
    }

    /// Drop type, department and date filters and the search text.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.event_type = None;
        self.department = None;
        self.date = None;
    }
}

// `YYYY-MM-DD` and `HH:MM` sort lexically in chronological order.
fn compare(key: SortKey, a: &Event, b: &Event) -> Ordering {
    match key {
        SortKey::Date => (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Attendees => a.current_attendees.cmp(&b.current_attendees),
        SortKey::Type => a.event_type.as_str().cmp(b.event_type.as_str()),
    }
}
