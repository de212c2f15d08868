/// Daily tab-count history, keyed by calendar date

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Tab count observed on one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DayCount {
    pub date: String,
    pub count: u32,
}

/// Date → tab count map, kept in the order keys were first written.
///
/// Stored as a plain object, e.g. `{"2024-03-02": 14, "2024-03-03": 11}`.
/// There is at most one entry per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyHistory {
    days: Vec<DayCount>,
}

impl DailyHistory {
    pub fn new() -> Self {
        DailyHistory { days: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, date: &str) -> Option<u32> {
        self.days.iter().find(|d| d.date == date).map(|d| d.count)
    }

    /// Set the count for a date, replacing any earlier count for that date.
    /// A new date is appended; an existing one keeps its position.
    pub fn set(&mut self, date: &str, count: u32) {
        match self.days.iter_mut().find(|d| d.date == date) {
            Some(day) => day.count = count,
            None => self.days.push(DayCount {
                date: date.to_string(),
                count,
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayCount> {
        self.days.iter()
    }

    /// The most recent `n` entries in stored order
    pub fn last(&self, n: usize) -> &[DayCount] {
        let skip = self.days.len().saturating_sub(n);
        &self.days[skip..]
    }
}

/// Compute the history that results from observing `count` tabs on `date`.
pub fn record_count(history: DailyHistory, date: &str, count: u32) -> DailyHistory {
    let mut next = history;
    next.set(date, count);
    next
}

/// Format a calendar date as `YYYY-MM-DD`, month and day zero-padded
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today's key in the browser's local time zone
pub fn today_key() -> String {
    let now = js_sys::Date::new_0();
    date_key(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

impl Serialize for DailyHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.date, &day.count)?;
        }
        map.end()
    }
}

struct DailyHistoryVisitor;

impl<'de> Visitor<'de> for DailyHistoryVisitor {
    type Value = DailyHistory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of date strings to tab counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut history = DailyHistory::new();
        while let Some((date, count)) = access.next_entry::<String, u32>()? {
            history.set(&date, count);
        }
        Ok(history)
    }
}

impl<'de> Deserialize<'de> for DailyHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DailyHistoryVisitor)
    }
}
