//! Grouping of availability records into months and days.

use std::collections::BTreeMap;

use chrono::{Datelike, Locale, NaiveDate, NaiveTime};
use serde_json::Value;

use crate::volunteer::{parse_volunteer_value, VolunteerEntry};

const LOCALE: Locale = Locale::it_IT;

/// Upper bound on `n_volontari`; larger counts mark the record as malformed.
pub const MAX_SLOTS_PER_DAY: usize = 64;

/// One date row from the availability webhook, with its slots parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRecord {
    /// The `data` field exactly as received
    pub iso_date: String,
    pub date: NaiveDate,
    /// One entry per slot, `None` for open slots
    pub volunteers: Vec<Option<VolunteerEntry>>,
}

impl AvailabilityRecord {
    /// Extract a record from raw JSON.
    ///
    /// Returns `None` when `data` is missing or is not a calendar date, or
    /// when `n_volontari` exceeds [`MAX_SLOTS_PER_DAY`].
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let iso_date = object.get("data")?.as_str()?;
        let date = NaiveDate::parse_from_str(iso_date.trim(), "%Y-%m-%d").ok()?;

        let slot_count = parse_slot_count(object.get("n_volontari"))?;
        let volunteers = (1..=slot_count)
            .map(|slot| parse_volunteer_value(object.get(&format!("volontario_{slot}"))))
            .collect();

        Some(Self {
            iso_date: iso_date.to_string(),
            date,
            volunteers,
        })
    }
}

/// Numeric value of `n_volontari`; anything non-numeric or negative is zero.
///
/// `None` when the count is above [`MAX_SLOTS_PER_DAY`].
pub fn parse_slot_count(raw: Option<&Value>) -> Option<usize> {
    let count = match raw {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if !count.is_finite() || count < 1.0 {
        return Some(0);
    }
    if count >= (MAX_SLOTS_PER_DAY + 1) as f64 {
        return None;
    }
    Some(count.floor() as usize)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub iso_date: String,
    pub date: NaiveDate,
    /// Capitalized long weekday, e.g. "Lunedì"
    pub weekday: String,
    /// Day and long month, e.g. "10 marzo"
    pub date_display: String,
    pub volunteers: Vec<Option<VolunteerEntry>>,
    /// Lowest slot index with no volunteer, `None` when fully booked
    pub first_open_slot: Option<usize>,
}

impl Day {
    pub fn from_record(record: AvailabilityRecord) -> Self {
        let first_open_slot = record.volunteers.iter().position(Option::is_none);

        Self {
            weekday: capitalize(&format_date(record.date, "%A")),
            date_display: format_date(record.date, "%-d %B"),
            iso_date: record.iso_date,
            date: record.date,
            volunteers: record.volunteers,
            first_open_slot,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.volunteers.len()
    }

    pub fn volunteer(&self, slot: usize) -> Option<&VolunteerEntry> {
        self.volunteers.get(slot).and_then(Option::as_ref)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    /// `YYYY-MM`, sorts chronologically
    pub key: String,
    /// Capitalized month and year, e.g. "Marzo 2025"
    pub label: String,
    pub days: Vec<Day>,
}

impl Month {
    fn for_date(date: NaiveDate) -> Self {
        Self {
            key: month_key(date),
            label: capitalize(&format_date(date, "%B %Y")),
            days: Vec::new(),
        }
    }

    /// Number of grid rows: the largest slot count among this month's days.
    pub fn max_slots(&self) -> usize {
        self.days.iter().map(Day::slot_count).max().unwrap_or(0)
    }
}

/// The view of one fetch: months in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub months: Vec<Month>,
    /// Records skipped for a missing or unparseable date or slot count
    pub dropped: usize,
}

impl Calendar {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Group raw records into months, each with its days sorted by date.
///
/// Duplicate dates are kept as separate days.
pub fn build_calendar(records: &[Value]) -> Calendar {
    let mut months: BTreeMap<String, Month> = BTreeMap::new();
    let mut dropped = 0;

    for value in records {
        let Some(record) = AvailabilityRecord::from_value(value) else {
            dropped += 1;
            continue;
        };

        let date = record.date;
        months
            .entry(month_key(date))
            .or_insert_with(|| Month::for_date(date))
            .days
            .push(Day::from_record(record));
    }

    if dropped > 0 {
        tracing::warn!(dropped, "Skipped malformed availability records");
    }

    let months = months
        .into_values()
        .map(|mut month| {
            month.days.sort_by_key(|day| day.date);
            month
        })
        .collect();

    Calendar { months, dropped }
}

pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(pattern, LOCALE)
        .to_string()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
