//! Outcome of one availability load, as shown in the calendar container.

use serde_json::Value;

use crate::calendar::build_calendar;
use crate::error::CalendarResult;
use crate::grid::MonthGrid;
use crate::messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarView {
    /// Single centered message in place of the tables
    Message(&'static str),
    Months(Vec<MonthGrid>),
}

impl CalendarView {
    pub fn loading() -> Self {
        CalendarView::Message(messages::LOADING)
    }

    /// Every failure collapses into the same message; the cause is only logged.
    pub fn from_load(result: CalendarResult<Vec<Value>>) -> Self {
        let records = match result {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Errore durante il caricamento delle disponibilità: {}", e);
                return CalendarView::Message(messages::LOAD_FAILED);
            }
        };

        let calendar = build_calendar(&records);
        if calendar.is_empty() {
            return CalendarView::Message(messages::NO_DATES);
        }

        CalendarView::Months(calendar.months.iter().map(MonthGrid::from_month).collect())
    }
}

/// Tags overlapping loads so only the most recently started one is applied.
#[derive(Debug, Default)]
pub struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    /// Start a new load and return its tag.
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}
