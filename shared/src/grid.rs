//! Table layout for one month: one column per day, one row per slot.

use crate::calendar::{Day, Month};
use crate::volunteer::VolunteerEntry;

/// What a single table cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Booked slot; a link when the entry has an `href`
    Filled(VolunteerEntry),
    /// The day's first open slot, carries the booking control
    AddControl { iso_date: String },
    /// Open slot after the first one
    Open,
    /// Row past the end of this day's slots
    Absent,
}

impl GridCell {
    pub fn for_slot(day: &Day, slot: usize) -> Self {
        match day.volunteers.get(slot) {
            None => GridCell::Absent,
            Some(Some(entry)) => GridCell::Filled(entry.clone()),
            Some(None) if day.first_open_slot == Some(slot) => GridCell::AddControl {
                iso_date: day.iso_date.clone(),
            },
            Some(None) => GridCell::Open,
        }
    }
}

/// Header data for one day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub iso_date: String,
    pub weekday: String,
    pub date_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub key: String,
    pub label: String,
    pub columns: Vec<GridColumn>,
    /// `rows[slot][column]`
    pub rows: Vec<Vec<GridCell>>,
}

impl MonthGrid {
    pub fn from_month(month: &Month) -> Self {
        let columns = month
            .days
            .iter()
            .map(|day| GridColumn {
                iso_date: day.iso_date.clone(),
                weekday: day.weekday.clone(),
                date_display: day.date_display.clone(),
            })
            .collect();

        let rows = (0..month.max_slots())
            .map(|slot| {
                month
                    .days
                    .iter()
                    .map(|day| GridCell::for_slot(day, slot))
                    .collect()
            })
            .collect();

        Self {
            key: month.key.clone(),
            label: month.label.clone(),
            columns,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_calendar;
    use serde_json::json;

    fn grid_for(records: Vec<serde_json::Value>) -> MonthGrid {
        let calendar = build_calendar(&records);
        MonthGrid::from_month(&calendar.months[0])
    }

    #[test]
    fn test_first_open_slot_gets_the_control() {
        let grid = grid_for(vec![json!({
            "data": "2025-03-10",
            "n_volontari": "2",
            "volontario_1": "",
            "volontario_2": "Mario"
        })]);

        assert_eq!(grid.label, "Marzo 2025");
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(
            grid.rows[0][0],
            GridCell::AddControl {
                iso_date: "2025-03-10".to_string()
            }
        );
        assert_eq!(grid.rows[1][0], GridCell::Filled(VolunteerEntry::named("Mario")));
    }

    #[test]
    fn test_later_open_slots_are_plain() {
        let grid = grid_for(vec![json!({
            "data": "2025-03-10",
            "n_volontari": 3,
            "volontario_1": "Anna"
        })]);

        assert!(matches!(grid.rows[0][0], GridCell::Filled(_)));
        assert!(matches!(grid.rows[1][0], GridCell::AddControl { .. }));
        assert_eq!(grid.rows[2][0], GridCell::Open);
    }

    #[test]
    fn test_short_days_leave_absent_cells() {
        let grid = grid_for(vec![
            json!({"data": "2025-03-12", "n_volontari": 3, "volontario_1": "A", "volontario_2": "B", "volontario_3": "C"}),
            json!({"data": "2025-03-10", "n_volontari": 1, "volontario_1": "Z"}),
        ]);

        let dates: Vec<_> = grid.columns.iter().map(|c| c.iso_date.as_str()).collect();
        assert_eq!(dates, vec!["2025-03-10", "2025-03-12"]);
        assert_eq!(grid.rows.len(), 3);
        assert!(matches!(grid.rows[0][0], GridCell::Filled(_)));
        assert_eq!(grid.rows[1][0], GridCell::Absent);
        assert_eq!(grid.rows[2][0], GridCell::Absent);
        assert!(matches!(grid.rows[2][1], GridCell::Filled(_)));
    }

    #[test]
    fn test_zero_slot_days_have_no_rows() {
        let grid = grid_for(vec![json!({"data": "2025-03-10", "n_volontari": 0})]);
        assert_eq!(grid.columns.len(), 1);
        assert!(grid.rows.is_empty());
    }
}
