//! Browser-independent core of the volunteer signup calendar.
//!
//! Everything here is plain Rust so it can be unit tested natively; the
//! `signup-frontend` crate wires it to the DOM.

pub mod calendar;
pub mod config;
pub mod error;
pub mod feedback;
pub mod grid;
pub mod load;
pub mod messages;
pub mod oauth;
pub mod payload;
pub mod volunteer;

pub use calendar::{build_calendar, AvailabilityRecord, Calendar, Day, Month};
pub use config::SignupConfig;
pub use error::{CalendarError, CalendarResult};
pub use feedback::{Feedback, FeedbackKind};
pub use grid::{GridCell, MonthGrid};
pub use load::{CalendarView, LoadGeneration};
pub use oauth::{authorization_url, encode_state, OAuthState};
pub use payload::{decode_html_entities, normalize_payload};
pub use volunteer::{parse_volunteer_entry, VolunteerEntry};
