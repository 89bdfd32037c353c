pub mod calendar;
pub mod feedback_banner;
pub mod month_table;
pub mod placeholder;
