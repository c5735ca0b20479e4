pub mod agenda;
pub mod config;
pub mod conflicts;
pub mod deadlines;
pub mod list;
pub mod month;
