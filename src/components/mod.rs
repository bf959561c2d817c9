//! UI Components
//!
//! Leptos components for the records page.

mod record_form;
mod record_table;

pub use record_form::RecordForm;
pub use record_table::RecordTable;
