//! UI Panels
//!
//! Each panel is a function that takes &mut Ui plus read-only state.
//! Panels render UI and return actions; they do NOT mutate state - the
//! view controller does.

mod address;
mod form;
mod info;
mod side_menu;

pub use address::address_panel;
pub use form::{form_panel, FieldEdit};
pub use info::{info_panel, summary_rows, SummaryRow};
pub use side_menu::side_menu;
