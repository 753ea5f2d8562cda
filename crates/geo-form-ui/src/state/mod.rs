//! Application State Module
//!
//! The view controller owns the user record, active view, marker and lookup
//! bookkeeping. Panels read from it and return actions; only its methods
//! mutate.

pub mod types;
pub mod view_controller;

pub use types::*;
pub use view_controller::ViewController;
