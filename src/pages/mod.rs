//! Page modules for route-level screens.
//!
//! Each page is a mountable component referenced from the route table by
//! identity; the table never owns the component.

pub mod not_found;
pub mod vehicles;
