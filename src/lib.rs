//! # hangar
//!
//! Leptos + WASM bootstrap layer for the vehicle-data browser: it builds
//! the UI-plugin configuration (component registry + breakpoint table),
//! builds the route table and router, and mounts the assembled application
//! onto the host page in one fixed-order, single-shot sequence.
//!
//! The composition contract lives in [`bootstrap`]; the two configuration
//! leaves live in [`ui`] and [`routing`]. Pages are thin route-level views.

pub mod app;
pub mod bootstrap;
pub mod error;
pub mod pages;
pub mod routing;
pub mod ui;
pub mod util;
