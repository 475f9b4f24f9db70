//! Neo-Timeline: an interactive calendar and timeline scheduler.
//!
//! The library surface exists so the state layer (store, view state,
//! grid math, gesture controllers, snapshot codec) is testable without
//! a window; the binary in `main.rs` wires it into an eframe app.

pub mod app;
pub mod config;
pub mod interact;
pub mod io;
pub mod model;
pub mod ui;
