//! jotlist - Terminal Item List Library
//!
//! A small terminal application for jotting down title/note items.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
