//! Application layer managing state and the screen flow.
//!
//! This module coordinates between the domain layer and presentation
//! layer, owning the item list, the navigation state, and the form's
//! editing state.

pub mod navigation;
pub mod state;

pub use navigation::*;
pub use state::*;
