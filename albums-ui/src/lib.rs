//! albums-ui - Stores and view components for the albums listing
//!
//! Contains the listing store and pure view components. Views take state and
//! callbacks as props and never load data or read files themselves, so the
//! web launcher and any other shell can drive them.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
