//! Input handling module

pub mod places;

pub use places::{load_places, parse_places};
