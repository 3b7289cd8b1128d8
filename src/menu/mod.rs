//! Popup selector backends.
//!
//! The only backend shipped is [`dmenu::DmenuMenu`]; anything speaking
//! dmenu's stdin/stdout protocol can be configured in its place.

pub mod dmenu;
