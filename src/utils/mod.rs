//! # Utilities Module
//!
//! Small helpers shared by the screens.

pub mod text;

pub use text::*;
