//! Small reusable render helpers.

pub mod slider;
