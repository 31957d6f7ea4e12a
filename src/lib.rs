//! Validation core for the Karel robot programming language.

pub mod checking;
pub mod language;
mod regex;
