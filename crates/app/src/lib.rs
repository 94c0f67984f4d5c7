#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod planner;
mod settings;

pub use planner::*;
pub use settings::*;
