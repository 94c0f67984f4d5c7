#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod draft;
mod error;
mod exercise;
mod name;
mod stats;
mod store;
mod workout;

pub use draft::*;
pub use error::*;
pub use exercise::*;
pub use name::*;
pub use stats::*;
pub use store::*;
pub use workout::*;
