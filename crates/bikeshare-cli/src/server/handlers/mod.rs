//! API request handlers.

mod coverage;
mod views;

pub use coverage::*;
pub use views::*;
