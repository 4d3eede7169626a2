#![warn(clippy::all)]

mod error;
mod field;
mod gui;
mod rule;

pub use error::Error;
pub use field::{pixel_to_cell, LifeField};
pub use gui::{App, Config};
pub use rule::Rule;
