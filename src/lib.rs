//! # Animals
//!
//! A small family of animals that share one way of speaking.
//!
//! ## Layout
//! - [`animal`]: the shared state record, the line format and the [`Animal`] trait
//! - [`cat`]: the `Cat` and `PlayfulCat` variants
//! - [`error`]: the crate error type
//! - [`logging`]: stderr diagnostics for the binary
//!
//! ## Usage
//!
//! ```
//! use animals::{Animal, Cat, PlayfulCat};
//!
//! let cat = Cat::new();
//! let playful = PlayfulCat::new();
//! assert_eq!(cat.line(), "Meow I like to crawl.");
//! assert_eq!(playful.line(), "Meow I like to play.");
//! ```
//!
//! Run the demo with: `cargo run --bin animals`

pub mod animal;
pub mod cat;
pub mod error;
pub mod logging;

use std::io::Write;

pub use animal::{render, Animal, AnimalState};
pub use cat::{Cat, PlayfulCat};
pub use error::{AnimalError, Result};

/// The fixed demo sequence: one `Cat`, one `PlayfulCat`, each ticks once into `out`.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let cat = Cat::new();
    let playful_cat = PlayfulCat::new();

    cat.tick_into(out)?;
    playful_cat.tick_into(out)?;
    out.flush()?;
    Ok(())
}
