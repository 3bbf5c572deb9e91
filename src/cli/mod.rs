//! Presentation layer for tallydb.
//!
//! Everything user-facing lives here: argument parsing, colors, output
//! formatting, and the interactive menu. The core database never touches
//! the console.

pub mod args;
pub mod colors;
pub mod menu;
pub mod output;

pub use args::CliArgs;
pub use colors::Colors;
pub use menu::View;
