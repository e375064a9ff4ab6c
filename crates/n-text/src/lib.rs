//! # n-text: Text access for n-select
//!
//! Everything the text-object engine reads through lives here:
//!
//! - **[`text`]**: the [`Text`] capability trait and the byte/char [`Iter`]
//! - **[`buffer`]**: `Buffer` wrapping a rope, with `line:col` conversion
//! - **[`position`]**: `Position` (line, col), 0-indexed
//! - **[`class`]**: single-byte classifiers (whitespace, word, number)
//! - **[`motion`]**: line, sentence, paragraph, function, bracket and word motions
//! - **[`search`]**: literal substring search in both directions
//! - **[`number`]**: `strtoll`-style integer literal parsing

pub mod buffer;
pub mod class;
pub mod motion;
pub mod number;
pub mod position;
pub mod search;
pub mod text;

pub use buffer::Buffer;
pub use position::Position;
pub use text::{Iter, Text};
