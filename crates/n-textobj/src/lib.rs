//! # n-textobj: Text objects for n-select
//!
//! A text object is the span of text implied by a cursor offset and a kind
//! of structure: a word, a bracketed group, a quoted string, a sentence, a
//! line, a function, a number, the whole buffer. Combined with an operator
//! they form Vim's composable grammar:
//!
//! ```text
//! operator + text-object = action
//! d        + iw          = delete inner word
//! c        + i"          = change inside quotes
//! y        + a(          = yank around parentheses
//! ```
//!
//! Every object function has the shape `(text, offset) -> Range` and is
//! generic over [`n_text::Text`]. A query never fails loudly: when no object
//! exists at the offset the result is [`Range::EMPTY`].
//!
//! - **[`range`]**: half-open byte ranges, linewise and inner transforms
//! - **[`word`]**: word and long-word objects, inner and outer
//! - **[`delimiter`]**: bracket and quote pairs
//! - **[`structure`]**: line, sentence, paragraph, function, entire buffer
//! - **[`search`]**: locate a literal only where it forms a whole word
//! - **[`number`]**: character runs and integer literals
//! - **[`kind`]**: every object addressable by its Vim name

pub mod delimiter;
pub mod kind;
pub mod number;
pub mod range;
pub mod search;
pub mod structure;
pub mod word;

pub use delimiter::Delimiter;
pub use kind::{ObjectKind, UnknownObject};
pub use range::Range;
