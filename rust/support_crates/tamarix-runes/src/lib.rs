//! Fixed-width rune encoding for trie term keys.
//!
//! The trie works with 16/32 bit "runes", i.e. fixed width unicode code units.
//! 16 bit should be fine for most use cases; enable the `wide-runes` feature
//! to switch the whole crate to 32-bit units.
//!
//! The crate provides:
//!
//! - [`Rune`] and the [`CodeUnit`] abstraction over the two unit widths.
//! - [`RuneBuffer`], an owned, null-terminated rune sequence with a small-buffer
//!   optimization, used as the trie's edge/node key type.
//! - Folding ([`fold_char`], [`fold_rune`]) that canonicalizes case and strips
//!   diacritics, giving the trie case/accent-insensitive matching.
//! - UTF-8 conversion in both directions ([`conversion`]).

pub mod buffer;
pub mod comparison;
pub mod conversion;
pub mod fold;
pub mod rune;

pub use buffer::{INLINE_CAPACITY, RuneBuffer};
pub use comparison::{compare_runes, runes_start_with};
pub use fold::{fold_char, fold_rune};
pub use rune::{CodeUnit, Rune};
