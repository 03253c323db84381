//! Term-encoding and ordered-lookup substrate for the tamarix prefix trie.
//!
//! This crate ties together the two leaf components the trie is built on and
//! adds the document schema surface the indexing pipeline consumes:
//!
//! 1. **Term encoding**: UTF-8 terms become fixed-width rune keys
//!    ([`RuneBuffer`]), optionally folded so that matching is case and
//!    diacritic insensitive.
//! 2. **Ordered lookup**: the trie finds a child's position among siblings
//!    sorted by rune value through the [`locate_ge`] / [`locate_le`] /
//!    [`locate_eq`] family, parameterized by a comparator derived from
//!    [`RuneBuffer::compare`]. The same family works over any sorted,
//!    duplicate-free slice, e.g. sorted numeric or tag value arrays.
//! 3. **Field schema**: [`schema`] describes document fields (type and
//!    option bitsets, tag configuration, relevance weight) and the pure
//!    [`schema::value_kind`] mapping that decides whether a field's values
//!    participate in sort-by-value storage.
//!
//! The two leaf components do not depend on each other's internals; rune
//! comparison is merely one valid comparator instance for the locators.

pub mod schema;

pub use schema::{
    FIELD_TYPE_COUNT, FieldDescriptor, FieldOptions, FieldTypes, TagOptions, ValueKind, value_kind,
};
pub use tamarix_collections::{locate_eq, locate_ge, locate_le};
pub use tamarix_runes::{
    CodeUnit, INLINE_CAPACITY, Rune, RuneBuffer, compare_runes, fold_char, fold_rune,
};
