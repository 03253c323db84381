//! Document field schema surface consumed by the indexing pipeline.
//!
//! A field carries a bitset of types (a field may combine several), a bitset
//! of behavioral options, per-type configuration, and a per-type-class id
//! used to build a bitmask over all fields. The schema is read-only for the
//! index core; the only logic exposed here is the pure [`value_kind`] mapping
//! that decides whether a field's values are orderable and therefore eligible
//! for sort-by-value storage.

use bitflags::bitflags;

use tamarix_common::{Result, error::Error};

bitflags! {
    /// Field type bits. Each type is a distinct power of two so a field can
    /// combine types and the set can be filtered with a mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldTypes: u8 {
        const FULLTEXT = 0x01;
        const NUMERIC = 0x02;
        const GEO = 0x04;
        const TAG = 0x08;
    }
}

bitflags! {
    /// Behavioral field options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldOptions: u8 {
        const SORTABLE = 0x01;
        const NO_STEMMING = 0x02;
        const NOT_INDEXABLE = 0x04;
        const PHONETICS = 0x08;
        const DYNAMIC = 0x10;
    }
}

bitflags! {
    /// Options for tag fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagOptions: u16 {
        const CASE_SENSITIVE = 0x01;
        const TRIM_SPACE = 0x02;
        const REMOVE_ACCENTS = 0x04;
    }
}

/// Number of distinct field types.
pub const FIELD_TYPE_COUNT: usize = 4;

pub const DEFAULT_TAG_SEPARATOR: char = ',';
pub const DEFAULT_TAG_OPTIONS: TagOptions =
    TagOptions::TRIM_SPACE.union(TagOptions::REMOVE_ACCENTS);
pub const DEFAULT_TEXT_WEIGHT: f64 = 1.0;

/// The comparable-value kind a field's values map to when deciding whether
/// the field participates in sort-by-value storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    String,
    NotOrderable,
}

/// Maps field types to their comparable-value kind: numeric fields sort as
/// numbers, full-text and tag fields as strings, and geo fields are never
/// used as sort keys.
pub fn value_kind(types: FieldTypes) -> ValueKind {
    if types.contains(FieldTypes::NUMERIC) {
        ValueKind::Number
    } else if types.intersects(FieldTypes::FULLTEXT | FieldTypes::TAG) {
        ValueKind::String
    } else {
        ValueKind::NotOrderable
    }
}

/// Dense position of a single field type bit, usable as an index into
/// per-type arrays.
pub fn type_to_position(t: FieldTypes) -> Option<usize> {
    if t == FieldTypes::FULLTEXT {
        Some(0)
    } else if t == FieldTypes::NUMERIC {
        Some(1)
    } else if t == FieldTypes::GEO {
        Some(2)
    } else if t == FieldTypes::TAG {
        Some(3)
    } else {
        None
    }
}

/// Inverse of [`type_to_position`].
pub fn position_to_type(position: usize) -> FieldTypes {
    FieldTypes::from_bits_truncate(1 << position)
}

/// Parses a single field type from its schema keyword.
impl TryFrom<&str> for FieldTypes {
    type Error = Error;

    fn try_from(name: &str) -> Result<FieldTypes> {
        match name {
            "TEXT" => Ok(FieldTypes::FULLTEXT),
            "NUMERIC" => Ok(FieldTypes::NUMERIC),
            "GEO" => Ok(FieldTypes::GEO),
            "TAG" => Ok(FieldTypes::TAG),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized field type: {name}"),
            )),
        }
    }
}

/// A single field in the document schema.
///
/// Each full-text field has a unique `text_id` that is a power-of-two
/// exponent, so sets of fields can be filtered by a bit mask.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,

    pub types: FieldTypes,
    pub options: FieldOptions,

    /// Slot in the sort-by-value array, when the field is sortable.
    pub sort_index: Option<u16>,

    /// Unique field index, regardless of type.
    pub index: u16,

    pub tag_options: TagOptions,
    pub tag_separator: char,

    /// Weight in relevance/frequency calculations for full-text fields.
    pub weight: f64,

    /// Id identifying a full-text field within the field mask.
    pub text_id: u16,
}

impl FieldDescriptor {
    /// Creates an untyped descriptor; call [`initialize`] to assign types.
    ///
    /// [`initialize`]: FieldDescriptor::initialize
    pub fn new(index: u16, name: impl Into<String>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.into(),
            types: FieldTypes::empty(),
            options: FieldOptions::empty(),
            sort_index: None,
            index,
            tag_options: TagOptions::empty(),
            tag_separator: DEFAULT_TAG_SEPARATOR,
            weight: DEFAULT_TEXT_WEIGHT,
            text_id: 0,
        }
    }

    /// Adds the given types to the field and applies their defaults.
    pub fn initialize(&mut self, types: FieldTypes) {
        self.types |= types;
        if types.contains(FieldTypes::TAG) {
            self.tag_options = DEFAULT_TAG_OPTIONS;
            self.tag_separator = DEFAULT_TAG_SEPARATOR;
        }
        if types.contains(FieldTypes::FULLTEXT) {
            self.weight = DEFAULT_TEXT_WEIGHT;
        }
    }

    /// Marks the field sortable and records its sort-array slot.
    pub fn set_sortable(&mut self, slot: u16) {
        self.options |= FieldOptions::SORTABLE;
        self.sort_index = Some(slot);
    }

    pub fn is_sortable(&self) -> bool {
        self.options.contains(FieldOptions::SORTABLE)
    }

    pub fn is_no_stemming(&self) -> bool {
        self.options.contains(FieldOptions::NO_STEMMING)
    }

    pub fn is_phonetic(&self) -> bool {
        self.options.contains(FieldOptions::PHONETICS)
    }

    pub fn is_dynamic(&self) -> bool {
        self.options.contains(FieldOptions::DYNAMIC)
    }

    pub fn is_indexable(&self) -> bool {
        !self.options.contains(FieldOptions::NOT_INDEXABLE)
    }

    pub fn has_type(&self, t: FieldTypes) -> bool {
        self.types.intersects(t)
    }

    /// The field's bit within a mask over all full-text fields.
    pub fn field_bit(&self) -> u128 {
        1u128 << self.text_id
    }

    /// The comparable-value kind of this field's values.
    pub fn value_kind(&self) -> ValueKind {
        value_kind(self.types)
    }
}
