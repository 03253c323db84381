//! Owned, null-terminated rune sequences with a small-buffer optimization.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use tamarix_common::{Result, error::Error};

use crate::comparison::compare_runes;
use crate::conversion;
use crate::rune::{CodeUnit, Rune};

/// Number of code units (excluding the terminator) a buffer can hold without
/// heap allocation.
pub const INLINE_CAPACITY: usize = 127;

/// Backing storage for a [`RuneBuffer`].
///
/// An explicit sum type rather than a pointer that sometimes aliases the
/// inline array: once a buffer migrates to `Heap` there is no stale view of
/// the inline storage left to misread, and the migration is one-way.
#[derive(Debug, Clone)]
enum Storage<U: CodeUnit> {
    /// Short sequences live directly in the owning structure. The slot at
    /// `len` always holds the null terminator.
    Inline {
        units: [U; INLINE_CAPACITY + 1],
        len: usize,
    },
    /// Longer sequences own a heap allocation sized exactly to the logical
    /// length plus the terminator.
    Heap { units: Box<[U]> },
}

/// An owned sequence of fixed-width code units, used as a trie edge/node key.
///
/// The sequence is always terminated by a null rune, which is not part of the
/// logical length. Buffers up to [`INLINE_CAPACITY`] units are stored inline;
/// longer ones are heap-allocated. Appending past the inline capacity
/// migrates the content to the heap, and a heap buffer never returns to
/// inline storage.
///
/// Folding (case canonicalization plus diacritic stripping) is applied once,
/// at construction, so that two inputs differing only by case or accents
/// produce identical buffers. A folded buffer re-encodes to the canonical
/// text, not to the original input.
#[derive(Debug, Clone)]
pub struct RuneBuffer<U: CodeUnit = Rune> {
    storage: Storage<U>,
}

impl<U: CodeUnit> RuneBuffer<U> {
    /// Creates an empty inline buffer.
    pub fn new() -> RuneBuffer<U> {
        RuneBuffer {
            storage: Storage::Inline {
                units: [U::ZERO; INLINE_CAPACITY + 1],
                len: 0,
            },
        }
    }

    /// Builds a buffer from UTF-8 bytes, optionally folding every decoded
    /// code point.
    ///
    /// Invalid UTF-8 fails the construction; no partially decoded buffer is
    /// produced. Use [`from_str`] when the input is already validated text.
    ///
    /// [`from_str`]: RuneBuffer::from_str
    pub fn from_utf8(bytes: &[u8], fold: bool) -> Result<RuneBuffer<U>> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            Error::invalid_arg("bytes", format!("invalid utf-8 at byte {}", e.valid_up_to()))
        })?;
        Ok(RuneBuffer::from_str(text, fold))
    }

    /// Builds a buffer from a string, optionally folding every code point.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str, fold: bool) -> RuneBuffer<U> {
        let len = text.chars().count();
        if len <= INLINE_CAPACITY {
            let mut units = [U::ZERO; INLINE_CAPACITY + 1];
            for (slot, ch) in units.iter_mut().zip(text.chars()) {
                *slot = U::from_char_lossy(if fold { crate::fold::fold_char(ch) } else { ch });
            }
            RuneBuffer {
                storage: Storage::Inline { units, len },
            }
        } else {
            let mut units = Vec::with_capacity(len + 1);
            conversion::utf8_to_units(text, fold, &mut units);
            units.push(U::ZERO);
            RuneBuffer {
                storage: Storage::Heap {
                    units: units.into_boxed_slice(),
                },
            }
        }
    }

    /// Logical length in code units, excluding the terminator.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline { len, .. } => *len,
            Storage::Heap { units } => units.len() - 1,
        }
    }

    /// True when the logical length is zero, regardless of storage mode.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of code units the current storage can hold without
    /// reallocating, excluding the terminator slot.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline { .. } => INLINE_CAPACITY,
            Storage::Heap { units } => units.len() - 1,
        }
    }

    /// True while the content still lives in the inline array.
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline { .. })
    }

    /// The stored units, without the terminator.
    pub fn units(&self) -> &[U] {
        match &self.storage {
            Storage::Inline { units, len } => &units[..*len],
            Storage::Heap { units } => &units[..units.len() - 1],
        }
    }

    /// The stored units including the trailing null rune.
    pub fn units_with_terminator(&self) -> &[U] {
        match &self.storage {
            Storage::Inline { units, len } => &units[..*len + 1],
            Storage::Heap { units } => units,
        }
    }

    /// Appends another buffer's code units.
    ///
    /// If the combined length no longer fits the inline array, the content
    /// migrates to an exactly-sized heap allocation and the buffer stays
    /// heap-owned from that point on.
    pub fn append(&mut self, other: &RuneBuffer<U>) {
        let combined = self.len() + other.len();
        if let Storage::Inline { units, len } = &mut self.storage {
            if combined <= INLINE_CAPACITY {
                units[*len..combined].copy_from_slice(other.units());
                units[combined] = U::ZERO;
                *len = combined;
                return;
            }
        }
        let mut merged = Vec::with_capacity(combined + 1);
        merged.extend_from_slice(self.units());
        merged.extend_from_slice(other.units());
        merged.push(U::ZERO);
        self.storage = Storage::Heap {
            units: merged.into_boxed_slice(),
        };
    }

    /// Lexicographic comparison by numeric code-unit value; a strict prefix
    /// orders before the longer buffer.
    pub fn compare(&self, other: &RuneBuffer<U>) -> Ordering {
        compare_runes(self.units(), other.units())
    }

    /// Re-encodes the stored units as UTF-8.
    ///
    /// Lossless for content that was never folded and fits the unit width;
    /// folded buffers re-encode to their canonical form, and units that do
    /// not widen to a valid code point become U+FFFD.
    pub fn to_utf8(&self) -> Vec<u8> {
        let mut target = Vec::with_capacity(self.len());
        U::units_to_utf8_lossy(self.units(), &mut target);
        target
    }

    /// [`to_utf8`] as an owned string.
    ///
    /// [`to_utf8`]: RuneBuffer::to_utf8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_utf8()).into_owned()
    }
}

impl<U: CodeUnit> Default for RuneBuffer<U> {
    fn default() -> RuneBuffer<U> {
        RuneBuffer::new()
    }
}

// Equality and ordering go through `units()`: two buffers with the same
// content compare equal even when their storage modes differ.

impl<U: CodeUnit> PartialEq for RuneBuffer<U> {
    fn eq(&self, other: &RuneBuffer<U>) -> bool {
        self.units() == other.units()
    }
}

impl<U: CodeUnit> Eq for RuneBuffer<U> {}

impl<U: CodeUnit> PartialOrd for RuneBuffer<U> {
    fn partial_cmp(&self, other: &RuneBuffer<U>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<U: CodeUnit> Ord for RuneBuffer<U> {
    fn cmp(&self, other: &RuneBuffer<U>) -> Ordering {
        self.compare(other)
    }
}

impl<U: CodeUnit> Hash for RuneBuffer<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.units().hash(state);
    }
}
