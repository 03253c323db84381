use std::fmt::Debug;
use std::hash::Hash;

use tamarix_common::Result;

use crate::conversion;

/// A fixed-width code unit representing one Unicode code point (or a lossy
/// approximation of one) used as the trie's alphabet symbol.
///
/// Implemented for `u16` and `u32`. The width in effect for the rest of the
/// system is chosen once, at build time, through the [`Rune`] alias.
pub trait CodeUnit:
    Copy + Default + Eq + Ord + Hash + Debug + Send + Sync + 'static
{
    /// The null rune used as a sequence terminator.
    const ZERO: Self;

    /// Converts a code point into a single unit. Code points that do not fit
    /// the unit width are truncated (16-bit mode only); the mapping is lossy
    /// by design, never a failure.
    fn from_char_lossy(ch: char) -> Self;

    /// Widens the unit back to a code point value. The result is not
    /// guaranteed to be a valid scalar value in 16-bit mode.
    fn to_u32(self) -> u32;

    /// Re-encodes a unit sequence as UTF-8, replacing un-decodable units with
    /// U+FFFD.
    fn units_to_utf8_lossy(units: &[Self], target: &mut Vec<u8>);

    /// Re-encodes a unit sequence as UTF-8, failing on un-decodable units.
    fn units_to_utf8(units: &[Self], target: &mut Vec<u8>) -> Result<()>;
}

impl CodeUnit for u16 {
    const ZERO: u16 = 0;

    #[inline]
    fn from_char_lossy(ch: char) -> u16 {
        ch as u32 as u16
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    fn units_to_utf8_lossy(units: &[u16], target: &mut Vec<u8>) {
        let _ = conversion::utf16_units_to_utf8::<true, _>(units.iter().copied(), target);
    }

    fn units_to_utf8(units: &[u16], target: &mut Vec<u8>) -> Result<()> {
        conversion::utf16_units_to_utf8::<false, _>(units.iter().copied(), target)
    }
}

impl CodeUnit for u32 {
    const ZERO: u32 = 0;

    #[inline]
    fn from_char_lossy(ch: char) -> u32 {
        ch as u32
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    fn units_to_utf8_lossy(units: &[u32], target: &mut Vec<u8>) {
        let _ = conversion::utf32_units_to_utf8::<true, _>(units.iter().copied(), target);
    }

    fn units_to_utf8(units: &[u32], target: &mut Vec<u8>) -> Result<()> {
        conversion::utf32_units_to_utf8::<false, _>(units.iter().copied(), target)
    }
}

/// The code unit width in effect for this build.
#[cfg(not(feature = "wide-runes"))]
pub type Rune = u16;

/// The code unit width in effect for this build.
#[cfg(feature = "wide-runes")]
pub type Rune = u32;
