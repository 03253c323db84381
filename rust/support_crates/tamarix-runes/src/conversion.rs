//! UTF-8 to fixed-width unit conversion and back.
//!
//! The unit-to-UTF-8 functions come in a `LOSSY` and a strict flavor. The
//! lossy flavor substitutes U+FFFD for un-decodable units; the strict flavor
//! reports them as an error and is only meaningful for content that was never
//! folded or width-truncated.

use tamarix_common::{Result, error::Error};

use crate::fold::fold_char;
use crate::rune::CodeUnit;

const REPLACEMENT_CHAR_BYTES: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Decodes `text` into fixed-width units appended to `target`, optionally
/// folding each code point first.
pub fn utf8_to_units<U: CodeUnit>(text: &str, fold: bool, target: &mut Vec<U>) {
    if fold {
        target.extend(text.chars().map(|ch| U::from_char_lossy(fold_char(ch))));
    } else {
        target.extend(text.chars().map(U::from_char_lossy));
    }
}

/// Decodes `text` into a caller-provided unit buffer, stopping when the
/// buffer is full. Returns the number of units written. No folding is
/// applied.
pub fn decode_utf8_into<U: CodeUnit>(text: &str, target: &mut [U]) -> usize {
    let mut written = 0;
    for (slot, ch) in target.iter_mut().zip(text.chars()) {
        *slot = U::from_char_lossy(ch);
        written += 1;
    }
    written
}

pub fn utf16_units_to_utf8<const LOSSY: bool, I: Iterator<Item = u16>>(
    input: I,
    target: &mut Vec<u8>,
) -> Result<()> {
    let decoded_chars = std::char::decode_utf16(input);
    let mut dst = [0u8; 4];
    if LOSSY {
        for ch in decoded_chars {
            if let Ok(ch) = ch {
                target.extend(ch.encode_utf8(&mut dst).as_bytes());
            } else {
                target.extend(&REPLACEMENT_CHAR_BYTES);
            }
        }
    } else {
        for ch in decoded_chars {
            let ch = ch.map_err(|_| Error::invalid_format("utf-16 unit sequence"))?;
            target.extend(ch.encode_utf8(&mut dst).as_bytes());
        }
    }
    Ok(())
}

pub fn utf32_units_to_utf8<const LOSSY: bool, I: Iterator<Item = u32>>(
    input: I,
    target: &mut Vec<u8>,
) -> Result<()> {
    let mut dst = [0u8; 4];
    if LOSSY {
        let decoded_chars = widestring::decode_utf32_lossy(input);
        for ch in decoded_chars {
            target.extend(ch.encode_utf8(&mut dst).as_bytes());
        }
    } else {
        let decoded_chars = widestring::decode_utf32(input);
        for ch in decoded_chars {
            let ch = ch.map_err(|_| Error::invalid_format("utf-32 unit sequence"))?;
            target.extend(ch.encode_utf8(&mut dst).as_bytes());
        }
    };
    Ok(())
}
