//! Byte-to-codepoint decoding with cached random access.
//!
//! Input arrives as raw bytes that are *usually* UTF-8. Decoding happens once,
//! on first access, and never fails: a malformed leading byte is replaced by a
//! single ASCII space and recorded as a [`DecodeError`] diagnostic, then
//! decoding resumes at the next byte.

use std::cell::OnceCell;

use tracing::warn;

/// Codepoint substituted for each malformed leading byte.
pub const PLACEHOLDER: char = ' ';

/// A malformed leading byte encountered while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot decode UTF-8 char: 0x{byte:x} at byte offset {offset}")]
pub struct DecodeError {
    pub byte: u8,
    pub offset: usize,
}

#[derive(Debug, Default)]
struct Decoded {
    chars: Vec<char>,
    errors: Vec<DecodeError>,
}

/// A byte string decoded lazily into codepoints.
#[derive(Debug)]
pub struct Utf8Text {
    bytes: Vec<u8>,
    decoded: OnceCell<Decoded>,
}

impl Utf8Text {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            decoded: OnceCell::new(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// All codepoints, decoding on first call.
    pub fn chars(&self) -> &[char] {
        &self.decoded().chars
    }

    /// Number of codepoints (not bytes).
    pub fn len(&self) -> usize {
        self.chars().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars().is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<char> {
        self.chars().get(idx).copied()
    }

    /// Diagnostics produced by decoding (empty for valid UTF-8).
    pub fn diagnostics(&self) -> &[DecodeError] {
        &self.decoded().errors
    }

    fn decoded(&self) -> &Decoded {
        self.decoded.get_or_init(|| decode(&self.bytes))
    }
}

fn decode(bytes: &[u8]) -> Decoded {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Decoded {
            chars: s.chars().collect(),
            errors: Vec::new(),
        };
    }

    let mut out = Decoded {
        chars: Vec::with_capacity(bytes.len()),
        errors: Vec::new(),
    };
    let mut offset = 0;
    while offset < bytes.len() {
        match next_char(&bytes[offset..]) {
            Some((c, len)) => {
                out.chars.push(c);
                offset += len;
            }
            None => {
                let err = DecodeError {
                    byte: bytes[offset],
                    offset,
                };
                warn!("{err}");
                out.errors.push(err);
                out.chars.push(PLACEHOLDER);
                offset += 1;
            }
        }
    }
    out
}

/// Decode one codepoint from the front of `bytes`, returning it with its
/// encoded length. `None` means the leading byte does not start a well-formed
/// sequence (bad lead, truncated tail, bad continuation, overlong, surrogate).
fn next_char(bytes: &[u8]) -> Option<(char, usize)> {
    let len = match bytes[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return None,
    };
    let seq = bytes.get(..len)?;
    let c = std::str::from_utf8(seq).ok()?.chars().next()?;
    Some((c, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8() {
        let text = Utf8Text::new("一百ab".as_bytes());
        assert_eq!(text.len(), 4);
        assert_eq!(text.get(0), Some('一'));
        assert_eq!(text.get(3), Some('b'));
        assert_eq!(text.get(4), None);
        assert!(text.diagnostics().is_empty());
    }

    #[test]
    fn test_empty() {
        let text = Utf8Text::new(Vec::new());
        assert!(text.is_empty());
        assert!(text.diagnostics().is_empty());
    }

    #[test]
    fn test_invalid_lead_byte_substituted() {
        let mut bytes = b"a".to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice("十".as_bytes());
        let text = Utf8Text::new(bytes);
        assert_eq!(text.chars(), &['a', PLACEHOLDER, '十']);
        assert_eq!(
            text.diagnostics(),
            &[DecodeError {
                byte: 0xFF,
                offset: 1
            }]
        );
    }

    #[test]
    fn test_truncated_sequence() {
        // First two bytes of "十" (E5 8D 81), then ASCII.
        let bytes = vec![0xE5, 0x8D, b'x'];
        let text = Utf8Text::new(bytes);
        // Lead byte and stray continuation each become one placeholder.
        assert_eq!(text.chars(), &[PLACEHOLDER, PLACEHOLDER, 'x']);
        assert_eq!(text.diagnostics().len(), 2);
        assert_eq!(text.diagnostics()[1].offset, 1);
    }

    #[test]
    fn test_surrogate_rejected() {
        // CESU-style encoded surrogate U+D800.
        let text = Utf8Text::new(vec![0xED, 0xA0, 0x80]);
        assert_eq!(text.len(), 3);
        assert!(text.chars().iter().all(|&c| c == PLACEHOLDER));
    }

    #[test]
    fn test_decodes_once() {
        let text = Utf8Text::new("五".as_bytes());
        let first = text.chars().as_ptr();
        let second = text.chars().as_ptr();
        assert_eq!(first, second);
    }
}
