//! Utility functions shared by command handlers.

use thiserror::Error;

/// Errors raised while decoding backslash escapes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnescapeError {
    /// The input ends with a lone backslash
    #[error("trailing \\ in string")]
    TrailingBackslash,
    /// A `\x` escape is not followed by two hex digits, at the given byte offset
    #[error("invalid \\x escape at position {0}")]
    InvalidHexEscape(usize),
}

/// Decodes backslash escapes into raw bytes.
///
/// Supports the usual single character escapes (`\n`, `\t`, `\\`, ...),
/// `\xHH` hex escapes and one to three digit octal escapes. Unknown escapes
/// are kept verbatim, backslash included.
///
/// # Errors
///
/// Returns an [`UnescapeError`] for a trailing backslash or a malformed `\x`
/// escape.
///
/// # Examples
///
/// ```
/// # use chatcmd::utils::unescape_bytes;
/// assert_eq!(unescape_bytes(r"a\x00\n").unwrap(), vec![b'a', 0, b'\n']);
/// ```
pub fn unescape_bytes(input: &str) -> Result<Vec<u8>, UnescapeError> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }

        let Some(&escape) = bytes.get(i + 1) else {
            return Err(UnescapeError::TrailingBackslash);
        };
        i += 2;

        match escape {
            // Escaped line break is a continuation
            b'\n' => {}
            b'\\' | b'\'' | b'"' => decoded.push(escape),
            b'a' => decoded.push(0x07),
            b'b' => decoded.push(0x08),
            b'f' => decoded.push(0x0c),
            b'n' => decoded.push(b'\n'),
            b'r' => decoded.push(b'\r'),
            b't' => decoded.push(b'\t'),
            b'v' => decoded.push(0x0b),
            b'0'..=b'7' => {
                let mut value = u32::from(escape - b'0');
                let mut digits = 1;
                while digits < 3 {
                    let Some(&digit) = bytes.get(i).filter(|digit| (b'0'..=b'7').contains(*digit))
                    else {
                        break;
                    };
                    value = value * 8 + u32::from(digit - b'0');
                    i += 1;
                    digits += 1;
                }
                decoded.push((value & 0xff) as u8);
            }
            b'x' => {
                let hex = bytes
                    .get(i..i + 2)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match hex {
                    Some(value) => {
                        decoded.push(value);
                        i += 2;
                    }
                    None => return Err(UnescapeError::InvalidHexEscape(i - 2)),
                }
            }
            _ => {
                decoded.push(b'\\');
                decoded.push(escape);
            }
        }
    }

    Ok(decoded)
}
