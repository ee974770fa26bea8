use std::fmt::Formatter;

/// Writes a byte string in the literal `( ... )` form, escaping what needs escaping.
///
/// Hex-encoded strings from the source are not distinguished: both forms are the same value.
pub(crate) fn format_string(f: &mut Formatter<'_>, s: &[u8]) -> std::fmt::Result {
    f.write_str("(")?;
    for c in s {
        match c {
            b'\x0a' => f.write_str("\\n"),
            b'\x0d' => f.write_str("\\r"),
            b'\x09' => f.write_str("\\t"),
            b'\x08' => f.write_str("\\b"),
            b'\x0c' => f.write_str("\\f"),
            b'(' => f.write_str("\\("),
            b')' => f.write_str("\\)"),
            b'\\' => f.write_str("\\\\"),
            b'\x20' ..= b'\x7E' => write!(f, "{}", *c as char),
            _ => write!(f, "\\{c:03o}")
        }?
    }
    f.write_str(")")
}

const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Decodes a PDF text string (e.g. a field's `/T`).
///
/// Strings starting with the UTF-16BE byte order mark are decoded as such, anything else is
/// taken byte by byte. NB that PDFDocEncoding differs from Latin-1 in the 0x80..0xA0 range; those
/// bytes are mapped as Latin-1 here.
pub fn decode_text_string(bytes: &[u8]) -> String {
    match bytes.strip_prefix(&UTF16BE_BOM) {
        Some(rest) => {
            let units = rest.chunks(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
                .collect::<Vec<_>>();
            String::from_utf16_lossy(&units)
        },
        None => bytes.iter().map(|&c| char::from(c)).collect()
    }
}

/// Encodes a string as a PDF text string: single bytes when every character fits into one,
/// UTF-16BE with a byte order mark otherwise.
pub fn encode_text_string(s: &str) -> Vec<u8> {
    if s.is_ascii() {
        s.as_bytes().to_vec()
    } else {
        UTF16BE_BOM.into_iter()
            .chain(s.encode_utf16().flat_map(u16::to_be_bytes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_string() {
        assert_eq!(decode_text_string(b"PersonalData"), "PersonalData");
        assert_eq!(decode_text_string(b"caf\xe9"), "caf\u{e9}");
        assert_eq!(decode_text_string(b"\xfe\xff\x00A\x00\xe9"), "A\u{e9}");
        assert_eq!(encode_text_string("name"), b"name");
        assert_eq!(encode_text_string("\u{10d}"), b"\xfe\xff\x01\x0d");
        assert_eq!(decode_text_string(&encode_text_string("\u{10d}as")), "\u{10d}as");
    }
}
