//! Input byte decoding.
//!
//! Uploaded tables arrive as raw bytes with no declared encoding. The
//! decoding policy mirrors common spreadsheet exports: honor a UTF-8 BOM,
//! otherwise try strict UTF-8, and fall back to Shift-JIS (in practice
//! cp932) when the bytes are not valid UTF-8.

use encoding_rs::SHIFT_JIS;

const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

/// Decode raw bytes into text, returning the decoded string and the name
/// of the encoding that was used.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static str) {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), "utf-8"),
        Err(_) => {
            let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
            if had_errors {
                tracing::warn!("input is neither valid UTF-8 nor clean Shift-JIS; undecodable bytes were replaced");
            }
            (text.into_owned(), "shift-jis")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8() {
        let (text, encoding) = decode_bytes("id,name\n1,Alice".as_bytes());
        assert_eq!(encoding, "utf-8");
        assert_eq!(text, "id,name\n1,Alice");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("id,name".as_bytes());
        let (text, encoding) = decode_bytes(&bytes);
        assert_eq!(encoding, "utf-8");
        assert_eq!(text, "id,name");
    }

    #[test]
    fn shift_jis_fallback() {
        // "日本語" in Shift-JIS
        let bytes = [0x93, 0xfa, 0x96, 0x7b, 0x8c, 0xea];
        let (text, encoding) = decode_bytes(&bytes);
        assert_eq!(encoding, "shift-jis");
        assert_eq!(text, "日本語");
    }

    #[test]
    fn empty_input() {
        let (text, encoding) = decode_bytes(&[]);
        assert_eq!(encoding, "utf-8");
        assert_eq!(text, "");
    }
}
