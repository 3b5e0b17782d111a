use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};

// label は WHATWG の名前 ("utf-8", "windows-1252", "shift_jis" など)
// 指定がなければ UTF-8 (BOM があればそれに従う)
pub fn decode_text(bytes: &[u8], label: Option<&str>) -> Result<String> {
    let encoding = match label {
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .with_context(|| format!("Unknown encoding: {:?}", label))?,
        None => UTF_8,
    };

    let (text, actual_encoding, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = actual_encoding.name(),
            "Malformed sequences were replaced while decoding"
        );
    }

    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8_by_default() {
        let text = decode_text("ĉapelo  hat".as_bytes(), None).unwrap();
        assert_eq!(text, "ĉapelo  hat");
    }

    #[test]
    fn strips_utf8_bom() {
        let text = decode_text(b"\xEF\xBB\xBFword", None).unwrap();
        assert_eq!(text, "word");
    }

    #[test]
    fn decodes_with_label() {
        // 0xAB は windows-1252 で «
        let text = decode_text(b"\xABword", Some("windows-1252")).unwrap();
        assert_eq!(text, "«word");
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(decode_text(b"word", Some("no-such-encoding")).is_err());
    }
}
