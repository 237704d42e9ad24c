use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed byte sequence for {encoding}")]
    Malformed { encoding: String },
}

/// Decode raw page bytes into UTF-8.
///
/// Order of preference: byte-order mark, then the Content-Type charset, then
/// chardetng detection. The detector gets a `tr` TLD hint since the portal
/// serves Turkish text and older mirrors have shipped windows-1254.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedPage, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(Some(b"tr"), true);
    decode_with(bytes, encoding)
}

fn header_charset(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.eq_ignore_ascii_case("charset") {
            Some(value.trim_matches([' ', '"', '\'']).to_string())
        } else {
            None
        }
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedPage, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedPage {
        html: text.into_owned(),
        encoding: encoding.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_without_hints_decodes() {
        let decoded = decode_page("Resmî Gazete".as_bytes(), None).expect("decode");
        assert_eq!(decoded.html, "Resmî Gazete");
    }

    #[test]
    fn header_charset_wins_over_detection() {
        // "Sayılı" in windows-1254
        let bytes = b"Say\xfdl\xfd";
        let decoded =
            decode_page(bytes, Some("text/html; charset=windows-1254")).expect("decode");
        assert_eq!(decoded.html, "Sayılı");
        assert_eq!(decoded.encoding, "windows-1254");
    }

    #[test]
    fn bom_wins_over_header() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("Gazete".as_bytes());
        let decoded = decode_page(&bytes, Some("text/html; charset=windows-1254")).expect("decode");
        assert_eq!(decoded.html, "Gazete");
        assert_eq!(decoded.encoding, "UTF-8");
    }

    #[test]
    fn quoted_charset_is_unwrapped() {
        assert_eq!(
            header_charset("text/html; charset=\"utf-8\""),
            Some("utf-8".to_string())
        );
    }
}
