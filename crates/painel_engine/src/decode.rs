use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use painel_logging::painel_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decodes a page body to UTF-8: BOM, then `Content-Type` charset, then
/// detection (hinted by the host's top-level domain).
///
/// Never fails; bad bytes become replacement characters and extraction
/// carries on with whatever text survives.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>, url: Option<&str>) -> DecodedPage {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(enc) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, enc);
    }

    let tld = url.and_then(top_level_domain);
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(tld.as_deref().map(str::as_bytes), true);
    decode_with(bytes, enc)
}

fn charset_param(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']).to_string())
    })
}

fn top_level_domain(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let tld = host.rsplit('.').next()?;
    (!tld.is_empty() && tld.chars().all(|c| c.is_ascii_alphabetic())).then(|| tld.to_ascii_lowercase())
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedPage {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        painel_warn!("Page body is not valid {}; replaced bad sequences", enc.name());
    }
    DecodedPage {
        html: text.into_owned(),
        encoding_label: enc.name().to_string(),
        had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_param_is_case_insensitive_and_unquoted() {
        assert_eq!(
            charset_param("text/html; Charset=\"ISO-8859-1\"").as_deref(),
            Some("ISO-8859-1")
        );
        assert_eq!(charset_param("text/html"), None);
    }

    #[test]
    fn tld_comes_from_the_host() {
        assert_eq!(
            top_level_domain("https://www.vagas.com.br/vagas-de-tecnologia").as_deref(),
            Some("br")
        );
        assert_eq!(top_level_domain("http://127.0.0.1:8080/"), None);
    }
}
