use painel_engine::decode_page;
use pretty_assertions::assert_eq;

#[test]
fn decode_respects_charset_header() {
    let bytes = b"S\xe3o Paulo";
    let page = decode_page(bytes, Some("text/html; charset=ISO-8859-1"), None);
    assert_eq!(page.html, "São Paulo");
    assert!(!page.had_errors);
}

#[test]
fn decode_handles_utf8_bom() {
    let bytes = b"\xEF\xBB\xBFol\xC3\xA1";
    let page = decode_page(bytes, Some("text/html"), None);
    assert_eq!(page.html, "olá");
    assert_eq!(page.encoding_label, "UTF-8");
}

#[test]
fn plain_utf8_without_charset_is_detected() {
    let page = decode_page(
        "Localização: São Paulo".as_bytes(),
        None,
        Some("https://www.vagas.com.br/"),
    );
    assert_eq!(page.html, "Localização: São Paulo");
}

#[test]
fn invalid_bytes_are_replaced_not_rejected() {
    let page = decode_page(b"ok \xFF fim", Some("text/html; charset=utf-8"), None);
    assert!(page.had_errors);
    assert!(page.html.starts_with("ok "));
    assert!(page.html.ends_with(" fim"));
}
