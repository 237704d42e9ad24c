use gazette_engine::{ExtractError, GazetteExtractor, IssueExtractor};
use pretty_assertions::assert_eq;
use url::Url;

const FRONT_PAGE: &str = r##"<!DOCTYPE html>
<html lang="tr">
<head><title>T.C. Resmî Gazete</title></head>
<body>
  <span id="spanGazeteTarih">30 Ağustos 2026 Pazar ve 33012 Sayılı Resmî Gazete</span>
  <div id="html-content">
    <div class="fihrist-item">
      <a href="/eskiler/2026/08/20260830-1.htm">– Cumhurbaşkanı Kararı (Karar Sayısı: 1234)</a>
    </div>
    <div class="fihrist-item">
      <a href="https://www.resmigazete.gov.tr/eskiler/2026/08/20260830-2.pdf">— Yönetmelik</a>
    </div>
    <div class="fihrist-item"><span>başlıksız madde</span></div>
  </div>
</body>
</html>"##;

fn base_url() -> Url {
    Url::parse("https://www.resmigazete.gov.tr").expect("base url")
}

#[test]
fn extracts_issue_number_from_masthead() {
    let extracted = GazetteExtractor
        .extract(FRONT_PAGE, &base_url())
        .expect("extract");
    assert_eq!(extracted.issue.as_str(), "33012");
}

#[test]
fn extracts_entries_in_page_order_with_clean_titles() {
    let extracted = GazetteExtractor
        .extract(FRONT_PAGE, &base_url())
        .expect("extract");

    // The anchor-less item is dropped.
    assert_eq!(extracted.entries.len(), 2);
    assert_eq!(
        extracted.entries[0].title,
        "Cumhurbaşkanı Kararı (Karar Sayısı: 1234)"
    );
    assert_eq!(extracted.entries[1].title, "Yönetmelik");
}

#[test]
fn relative_links_are_absolutized_and_absolute_links_kept() {
    let extracted = GazetteExtractor
        .extract(FRONT_PAGE, &base_url())
        .expect("extract");

    assert_eq!(
        extracted.entries[0].link,
        "https://www.resmigazete.gov.tr/eskiler/2026/08/20260830-1.htm"
    );
    assert_eq!(
        extracted.entries[1].link,
        "https://www.resmigazete.gov.tr/eskiler/2026/08/20260830-2.pdf"
    );
}

#[test]
fn missing_masthead_is_an_error() {
    let html = "<html><body><div id=\"html-content\"></div></body></html>";
    let err = GazetteExtractor.extract(html, &base_url()).unwrap_err();
    assert_eq!(err, ExtractError::MissingTitle);
}

#[test]
fn masthead_without_issue_token_is_unparseable() {
    let html = r#"<html><body>
        <span id="spanGazeteTarih">Mükerrer Sayı</span>
        <div id="html-content"></div>
    </body></html>"#;
    let err = GazetteExtractor.extract(html, &base_url()).unwrap_err();
    assert_eq!(
        err,
        ExtractError::IssueNumberUnparseable {
            title: "Mükerrer Sayı".to_string()
        }
    );
}

#[test]
fn missing_index_div_yields_empty_entries() {
    let html = r#"<html><body>
        <span id="spanGazeteTarih">30 Ağustos 2026 Pazar ve 33012 Sayılı Resmî Gazete</span>
    </body></html>"#;
    let extracted = GazetteExtractor.extract(html, &base_url()).expect("extract");
    assert_eq!(extracted.issue.as_str(), "33012");
    assert!(extracted.entries.is_empty());
}

#[test]
fn index_div_without_items_yields_empty_entries() {
    let html = r#"<html><body>
        <span id="spanGazeteTarih">30 Ağustos 2026 Pazar ve 33012 Sayılı Resmî Gazete</span>
        <div id="html-content"><p>İçerik henüz yayınlanmadı.</p></div>
    </body></html>"#;
    let extracted = GazetteExtractor.extract(html, &base_url()).expect("extract");
    assert!(extracted.entries.is_empty());
}
