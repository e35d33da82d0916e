// tests/thing_parse.rs
use bgg_rank::error::Error;
use bgg_rank::specs::thing::parse_details;
use pretty_assertions::assert_eq;

const MULTI: &str = include_str!("fixtures/thing_multi_versions.xml");
const EXPANSION: &str = include_str!("fixtures/thing_expansion.xml");

#[test]
fn base_game_with_versions_and_reimplementation() {
    let d = parse_details(MULTI, 174430).unwrap();
    assert!((d.weight - 3.9149).abs() < 1e-12);
    assert!(!d.is_expansion);
    assert!(d.reimplements);
    // listed {400001, 400003, self} ∪ linked {400001, 400002}, self dropped
    assert_eq!(
        d.version_ids.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["400001", "400002", "400003"]
    );
    assert_eq!(d.version_count(), 3);
    assert!(d.has_versions());
}

#[test]
fn expansion_with_single_version() {
    let d = parse_details(EXPANSION, 325).unwrap();
    assert!(d.is_expansion);
    // outbound expansion link is not a reimplementation
    assert!(!d.reimplements);
    assert_eq!(d.version_count(), 1);
    assert!(!d.has_versions());
    assert_eq!(d.enrichment().weight, 2.1);
}

#[test]
fn duplicates_across_sources_count_once() {
    let doc = r#"<items><item type="boardgame" id="10">
        <versions>
          <item id="11"/><item id="11"/><item id="12"/>
        </versions>
        <link type="boardgameversion" id="12" inbound="true"/>
        <link type="boardgameversion" id="13" inbound="true"/>
    </item></items>"#;
    assert_eq!(parse_details(doc, 10).unwrap().version_count(), 3);
}

#[test]
fn missing_statistics_means_zero_weight() {
    let doc = r#"<items><item type="boardgame" id="5"/></items>"#;
    let d = parse_details(doc, 5).unwrap();
    assert_eq!(d.weight, 0.0);
    assert_eq!(d.version_count(), 0);
}

#[test]
fn broken_document_is_a_parse_error() {
    let err = parse_details("<items><item", 42).unwrap_err();
    assert!(matches!(err, Error::Parse { id: 42, .. }));

    let err = parse_details("<items/>", 42).unwrap_err();
    assert!(matches!(err, Error::Parse { id: 42, .. }));
}
