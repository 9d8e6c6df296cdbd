//! Integration tests for featureview
//!
//! These tests drive the public API end-to-end: load a catalog, feature a
//! record, render it, and click its searchable fields.

use async_trait::async_trait;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use featureview::FeatureError;
use featureview::cli::{self, OutputFormat};
use featureview::query::{CatalogFetcher, QueryError, QueryFetcher, SearchQuery};
use featureview::record::{self, Record};
use featureview::state::{QueryPolicy, ViewController};
use featureview::view::{Activation, FACTS_REGION, PHOTOS_REGION, to_html};

const CATALOG: &str = r#"{
    "info": {"totalrecords": 3, "page": 1},
    "records": [
        {
            "title": "Ritual Wine Vessel",
            "dated": "12th century BCE",
            "description": "Bronze vessel with taotie masks",
            "culture": "Chinese",
            "technique": "Cast",
            "medium": "Bronze",
            "people": [{"displayname": "Unidentified Artist"}],
            "images": [{"baseimageurl": "http://x/a"}, {"baseimageurl": "http://x/b"}],
            "primaryimageurl": "http://x/1.jpg"
        },
        {
            "title": "Bell",
            "culture": "Chinese",
            "medium": "bronze"
        },
        {
            "title": "Vase",
            "culture": "Greek",
            "medium": "Terracotta",
            "people": null
        }
    ]
}"#;

/// Helper function to write the catalog to a temporary file
fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

/// Backend that rejects every query
struct OfflineFetcher;

#[async_trait(?Send)]
impl QueryFetcher for OfflineFetcher {
    async fn fetch(&self, _query: &SearchQuery) -> Result<Vec<Record>, QueryError> {
        Err(QueryError::Rejected("offline".to_string()))
    }
}

#[test]
fn test_load_catalog_envelope() {
    let file = catalog_file();
    let records = record::load_records(file.path()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].people().len(), 1);
    assert!(records[2].people().is_empty());
}

#[test]
fn test_render_featured_record_from_catalog() {
    let fetcher = CatalogFetcher::from_path(catalog_file().path()).unwrap();
    let mut controller = ViewController::default();
    controller.feature(Some(fetcher.records()[0].clone()));

    let view = controller.view(Rc::new(fetcher));
    let tree = view.render(controller.featured());

    assert!(tree.region(FACTS_REGION).is_some());
    let photos = tree.region(PHOTOS_REGION).unwrap();
    assert_eq!(photos.children.len(), 2);

    let html = to_html(&tree);
    assert_eq!(html.matches(r#"src="http://x/1.jpg""#).count(), 2);
    assert!(html.contains("<h3>Ritual Wine Vessel</h3>"));
}

#[test]
fn test_no_featured_record_renders_empty_root() {
    let controller = ViewController::default();
    let view = controller.view(Rc::new(CatalogFetcher::default()));
    let tree = view.render(controller.featured());

    assert_eq!(to_html(&tree), r#"<main id="feature"></main>"#);
    assert!(tree.searchables().is_empty());
}

#[tokio::test]
async fn test_click_medium_replaces_results() {
    let fetcher = CatalogFetcher::from_path(catalog_file().path()).unwrap();
    let mut controller = ViewController::default();
    controller.set_results(fetcher.records().to_vec());
    controller.feature(Some(fetcher.records()[0].clone()));

    let view = controller.view(Rc::new(fetcher));
    let tree = view.render(controller.featured());
    let medium = tree.searchables()[2];
    assert_eq!((medium.term(), medium.value()), ("Bronze", "bronze"));

    let mut event = Activation::new();
    let pending = medium.activate(&mut event);
    assert!(event.default_prevented());
    assert!(controller.is_loading());

    pending.await;

    let state = controller.snapshot();
    assert!(!state.is_loading);
    let titles: Vec<_> = state.search_results.iter().map(|r| r.title.clone()).collect();
    assert_eq!(
        titles,
        vec![Some("Ritual Wine Vessel".to_string()), Some("Bell".to_string())]
    );
}

#[tokio::test]
async fn test_click_person_then_feature_result() {
    let fetcher = CatalogFetcher::from_path(catalog_file().path()).unwrap();
    let mut controller = ViewController::default();
    controller.feature(Some(fetcher.records()[0].clone()));

    let view = controller.view(Rc::new(fetcher));
    let tree = view.render(controller.featured());
    let person = *tree.searchables().last().unwrap();
    assert_eq!(person.term(), "Unidentified Artist");

    person.click().await;
    assert_eq!(controller.snapshot().search_results.len(), 1);

    assert!(controller.feature_result(0));
    let rerendered = view.render(controller.featured());
    assert_eq!(rerendered, tree);
}

#[tokio::test]
async fn test_failed_query_keeps_previous_results() {
    let mut controller = ViewController::default();
    controller.set_results(vec![Record::titled("Previous")]);
    controller.feature(Some(Record {
        culture: Some("Greek".to_string()),
        ..Record::default()
    }));

    let view = controller.view(Rc::new(OfflineFetcher));
    let tree = view.render(controller.featured());
    tree.searchables()[0].click().await;

    let state = controller.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.search_results, vec![Record::titled("Previous")]);
}

/// Renders record 0 twice: once backed by a slow catalog, once by a fast one
fn slow_and_fast_trees(
    controller: &mut ViewController,
) -> (featureview::view::Node, featureview::view::Node) {
    let catalog = record::load_records(catalog_file().path()).unwrap();
    controller.feature(Some(catalog[0].clone()));

    let slow: Rc<dyn QueryFetcher> = Rc::new(
        CatalogFetcher::new(catalog.clone()).with_latency(Duration::from_millis(500)),
    );
    let fast: Rc<dyn QueryFetcher> = Rc::new(CatalogFetcher::new(catalog));

    (
        controller.view(slow).render(controller.featured()),
        controller.view(fast).render(controller.featured()),
    )
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_clicks_last_completion_wins() {
    let mut controller = ViewController::new(QueryPolicy::Concurrent);
    let (slow_tree, fast_tree) = slow_and_fast_trees(&mut controller);

    // technique=Cast on the slow backend first, then culture=Chinese on the fast one
    let (mut first, mut second) = (Activation::new(), Activation::new());
    let earlier = slow_tree.searchables()[1].activate(&mut first);
    let later = fast_tree.searchables()[0].activate(&mut second);
    tokio::join!(earlier, later);

    let state = controller.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.search_results.len(), 1);
    assert_eq!(state.search_results[0].title.as_deref(), Some("Ritual Wine Vessel"));
}

#[tokio::test(start_paused = true)]
async fn test_latest_only_ignores_stale_completion() {
    let mut controller = ViewController::new(QueryPolicy::LatestOnly);
    let (slow_tree, fast_tree) = slow_and_fast_trees(&mut controller);

    let (mut first, mut second) = (Activation::new(), Activation::new());
    let stale = slow_tree.searchables()[1].activate(&mut first);
    let latest = fast_tree.searchables()[0].activate(&mut second);
    tokio::join!(stale, latest);

    let state = controller.snapshot();
    assert!(!state.is_loading);
    let titles: Vec<_> = state.search_results.iter().map(|r| r.title.clone()).collect();
    assert_eq!(
        titles,
        vec![Some("Ritual Wine Vessel".to_string()), Some("Bell".to_string())]
    );
}

fn catalog_records() -> Vec<Record> {
    record::load_records(catalog_file().path()).unwrap()
}

fn titles(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| record::text(&r.title)).collect()
}

#[test]
fn test_render_record_without_index_is_empty() {
    let html = cli::render_record(&catalog_records(), None, OutputFormat::Html, false).unwrap();
    assert_eq!(html, r#"<main id="feature"></main>"#);
}

#[test]
fn test_render_record_by_index() {
    let html = cli::render_record(&catalog_records(), Some(1), OutputFormat::Html, false).unwrap();
    assert!(html.contains("<h3>Bell</h3>"));
}

#[test]
fn test_render_record_index_out_of_range() {
    let result = cli::render_record(&catalog_records(), Some(3), OutputFormat::Text, false);
    assert!(matches!(result, Err(FeatureError::InvalidInput(_))));
}

#[tokio::test]
async fn test_click_field_collects_results() {
    let report = cli::click_field(catalog_records(), 0, 2, None, QueryPolicy::default(), false)
        .await
        .unwrap();

    assert_eq!(report.term, "Bronze");
    assert_eq!(titles(&report.results), vec!["Ritual Wine Vessel", "Bell"]);
    assert!(report.followed.is_none());
}

#[tokio::test]
async fn test_click_field_follow_renders_first_result() {
    let report = cli::click_field(
        catalog_records(),
        2,
        0,
        Some(OutputFormat::Html),
        QueryPolicy::LatestOnly,
        false,
    )
    .await
    .unwrap();

    assert_eq!(report.term, "Greek");
    assert_eq!(titles(&report.results), vec!["Vase"]);
    let followed = report.followed.unwrap();
    assert!(followed.starts_with(r#"<main id="feature">"#));
    assert!(followed.contains("<h3>Vase</h3>"));
}

#[tokio::test]
async fn test_click_field_index_out_of_range() {
    let result =
        cli::click_field(catalog_records(), 3, 0, None, QueryPolicy::default(), false).await;
    assert!(matches!(result, Err(FeatureError::InvalidInput(msg)) if msg.contains("index 3")));
}

#[tokio::test]
async fn test_click_field_field_out_of_range() {
    let result =
        cli::click_field(catalog_records(), 0, 99, None, QueryPolicy::default(), false).await;
    assert!(matches!(result, Err(FeatureError::InvalidInput(msg)) if msg.contains("Field 99")));
}

#[tokio::test]
async fn test_search_records_value_defaults_to_term() {
    let found = cli::search_records(catalog_records(), "Chinese".to_string(), None)
        .await
        .unwrap();
    assert_eq!(titles(&found), vec!["Ritual Wine Vessel", "Bell"]);

    let found = cli::search_records(catalog_records(), "medium".to_string(), Some("bronze".into()))
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
}
