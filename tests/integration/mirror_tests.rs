//! Integration tests for the mirror core
//!
//! These tests drive the public API the way a crawler would: resolving references,
//! recording resources, rewriting links and serializing the final manifest.

use site_mirror::config::load_config;
use site_mirror::graph::{LinkRecorder, ResourceGraph};
use site_mirror::manifest::build_manifest;
use site_mirror::output::{create_output_object, to_json, OutputObject};
use site_mirror::url::{get_filename_from_url, get_relative_path, get_url, is_url};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_resolution_scenarios() {
    assert_eq!(
        get_url("http://google.com/qwe/qwe/qwe", "/path").unwrap(),
        "http://google.com/path"
    );
    assert_eq!(
        get_url("http://my.site.com", "//cdn.com/library.js").unwrap(),
        "http://cdn.com/library.js"
    );
    assert!(is_url("//cdn.com/library.js"));
    assert!(!is_url("cdn.com/library.js"));
}

#[test]
fn test_crawl_to_offline_paths() {
    let mut recorder =
        LinkRecorder::new("https://example.com/blog/post", Some("index.html")).unwrap();
    let root = recorder.graph().root();

    // references as a crawler would find them on the page
    let css = recorder
        .record(root, "/static/css/main.css?v=3", Some("css/main.css"))
        .unwrap();
    let font = recorder
        .record(css, "//fonts.example.net/roboto.woff2", Some("fonts/roboto.woff2"))
        .unwrap();

    let graph = recorder.graph();
    assert_eq!(
        graph.get(css).unwrap().url(),
        "https://example.com/static/css/main.css?v=3"
    );
    assert_eq!(
        graph.get(font).unwrap().url(),
        "https://fonts.example.net/roboto.woff2"
    );

    assert_eq!(
        recorder
            .rewrite_reference(css, "//fonts.example.net/roboto.woff2")
            .unwrap(),
        Some("../fonts/roboto.woff2".to_string())
    );
    assert_eq!(
        get_relative_path("css/main.css", "fonts/roboto.woff2"),
        "../fonts/roboto.woff2"
    );
    assert_eq!(get_filename_from_url(graph.get(css).unwrap().url()), "main.css");
}

#[test]
fn test_referential_loop_serializes_to_json() {
    let mut graph = ResourceGraph::new("http://example.com", Some("index.html"));
    let root = graph.root();
    let child1 = graph
        .create_child(root, "http://child-one.com", Some("child1.html"))
        .unwrap();
    graph
        .create_child(root, "http://child-two.com", Some("child2.html"))
        .unwrap();
    let root_copy = graph.create_child(child1, "http://example.com", None).unwrap();
    graph.update_child(child1, root_copy, root).unwrap();

    let output = create_output_object(&graph);
    assert!(output.node_count() > 1);

    let json = to_json(&output, false).unwrap();
    let parsed: OutputObject = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output);
}

#[test]
fn test_manifest_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[site]
url = "https://example.com/"

[output]
cycle-policy = "visit-once"

[[link]]
from = "https://example.com/"
href = "/docs/"
filename = "docs/index.html"

[[link]]
from = "https://example.com/docs/"
href = "https://example.com/#top"
"#,
    )
    .unwrap();
    file.flush().unwrap();

    let config = load_config(file.path()).unwrap();
    let manifest = build_manifest(&config).unwrap();

    assert_eq!(manifest.url, "https://example.com/");
    assert_eq!(manifest.assets.len(), 1);

    let docs = &manifest.assets[0];
    assert_eq!(docs.filename.as_deref(), Some("docs/index.html"));
    assert_eq!(docs.assets.len(), 1);
    assert_eq!(docs.assets[0].url, "https://example.com/");
    assert!(docs.assets[0].assets.is_empty());
}

#[test]
fn test_densely_linked_site_manifest_is_linear() {
    let mut recorder = LinkRecorder::new("https://example.com/", None).unwrap();
    let root = recorder.graph().root();

    // every page links to the home page and to every other page
    let pages: Vec<_> = (0..15)
        .map(|n| recorder.record(root, &format!("/page{}.html", n), None).unwrap())
        .collect();
    for &page in &pages {
        recorder.record(page, "/", None).unwrap();
        for n in 0..pages.len() {
            recorder.record(page, &format!("/page{}.html#nav", n), None).unwrap();
        }
    }

    let graph = recorder.graph();
    let links: usize = graph.iter().map(|(_, r)| r.children().len()).sum();
    let output = create_output_object(graph);

    assert_eq!(graph.len(), 16);
    assert_eq!(output.node_count(), 1 + links);
    assert_eq!(output.assets.len(), 15);
}
