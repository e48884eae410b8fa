//! Manifest replay
//!
//! Rebuilds a resource graph from a configured link log, the same way a crawler records
//! links as it discovers them, and serializes it into the final manifest.

use crate::config::{LinkEntry, MirrorConfig};
use crate::graph::LinkRecorder;
use crate::output::{create_output_object_from, OutputObject};

/// Result of replaying a link log
#[derive(Debug, Clone)]
pub struct Replay {
    /// Recorder holding the rebuilt graph
    pub recorder: LinkRecorder,

    /// Links whose `from` page was not recorded when they were replayed
    pub skipped: Vec<LinkEntry>,
}

/// Replays the configured links, in order, into a fresh graph
///
/// A link is only recorded once the page it was found on exists in the graph; links
/// whose `from` page is unknown at that point are skipped and reported.
///
/// # Returns
///
/// * `Ok(Replay)` - The rebuilt graph and any skipped links
/// * `Err(MirrorError)` - The site url cannot serve as a root
pub fn replay(config: &MirrorConfig) -> crate::Result<Replay> {
    let mut recorder = LinkRecorder::new(&config.site.url, Some(&config.site.filename))?;
    let mut skipped = Vec::new();

    for link in &config.links {
        let Some(from) = recorder.find(&link.from) else {
            tracing::warn!(
                "Skipping link {} from unrecorded page {}",
                link.href,
                link.from
            );
            skipped.push(link.clone());
            continue;
        };

        let target = recorder.record(from, &link.href, link.filename.as_deref())?;
        tracing::debug!("Recorded {} -> {} from {}", link.href, target, link.from);
    }

    tracing::info!(
        "Replayed {} links into {} resources ({} skipped)",
        config.links.len() - skipped.len(),
        recorder.graph().len(),
        skipped.len()
    );

    Ok(Replay { recorder, skipped })
}

/// Replays the configured links and serializes the graph from its root
pub fn build_manifest(config: &MirrorConfig) -> crate::Result<OutputObject> {
    let replay = replay(config)?;
    let graph = replay.recorder.graph();
    let output = create_output_object_from(graph, graph.root(), config.output.cycle_policy)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_replay_builds_graph_in_order() {
        let config = parse_config(
            r#"
[site]
url = "http://example.com/"

[[link]]
from = "http://example.com/"
href = "/css/site.css"
filename = "css/site.css"

[[link]]
from = "http://example.com/"
href = "//cdn.com/lib.js"

[[link]]
from = "http://example.com/css/site.css"
href = "/img/bg.png"
"#,
        )
        .unwrap();

        let output = build_manifest(&config).unwrap();
        assert_eq!(output.url, "http://example.com/");
        assert_eq!(output.filename.as_deref(), Some("index.html"));
        assert_eq!(output.assets.len(), 2);
        assert_eq!(output.assets[0].filename.as_deref(), Some("css/site.css"));
        assert_eq!(output.assets[1].url, "http://cdn.com/lib.js");
        assert_eq!(output.assets[0].assets[0].url, "http://example.com/img/bg.png");
        assert_eq!(output.node_count(), 4);
    }

    #[test]
    fn test_replay_skips_unrecorded_source() {
        let config = parse_config(
            r#"
[site]
url = "http://example.com/"

[[link]]
from = "http://example.com/not-yet.html"
href = "/a.png"
"#,
        )
        .unwrap();

        let replay = replay(&config).unwrap();
        assert_eq!(replay.skipped.len(), 1);
        assert_eq!(replay.recorder.graph().len(), 1);
    }

    #[test]
    fn test_replay_back_link_is_bounded() {
        let config = parse_config(
            r#"
[site]
url = "http://example.com/"

[[link]]
from = "http://example.com/"
href = "/about.html"

[[link]]
from = "http://example.com/about.html"
href = "/"
"#,
        )
        .unwrap();

        let output = build_manifest(&config).unwrap();
        let back = &output.assets[0].assets[0];
        assert_eq!(back.url, "http://example.com/");
        assert!(back.assets.is_empty());
    }
}
