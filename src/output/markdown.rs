//! Markdown manifest generation
//!
//! This module renders a manifest as a human-readable nested list, one line per
//! resource, indented by depth.

use crate::output::{OutputObject, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown outline of a manifest and writes it to `output_path`
///
/// # Arguments
///
/// * `output` - The manifest to render
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the outline
/// * `Err(OutputError)` - Failed to write the outline
pub fn write_markdown(output: &OutputObject, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_tree(output);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a manifest as a markdown outline
///
/// # Arguments
///
/// * `output` - The manifest to render
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_tree(output: &OutputObject) -> String {
    let mut md = String::new();

    md.push_str("# Site Mirror Manifest\n\n");
    md.push_str(&format!("- **Root**: {}\n", output.url));
    md.push_str(&format!("- **Resources**: {}\n", output.node_count()));
    md.push_str(&format!("- **Depth**: {}\n\n", output.depth()));

    md.push_str("## Resources\n\n");
    push_tree(&mut md, output);

    md
}

/// Writes one line per node in pre-order, using an explicit stack
fn push_tree(md: &mut String, root: &OutputObject) {
    let mut pending = vec![(root, 0)];

    while let Some((node, level)) = pending.pop() {
        let label = node.filename.as_deref().unwrap_or("(no filename)");
        md.push_str(&format!(
            "{}- [{}]({})\n",
            "  ".repeat(level),
            label,
            node.url
        ));

        // reversed so the first asset is popped first
        pending.extend(node.assets.iter().rev().map(|asset| (asset, level + 1)));
    }
}
