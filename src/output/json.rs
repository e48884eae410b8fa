//! JSON manifest rendering

use crate::output::{OutputObject, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serializes a manifest as JSON
///
/// # Arguments
///
/// * `output` - The manifest to serialize
/// * `pretty` - Indent the document instead of emitting a single line
pub fn to_json(output: &OutputObject, pretty: bool) -> OutputResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(json)
}

/// Serializes a manifest as JSON and writes it to `output_path`
pub fn write_json(output: &OutputObject, pretty: bool, output_path: &Path) -> OutputResult<()> {
    let json = to_json(output, pretty)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}
