//! Map-file naming convention and directory discovery.
//!
//! A map file is named `<yyyymmdd>_map_<edge>_<edge>_..._<start>.<ext>`:
//! an eight-digit date prefix, underscore-separated edge definitions
//! (segments that are not valid edges, like the `map` tag, are ignored),
//! and the starting vertex label as the final segment. The file's contents
//! may carry the graph definition instead; when they hold at least one
//! valid edge line they take precedence over the name-encoded edges.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use regex::Regex;

use coverwalk_core::parse::is_valid_edge_line;

fn date_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{8}$").expect("date pattern is valid"))
}

/// Inputs for one solver run, decoded from a map file.
#[derive(Debug, Clone)]
pub struct MapInputs {
    name: String,
    definition: String,
    start: String,
}

impl MapInputs {
    /// Decodes a map file: start vertex from the name, graph definition
    /// from the contents when present, otherwise from the name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("unreadable file name: {}", path.display()))?
            .to_string();

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("unreadable file name: {}", path.display()))?;

        let segments: Vec<&str> = stem.split('_').collect();
        if segments.len() < 3 {
            bail!("map file name needs a date, edges, and a start vertex: {name}");
        }
        if !date_prefix().is_match(segments[0]) {
            bail!("map file name must start with an eight-digit date: {name}");
        }

        let start = segments[segments.len() - 1].to_string();
        if start.is_empty() {
            bail!("map file name ends without a start vertex: {name}");
        }

        let from_name = segments[1..segments.len() - 1].join("\n");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let definition = if contents.lines().any(is_valid_edge_line) {
            contents
        } else {
            from_name
        };

        Ok(Self {
            name,
            definition,
            start,
        })
    }

    /// The original file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The graph definition, one edge per line.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The starting vertex label.
    pub fn start(&self) -> &str {
        &self.start
    }
}

/// Returns true for regular files whose names begin with an eight-digit
/// date.
pub fn is_dated_map_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('_').next())
        .is_some_and(|prefix| date_prefix().is_match(prefix))
}

/// Lists the date-prefixed map files in `dir`, in name order.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_dated_map_file(path))
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("no date-prefixed map files found in {}", dir.display());
    }
    Ok(files)
}
