use crate::utils::error::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand CLI paths into concrete input files: directories contribute
/// their immediate children with the wanted extension, files are taken
/// as given. Anything else is skipped with a warning.
pub fn resolve_inputs(paths: &[String], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for raw in paths {
        let path = Path::new(raw);
        if path.is_dir() {
            let mut children: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && has_extension(p, extension))
                .collect();
            children.sort();
            files.append(&mut children);
        } else if has_extension(path, extension) {
            files.push(path.to_path_buf());
        } else {
            tracing::warn!(
                "Skipping {} (expected a .{} file or a directory)",
                raw,
                extension
            );
        }
    }
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Profile id token from a capture filename:
/// `linkedin_<slug>[_<timestamp>]` where the timestamp is an ISO date
/// with punctuation dashed out.
pub fn filename_slug(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let re = Regex::new(r"^linkedin_(?P<slug>.+?)(?:_\d{4}-\d{2}-\d{2}T[\d\-]+Z?)?$").unwrap();
    let caps = re.captures(stem)?;
    let slug = caps["slug"].to_string();
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
