use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use vsm_core::Corpus;
use walkdir::WalkDir;

/// Read every file directly inside `dir` whose extension is `extension`,
/// keyed by file name. Subdirectories are not descended into.
pub fn read_documents<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        anyhow::bail!("corpus path is not a directory: {}", dir.display());
    }

    let mut docs = Corpus::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let p = entry.path();
        if !entry.file_type().is_file() { continue; }
        if p.extension().and_then(|s| s.to_str()) != Some(extension) { continue; }
        let Some(name) = p.file_name().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %p.display(), "skipping file with non-utf8 name");
            continue;
        };
        let text = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
        docs.insert(name.to_string(), text);
    }

    tracing::info!(num_docs = docs.len(), path = %dir.display(), "loaded corpus");
    Ok(docs)
}
