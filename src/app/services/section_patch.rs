use std::path::Path;

use crate::app::domain::SectionedDocument;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::files::ResourceStore;

fn read(resources: &dyn ResourceStore, path: &Path) -> Result<Option<String>> {
    resources.read_text(path).map_err(|source| AppError::ResourceIo {
        path: path.to_path_buf(),
        source,
    })
}

fn write(resources: &mut dyn ResourceStore, path: &Path, text: &str) -> Result<()> {
    resources
        .write_text(path, text)
        .map_err(|source| AppError::ResourceIo {
            path: path.to_path_buf(),
            source,
        })
}

fn parse(path: &Path, text: &str) -> Result<SectionedDocument> {
    SectionedDocument::parse(text).map_err(|source| AppError::MalformedSection {
        path: path.to_path_buf(),
        source,
    })
}

/// Insert or replace the managed section of `path` with `body`.
///
/// A missing resource is created. The new text is computed in full before
/// anything is written, and nothing is written when it would not change.
pub fn apply_section(resources: &mut dyn ResourceStore, path: &Path, body: &str) -> Result<()> {
    let existing = read(resources, path)?;
    let doc = parse(path, existing.as_deref().unwrap_or(""))?;
    let updated = doc.with_section(body);

    if existing.as_deref() == Some(updated.as_str()) {
        log::debug!("fontsetter: {} already up to date", path.display());
        return Ok(());
    }

    write(resources, path, &updated)
}

/// Remove the managed section of `path`, if it has one. Never creates the resource.
pub fn remove_section(resources: &mut dyn ResourceStore, path: &Path) -> Result<()> {
    let Some(existing) = read(resources, path)? else {
        return Ok(());
    };

    let doc = parse(path, &existing)?;
    if !doc.has_section() {
        return Ok(());
    }

    write(resources, path, &doc.without_section())
}
