// Document loading for the CLI. An unreadable or empty document is an
// error at this layer; the engine itself never sees an unavailable
// document and treats whatever it receives as valid text.

use std::path::Path;

use anyhow::{Context, Result};

/// Load a plain UTF-8 text document.
///
/// Content that is empty after trimming is rejected: an upstream
/// extraction failure surfaces as an empty string, which must not be
/// analyzed as a zero-length document.
pub async fn load_document(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read document: {}", path.display()))?;

    if text.trim().is_empty() {
        anyhow::bail!("document is empty: {}", path.display());
    }

    Ok(text)
}
