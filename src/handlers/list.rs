use crate::error::AppError;
use crate::state::AppState;
use crate::utils::common::{format_size_mb, format_timestamp};
use crate::view;
use axum::{extract::State, response::Html};
use std::path::Path;
use std::sync::Arc;
use std::time::UNIX_EPOCH;
use tokio::fs;

/// One row of the listing page, derived fresh per request.
#[derive(Debug, Clone)]
pub struct FileView {
    pub name: String,
    pub size_mb: String,
    pub modified: String,
}

pub async fn list_files(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let files = collect_views(&state.config.dir_to_serve).await?;
    Ok(Html(view::render_index(&files)))
}

/// Enumerate regular files in the served directory, one level deep, in
/// whatever order the filesystem returns them. Subdirectories are skipped.
/// An entry whose metadata cannot be read is dropped with a warning; only
/// a failure to read the directory itself fails the listing.
pub async fn collect_views(dir: &Path) -> Result<Vec<FileView>, AppError> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| AppError::DirectoryUnreadable(format!("{}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::DirectoryUnreadable(format!("{}: {}", dir.display(), e)))?
    {
        let name = entry.file_name().to_string_lossy().to_string();

        let metadata = match entry.metadata().await {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "could not get file info, skipping");
                continue;
            }
        };
        if metadata.is_dir() {
            continue;
        }

        let modified = match metadata.modified() {
            Ok(t) => {
                let secs = t.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
                format_timestamp(secs)
            }
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "could not get file info, skipping");
                continue;
            }
        };

        files.push(FileView {
            name,
            size_mb: format_size_mb(metadata.len()),
            modified,
        });
    }

    Ok(files)
}
