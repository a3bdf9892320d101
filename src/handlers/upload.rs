use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path::{base_name, validate_name};
use axum::{
    extract::{Multipart, State},
    response::Response,
};
use futures::StreamExt;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// `POST /upload`: stream each multipart file part straight to disk.
///
/// Parts without a filename are form metadata and are skipped. A declared
/// filename is flattened to its base name, then run through the traversal
/// guard. The first create or write failure aborts the whole request;
/// listing and delete are tolerant per item, upload is not.
pub async fn upload_files(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut files_uploaded = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::AccessError(format!("error reading next part: {}", e)))?
    {
        let declared = match field.file_name() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => continue,
        };

        // A part declared as `a/b/c.txt` lands as `c.txt`.
        let filename = base_name(&declared).ok_or(AppError::InvalidPath)?.to_string();
        let dst_path = validate_name(&state.config.dir_to_serve, &filename)?;

        tracing::info!(file = %filename, "starting upload");

        let mut dst = fs::File::create(&dst_path)
            .await
            .map_err(|e| AppError::CreateError(format!("{}: {}", dst_path.display(), e)))?;

        let mut size: u64 = 0;
        let mut stream = field;
        let mut copy_err: Option<String> = None;
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(data) => {
                    size += data.len() as u64;
                    if let Err(e) = dst.write_all(&data).await {
                        copy_err = Some(e.to_string());
                        break;
                    }
                }
                Err(e) => {
                    copy_err = Some(e.to_string());
                    break;
                }
            }
        }
        if copy_err.is_none() {
            if let Err(e) = dst.flush().await {
                copy_err = Some(e.to_string());
            }
        }

        // Destination file is closed here, before the next part is read.
        drop(dst);

        if let Some(e) = copy_err {
            // Best-effort removal of the partially written file.
            fs::remove_file(&dst_path).await.ok();
            return Err(AppError::WriteError(format!("{}: {}", dst_path.display(), e)));
        }

        tracing::info!(file = %filename, size, "completed upload");
        files_uploaded += 1;
    }

    tracing::info!(count = files_uploaded, "upload request complete");
    Ok(super::refresh_redirect())
}
