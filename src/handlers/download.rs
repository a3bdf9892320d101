use crate::error::AppError;
use crate::state::AppState;
use crate::utils::common::mime_guess;
use crate::utils::path::validate_name;
use axum::{
    body::Body,
    extract::{Path as UrlPath, State},
    http::header,
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio_util::io::ReaderStream;

/// `GET /download/{name}`: stream one file as an attachment.
///
/// The disposition names the file exactly as the client supplied it so
/// names with spaces render correctly.
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    UrlPath(name): UrlPath<String>,
) -> Result<Response, AppError> {
    let (file, size) = open_for_read(&state.config.dir_to_serve, &name).await?;

    tracing::info!(file = %name, size, "streaming download");

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (header::CONTENT_LENGTH, size.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", name),
        ),
    ];
    Ok((headers, stream_body(file, name)).into_response())
}

/// `GET /files/{name}`: raw pass-through serving of the directory, with a
/// MIME type guessed from the extension and no attachment disposition.
pub async fn serve_file(
    State(state): State<Arc<AppState>>,
    UrlPath(name): UrlPath<String>,
) -> Result<Response, AppError> {
    let (file, size) = open_for_read(&state.config.dir_to_serve, &name).await?;

    let mime = mime_guess(Path::new(&name)).to_string();
    let headers = [
        (header::CONTENT_TYPE, mime),
        (header::CONTENT_LENGTH, size.to_string()),
    ];
    Ok((headers, stream_body(file, name)).into_response())
}

/// Validate, stat, and open a served file for streaming.
async fn open_for_read(served_dir: &Path, name: &str) -> Result<(fs::File, u64), AppError> {
    let file_path = validate_name(served_dir, name)?;

    let metadata = fs::metadata(&file_path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound,
        _ => AppError::AccessError(format!("{}: {}", file_path.display(), e)),
    })?;

    if metadata.is_dir() {
        return Err(AppError::NotAFile);
    }

    let file = fs::File::open(&file_path)
        .await
        .map_err(|e| AppError::AccessError(format!("{}: {}", file_path.display(), e)))?;

    Ok((file, metadata.len()))
}

/// Chunked response body. A failure partway can only be logged; the status
/// line and headers are already on the wire.
fn stream_body(file: fs::File, name: String) -> Body {
    let stream = ReaderStream::new(file).inspect_err(move |e| {
        tracing::error!(file = %name, error = %e, "error streaming file");
    });
    Body::from_stream(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::http::StatusCode;
    use clap::Parser;

    fn state_for(dir: &Path) -> State<Arc<AppState>> {
        let mut config = Config::parse_from(["hfs"]);
        config.dir_to_serve = dir.to_path_buf();
        State(Arc::new(AppState::new(config)))
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_download_streams_exact_bytes_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let content = b"hello across the wire".to_vec();
        std::fs::write(dir.path().join("hello world.txt"), &content).unwrap();

        let response = download_file(state_for(dir.path()), UrlPath("hello world.txt".into()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers().clone();
        assert_eq!(
            headers.get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"hello world.txt\""
        );
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/octet-stream"
        );
        assert_eq!(
            headers.get(header::CONTENT_LENGTH).unwrap(),
            &content.len().to_string()
        );
        assert_eq!(body_bytes(response).await, content);
    }

    #[tokio::test]
    async fn test_download_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = download_file(state_for(dir.path()), UrlPath("ghost.txt".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_download_directory_is_a_client_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("archive")).unwrap();

        let err = download_file(state_for(dir.path()), UrlPath("archive".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotAFile));
    }

    #[tokio::test]
    async fn test_download_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let err = download_file(state_for(dir.path()), UrlPath("../secret".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidPath));
    }

    #[tokio::test]
    async fn test_serve_file_uses_guessed_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), b"<html></html>").unwrap();

        let response = serve_file(state_for(dir.path()), UrlPath("page.html".into()))
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
        assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
    }
}
