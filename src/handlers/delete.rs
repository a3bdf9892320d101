use crate::error::AppError;
use crate::state::AppState;
use crate::utils::path::validate_name;
use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::Response,
};
use std::sync::Arc;
use tokio::fs;

/// `POST /delete`: remove each file named by a repeated `files` form field.
///
/// Best-effort per file: a candidate that fails the traversal guard or
/// whose removal fails is logged and skipped, and the rest of the batch
/// still proceeds. The client only ever sees the redirect.
pub async fn delete_files(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(fields) = form.map_err(|e| AppError::BadForm(e.to_string()))?;

    for (key, filename) in fields {
        if key != "files" {
            continue;
        }

        let file_path = match validate_name(&state.config.dir_to_serve, &filename) {
            Ok(p) => p,
            Err(_) => {
                tracing::warn!(file = %filename, "attempted path traversal on delete");
                continue;
            }
        };

        tracing::info!(file = %filename, "deleting file");
        if let Err(e) = fs::remove_file(&file_path).await {
            tracing::error!(file = %filename, error = %e, "failed to delete file");
        }
    }

    Ok(super::refresh_redirect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use std::path::Path;

    fn state_for(dir: &Path) -> State<Arc<AppState>> {
        let mut config = Config::parse_from(["hfs"]);
        config.dir_to_serve = dir.to_path_buf();
        State(Arc::new(AppState::new(config)))
    }

    async fn form_from(body: &str) -> Result<Form<Vec<(String, String)>>, FormRejection> {
        let request = Request::builder()
            .method("POST")
            .uri("/delete")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        Form::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_deletes_selected_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.txt"), b"1").unwrap();
        std::fs::write(dir.path().join("two.txt"), b"2").unwrap();
        std::fs::write(dir.path().join("keep.txt"), b"3").unwrap();

        let form = form_from("files=one.txt&files=two.txt").await;
        let response = delete_files(state_for(dir.path()), form).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("HX-Refresh").unwrap(), "true");
        assert!(!dir.path().join("one.txt").exists());
        assert!(!dir.path().join("two.txt").exists());
        assert!(dir.path().join("keep.txt").exists());
    }

    #[tokio::test]
    async fn test_missing_file_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("real.txt"), b"x").unwrap();

        let form = form_from("files=ghost.txt&files=real.txt").await;
        let response = delete_files(state_for(dir.path()), form).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(!dir.path().join("real.txt").exists());
    }

    #[tokio::test]
    async fn test_traversal_candidates_are_skipped() {
        let parent = tempfile::tempdir().unwrap();
        let served = parent.path().join("served");
        std::fs::create_dir(&served).unwrap();
        std::fs::write(parent.path().join("secret.txt"), b"keep out").unwrap();
        std::fs::write(served.join("fine.txt"), b"x").unwrap();

        let form = form_from("files=../secret.txt&files=fine.txt").await;
        delete_files(state_for(&served), form).await.unwrap();

        // The escape attempt was ignored, the valid candidate processed.
        assert!(parent.path().join("secret.txt").exists());
        assert!(!served.join("fine.txt").exists());
    }

    #[tokio::test]
    async fn test_malformed_form_is_a_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method("POST")
            .uri("/delete")
            .header("content-type", "text/plain")
            .body(Body::from("not a form"))
            .unwrap();
        let form = Form::from_request(request, &()).await;

        let err = delete_files(state_for(dir.path()), form).await.unwrap_err();
        assert!(matches!(err, AppError::BadForm(_)));
    }
}
