use std::path::Path;

use axum::extract::Multipart;
use uuid::Uuid;

use crate::app_error::{AppError, AppResult};

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Reads the first file field out of a multipart body and writes it under
/// `upload_dir` with a fresh name. Returns the public path to store on the
/// record (`/uploads/<name>`).
pub async fn save_image(
    upload_dir: &str,
    prefix: &str,
    mut multipart: Multipart,
) -> AppResult<String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::validation("file", "Malformed multipart body"))?
    {
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let extension = Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::validation(
                "file",
                "Only jpg, jpeg, png and webp images are accepted",
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::validation("file", "Could not read uploaded file"))?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::validation("file", "Image exceeds the 5 MB limit"));
        }

        let stored_name = format!("{}-{}.{}", prefix, Uuid::new_v4(), extension);
        tokio::fs::create_dir_all(upload_dir)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        tokio::fs::write(Path::new(upload_dir).join(&stored_name), &bytes)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        return Ok(format!("/uploads/{}", stored_name));
    }

    Err(AppError::validation("file", "No file field in upload"))
}
