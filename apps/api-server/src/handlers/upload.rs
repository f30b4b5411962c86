//! Image upload handler - stores files on local disk and returns the
//! URL they are served from.

use std::path::Path;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::TryStreamExt;
use uuid::Uuid;

use journal_shared::dto::UploadResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Where uploads land and how large they may be.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: String,
    pub max_bytes: usize,
}

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// POST /api/upload
pub async fn upload_image(
    identity: Identity,
    config: web::Data<UploadConfig>,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(disposition) = field.content_disposition() else {
            continue;
        };
        if disposition.get_name() != Some("image") {
            continue;
        }

        let filename = disposition
            .get_filename()
            .map(|f| f.to_string())
            .unwrap_or_default();

        let ext = extension_of(&filename)
            .filter(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Unsupported file type. Allowed: {}",
                    ALLOWED_EXTENSIONS.join(", ")
                ))
            })?;

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            if data.len() + chunk.len() > config.max_bytes {
                return Err(AppError::BadRequest(format!(
                    "File exceeds {} bytes",
                    config.max_bytes
                )));
            }
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(AppError::BadRequest("No file uploaded".to_string()));
        }

        // Server-generated name; the original filename is untrusted.
        let stored = format!("{}.{}", Uuid::new_v4(), ext);
        let path = Path::new(&config.dir).join(&stored);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %identity.user_id,
            file = %stored,
            bytes = data.len(),
            "Image uploaded"
        );

        return Ok(HttpResponse::Ok().json(UploadResponse {
            url: format!("/uploads/{stored}"),
        }));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}
