//! Book form submission with an optional cover upload
//!
//! The draft is validated before anything leaves the process. When a cover
//! file is attached it is uploaded first and its public URL replaces
//! whatever was typed into the cover field.

use crate::error::ApiResult;
use crate::storage::{StorageClient, UploadFile};
use library_admin_core::forms::BookDraft;
use library_admin_core::model::{CreateBook, UpdateBook};
use tracing::debug;

async fn attach_cover(
    draft: BookDraft,
    cover: Option<&UploadFile>,
    storage: &StorageClient,
) -> ApiResult<BookDraft> {
    draft.validate()?;

    let Some(file) = cover else {
        return Ok(draft);
    };

    let uploaded = storage.upload_cover_image(file).await?;
    debug!(path = %uploaded.path, "Cover attached to book draft");
    Ok(draft.with_cover(uploaded.public_url))
}

/// Payload for `POST /book/add`
pub async fn book_create_payload(
    draft: BookDraft,
    cover: Option<&UploadFile>,
    storage: &StorageClient,
) -> ApiResult<CreateBook> {
    Ok(attach_cover(draft, cover, storage).await?.into_create()?)
}

/// Payload for `PUT /book/edit/<id>`
pub async fn book_update_payload(
    draft: BookDraft,
    cover: Option<&UploadFile>,
    storage: &StorageClient,
) -> ApiResult<UpdateBook> {
    Ok(attach_cover(draft, cover, storage).await?.into_update()?)
}
