use std::collections::BTreeSet;

use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Form, Router,
};
use shared::{upload_fields, AddPermissionForm, VideoResponse};

use crate::application::courses::commands::list_videos;
use crate::application::videos::{AddPermissionCommand, UploadVideoCommand};
use crate::domain::Video;
use crate::infrastructure::AppState;

use super::error::ApiError;

pub fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/courses/:course_id/videos", post(upload).get(list))
        .route(
            "/courses/:course_id/videos/:video_id/permissions",
            post(add_permission).get(list_permissions),
        )
}

pub(super) fn video_response(video: &Video) -> VideoResponse {
    VideoResponse {
        id: video.id().value(),
        file_name: video.file_name().to_string(),
        uploader: video.uploader().to_string(),
        allowed_users: video.allowed_users().clone(),
    }
}

async fn upload(
    State(state): State<AppState>,
    Path(course_id): Path<u64>,
    mut multipart: Multipart,
) -> Result<Json<VideoResponse>, ApiError> {
    let mut uploader: Option<String> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            upload_fields::UPLOADER => {
                uploader = Some(field.text().await?);
            }
            upload_fields::FILE => {
                let file_name = field.file_name().unwrap_or("").to_string();
                file = Some((file_name, field.bytes().await?));
            }
            _ => {}
        }
    }

    let uploader = uploader
        .ok_or_else(|| ApiError::BadRequest("missing form field 'uploader'".to_string()))?;
    let (file_name, content) =
        file.ok_or_else(|| ApiError::BadRequest("missing form field 'file'".to_string()))?;

    tracing::info!(
        "[API] Upload to course {} by {}: {} ({} bytes)",
        course_id,
        uploader,
        file_name,
        content.len()
    );
    let video = state
        .video_service
        .upload_video(UploadVideoCommand {
            course_id: course_id.into(),
            uploader,
            file_name,
            content,
        })
        .await?;

    Ok(Json(video_response(&video)))
}

async fn list(
    State(state): State<AppState>,
    Path(course_id): Path<u64>,
) -> Result<Json<Vec<VideoResponse>>, ApiError> {
    let videos = list_videos::execute(&*state.course_repo, course_id.into()).await?;
    Ok(Json(videos.iter().map(video_response).collect()))
}

async fn add_permission(
    State(state): State<AppState>,
    Path((course_id, video_id)): Path<(u64, u64)>,
    Form(form): Form<AddPermissionForm>,
) -> Result<StatusCode, ApiError> {
    state
        .video_service
        .add_permission(AddPermissionCommand {
            course_id: course_id.into(),
            video_id: video_id.into(),
            user: form.user,
        })
        .await?;
    Ok(StatusCode::OK)
}

async fn list_permissions(
    State(state): State<AppState>,
    Path((course_id, video_id)): Path<(u64, u64)>,
) -> Result<Json<BTreeSet<String>>, ApiError> {
    let users = state
        .video_service
        .get_permissions(course_id.into(), video_id.into())
        .await?;
    Ok(Json(users))
}
