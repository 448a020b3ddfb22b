use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use crate::application::ports::{CourseRepository, RepositoryError, VideoStorage};
use crate::domain::{CourseId, Sequence, Video, VideoId};

/// Input of the upload use case.
#[derive(Debug)]
pub struct UploadVideoCommand {
    pub course_id: CourseId,
    pub uploader: String,
    /// Name the client gave the file. Only its last path component is kept.
    pub file_name: String,
    pub content: Bytes,
}

#[derive(Debug)]
pub struct AddPermissionCommand {
    pub course_id: CourseId,
    pub video_id: VideoId,
    pub user: String,
}

/// Uploads videos into courses and maintains their allowed-user sets.
pub struct VideoService {
    courses: Arc<dyn CourseRepository>,
    storage: Arc<dyn VideoStorage>,
    video_ids: Sequence,
}

impl VideoService {
    pub fn new(courses: Arc<dyn CourseRepository>, storage: Arc<dyn VideoStorage>) -> Self {
        Self::with_sequence(courses, storage, Sequence::new())
    }

    pub fn with_sequence(
        courses: Arc<dyn CourseRepository>,
        storage: Arc<dyn VideoStorage>,
        video_ids: Sequence,
    ) -> Self {
        Self {
            courses,
            storage,
            video_ids,
        }
    }

    pub async fn upload_video(&self, cmd: UploadVideoCommand) -> Result<Video, ServiceError> {
        if self.courses.find_by_id(cmd.course_id).await.is_none() {
            return Err(ServiceError::CourseNotFound(cmd.course_id));
        }
        let original_name = base_file_name(&cmd.file_name)?;

        let id = VideoId::new(self.video_ids.next());
        let stored_name = self
            .storage
            .store(&format!("{id}_{original_name}"), &cmd.content)
            .await?;

        let video = Video::new(id, stored_name.clone(), cmd.uploader);
        match self.courses.add_video(cmd.course_id, video).await {
            Ok(video) => {
                info!(
                    "Video {} uploaded to course {} by {} ({} bytes)",
                    video.id(),
                    cmd.course_id,
                    video.uploader(),
                    cmd.content.len()
                );
                Ok(video)
            }
            Err(err) => {
                // The bytes are already on disk, drop them again.
                if let Err(io_err) = self.storage.remove(&stored_name).await {
                    warn!("Failed to remove orphaned upload {}: {}", stored_name, io_err);
                }
                Err(err.into())
            }
        }
    }

    /// Grants `user` access to a video. Granting twice is harmless.
    pub async fn add_permission(
        &self,
        cmd: AddPermissionCommand,
    ) -> Result<BTreeSet<String>, ServiceError> {
        let users = self
            .courses
            .add_allowed_user(cmd.course_id, cmd.video_id, cmd.user.clone())
            .await?;
        info!(
            "User {} granted access to video {} in course {}",
            cmd.user, cmd.video_id, cmd.course_id
        );
        Ok(users)
    }

    pub async fn get_permissions(
        &self,
        course_id: CourseId,
        video_id: VideoId,
    ) -> Result<BTreeSet<String>, ServiceError> {
        Ok(self.courses.allowed_users(course_id, video_id).await?)
    }
}

fn base_file_name(original: &str) -> Result<&str, ServiceError> {
    Path::new(original)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ServiceError::InvalidFileName(original.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("video {video_id} not found in course {course_id}")]
    VideoNotFound { course_id: CourseId, video_id: VideoId },
    #[error("invalid file name {0:?}")]
    InvalidFileName(String),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::CourseNotFound(id) => ServiceError::CourseNotFound(id),
            RepositoryError::VideoNotFound {
                course_id,
                video_id,
            } => ServiceError::VideoNotFound {
                course_id,
                video_id,
            },
        }
    }
}
