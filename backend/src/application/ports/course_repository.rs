// Driven port - Course repository (output port)

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Video, VideoId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    #[error("video {video_id} not found in course {course_id}")]
    VideoNotFound { course_id: CourseId, video_id: VideoId },
}

/// Course storage. Reads hand out owned snapshots; every change to a stored
/// course goes through one of the update methods, which apply it atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Inserts or replaces the course stored under `course.id()`.
    async fn save(&self, course: Course) -> Course;
    async fn find_by_id(&self, id: CourseId) -> Option<Course>;
    /// All courses, ascending by id.
    async fn find_all(&self) -> Vec<Course>;
    async fn add_video(&self, course_id: CourseId, video: Video) -> Result<Video, RepositoryError>;
    /// Returns the allowed-user set after the insertion.
    async fn add_allowed_user(
        &self,
        course_id: CourseId,
        video_id: VideoId,
        user: String,
    ) -> Result<BTreeSet<String>, RepositoryError>;
    async fn allowed_users(
        &self,
        course_id: CourseId,
        video_id: VideoId,
    ) -> Result<BTreeSet<String>, RepositoryError>;
}
