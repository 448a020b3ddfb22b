// Infrastructure layer - external concerns (HTTP, filesystem, in-memory storage)
// Implements interfaces defined in application layer

use std::sync::Arc;

use crate::application::ports::{CourseRepository, VideoStorage};
use crate::application::videos::VideoService;
use crate::domain::Sequence;

pub mod config;
pub mod driven;    // Output adapters (repositories, file storage)
pub mod driving;   // Input adapters (HTTP)

#[derive(Clone)]
pub struct AppState {
    pub course_repo: Arc<dyn CourseRepository>,
    /// Course ids are handed out here, not by the repository.
    pub course_ids: Arc<Sequence>,
    pub video_service: Arc<VideoService>,
}

impl AppState {
    pub fn new(course_repo: Arc<dyn CourseRepository>, storage: Arc<dyn VideoStorage>) -> Self {
        let video_service = VideoService::new(course_repo.clone(), storage);
        Self {
            course_repo,
            course_ids: Arc::new(Sequence::new()),
            video_service: Arc::new(video_service),
        }
    }
}
