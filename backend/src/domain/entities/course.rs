use crate::domain::entities::Video;
use crate::domain::value_objects::{CourseId, VideoId};

/// A course owns its videos; they are kept in upload order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: Option<String>,
    videos: Vec<Video>,
}

impl Course {
    pub fn new(id: CourseId, title: Option<String>) -> Self {
        Self {
            id,
            title,
            videos: Vec::new(),
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
    }

    pub fn find_video(&self, video_id: VideoId) -> Option<&Video> {
        self.videos.iter().find(|v| v.id() == video_id)
    }

    pub fn find_video_mut(&mut self, video_id: VideoId) -> Option<&mut Video> {
        self.videos.iter_mut().find(|v| v.id() == video_id)
    }
}
