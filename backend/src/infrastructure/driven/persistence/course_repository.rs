use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{CourseRepository, RepositoryError};
use crate::domain::{Course, CourseId, Video, VideoId};

/// In-memory implementation of CourseRepository.
/// Contents live as long as the process does.
#[derive(Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<HashMap<CourseId, Course>>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn save(&self, course: Course) -> Course {
        let mut courses = self.courses.write().await;
        courses.insert(course.id(), course.clone());
        course
    }

    async fn find_by_id(&self, id: CourseId) -> Option<Course> {
        let courses = self.courses.read().await;
        courses.get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<Course> {
        let courses = self.courses.read().await;
        let mut all: Vec<Course> = courses.values().cloned().collect();
        all.sort_by_key(|c| c.id());
        all
    }

    async fn add_video(&self, course_id: CourseId, video: Video) -> Result<Video, RepositoryError> {
        let mut courses = self.courses.write().await;
        let course = courses
            .get_mut(&course_id)
            .ok_or(RepositoryError::CourseNotFound(course_id))?;
        course.add_video(video.clone());
        Ok(video)
    }

    async fn add_allowed_user(
        &self,
        course_id: CourseId,
        video_id: VideoId,
        user: String,
    ) -> Result<BTreeSet<String>, RepositoryError> {
        let mut courses = self.courses.write().await;
        let video = courses
            .get_mut(&course_id)
            .ok_or(RepositoryError::CourseNotFound(course_id))?
            .find_video_mut(video_id)
            .ok_or(RepositoryError::VideoNotFound { course_id, video_id })?;
        video.grant(user);
        Ok(video.allowed_users().clone())
    }

    async fn allowed_users(
        &self,
        course_id: CourseId,
        video_id: VideoId,
    ) -> Result<BTreeSet<String>, RepositoryError> {
        let courses = self.courses.read().await;
        courses
            .get(&course_id)
            .ok_or(RepositoryError::CourseNotFound(course_id))?
            .find_video(video_id)
            .map(|video| video.allowed_users().clone())
            .ok_or(RepositoryError::VideoNotFound { course_id, video_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: u64, uploader: &str) -> Video {
        Video::new(VideoId::new(id), format!("{id}_clip.mp4"), uploader.to_string())
    }

    #[tokio::test]
    async fn save_replaces_existing_entry() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new(CourseId::new(1), Some("old".into()))).await;
        repo.save(Course::new(CourseId::new(1), Some("new".into()))).await;

        let all = repo.find_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title(), Some("new"));
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryCourseRepository::new();
        for id in [3, 1, 2] {
            repo.save(Course::new(CourseId::new(id), None)).await;
        }

        let ids: Vec<u64> = repo.find_all().await.iter().map(|c| c.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn find_by_id_returns_a_detached_snapshot() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new(CourseId::new(1), None)).await;

        let mut snapshot = repo.find_by_id(CourseId::new(1)).await.unwrap();
        snapshot.add_video(video(1, "alice"));

        let stored = repo.find_by_id(CourseId::new(1)).await.unwrap();
        assert!(stored.videos().is_empty());
        assert!(repo.find_by_id(CourseId::new(2)).await.is_none());
    }

    #[tokio::test]
    async fn add_video_requires_existing_course() {
        let repo = InMemoryCourseRepository::new();
        let err = repo.add_video(CourseId::new(4), video(1, "alice")).await.unwrap_err();
        assert_eq!(err, RepositoryError::CourseNotFound(CourseId::new(4)));
    }

    #[tokio::test]
    async fn add_allowed_user_reports_missing_video() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new(CourseId::new(1), None)).await;
        repo.add_video(CourseId::new(1), video(1, "alice")).await.unwrap();

        let users = repo
            .add_allowed_user(CourseId::new(1), VideoId::new(1), "bob".into())
            .await
            .unwrap();
        assert_eq!(users, BTreeSet::from(["alice".to_string(), "bob".to_string()]));

        let err = repo
            .add_allowed_user(CourseId::new(1), VideoId::new(2), "bob".into())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RepositoryError::VideoNotFound {
                course_id: CourseId::new(1),
                video_id: VideoId::new(2)
            }
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_and_grants_are_not_lost() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new(CourseId::new(1), None)).await;
        repo.add_video(CourseId::new(1), video(1, "alice")).await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..50u64 {
            let repo = repo.clone();
            tasks.push(tokio::spawn(async move {
                repo.add_video(CourseId::new(1), video(100 + i, "alice")).await.unwrap();
                repo.add_allowed_user(CourseId::new(1), VideoId::new(1), format!("user{i}"))
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let course = repo.find_by_id(CourseId::new(1)).await.unwrap();
        assert_eq!(course.videos().len(), 51);
        let users = repo.allowed_users(CourseId::new(1), VideoId::new(1)).await.unwrap();
        assert_eq!(users.len(), 51);
    }
}
