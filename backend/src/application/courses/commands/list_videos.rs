use crate::application::ports::CourseRepository;
use crate::application::videos::ServiceError;
use crate::domain::{CourseId, Video};

/// Videos of a course, in upload order.
pub async fn execute<R: CourseRepository + ?Sized>(
    repo: &R,
    course_id: CourseId,
) -> Result<Vec<Video>, ServiceError> {
    repo.find_by_id(course_id)
        .await
        .map(|course| course.videos().to_vec())
        .ok_or(ServiceError::CourseNotFound(course_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, VideoId};
    use crate::infrastructure::driven::InMemoryCourseRepository;

    #[tokio::test]
    async fn lists_videos_in_upload_order() {
        let repo = InMemoryCourseRepository::new();
        repo.save(Course::new(CourseId::new(1), None)).await;
        for id in 1..=3 {
            let video = Video::new(VideoId::new(id), format!("{id}_v.mp4"), "alice".into());
            repo.add_video(CourseId::new(1), video).await.unwrap();
        }

        let videos = execute(&repo, CourseId::new(1)).await.unwrap();

        let ids: Vec<u64> = videos.iter().map(|v| v.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let repo = InMemoryCourseRepository::new();
        let err = execute(&repo, CourseId::new(3)).await.unwrap_err();
        assert!(matches!(err, ServiceError::CourseNotFound(_)));
    }
}
