use crate::application::ports::CourseRepository;
use crate::domain::{Course, CourseId, Sequence};

/// Assigns the next course id and stores an empty course under it.
pub async fn execute<R: CourseRepository + ?Sized>(
    repo: &R,
    course_ids: &Sequence,
    title: Option<String>,
) -> Course {
    let course = Course::new(CourseId::new(course_ids.next()), title);
    repo.save(course).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::driven::InMemoryCourseRepository;

    #[tokio::test]
    async fn two_courses_get_distinct_increasing_ids() {
        let repo = InMemoryCourseRepository::new();
        let ids = Sequence::new();

        let first = execute(&repo, &ids, Some("Rust".into())).await;
        let second = execute(&repo, &ids, None).await;

        assert_eq!(first.id(), CourseId::new(1));
        assert_eq!(second.id(), CourseId::new(2));
        assert_eq!(first.title(), Some("Rust"));
        assert!(first.videos().is_empty());
        assert_eq!(repo.find_all().await.len(), 2);
    }
}
