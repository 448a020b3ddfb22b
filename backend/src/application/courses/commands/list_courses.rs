use crate::application::ports::CourseRepository;
use crate::domain::Course;

pub async fn execute<R: CourseRepository + ?Sized>(repo: &R) -> Vec<Course> {
    repo.find_all().await
}
