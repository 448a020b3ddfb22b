pub mod course_repository;

pub use course_repository::InMemoryCourseRepository;
