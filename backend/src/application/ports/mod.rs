// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod course_repository;
pub mod video_storage;

pub use course_repository::{CourseRepository, RepositoryError};
pub use video_storage::VideoStorage;
