pub mod create_course;
pub mod list_courses;
pub mod list_videos;
