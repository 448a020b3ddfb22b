pub mod course_id;
pub mod sequence;
pub mod video_id;

pub use course_id::CourseId;
pub use sequence::Sequence;
pub use video_id::VideoId;
