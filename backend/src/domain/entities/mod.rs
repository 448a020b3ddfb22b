pub mod course;
pub mod video;

pub use course::Course;
pub use video::Video;
