pub mod video_service;

pub use video_service::{AddPermissionCommand, ServiceError, UploadVideoCommand, VideoService};
