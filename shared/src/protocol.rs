use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Version of the JSON contract below. Bump on any breaking field change.
pub const PROTOCOL_VERSION: &str = "1";

/// Body of `POST /api/courses`.
///
/// Any `id` or `videos` a client sends is ignored: identifiers are always
/// assigned by the server and a new course starts empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    pub videos: Vec<VideoResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: u64,
    pub file_name: String,
    pub uploader: String,
    pub allowed_users: BTreeSet<String>,
}

/// Form body of `POST /api/courses/{courseId}/videos/{videoId}/permissions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPermissionForm {
    pub user: String,
}

/// Multipart field names accepted by the upload route.
pub mod upload_fields {
    pub const UPLOADER: &str = "uploader";
    pub const FILE: &str = "file";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub protocol_version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
        }
    }
}
