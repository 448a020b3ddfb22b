use std::collections::BTreeSet;

use crate::domain::value_objects::VideoId;

/// An uploaded file and the users allowed to access it.
///
/// The uploader is always part of the allowed set from construction on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    id: VideoId,
    file_name: String,
    uploader: String,
    allowed_users: BTreeSet<String>,
}

impl Video {
    pub fn new(id: VideoId, file_name: String, uploader: String) -> Self {
        let allowed_users = BTreeSet::from([uploader.clone()]);
        Self {
            id,
            file_name,
            uploader,
            allowed_users,
        }
    }

    pub fn id(&self) -> VideoId {
        self.id
    }

    /// Name of the stored file, `{id}_{original name}`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn uploader(&self) -> &str {
        &self.uploader
    }

    pub fn allowed_users(&self) -> &BTreeSet<String> {
        &self.allowed_users
    }

    /// Returns false if the user already had access.
    pub fn grant(&mut self, user: impl Into<String>) -> bool {
        self.allowed_users.insert(user.into())
    }
}
