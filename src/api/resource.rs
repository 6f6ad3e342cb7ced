use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{ContactMessage, Experience, Post, Project, Skill};

/// A model stored as a backend collection with full CRUD.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path under the API root, e.g. `projects`.
    const COLLECTION: &'static str;

    /// Whether reads require an admin session.
    const ADMIN_ONLY: bool = false;

    fn id(&self) -> Option<&str>;

    fn collection_path() -> String {
        Self::COLLECTION.to_string()
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION, urlencoding::encode(id))
    }
}

impl Resource for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Experience {
    const COLLECTION: &'static str = "experiences";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Skill {
    const COLLECTION: &'static str = "skills";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for ContactMessage {
    const COLLECTION: &'static str = "admin/messages";
    const ADMIN_ONLY: bool = true;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Path of the singleton profile resource.
pub const PROFILE_PATH: &str = "profile";

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "auth/login";

/// Prefix shared by every admin-only path.
pub const ADMIN_PREFIX: &str = "admin/";
