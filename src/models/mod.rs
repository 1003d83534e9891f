use serde::Deserialize;

// ============================================================================
// Backend records
// ============================================================================

/// Image row returned by `GET /api/getImage`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    pub slug: String,
    pub img_url: String,
    pub id: String,
    /// Kept as the backend's string; the page never formats it.
    pub uploaded_at: String,
    /// Owner id, used for the preference lookup.
    pub uploaded_by: String,
}

/// Embed customization of the uploader.
///
/// Every field is optional: missing keys and JSON `null` both deserialize
/// to `None`, and unknown keys in the user object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OwnerPreferences {
    pub embed_title: Option<String>,
    pub embed_site_name: Option<String>,
    pub embed_site_url: Option<String>,
    pub embed_author_name: Option<String>,
    pub embed_desc: Option<String>,
    /// Hex colour without the leading `#`.
    pub embed_colour: Option<String>,
    pub custom_css: Option<String>,
}

/// Envelope of `GET /api/user`: `{ "data": { "user": { ... } } }`.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub data: UserData,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: OwnerPreferences,
}

// ============================================================================
// Lookup result
// ============================================================================

/// Outcome of a backend lookup that answered. A non-200 answer is
/// `NotFound`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T: Default> Lookup<T> {
    pub fn unwrap_or_default(self) -> T {
        match self {
            Lookup::Found(value) => value,
            Lookup::NotFound => T::default(),
        }
    }
}
