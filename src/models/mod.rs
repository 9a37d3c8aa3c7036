use serde::Deserialize;

/// Metadata returned by Dropbox after `files/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    pub id: String,
    pub rev: String,
    pub size: u64,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
    pub content_hash: Option<String>,
    pub client_modified: Option<String>,
    pub server_modified: Option<String>,
}

impl FileMetadata {
    /// Display path when Dropbox provides one, otherwise the bare filename.
    pub fn display_path(&self) -> &str {
        self.path_display.as_deref().unwrap_or(&self.name)
    }
}

/// Subset of `users/get_current_account` used to confirm the credential.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub account_id: String,
    pub name: AccountName,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountName {
    pub display_name: String,
}
