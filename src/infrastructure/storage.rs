use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::storage::{DropboxStorage, RemoteStorage};

/// Builds the Dropbox client and verifies the credential before anything is
/// uploaded. A rejected or unreachable credential stops the process here
/// rather than surfacing mid-upload.
pub async fn setup_storage(config: &AppConfig) -> Result<Arc<DropboxStorage>, AppError> {
    let storage = Arc::new(DropboxStorage::new(config.access_token.clone()));

    let account = storage.verify_credentials().await?;
    info!(
        "☁️  Dropbox account: {} ({})",
        account.name.display_name, account.account_id
    );

    Ok(storage)
}
