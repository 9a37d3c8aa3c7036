use std::env;

use dotenvy::dotenv;
use figdrop::config::{self, AppConfig};
use figdrop::infrastructure::storage::setup_storage;
use figdrop::services::plot;
use figdrop::services::storage::RemoteStorage;
use figdrop::utils::hash::dropbox_content_hash;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "figdrop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting figdrop...");

    // Generate the sample plot in the current working directory. Any render
    // or filesystem error here is fatal.
    let local_path = env::current_dir()?.join(config::SAMPLE_IMAGE_FILENAME);
    plot::generate_sample_image(&local_path)?;
    info!("🖼️  Sample plot written to {}", local_path.display());

    // Credential problems stop the run before any upload is attempted.
    let app_config = AppConfig::from_env()?;
    let storage = setup_storage(&app_config).await?;

    let remote_path = config::remote_path_for(config::SAMPLE_IMAGE_FILENAME);
    match storage.upload_file(&local_path, &remote_path).await {
        Ok(meta) => {
            info!(
                "✅ Uploaded {} ({} bytes, rev {})",
                meta.display_path(),
                meta.size,
                meta.rev
            );

            let local_hash = dropbox_content_hash(&tokio::fs::read(&local_path).await?);
            match meta.content_hash.as_deref() {
                Some(remote_hash) if remote_hash == local_hash => {
                    info!("🔒 Content hash verified ({})", local_hash);
                }
                Some(remote_hash) => {
                    warn!(
                        "⚠️  Content hash mismatch: local {} vs remote {}",
                        local_hash, remote_hash
                    );
                }
                None => warn!("⚠️  Upload metadata carried no content hash"),
            }
        }
        // An upload failure is logged but does not change the exit status;
        // callers observe it through the log line only.
        Err(e) => error!("❌ Error uploading file to Dropbox: {}", e),
    }

    Ok(())
}
