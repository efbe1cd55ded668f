use tracing::info;

use filedrop::store::UploadVault;
use filedrop::web::WebServer;
use filedrop::Config;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = filedrop::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        filedrop::logging::init_console_only(&config.logging.level);
    }

    info!("filedrop - resumable file upload server");

    let vault = match UploadVault::new(&config.storage.upload_dir) {
        Ok(vault) => vault,
        Err(e) => {
            tracing::error!("Failed to open upload directory: {}", e);
            std::process::exit(1);
        }
    };
    info!("Upload directory: {}", config.storage.upload_dir);

    // The resumable-upload engine is wired in by embedders via
    // WebServer::with_engine; without one, the upload path answers 404
    // and the management API still serves the directory contents.
    let server = WebServer::new(&config.server, vault);

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
