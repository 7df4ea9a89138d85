//! Server startup utilities.

use gorest_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______      ____  _____________________   ____
  / ____/___  / __ \/ ____/ ___/_  __/   /  / __ \_________  _  ____  __
 / / __/ __ \/ /_/ / __/  \__ \ / /     /  / /_/ / ___/ __ \| |/_/ / / /
/ /_/ / /_/ / _, _/ /___ ___/ // /     /  / ____/ /  / /_/ />  </ /_/ /
\____/\____/_/ |_/_____//____//_/     /  /_/   /_/   \____/_/|_|\__, /
                                                               /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("REST API:  http://{}/api/{{users,posts,comments,todos}}", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/api-docs/openapi.json", addr);
    info!("Database:  {}", config.database.url);
    info!("Remote:    {}", config.remote.base_url);
    info!("{}", separator);
}
