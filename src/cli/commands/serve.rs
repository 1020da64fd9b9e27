//! Start the dashboard server

use std::path::{Path, PathBuf};

use wellatlas::config::{AppConfig, ReferenceDate};
use wellatlas::domain::ports::SystemClock;
use wellatlas::server::{self, App};

/// Command-line overrides applied on top of the loaded config
#[derive(Debug, Default)]
pub struct ServeOverrides {
    /// Interface to bind
    pub host: Option<String>,
    /// Port to bind
    pub port: Option<u16>,
    /// SQLite database path
    pub db: Option<PathBuf>,
    /// Home page reference date
    pub reference_date: Option<ReferenceDate>,
}

impl ServeOverrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = self.db {
            config.database.path = db;
        }
        if let Some(date) = self.reference_date {
            config.dashboard.reference_date = date;
        }
    }
}

/// Load config, apply overrides and serve until interrupted
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> anyhow::Result<()> {
    let mut config = AppConfig::load(config_path)?;
    overrides.apply(&mut config);

    if !config.database.path.is_file() {
        anyhow::bail!("database not found: {}", config.database.path.display());
    }
    if config.map.maptiler_key.is_empty() {
        log::warn!("MAPTILER_KEY is not set; the map will be disabled");
    }

    let port = config.server.port;
    println!("Starting WellAtlas...");
    println!("Open http://localhost:{port} in your browser");
    println!();
    println!("Press Ctrl+C to stop");

    let app = App::new(config, Box::new(SystemClock));
    server::tiny_http::serve(&app)
}
