//! Logging setup
//!
//! The terminal belongs to the UI, so log lines go to a file in the platform
//! data directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use directories::ProjectDirs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "clinic_site=info";

/// Location of the log file, if the platform has a data directory
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "clinic", "clinic-site")
        .map(|dirs| dirs.data_local_dir().join("clinic-site.log"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize tracing with `RUST_LOG` or the default filter
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match log_path().map(|path| open_log_file(&path)) {
        Some(Ok(file)) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()?,
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .try_init()?,
    }

    tracing::info!("Logging initialized");
    Ok(())
}
