//! Claude Desktop detection.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

const DESKTOP_CONFIG_FILE: &str = "claude_desktop_config.json";

/// What was found of a Claude Desktop installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesktopInfo {
    /// Platform configuration directory, `None` on unsupported platforms
    pub config_dir: Option<PathBuf>,
    /// Whether `claude_desktop_config.json` exists
    pub detected: bool,
    pub storage_path: Option<PathBuf>,
    pub indexeddb_path: Option<PathBuf>,
}

/// Resolve the Claude Desktop directory for an operating system name as
/// reported by `std::env::consts::OS`.
pub fn desktop_dir_for(
    os: &str,
    home: &Path,
    appdata: Option<&str>,
    xdg_config_home: Option<&str>,
) -> Option<PathBuf> {
    match os {
        "macos" => Some(home.join("Library/Application Support/Claude")),
        "windows" => Some(PathBuf::from(appdata.unwrap_or_default()).join("Claude")),
        "linux" => {
            let base = match xdg_config_home {
                Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
                _ => home.join(".config"),
            };
            Some(base.join("Claude"))
        }
        _ => None,
    }
}

/// Claude Desktop directory on the current platform.
pub fn desktop_config_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let appdata = std::env::var("APPDATA").ok();
    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    desktop_dir_for(
        std::env::consts::OS,
        &home,
        appdata.as_deref(),
        xdg.as_deref(),
    )
}

async fn existing(path: PathBuf) -> Option<PathBuf> {
    match fs::try_exists(&path).await {
        Ok(true) => Some(path),
        _ => None,
    }
}

/// `Local Storage` under a Claude Desktop directory, if present.
pub async fn desktop_storage_path(dir: &Path) -> Option<PathBuf> {
    existing(dir.join("Local Storage")).await
}

/// `IndexedDB` under a Claude Desktop directory, if present.
pub async fn desktop_indexeddb_path(dir: &Path) -> Option<PathBuf> {
    existing(dir.join("IndexedDB")).await
}

/// Inspect a Claude Desktop directory.
pub async fn inspect_desktop_dir(dir: &Path) -> DesktopInfo {
    DesktopInfo {
        config_dir: Some(dir.to_path_buf()),
        detected: existing(dir.join(DESKTOP_CONFIG_FILE)).await.is_some(),
        storage_path: desktop_storage_path(dir).await,
        indexeddb_path: desktop_indexeddb_path(dir).await,
    }
}

/// Inspect the Claude Desktop installation of the current platform.
pub async fn detect_desktop() -> DesktopInfo {
    match desktop_config_dir() {
        Some(dir) => inspect_desktop_dir(&dir).await,
        None => DesktopInfo::default(),
    }
}
