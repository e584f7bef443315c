use crate::settings::load_from_path;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strcalc_core::ConfigHandle;

/// Reloads `path` and publishes the result on `handle`.
///
/// A file that fails to load leaves the current snapshot in place. Returns
/// whether a new snapshot was published.
pub fn reload(path: &Path, handle: &ConfigHandle) -> bool {
    match load_from_path(path) {
        Ok(config) => {
            handle.publish(config);
            log::info!("Reloaded calculator settings");
            true
        }
        Err(e) => {
            log::warn!("Keeping previous settings: {}", e);
            false
        }
    }
}

/// Watches the settings file and republishes it on every change.
///
/// The parent directory is watched rather than the file itself so editors
/// that save by rename are still picked up. Dropping the returned watcher
/// stops reloading.
pub fn spawn(path: PathBuf, handle: Arc<ConfigHandle>) -> notify::Result<RecommendedWatcher> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path.file_name().map(|n| n.to_os_string());

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                    return;
                }
                let touches_settings = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                if touches_settings {
                    reload(&path, &handle);
                }
            }
            Err(e) => log::error!("watch error: {:?}", e),
        },
        Config::default(),
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    log::info!("Watching {:?} for settings changes", dir);

    Ok(watcher)
}
