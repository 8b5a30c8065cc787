//! The shared directory and its `osN.txt` marker.
//!
//! The boot-time script reads `<mount point>/.grub_shared/osN.txt`; exactly one
//! marker is expected to exist and its number is the selected menu index.

use anyhow::Result;
use grub_switch_hal::FsOps;
use std::path::{Path, PathBuf};

use crate::errors::SwitchError;

/// `<first line of mount_info>/<shared_dir_name>`.
pub fn resolve_shared_dir(
    hal: &dyn FsOps,
    mount_info: &Path,
    shared_dir_name: &str,
) -> Result<PathBuf> {
    let content = hal
        .read_to_string(mount_info)
        .map_err(|source| SwitchError::MountInfoRead {
            path: mount_info.to_path_buf(),
            source,
        })?;

    let mount_point = content.lines().next().unwrap_or_default();
    if mount_point.is_empty() {
        return Err(SwitchError::MountInfoEmpty {
            path: mount_info.to_path_buf(),
        }
        .into());
    }

    let dir = Path::new(mount_point).join(shared_dir_name);
    log::info!("📁 Shared directory: {}", dir.display());
    Ok(dir)
}

pub fn marker_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("os{index}.txt"))
}

/// Index encoded in a marker file name (`os7.txt` -> 7).
pub fn marker_index(path: &Path) -> Option<usize> {
    path.file_name()?
        .to_str()?
        .strip_prefix("os")?
        .strip_suffix(".txt")?
        .parse()
        .ok()
}

/// Probe `os0.txt`, `os1.txt`, ... in order and return the first that exists.
///
/// This is an existence probe, not a listing: markers at or beyond `slots`
/// are never found.
pub fn find_marker(hal: &dyn FsOps, dir: &Path, slots: usize) -> Option<PathBuf> {
    (0..slots).map(|i| marker_path(dir, i)).find(|candidate| {
        let exists = hal.file_exists(candidate);
        log::debug!("probe {} -> {}", candidate.display(), exists);
        exists
    })
}

pub fn locate_marker(hal: &dyn FsOps, dir: &Path, slots: usize) -> Result<PathBuf> {
    find_marker(hal, dir, slots).ok_or_else(|| {
        SwitchError::MarkerNotFound {
            dir: dir.to_path_buf(),
        }
        .into()
    })
}
