use anyhow::Result;
use grub_switch_hal::FsOps;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SwitchConfig;
use crate::errors::SwitchError;
use crate::shared_dir::marker_path;

/// Rename `marker` to `os<index>.txt` in `dir` and return the new path.
///
/// Re-selecting the active index still issues the rename (source == target).
pub fn commit_selection(
    hal: &dyn FsOps,
    cfg: &SwitchConfig,
    dir: &Path,
    marker: &Path,
    index: usize,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    let target = marker_path(dir, index);

    if index >= cfg.marker_slots {
        log::warn!(
            "{} is outside os0..os{} and will not be found on the next run",
            target.display(),
            cfg.marker_slots.saturating_sub(1)
        );
    }
    if !hal.is_writable(dir) {
        log::warn!("No write permission on {}", dir.display());
    }

    if cfg.dry_run {
        writeln!(
            out,
            "(dry-run) would rename {} to {}",
            marker.display(),
            target.display()
        )?;
        return Ok(target);
    }

    hal.rename(marker, &target)
        .map_err(|source| SwitchError::Rename {
            from: marker.to_path_buf(),
            to: target.clone(),
            source,
        })?;

    writeln!(out, "File renamed successfully to: {}", target.display())?;
    Ok(target)
}
