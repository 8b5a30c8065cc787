//! Privilege acquisition before anything under `/boot` or the shared mount is touched.

use anyhow::Result;
use grub_switch_hal::ProcessOps;
use std::io::Write;

use crate::errors::SwitchError;

const ELEVATE_PROGRAM: &str = "sudo";
const ELEVATE_ARGS: &[&str] = &["-v"];

/// Make sure we either are root or hold a fresh `sudo` timestamp.
///
/// `sudo -v` may prompt for a password on the terminal; only its exit status
/// is used.
pub fn request_permissions(hal: &dyn ProcessOps, out: &mut dyn Write) -> Result<()> {
    if hal.is_root() {
        log::info!("Already running as root; skipping elevation");
        return Ok(());
    }

    writeln!(
        out,
        "Attempting to modify system files. Please enter the appropriate credentials \
         or run with elevated privileges (sudo)."
    )?;
    out.flush()?;

    hal.interactive_status(ELEVATE_PROGRAM, ELEVATE_ARGS)
        .map_err(SwitchError::PermissionDenied)?;
    log::info!("🔑 Elevation granted");
    Ok(())
}
