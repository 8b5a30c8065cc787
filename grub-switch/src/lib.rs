//! grub-switch: choose the next boot target.
//!
//! Pipeline: elevate -> scan `grub.cfg` -> resolve the shared directory ->
//! find the `osN.txt` marker -> prompt for an index -> rename the marker.
//! Any failing stage aborts the run before later stages touch anything.

use anyhow::Result;
use grub_switch_hal::{LinuxHal, SwitchHal};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub mod cli;
pub mod commit;
pub mod config;
pub mod errors;
pub mod grub_cfg;
pub mod logging;
pub mod preflight;
pub mod select;
pub mod shared_dir;

use config::SwitchConfig;

pub fn run(cli: &cli::Cli) -> Result<()> {
    let hal = LinuxHal::new();
    let stdin = io::stdin();
    run_with(
        &hal,
        &cli.to_config(),
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    Ok(())
}

/// Run the whole selection against `hal`, returning the marker's new path.
pub fn run_with<H: SwitchHal>(
    hal: &H,
    cfg: &SwitchConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<PathBuf> {
    preflight::request_permissions(hal, out)?;

    let entries = grub_cfg::read_menu_entries(hal, &cfg.grub_cfg)?;
    let dir = shared_dir::resolve_shared_dir(hal, &cfg.mount_info, &cfg.shared_dir_name)?;
    let marker = shared_dir::locate_marker(hal, &dir, cfg.marker_slots)?;
    log::info!("Current marker: {}", marker.display());

    select::print_entries(&entries, out)?;
    if let Some(current) = shared_dir::marker_index(&marker) {
        writeln!(out, "Currently selected: {current}")?;
    }
    let index = select::prompt_selection(&entries, cfg.max_attempts, input, out, err)?;

    commit::commit_selection(hal, cfg, &dir, &marker, index, out)
}
