//! CLI argument parsing for grub-switch
//!
//! No arguments are needed for normal use; every flag only overrides a default.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{SwitchConfig, DEFAULT_GRUB_CFG, DEFAULT_MOUNT_INFO};

#[derive(Parser, Debug)]
#[command(name = "grub-switch", version)]
#[command(about = "🔀 Choose which system boots next")]
#[command(long_about = "🔀 Choose which system boots next\n\n\
    Lists the top-level entries of grub.cfg and records the chosen index by\n\
    renaming the osN.txt marker in the shared directory read at boot.")]
pub struct Cli {
    /// GRUB configuration to read menu entries from
    #[arg(long, default_value = DEFAULT_GRUB_CFG)]
    pub grub_cfg: PathBuf,

    /// File holding the shared mount point (one line)
    #[arg(long, default_value = DEFAULT_MOUNT_INFO)]
    pub mount_info: PathBuf,

    /// Walk through every step but do not rename the marker
    #[arg(long)]
    pub dry_run: bool,

    /// Append log records to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self) -> SwitchConfig {
        SwitchConfig {
            grub_cfg: self.grub_cfg.clone(),
            mount_info: self.mount_info.clone(),
            dry_run: self.dry_run,
            ..SwitchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_fixed_paths() {
        let cli = Cli::try_parse_from(["grub-switch"]).unwrap();
        let cfg = cli.to_config();
        assert_eq!(cfg.grub_cfg, PathBuf::from("/boot/grub/grub.cfg"));
        assert_eq!(cfg.mount_info, PathBuf::from("/etc/grub_shared_mount.info"));
        assert!(!cfg.dry_run);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn overrides_flow_into_config() {
        let cli = Cli::try_parse_from([
            "grub-switch",
            "--grub-cfg",
            "/tmp/grub.cfg",
            "--mount-info",
            "/tmp/mount.info",
            "--dry-run",
        ])
        .unwrap();
        let cfg = cli.to_config();
        assert_eq!(cfg.grub_cfg, PathBuf::from("/tmp/grub.cfg"));
        assert_eq!(cfg.mount_info, PathBuf::from("/tmp/mount.info"));
        assert!(cfg.dry_run);
        assert_eq!(cfg.max_attempts, 5);
    }
}
