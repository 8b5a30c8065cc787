use std::path::PathBuf;

pub const DEFAULT_GRUB_CFG: &str = "/boot/grub/grub.cfg";
pub const DEFAULT_MOUNT_INFO: &str = "/etc/grub_shared_mount.info";
pub const SHARED_DIR_NAME: &str = ".grub_shared";
const MAX_ATTEMPTS: u32 = 5;
/// `os0.txt` .. `os9.txt`
const MARKER_SLOTS: usize = 10;

/// Where to look and how patient to be. `Default` is the production layout.
#[derive(Clone, Debug)]
pub struct SwitchConfig {
    pub grub_cfg: PathBuf,
    pub mount_info: PathBuf,
    /// Appended to the mount point read from `mount_info`.
    pub shared_dir_name: String,
    pub max_attempts: u32,
    pub marker_slots: usize,
    pub dry_run: bool,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            grub_cfg: PathBuf::from(DEFAULT_GRUB_CFG),
            mount_info: PathBuf::from(DEFAULT_MOUNT_INFO),
            shared_dir_name: SHARED_DIR_NAME.to_string(),
            max_attempts: MAX_ATTEMPTS,
            marker_slots: MARKER_SLOTS,
            dry_run: false,
        }
    }
}

impl SwitchConfig {
    /// Production layout with the two input files swapped for other paths.
    pub fn with_paths(grub_cfg: impl Into<PathBuf>, mount_info: impl Into<PathBuf>) -> Self {
        Self {
            grub_cfg: grub_cfg.into(),
            mount_info: mount_info.into(),
            ..Self::default()
        }
    }
}
