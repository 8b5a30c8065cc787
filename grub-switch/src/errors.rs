use grub_switch_hal::HalError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Permission denied. Exiting.")]
    PermissionDenied(#[source] HalError),

    #[error("Failed to open file: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: HalError,
    },

    #[error("No menu entries found in GRUB configuration {}", path.display())]
    NoMenuEntries { path: PathBuf },

    #[error("Failed to open file: {}", path.display())]
    MountInfoRead {
        path: PathBuf,
        #[source]
        source: HalError,
    },

    #[error("Mount point information is empty in {}", path.display())]
    MountInfoEmpty { path: PathBuf },

    #[error("No osX.txt file found in the shared directory {}.", dir.display())]
    MarkerNotFound { dir: PathBuf },

    #[error("Too many invalid attempts ({attempts}). Exiting.")]
    TooManyAttempts { attempts: u32 },

    #[error("Failed to rename file: {} to {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: HalError,
    },
}
