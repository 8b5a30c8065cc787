//! Linux HAL implementation using real system calls.

use super::{FsOps, ProcessOps};
use crate::{HalError, HalResult};
use nix::unistd::{access, geteuid, AccessFlags};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Real HAL implementation for Linux systems.
#[derive(Debug, Clone, Default)]
pub struct LinuxHal;

impl LinuxHal {
    pub fn new() -> Self {
        Self
    }
}

fn map_command_err(program: &str, err: std::io::Error) -> HalError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return HalError::CommandNotFound(program.to_string());
    }
    HalError::Io(err)
}

impl ProcessOps for LinuxHal {
    fn is_root(&self) -> bool {
        geteuid().is_root()
    }

    fn interactive_status(&self, program: &str, args: &[&str]) -> HalResult<()> {
        log::debug!("exec (interactive): {} {}", program, args.join(" "));
        // stdio stays inherited so password prompts reach the terminal.
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| map_command_err(program, e))?;
        if !status.success() {
            return Err(HalError::CommandFailed {
                program: program.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

impl FsOps for LinuxHal {
    fn read_to_string(&self, path: &Path) -> HalResult<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn file_exists(&self, path: &Path) -> bool {
        fs::File::open(path).is_ok()
    }

    fn is_writable(&self, path: &Path) -> bool {
        access(path, AccessFlags::W_OK).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> HalResult<()> {
        log::info!("rename {} -> {}", from.display(), to.display());
        fs::rename(from, to)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rename_moves_file() {
        let tmp = tempdir().unwrap();
        let from = tmp.path().join("os2.txt");
        let to = tmp.path().join("os1.txt");
        fs::write(&from, "").unwrap();

        LinuxHal::new().rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert!(to.exists());
    }

    #[test]
    fn rename_missing_source_is_io_error() {
        let tmp = tempdir().unwrap();
        let err = LinuxHal::new()
            .rename(&tmp.path().join("os4.txt"), &tmp.path().join("os0.txt"))
            .unwrap_err();
        assert!(matches!(err, HalError::Io(_)));
    }

    #[test]
    fn rename_onto_itself_keeps_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("os3.txt");
        fs::write(&path, "").unwrap();

        LinuxHal::new().rename(&path, &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn file_exists_tracks_real_files() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("grub.cfg");
        let hal = LinuxHal::new();
        assert!(!hal.file_exists(&path));
        fs::write(&path, "menuentry 'Fedora' {\n}\n").unwrap();
        assert!(hal.file_exists(&path));
        assert_eq!(
            hal.read_to_string(&path).unwrap(),
            "menuentry 'Fedora' {\n}\n"
        );
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("grub.cfg");
        fs::write(&path, b"# Caf\xe9\nmenuentry 'Fedora' {\n").unwrap();

        let content = LinuxHal::new().read_to_string(&path).unwrap();
        assert_eq!(content, "# Caf\u{FFFD}\nmenuentry 'Fedora' {\n");
    }

    #[test]
    fn tempdir_is_writable() {
        let tmp = tempdir().unwrap();
        assert!(LinuxHal::new().is_writable(tmp.path()));
    }

    #[test]
    fn missing_program_is_command_not_found() {
        let err = LinuxHal::new()
            .interactive_status("grub-switch-unlikely-binary-123", &[])
            .unwrap_err();
        assert!(matches!(err, HalError::CommandNotFound(_)));
    }
}
