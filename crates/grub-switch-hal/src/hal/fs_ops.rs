//! Filesystem operations used by the selection workflow.

use crate::HalResult;
use std::path::Path;

pub trait FsOps {
    /// Whole file as text; invalid UTF-8 sequences become U+FFFD.
    fn read_to_string(&self, path: &Path) -> HalResult<String>;

    /// True when `path` names something that can be opened for reading.
    fn file_exists(&self, path: &Path) -> bool;

    /// True when the caller may write to `path` (`access(2)` with `W_OK`).
    fn is_writable(&self, path: &Path) -> bool;

    /// Single `rename(2)`: either the file moves or the source is left untouched.
    fn rename(&self, from: &Path, to: &Path) -> HalResult<()>;
}
