//! grub-switch OS abstraction layer (HAL).
//!
//! Everything that touches the host (spawning `sudo`, reading `/boot` and
//! `/etc`, renaming marker files) goes through these traits so the selection
//! workflow can be tested without root or a real GRUB install.

pub mod error;
pub mod hal;

pub use error::{HalError, HalResult};
pub use hal::{FakeHal, FsOps, LinuxHal, Operation, ProcessOps, SwitchHal};
