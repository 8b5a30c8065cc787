//! Top-level menu scanning for `grub.cfg`.
//!
//! The scanner is line based and tracks a single "inside submenu" flag:
//! a `submenu` line contributes its own name and opens the block, the next
//! line containing `}` closes it, and `menuentry` lines only count outside a
//! block. Submenus nested two or more levels deep are not modelled.

use anyhow::Result;
use grub_switch_hal::FsOps;
use std::fmt;
use std::path::Path;

use crate::errors::SwitchError;

const SUBMENU: &str = "submenu";
const MENUENTRY: &str = "menuentry";

/// One selectable boot target, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub index: usize,
    pub name: String,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.name)
    }
}

/// Read `path` through the HAL and return its top-level entries.
///
/// An unreadable file and a file without a single entry are both errors.
pub fn read_menu_entries(hal: &dyn FsOps, path: &Path) -> Result<Vec<MenuEntry>> {
    log::info!("📜 Scanning {}", path.display());
    let content = hal
        .read_to_string(path)
        .map_err(|source| SwitchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = parse_top_level_entries(&content);
    if entries.is_empty() {
        return Err(SwitchError::NoMenuEntries {
            path: path.to_path_buf(),
        }
        .into());
    }
    log::info!("Found {} top-level entries", entries.len());
    Ok(entries)
}

pub fn parse_top_level_entries(content: &str) -> Vec<MenuEntry> {
    let mut names = Vec::new();
    let mut in_submenu = false;

    for line in content.lines() {
        if line.contains(SUBMENU) {
            if in_submenu {
                log::debug!("nested submenu ignored: {}", line.trim());
            } else if let Some(name) = quoted_after(line, SUBMENU) {
                names.push(name.to_string());
            }
            in_submenu = true;
        } else if in_submenu && line.contains('}') {
            in_submenu = false;
        } else if !in_submenu && line.contains(MENUENTRY) {
            match quoted_after(line, MENUENTRY) {
                Some(name) => names.push(name.to_string()),
                None => log::debug!("menuentry without quoted name: {}", line.trim()),
            }
        }
    }

    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| MenuEntry { index, name })
        .collect()
}

/// Text between the first two `'` following `keyword` on `line`.
fn quoted_after<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = &line[line.find(keyword)? + keyword.len()..];
    let start = rest.find('\'')? + 1;
    let len = rest[start..].find('\'')?;
    Some(&rest[start..start + len])
}
