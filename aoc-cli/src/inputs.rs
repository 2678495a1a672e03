//! Puzzle inputs read from a local directory tree

use aoc_solver::InputVariant;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a day's input comes from
///
/// Directory structure: `{root}/{year}/day{DD}.txt`, with
/// `day{DD}.example.txt` next to it for the example fixture.
#[derive(Debug, Clone)]
pub enum InputStore {
    Dir { root: PathBuf, variant: InputVariant },
    /// One file used for whichever day is selected
    File(PathBuf),
}

impl InputStore {
    pub fn dir(root: impl Into<PathBuf>, variant: InputVariant) -> Self {
        InputStore::Dir {
            root: root.into(),
            variant,
        }
    }

    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match self {
            InputStore::Dir { root, variant } => {
                root.join(year.to_string()).join(variant.file_name(day))
            }
            InputStore::File(path) => path.clone(),
        }
    }

    /// Recorded answers only apply to inputs taken from the store
    pub fn verifies(&self) -> bool {
        matches!(self, InputStore::Dir { .. })
    }

    pub fn variant(&self) -> InputVariant {
        match self {
            InputStore::Dir { variant, .. } => *variant,
            InputStore::File(_) => InputVariant::Full,
        }
    }

    pub fn read(&self, year: u16, day: u8) -> io::Result<(PathBuf, String)> {
        let path = self.path(year, day);
        let content = read_normalized(&path)?;
        Ok((path, content))
    }
}

/// Read a file, dropping `\r` from CRLF line endings
fn read_normalized(path: &Path) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    if content.contains('\r') {
        Ok(content.replace("\r\n", "\n"))
    } else {
        Ok(content)
    }
}
