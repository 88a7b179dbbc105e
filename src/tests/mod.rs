use anyhow::Result;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::driver::{DriverKind, PageDriver};

pub mod analysis_tests;
pub mod fixtures;

/// Driver stand-in that serves canned HTML and records where it was asked
/// to save.
pub struct StubDriver {
    kind: DriverKind,
    html: String,
    saves: RefCell<Vec<PathBuf>>,
}

impl StubDriver {
    pub fn new(kind: DriverKind, html: &str) -> Self {
        StubDriver {
            kind,
            html: html.to_string(),
            saves: RefCell::new(Vec::new()),
        }
    }

    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.saves.borrow().clone()
    }
}

impl PageDriver for StubDriver {
    fn save_page(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, &self.html)?;
        self.saves.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn kind(&self) -> DriverKind {
        self.kind
    }
}
