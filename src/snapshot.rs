use anyhow::Result;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

use crate::driver::PageDriver;
use crate::report::{Outcome, TestReport};

/// Directory under the project root where snapshots are written.
pub const HTML_DIR: &str = "tmp/html";

/// File name stem for a snapshot. Failed tests get a `failures_` prefix so
/// they stand out once the directory fills up.
pub fn snapshot_name(outcome: Outcome, test_name: &str) -> String {
    if outcome.is_failed() {
        format!("failures_{}", test_name)
    } else {
        test_name.to_string()
    }
}

/// Absolute path a snapshot will be written to.
pub fn snapshot_path(root: &Path, outcome: Outcome, test_name: &str) -> PathBuf {
    root.join(HTML_DIR)
        .join(format!("{}.html", snapshot_name(outcome, test_name)))
}

/// Render a path relative to the current working directory for console
/// output. Paths outside the working directory stay absolute.
pub fn display_path(path: &Path) -> String {
    match env::current_dir() {
        Ok(cwd) => path.strip_prefix(&cwd).unwrap_or(path).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// The console line printed after a save.
pub fn snapshot_message(path: &Path) -> String {
    format!("[HTML]: {}", display_path(path))
}

/// Saves the HTML of the page a driver is currently on, filed under the
/// result of the test that drove it.
///
/// Snapshots land at `<root>/tmp/html/<test name>.html`; a failed test's
/// snapshot gets a `failures_` prefix. The directory itself is created by
/// the driver when it writes, never by this helper.
pub struct PageSnapshot<'a, D: PageDriver, R: TestReport> {
    driver: &'a D,
    report: &'a R,
    root: PathBuf,
}

impl<'a, D: PageDriver, R: TestReport> PageSnapshot<'a, D, R> {
    pub fn new(driver: &'a D, report: &'a R, root: impl Into<PathBuf>) -> Self {
        PageSnapshot {
            driver,
            report,
            root: root.into(),
        }
    }

    /// Save the HTML of the current page and print where it went.
    ///
    /// Can be called at any point in a test to capture the page for
    /// debugging, whatever the outcome. Returns the path written. Driver
    /// failures propagate untouched.
    pub fn save_page(&self) -> Result<PathBuf> {
        let path = self.save_html()?;
        println!("{}", snapshot_message(&path));
        Ok(path)
    }

    /// Save the HTML of the current page if the test failed.
    ///
    /// Meant for teardown blocks, before sessions are cleared. A no-op when
    /// the test passed or was skipped, and when the driver cannot render
    /// pages to a file.
    pub fn save_failed_page(&self) -> Result<Option<PathBuf>> {
        if !self.report.outcome().is_failed() {
            return Ok(None);
        }
        if !self.driver.kind().renders_to_file() {
            debug!(
                "{:?} driver does not render pages, skipping snapshot for {}",
                self.driver.kind(),
                self.report.name()
            );
            return Ok(None);
        }
        self.save_html().map(Some)
    }

    fn save_html(&self) -> Result<PathBuf> {
        let path = snapshot_path(&self.root, self.report.outcome(), self.report.name());
        self.driver.save_page(&path)?;
        Ok(path)
    }
}
