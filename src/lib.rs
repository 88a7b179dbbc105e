// Export the snapshot modules
pub mod analysis;
pub mod driver;
pub mod report;
pub mod snapshot;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::analysis::{analyze_page, PageAnalysis};
pub use crate::driver::{DriverKind, FetchDriver, FetchError, PageDriver};
pub use crate::report::{CompletedTest, Outcome, TestReport};
pub use crate::snapshot::{
    display_path, snapshot_message, snapshot_name, snapshot_path, PageSnapshot, HTML_DIR,
};
