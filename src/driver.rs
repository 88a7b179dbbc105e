use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Identifies which automation backend is driving the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    /// Chromium-family browser driven over its debugging protocol.
    Chromium,
    /// Firefox driven over WebDriver.
    Gecko,
    /// Plain HTTP fetching without a browser. Does not render pages.
    Http,
}

impl DriverKind {
    /// Whether the backend can persist the rendered page on demand.
    pub fn renders_to_file(&self) -> bool {
        !matches!(self, DriverKind::Http)
    }
}

/// The driver capability a snapshot helper drives: persist the markup of
/// whatever page the backend is currently on.
pub trait PageDriver {
    fn save_page(&self, path: &Path) -> Result<()>;

    fn kind(&self) -> DriverKind;
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no page has been fetched yet")]
    NoPage,
    #[error("request to {url} failed with status {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

struct FetchedPage {
    url: String,
    html: String,
}

/// Driver backed by a plain blocking HTTP client. Good enough for capturing
/// server-rendered markup; it is the non-rendering reference driver, so the
/// on-failure snapshot path skips it.
pub struct FetchDriver {
    client: Client,
    current: RefCell<Option<FetchedPage>>,
}

impl FetchDriver {
    pub fn new() -> Self {
        FetchDriver {
            client: Client::new(),
            current: RefCell::new(None),
        }
    }

    /// Fetch a page and make it the current page. Redirects are followed;
    /// the final URL is what `current_url` reports.
    pub fn visit(&self, url: &str) -> std::result::Result<(), FetchError> {
        debug!("fetching {}", url);
        let response = self.client.get(url).send()?;
        let final_url = response.url().to_string();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::BadStatus {
                url: final_url,
                status,
            });
        }

        let html = response.text()?;
        debug!("fetched {} bytes from {}", html.len(), final_url);

        *self.current.borrow_mut() = Some(FetchedPage {
            url: final_url,
            html,
        });
        Ok(())
    }

    /// URL of the current page, after any redirects.
    pub fn current_url(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|page| page.url.clone())
    }

    /// Markup of the current page.
    pub fn page_source(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|page| page.html.clone())
    }
}

impl Default for FetchDriver {
    fn default() -> Self {
        FetchDriver::new()
    }
}

impl PageDriver for FetchDriver {
    fn save_page(&self, path: &Path) -> Result<()> {
        let current = self.current.borrow();
        let page = current.as_ref().ok_or(FetchError::NoPage)?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create snapshot directory")?;
        }
        fs::write(path, &page.html).context("Failed to write HTML file")?;

        Ok(())
    }

    fn kind(&self) -> DriverKind {
        DriverKind::Http
    }
}
