use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;

#[cfg(test)]
use mockall::automock;

// Where dataset bytes come from. The binary wires in [`HttpSource`];
// the tests substitute a mock so nothing touches the network.
#[cfg_attr(test, automock)]
pub trait DatasetSource {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetSource for HttpSource {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("HTTP GET failed for {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{url} answered with status {status}"));
        }

        let body = response
            .bytes()
            .with_context(|| format!("failed to read response body from {url}"))?;

        Ok(body.to_vec())
    }
}
