use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;

use std::error::Error;
use std::fmt;
use std::io;

const PROXY_LIST_URL: &str = "https://www.proxy-list.download/api/v1/get";
const PROXY_TYPE: &str = "http";

#[derive(Debug)]
pub struct ProxyListException {
    pub message: String,
}

impl fmt::Display for ProxyListException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProxyListException: {}", self.message)
    }
}

impl Error for ProxyListException {}

// Transport failures are never recovered, they just bubble up through `?`
impl From<ReqwestError> for ProxyListException {
    fn from(error: ReqwestError) -> Self {
        ProxyListException {
            message: format!("Request failed: {}", error),
        }
    }
}

impl From<io::Error> for ProxyListException {
    fn from(error: io::Error) -> Self {
        ProxyListException {
            message: format!("File operation failed: {}", error),
        }
    }
}

/// Result of a single call to the proxy list API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Status 200. The raw body bytes, even when empty.
    Payload(Vec<u8>),
    /// Any other status, together with whatever body the API sent.
    Rejected { status: StatusCode, body: String },
}

pub trait ProxySource {
    fn fetch(&self) -> Result<FetchOutcome, ProxyListException>;
}

pub struct ProxyListDownloadSource {
    client: Client,
    url: String,
}

impl ProxyListDownloadSource {
    pub fn new(url: String) -> Self {
        ProxyListDownloadSource {
            client: Client::new(),
            url,
        }
    }
}

impl Default for ProxyListDownloadSource {
    fn default() -> Self {
        Self::new(PROXY_LIST_URL.to_string())
    }
}

impl ProxySource for ProxyListDownloadSource {
    fn fetch(&self) -> Result<FetchOutcome, ProxyListException> {
        debug!("Requesting {} proxy list from {}", PROXY_TYPE, self.url);

        let response = self
            .client
            .get(&self.url)
            .query(&[("type", PROXY_TYPE)])
            .send()?;

        let status = response.status();

        if status == StatusCode::OK {
            // Kept as bytes so the file gets exactly what the API sent
            let payload = response.bytes()?.to_vec();
            debug!("Received {} bytes of proxy list", payload.len());
            return Ok(FetchOutcome::Payload(payload));
        }

        let body = response.text()?;
        println!("{}", body);
        warn!("Proxy list request failed with status: {}", status);

        Ok(FetchOutcome::Rejected { status, body })
    }
}
