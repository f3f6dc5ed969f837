use crate::error::TransportError;
use std::time::Duration;
use url::Url;

const TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the full body of a url in one blocking call.
pub trait Transport {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}

pub fn parse_url(value: &str) -> Result<Url, TransportError> {
    Url::parse(value).map_err(|source| TransportError::InvalidUrl {
        url: value.to_string(),
        source,
    })
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(TIMEOUT)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        log::debug!("{} answered with {}", url, status);

        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }
}
