use crate::error::ResolveError;
use crate::jsonstructs_update::UpdateDescriptor;
use crate::transport::{parse_url, Transport};
use crate::version_table::{VersionTable, DEFAULT_MAJOR_VERSION, DEFAULT_SOURCE};

/// Inputs of a single resolution. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub major_version: Option<String>,
    pub base_url: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    pub source: String,
    pub version: Option<String>,
}

pub struct UrlResolver<'a, T> {
    table: &'a VersionTable,
    transport: T,
}

impl<'a, T: Transport> UrlResolver<'a, T> {
    pub fn new(table: &'a VersionTable, transport: T) -> Self {
        Self { table, transport }
    }

    /// Returns the update check url a request would fetch. Fails without
    /// touching the network if the major version is unknown.
    pub fn endpoint(&self, request: &ResolutionRequest) -> Result<String, ResolveError> {
        let major_version = request
            .major_version
            .as_deref()
            .unwrap_or(DEFAULT_MAJOR_VERSION);

        let update_url = self
            .table
            .get(major_version)
            .ok_or_else(|| ResolveError::UnsupportedVersion(major_version.to_string()))?;

        Ok(request
            .base_url
            .clone()
            .unwrap_or_else(|| update_url.to_string()))
    }

    /// Downloads and parses the update data for a request.
    pub fn fetch_update_data(
        &self,
        request: &ResolutionRequest,
    ) -> Result<UpdateDescriptor, ResolveError> {
        let base_url = self.endpoint(request)?;
        self.fetch(base_url)
    }

    pub fn resolve(&self, request: &ResolutionRequest) -> Result<Resolution, ResolveError> {
        let base_url = self.endpoint(request)?;

        let preferred_source = request.source.as_deref().unwrap_or(DEFAULT_SOURCE);
        log::info!("Preferred source is {}", preferred_source);

        let update_data = self.fetch(base_url)?;
        let version = update_data.version_string();
        log::info!("Found version {}", version.as_deref().unwrap_or("<none>"));

        // First match wins, the server's ordering is the tie break.
        let found_source = update_data
            .source_entries()
            .find(|src| src.name == preferred_source)
            .ok_or_else(|| ResolveError::SourceNotFound(preferred_source.to_string()))?;

        let source_url = found_source
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ResolveError::MissingUrl(preferred_source.to_string()))?;

        log::info!("Found URL {}", source_url);

        Ok(Resolution {
            url: source_url.to_string(),
            source: preferred_source.to_string(),
            version,
        })
    }

    fn fetch(&self, base_url: String) -> Result<UpdateDescriptor, ResolveError> {
        let url = parse_url(&base_url)?;

        let body = self.transport.fetch(&url)?;

        serde_json::from_slice(&body).map_err(|source| ResolveError::MalformedResponse {
            url: base_url,
            source,
        })
    }
}
