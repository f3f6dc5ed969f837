use std::collections::BTreeMap;

// Path segments of the update check URL:
// - https://app-updates.agilebits.com/check/1/
// - Kernel version
// - Product string ("OPM4" or "OPM7")
// - Locale
// - The 1Password build number to update from
const UPDATE_URLS: [(&str, &str); 4] = [
    (
        "4",
        "https://app-updates.agilebits.com/check/1/13.0.0/OPM4/en/400600",
    ),
    (
        "5",
        "https://app-updates.agilebits.com/check/1/14.0.0/OPM4/en/500000",
    ),
    (
        "6",
        "https://app-updates.agilebits.com/check/1/14.0.0/OPM4/en/553001",
    ),
    (
        "7",
        "https://app-updates.agilebits.com/check/1/18.0.0/OPM7/en/700000",
    ),
];

pub const DEFAULT_MAJOR_VERSION: &str = "6";
pub const DEFAULT_SOURCE: &str = "Amazon CloudFront";

/// Maps a 1Password major version to the update check endpoint for that release line.
#[derive(Debug, Clone)]
pub struct VersionTable {
    urls: BTreeMap<&'static str, &'static str>,
}

impl VersionTable {
    pub fn new() -> Self {
        Self {
            urls: UPDATE_URLS.into_iter().collect(),
        }
    }

    pub fn get(&self, major_version: &str) -> Option<&'static str> {
        self.urls.get(major_version).copied()
    }

    pub fn contains(&self, major_version: &str) -> bool {
        self.urls.contains_key(major_version)
    }

    /// Entries ordered by major version.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.urls.iter().map(|(k, v)| (*k, *v))
    }

    pub fn major_versions(&self) -> Vec<&'static str> {
        self.urls.keys().copied().collect()
    }
}

impl Default for VersionTable {
    fn default() -> Self {
        Self::new()
    }
}
