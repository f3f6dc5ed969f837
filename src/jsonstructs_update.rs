use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply of the update check endpoint. Fields are kept loosely typed and
/// only read on demand, so unexpected shapes in entries nobody asks for
/// don't fail the whole document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateDescriptor {
    #[serde(default)]
    pub version: Option<Value>,
    #[serde(default)]
    pub sources: Vec<Value>,
}

/// One download source as offered by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSource<'a> {
    pub name: &'a str,
    pub url: Option<&'a str>,
}

impl UpdateDescriptor {
    pub fn version_string(&self) -> Option<String> {
        match &self.version {
            None | Some(Value::Null) => None,
            Some(Value::String(version)) => Some(version.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Sources in server order. Entries without a string `name` are skipped;
    /// a `url` that isn't a string reads as absent.
    pub fn source_entries(&self) -> impl Iterator<Item = UpdateSource<'_>> + '_ {
        self.sources.iter().filter_map(|entry| {
            let name = entry.get("name")?.as_str()?;
            Some(UpdateSource {
                name,
                url: entry.get("url").and_then(Value::as_str),
            })
        })
    }
}
