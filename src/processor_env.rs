use crate::resolver::ResolutionRequest;
use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};
use std::io::{Read, Write};

pub const MAJOR_VERSION_KEY: &str = "major_version";
pub const BASE_URL_KEY: &str = "base_url";
pub const SOURCE_KEY: &str = "source";
pub const URL_KEY: &str = "url";

/// Key-value environment shared with the host pipeline. Unknown keys are
/// carried through untouched so the output can be fed to the next step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorEnv {
    vars: Map<String, Value>,
}

impl ProcessorEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON object. Empty input is an empty environment.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .with_context(|| "Failed to read the input environment.")?;

        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let value: Value = serde_json::from_str(&content)
            .with_context(|| "Failed to parse the input environment as JSON.")?;

        match value {
            Value::Object(vars) => Ok(Self { vars }),
            _ => bail!("The input environment must be a JSON object."),
        }
    }

    /// Applies `key=value` arguments on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        for arg in args {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| anyhow!("`{}` is not a valid `key=value` argument.", arg))?;

            if key.is_empty() {
                bail!("`{}` is missing a variable name.", arg);
            }

            self.set(key, value);
        }

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.vars
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
        match self.vars.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(other) => bail!(
                "The variable `{}` must be a string, but got `{}`.",
                key,
                other
            ),
        }
    }

    pub fn resolution_request(&self) -> Result<ResolutionRequest> {
        Ok(ResolutionRequest {
            major_version: self.get_str(MAJOR_VERSION_KEY)?.map(str::to_string),
            base_url: self.get_str(BASE_URL_KEY)?.map(str::to_string),
            source: self.get_str(SOURCE_KEY)?.map(str::to_string),
        })
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, &self.vars)
            .with_context(|| "Failed to serialize the output environment.")?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader() {
        let env = ProcessorEnv::from_reader(
            r#"{"major_version": "7", "source": "CacheFly", "RECIPE_CACHE_DIR": "/tmp/cache"}"#
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(env.get_str(MAJOR_VERSION_KEY).unwrap(), Some("7"));
        assert_eq!(env.get_str(SOURCE_KEY).unwrap(), Some("CacheFly"));
        assert_eq!(env.get_str(BASE_URL_KEY).unwrap(), None);
        assert_eq!(env.get_str("RECIPE_CACHE_DIR").unwrap(), Some("/tmp/cache"));
    }

    #[test]
    fn test_from_reader_empty() {
        let env = ProcessorEnv::from_reader(" \n".as_bytes()).unwrap();
        assert_eq!(env, ProcessorEnv::new());
    }

    #[test]
    fn test_from_reader_rejects_non_objects() {
        assert!(ProcessorEnv::from_reader(r#"["7"]"#.as_bytes()).is_err());
        assert!(ProcessorEnv::from_reader("major_version=7".as_bytes()).is_err());
    }

    #[test]
    fn test_non_string_values_are_rejected() {
        let env = ProcessorEnv::from_reader(r#"{"major_version": 7}"#.as_bytes()).unwrap();

        let err = env.resolution_request().unwrap_err();
        assert!(err.to_string().contains("major_version"));
    }

    #[test]
    fn test_args_override_input() {
        let mut env =
            ProcessorEnv::from_reader(r#"{"major_version": "5", "source": "CacheFly"}"#.as_bytes())
                .unwrap();

        env.apply_args(&[
            "major_version=7".to_string(),
            "base_url=http://localhost/check?a=b".to_string(),
        ])
        .unwrap();

        assert_eq!(
            env.resolution_request().unwrap(),
            ResolutionRequest {
                major_version: Some("7".to_string()),
                base_url: Some("http://localhost/check?a=b".to_string()),
                source: Some("CacheFly".to_string()),
            }
        );
    }

    #[test]
    fn test_invalid_args() {
        let mut env = ProcessorEnv::new();

        assert!(env.apply_args(&["major_version".to_string()]).is_err());
        assert!(env.apply_args(&["=7".to_string()]).is_err());
    }

    #[test]
    fn test_write_to() {
        let mut env = ProcessorEnv::new();
        env.set(URL_KEY, "https://c.1password.com/dist/1P/mac4/1Password-6.8.9.pkg");

        let mut output = Vec::new();
        env.write_to(&mut output).unwrap();

        let value: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            value[URL_KEY],
            "https://c.1password.com/dist/1P/mac4/1Password-6.8.9.pkg"
        );
    }
}
