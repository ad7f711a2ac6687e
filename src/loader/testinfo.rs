//! `testinfo.yml` — the container test descriptor for a language folder.
//!
//! Only `container.image` and `container.tag` matter here; the other keys
//! (`folder`, `container.cmd`) belong to the test runner and are ignored.

use crate::error::LoadError;
use crate::model::TestConfig;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

pub const FILE_NAME: &str = "testinfo.yml";

#[derive(Debug, Deserialize)]
pub struct TestInfo {
    pub container: ContainerInfo,
}

#[derive(Debug, Deserialize)]
pub struct ContainerInfo {
    #[serde(deserialize_with = "scalar_string")]
    pub image: String,
    #[serde(deserialize_with = "scalar_string")]
    pub tag: String,
}

impl From<TestInfo> for TestConfig {
    fn from(info: TestInfo) -> Self {
        TestConfig::Present {
            image: info.container.image,
            tag: info.container.tag,
        }
    }
}

pub fn parse(content: &str) -> Result<TestInfo, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Read the descriptor at `path`. A missing file means the language has no
/// tests; an unreadable or malformed one is an error.
pub fn load(path: &Path) -> Result<TestConfig, LoadError> {
    if !path.is_file() {
        return Ok(TestConfig::Absent);
    }
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let info = parse(&content).map_err(|source| LoadError::TestInfo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(info.into())
}

/// Accept unquoted numbers and booleans, e.g. `tag: 8`.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string, found {:?}",
            other
        ))),
    }
}
