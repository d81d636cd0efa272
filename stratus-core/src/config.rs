// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Project configuration resolution.
//!
//! The project configuration file (`stratus.json` by default) records the
//! resource names a deployment created. Commands declare which fields they
//! need and the resolver fails fast when any of them is absent.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StratusError, StratusResult};
use crate::types::{FunctionName, Region};

/// Conventional project configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "stratus.json";

/// Fields a command requires within one configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub section: &'static str,
    pub fields: &'static [&'static str],
}

/// `lambda.name` and `lambda.region` must be present.
pub const LAMBDA_NAME_AND_REGION: &[Requirement] = &[Requirement {
    section: "lambda",
    fields: &["name", "region"],
}];

/// Where the project configuration lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub source_dir: PathBuf,
    pub config_file: String,
}

impl ConfigLocation {
    pub fn new(source_dir: impl Into<PathBuf>, config_file: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.into(),
            config_file: config_file.into(),
        }
    }

    /// Full path of the configuration file.
    pub fn path(&self) -> PathBuf {
        self.source_dir.join(&self.config_file)
    }
}

impl Default for ConfigLocation {
    fn default() -> Self {
        Self::new(".", DEFAULT_CONFIG_FILE)
    }
}

/// The `lambda` section of the project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaSection {
    pub name: FunctionName,
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Resolved project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub lambda: LambdaSection,
}

/// Resolves project configuration, enforcing required fields.
#[async_trait]
pub trait ConfigResolver: Send + Sync {
    async fn resolve(
        &self,
        location: &ConfigLocation,
        requirements: &[Requirement],
    ) -> StratusResult<ProjectConfig>;
}

/// Resolver backed by a JSON or YAML file on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigResolver;

impl FileConfigResolver {
    /// Parse configuration content and check requirements.
    /// `file` names the configuration in error messages and selects the format.
    pub fn load_string(
        file: &str,
        content: &str,
        requirements: &[Requirement],
    ) -> StratusResult<ProjectConfig> {
        let raw = Self::parse(file, content)?;
        Self::check_requirements(file, &raw, requirements)?;

        serde_json::from_value(raw).map_err(|e| StratusError::ConfigParse {
            message: format!("{}: {}", file, e),
        })
    }

    fn parse(file: &str, content: &str) -> StratusResult<Value> {
        let is_yaml = matches!(
            Path::new(file).extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            serde_yaml::from_str(content).map_err(|e| StratusError::ConfigParse {
                message: format!("YAML parse error in {}: {}", file, e),
            })
        } else {
            serde_json::from_str(content).map_err(|e| StratusError::ConfigParse {
                message: format!("JSON parse error in {}: {}", file, e),
            })
        }
    }

    fn check_requirements(
        file: &str,
        raw: &Value,
        requirements: &[Requirement],
    ) -> StratusResult<()> {
        for requirement in requirements {
            let section = raw.get(requirement.section);
            for field in requirement.fields {
                let present = match section.and_then(|s| s.get(*field)) {
                    None | Some(Value::Null) => false,
                    Some(Value::String(s)) => !s.is_empty(),
                    Some(_) => true,
                };
                if !present {
                    return Err(StratusError::MissingConfigField {
                        file: file.to_string(),
                        field: format!("{}.{}", requirement.section, field),
                    });
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ConfigResolver for FileConfigResolver {
    #[tracing::instrument(skip(self))]
    async fn resolve(
        &self,
        location: &ConfigLocation,
        requirements: &[Requirement],
    ) -> StratusResult<ProjectConfig> {
        let path = location.path();

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StratusError::ConfigNotFound { path });
            }
            Err(e) => {
                return Err(StratusError::Io {
                    context: "reading config file",
                    source: e,
                });
            }
        };

        let config = Self::load_string(&location.config_file, &content, requirements)?;
        tracing::debug!(function = %config.lambda.name, region = %config.lambda.region, "Configuration resolved");
        Ok(config)
    }
}
