// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Function configuration as it is built up during one invocation.
//!
//! [`ResolvedFunction`] comes from project configuration. Inspection turns it
//! into a [`DeployedFunction`], which is the only form the permission and
//! subscription steps accept.

use crate::config::ProjectConfig;
use crate::services::FunctionVersion;
use crate::types::{FunctionName, Region};

/// Function name and region read from project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFunction {
    pub name: FunctionName,
    pub region: Region,
}

impl ResolvedFunction {
    pub fn new(name: FunctionName, region: Region) -> Self {
        Self { name, region }
    }

    /// Enrich with the ARN and version reported by the compute service.
    pub fn deployed(self, found: FunctionVersion) -> DeployedFunction {
        DeployedFunction {
            name: self.name,
            arn: found.arn,
            version: found.version,
        }
    }
}

impl From<&ProjectConfig> for ResolvedFunction {
    fn from(config: &ProjectConfig) -> Self {
        Self::new(config.lambda.name.clone(), config.lambda.region.clone())
    }
}

/// A function confirmed to exist at the requested qualifier.
/// Its region is the one the invocation's services were built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedFunction {
    pub name: FunctionName,
    pub arn: String,
    pub version: String,
}
