// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Remote service contracts.
//!
//! The compute service (Lambda) and the messaging service (SNS) are consumed
//! through these traits so the orchestration can run against any backend.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::types::{FunctionName, Region, StatementId, TopicArn, VersionQualifier};

/// Action granted to the topic on the function.
pub const INVOKE_ACTION: &str = "lambda:InvokeFunction";
/// Service principal SNS delivers as.
pub const SNS_PRINCIPAL: &str = "sns.amazonaws.com";
/// SNS delivery protocol for Lambda endpoints.
pub const LAMBDA_PROTOCOL: &str = "lambda";

/// Identity of a deployed function at one version or alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionVersion {
    pub arn: String,
    pub version: String,
}

/// Input of the compute service's add-permission call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPermissionRequest {
    pub action: &'static str,
    pub function_name: FunctionName,
    pub principal: &'static str,
    pub source_arn: TopicArn,
    pub qualifier: VersionQualifier,
    pub statement_id: StatementId,
}

/// Input of the messaging service's subscribe call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeRequest {
    pub protocol: &'static str,
    pub topic_arn: TopicArn,
    pub endpoint: String,
}

/// Compute service operations.
#[async_trait]
pub trait ComputeService: Send + Sync {
    async fn get_function_configuration(
        &self,
        name: &FunctionName,
        qualifier: &VersionQualifier,
    ) -> Result<FunctionVersion, RemoteError>;

    async fn add_permission(&self, request: AddPermissionRequest) -> Result<(), RemoteError>;
}

/// Messaging service operations.
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Returns the subscription ARN.
    async fn subscribe(&self, request: SubscribeRequest) -> Result<String, RemoteError>;
}

/// Clients for both services, scoped to a single region.
#[derive(Clone)]
pub struct Services {
    pub region: Region,
    pub compute: Arc<dyn ComputeService>,
    pub messaging: Arc<dyn MessagingService>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

/// Builds region-scoped service clients.
#[async_trait]
pub trait ServiceProvider: Send + Sync {
    async fn connect(&self, region: &Region) -> Services;
}
