// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

use async_trait::async_trait;

use super::remote_error;
use crate::error::RemoteError;
use crate::services::{AddPermissionRequest, ComputeService, FunctionVersion};
use crate::types::{FunctionName, VersionQualifier};

/// Lambda-backed compute service.
#[derive(Clone, Debug)]
pub struct LambdaCompute {
    /// Inner Lambda client
    inner: aws_sdk_lambda::Client,
}

impl LambdaCompute {
    pub fn new(inner: aws_sdk_lambda::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ComputeService for LambdaCompute {
    #[tracing::instrument(skip(self))]
    async fn get_function_configuration(
        &self,
        name: &FunctionName,
        qualifier: &VersionQualifier,
    ) -> Result<FunctionVersion, RemoteError> {
        let output = self
            .inner
            .get_function_configuration()
            .function_name(name.as_str())
            .set_qualifier(qualifier.as_deref().map(str::to_owned))
            .send()
            .await
            .map_err(remote_error)?;

        let arn = output
            .function_arn()
            .ok_or(RemoteError::MalformedResponse {
                field: "FunctionArn",
            })?;
        let version = output
            .version()
            .ok_or(RemoteError::MalformedResponse { field: "Version" })?;

        Ok(FunctionVersion {
            arn: arn.to_string(),
            version: version.to_string(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn add_permission(&self, request: AddPermissionRequest) -> Result<(), RemoteError> {
        self.inner
            .add_permission()
            .action(request.action)
            .function_name(request.function_name.as_str())
            .principal(request.principal)
            .source_arn(request.source_arn.as_str())
            .set_qualifier(request.qualifier.as_deref().map(str::to_owned))
            .statement_id(request.statement_id.as_str())
            .send()
            .await
            .map_err(remote_error)?;

        Ok(())
    }
}
