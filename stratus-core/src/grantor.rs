// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Permission Grantor: lets a topic invoke a function.

use crate::error::{StratusError, StratusResult, Step};
use crate::function::DeployedFunction;
use crate::orchestrator::Invocation;
use crate::services::{AddPermissionRequest, INVOKE_ACTION, SNS_PRINCIPAL};
use crate::types::StatementId;

/// Grant the invocation's topic permission to invoke `function`.
///
/// Reusing a statement id is rejected by the service; that error is returned
/// as-is.
#[tracing::instrument(skip(invocation, function), fields(function = %function.name))]
pub async fn grant(
    invocation: &Invocation<'_>,
    function: &DeployedFunction,
    statement_id: &StatementId,
) -> StratusResult<()> {
    let request = AddPermissionRequest {
        action: INVOKE_ACTION,
        function_name: function.name.clone(),
        principal: SNS_PRINCIPAL,
        source_arn: invocation.topic.clone(),
        qualifier: invocation.qualifier.clone(),
        statement_id: statement_id.clone(),
    };
    tracing::debug!(?request, "Adding invoke permission");

    invocation
        .services
        .compute
        .add_permission(request)
        .await
        .map_err(|source| StratusError::Step {
            step: Step::GrantPermission,
            source,
        })?;

    tracing::info!(statement_id = %statement_id, "Invoke permission granted");
    Ok(())
}
