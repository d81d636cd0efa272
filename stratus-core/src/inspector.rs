// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Function Inspector: looks up a function's ARN and version.

use crate::error::{StratusError, StratusResult, Step};
use crate::function::{DeployedFunction, ResolvedFunction};
use crate::orchestrator::Invocation;

/// Read-only lookup of `function` at the invocation's qualifier.
///
/// A missing function or version surfaces as the service reported it.
#[tracing::instrument(
    skip(invocation, function),
    fields(function = %function.name, qualifier = %invocation.qualifier)
)]
pub async fn inspect(
    invocation: &Invocation<'_>,
    function: ResolvedFunction,
) -> StratusResult<DeployedFunction> {
    let found = invocation
        .services
        .compute
        .get_function_configuration(&function.name, invocation.qualifier)
        .await
        .map_err(|source| StratusError::Step {
            step: Step::InspectFunction,
            source,
        })?;

    tracing::info!(arn = %found.arn, version = %found.version, "Function inspected");
    Ok(function.deployed(found))
}
