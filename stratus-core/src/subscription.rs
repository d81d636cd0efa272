// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Subscription Creator: delivers topic messages to a function.

use crate::error::{StratusError, StratusResult, Step};
use crate::function::DeployedFunction;
use crate::orchestrator::Invocation;
use crate::services::{SubscribeRequest, LAMBDA_PROTOCOL};

/// Subscribe `function` to the invocation's topic. Returns the subscription ARN.
///
/// No de-duplication: the service's own duplicate handling applies.
#[tracing::instrument(skip(invocation, function), fields(endpoint = %function.arn))]
pub async fn subscribe(
    invocation: &Invocation<'_>,
    function: &DeployedFunction,
) -> StratusResult<String> {
    let request = SubscribeRequest {
        protocol: LAMBDA_PROTOCOL,
        topic_arn: invocation.topic.clone(),
        endpoint: function.arn.clone(),
    };

    let subscription_arn = invocation
        .services
        .messaging
        .subscribe(request)
        .await
        .map_err(|source| StratusError::Step {
            step: Step::CreateSubscription,
            source,
        })?;

    tracing::info!(subscription = %subscription_arn, "Subscription created");
    Ok(subscription_arn)
}
