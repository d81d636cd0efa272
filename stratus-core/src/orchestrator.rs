// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Orchestrator for adding an SNS event source to a Lambda function.
//!
//! Steps run strictly in order, each awaiting the previous one:
//! resolve configuration, connect, inspect, grant permission, subscribe.
//! The first failure aborts the sequence. Nothing is rolled back: a failed
//! subscription leaves the granted permission in place.

use crate::aws::AwsServiceProvider;
use crate::config::{ConfigLocation, ConfigResolver, FileConfigResolver, LAMBDA_NAME_AND_REGION};
use crate::error::{StratusError, StratusResult};
use crate::function::ResolvedFunction;
use crate::services::{ServiceProvider, Services};
use crate::types::{StatementId, TopicArn, VersionQualifier};
use crate::{grantor, inspector, subscription};

/// User input for one add-sns-event-source run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSourceRequest {
    /// Topic ARN; required.
    pub topic: Option<String>,
    pub version: VersionQualifier,
    pub location: ConfigLocation,
}

impl EventSourceRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = VersionQualifier::new(Some(version));
        self
    }

    pub fn with_location(mut self, location: ConfigLocation) -> Self {
        self.location = location;
        self
    }

    /// Validate the topic before anything touches the network.
    fn topic(&self) -> StratusResult<TopicArn> {
        match self.topic.as_deref().map(str::trim) {
            None | Some("") => Err(StratusError::InvalidInput {
                message: "SNS topic not specified",
                hint: "please provide it with --topic",
            }),
            Some(topic) => Ok(TopicArn::new(topic)?),
        }
    }
}

/// State carried from one step to the next within a single run.
#[derive(Debug)]
pub struct Invocation<'a> {
    pub topic: TopicArn,
    pub qualifier: &'a VersionQualifier,
    /// Clients for the region the function was resolved in.
    pub services: Services,
}

/// Wires an SNS topic to a deployed Lambda function.
pub struct SnsEventSource<C, P> {
    resolver: C,
    provider: P,
}

impl SnsEventSource<FileConfigResolver, AwsServiceProvider> {
    /// Configuration from disk, services from AWS.
    pub fn aws() -> Self {
        Self::new(FileConfigResolver, AwsServiceProvider)
    }
}

impl<C: ConfigResolver, P: ServiceProvider> SnsEventSource<C, P> {
    pub fn new(resolver: C, provider: P) -> Self {
        Self { resolver, provider }
    }

    /// Run the full sequence. Remote errors are returned unchanged, tagged
    /// with the step that produced them.
    #[tracing::instrument(skip(self, request), fields(topic = ?request.topic, version = %request.version))]
    pub async fn run(&self, request: &EventSourceRequest) -> StratusResult<()> {
        let topic = request.topic()?;

        let config = self
            .resolver
            .resolve(&request.location, LAMBDA_NAME_AND_REGION)
            .await?;
        let function = ResolvedFunction::from(&config);

        let services = self.provider.connect(&function.region).await;
        let invocation = Invocation {
            topic,
            qualifier: &request.version,
            services,
        };

        let function = inspector::inspect(&invocation, function).await?;

        let statement_id = StatementId::now(&invocation.topic);
        grantor::grant(&invocation, &function, &statement_id).await?;

        let subscription_arn = subscription::subscribe(&invocation, &function)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    statement_id = %statement_id,
                    error = %e,
                    "Subscription failed; invoke permission remains granted"
                );
            })?;

        tracing::info!(
            function = %function.name,
            region = %invocation.services.region,
            subscription = %subscription_arn,
            "SNS event source added"
        );
        Ok(())
    }
}
