// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `stratus add-sns-event-source` command - Subscribe a Lambda function to an SNS topic.

use std::path::PathBuf;

use stratus_core::{ConfigLocation, EventSourceRequest, SnsEventSource, StratusResult, VersionQualifier};

pub async fn execute(
    topic: Option<String>,
    version: Option<String>,
    source: PathBuf,
    config: String,
) -> StratusResult<()> {
    let request = EventSourceRequest {
        topic,
        version: VersionQualifier::new(version),
        location: ConfigLocation::new(source, config),
    };
    tracing::debug!(?request, "Adding SNS event source");

    SnsEventSource::aws().run(&request).await?;

    println!("✓ SNS event source added");
    Ok(())
}
