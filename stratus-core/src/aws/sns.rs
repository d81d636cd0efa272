// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

use async_trait::async_trait;

use super::remote_error;
use crate::error::RemoteError;
use crate::services::{MessagingService, SubscribeRequest};

/// SNS-backed messaging service.
#[derive(Clone, Debug)]
pub struct SnsMessaging {
    inner: aws_sdk_sns::Client,
}

impl SnsMessaging {
    pub fn new(inner: aws_sdk_sns::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl MessagingService for SnsMessaging {
    #[tracing::instrument(skip(self))]
    async fn subscribe(&self, request: SubscribeRequest) -> Result<String, RemoteError> {
        let output = self
            .inner
            .subscribe()
            .protocol(request.protocol)
            .topic_arn(request.topic_arn.as_str())
            .endpoint(request.endpoint)
            .return_subscription_arn(true)
            .send()
            .await
            .map_err(remote_error)?;

        match output.subscription_arn() {
            Some(arn) => Ok(arn.to_string()),
            None => Err(RemoteError::MalformedResponse {
                field: "SubscriptionArn",
            }),
        }
    }
}
