// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! AWS SDK backed services.

mod lambda;
mod sns;

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_lambda::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::error::RemoteError;
use crate::services::{ServiceProvider, Services};
use crate::types::Region;

pub use lambda::LambdaCompute;
pub use sns::SnsMessaging;

/// Connects to Lambda and SNS using the default credential chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsServiceProvider;

#[async_trait]
impl ServiceProvider for AwsServiceProvider {
    #[tracing::instrument(skip(self))]
    async fn connect(&self, region: &Region) -> Services {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.as_str().to_owned()))
            .load()
            .await;

        Services {
            region: region.clone(),
            compute: Arc::new(LambdaCompute::new(aws_sdk_lambda::Client::new(&sdk_config))),
            messaging: Arc::new(SnsMessaging::new(aws_sdk_sns::Client::new(&sdk_config))),
        }
    }
}

/// Map an SDK failure onto [`RemoteError`], keeping the service's message.
pub(crate) fn remote_error<E, R>(err: SdkError<E, R>) -> RemoteError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    if matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) {
        return RemoteError::Transport {
            message: DisplayErrorContext(&err).to_string(),
        };
    }

    let message = err
        .message()
        .map(str::to_owned)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());

    classify(err.code(), message)
}

fn classify(code: Option<&str>, message: String) -> RemoteError {
    match code {
        Some("ResourceNotFoundException") | Some("NotFound") | Some("NotFoundException") => {
            RemoteError::NotFound { message }
        }
        Some("ResourceConflictException") => RemoteError::Conflict { message },
        Some("TooManyRequestsException") | Some("Throttling") | Some("ThrottlingException") => {
            RemoteError::Throttled { message }
        }
        Some("AccessDeniedException") | Some("AuthorizationError") => {
            RemoteError::AccessDenied { message }
        }
        other => RemoteError::Service {
            code: other.map(str::to_owned),
            message,
        },
    }
}
