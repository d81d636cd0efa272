//! Stratus Core Library
//!
//! Deployment automation for AWS Lambda. Resolves a function from project
//! configuration and attaches an SNS topic to it as an event source.

pub mod aws;
pub mod config;
pub mod error;
pub mod function;
pub mod grantor;
pub mod inspector;
pub mod orchestrator;
pub mod services;
pub mod subscription;
pub mod types;

// Re-export commonly used types
pub use aws::AwsServiceProvider;
pub use config::{
    ConfigLocation, ConfigResolver, FileConfigResolver, ProjectConfig, Requirement,
    DEFAULT_CONFIG_FILE, LAMBDA_NAME_AND_REGION,
};
pub use error::{RemoteError, Step, StratusError, StratusResult, ValidationError};
pub use function::{DeployedFunction, ResolvedFunction};
pub use orchestrator::{EventSourceRequest, Invocation, SnsEventSource};
pub use services::{
    AddPermissionRequest, ComputeService, FunctionVersion, MessagingService, ServiceProvider,
    Services, SubscribeRequest,
};
pub use types::{FunctionName, Region, StatementId, TopicArn, VersionQualifier};
