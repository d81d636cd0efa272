// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end tests for the add-sns-event-source sequence.
//!
//! Services are replaced with recording mocks so call order, call counts and
//! request contents can be asserted.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use stratus_core::{
    AddPermissionRequest, ComputeService, ConfigLocation, ConfigResolver, EventSourceRequest,
    FileConfigResolver, FunctionName, FunctionVersion, MessagingService, ProjectConfig, Region,
    RemoteError, Requirement, ServiceProvider, Services, Step, StratusError, StratusResult,
    SubscribeRequest, VersionQualifier,
};
use tempfile::TempDir;

const TOPIC: &str = "arn:aws:sns:us-east-1:123456789012:my-topic";
const FUNCTION_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:myFunction:production";

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Resolve,
    Connect(String),
    Inspect {
        name: String,
        qualifier: Option<String>,
    },
    AddPermission(AddPermissionRequest),
    Subscribe(SubscribeRequest),
}

#[derive(Debug, Clone, Default)]
struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    fn permission_requests(&self) -> Vec<AddPermissionRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AddPermission(r) => Some(r),
                _ => None,
            })
            .collect()
    }
}

struct MockResolver {
    log: CallLog,
    config: Option<ProjectConfig>,
}

#[async_trait]
impl ConfigResolver for MockResolver {
    async fn resolve(
        &self,
        _location: &ConfigLocation,
        _requirements: &[Requirement],
    ) -> StratusResult<ProjectConfig> {
        self.log.push(Call::Resolve);
        self.config
            .clone()
            .ok_or_else(|| StratusError::MissingConfigField {
                file: "stratus.json".to_string(),
                field: "lambda.name".to_string(),
            })
    }
}

struct MockCompute {
    log: CallLog,
    inspect: Result<FunctionVersion, RemoteError>,
    grant: Result<(), RemoteError>,
}

#[async_trait]
impl ComputeService for MockCompute {
    async fn get_function_configuration(
        &self,
        name: &FunctionName,
        qualifier: &VersionQualifier,
    ) -> Result<FunctionVersion, RemoteError> {
        self.log.push(Call::Inspect {
            name: name.to_string(),
            qualifier: qualifier.as_deref().map(str::to_owned),
        });
        self.inspect.clone()
    }

    async fn add_permission(&self, request: AddPermissionRequest) -> Result<(), RemoteError> {
        self.log.push(Call::AddPermission(request));
        self.grant.clone()
    }
}

struct MockMessaging {
    log: CallLog,
    subscribe: Result<String, RemoteError>,
}

#[async_trait]
impl MessagingService for MockMessaging {
    async fn subscribe(&self, request: SubscribeRequest) -> Result<String, RemoteError> {
        self.log.push(Call::Subscribe(request));
        self.subscribe.clone()
    }
}

struct MockProvider {
    log: CallLog,
    compute: Arc<MockCompute>,
    messaging: Arc<MockMessaging>,
}

#[async_trait]
impl ServiceProvider for MockProvider {
    async fn connect(&self, region: &Region) -> Services {
        self.log.push(Call::Connect(region.to_string()));
        Services {
            region: region.clone(),
            compute: self.compute.clone(),
            messaging: self.messaging.clone(),
        }
    }
}

/// Configurable set of mocks sharing one call log.
struct Harness {
    log: CallLog,
    config: Option<ProjectConfig>,
    inspect: Result<FunctionVersion, RemoteError>,
    grant: Result<(), RemoteError>,
    subscribe: Result<String, RemoteError>,
}

impl Harness {
    fn new() -> Self {
        Self {
            log: CallLog::default(),
            config: Some(project_config("myFunction", "us-east-1")),
            inspect: Ok(FunctionVersion {
                arn: FUNCTION_ARN.to_string(),
                version: "3".to_string(),
            }),
            grant: Ok(()),
            subscribe: Ok(format!("{}:6b0e71bd-7e97-4d97-80ce-4a0994e55286", TOPIC)),
        }
    }

    fn provider(&self) -> MockProvider {
        MockProvider {
            log: self.log.clone(),
            compute: Arc::new(MockCompute {
                log: self.log.clone(),
                inspect: self.inspect.clone(),
                grant: self.grant.clone(),
            }),
            messaging: Arc::new(MockMessaging {
                log: self.log.clone(),
                subscribe: self.subscribe.clone(),
            }),
        }
    }

    async fn run(&self, request: &EventSourceRequest) -> StratusResult<()> {
        let resolver = MockResolver {
            log: self.log.clone(),
            config: self.config.clone(),
        };
        stratus_core::SnsEventSource::new(resolver, self.provider())
            .run(request)
            .await
    }
}

fn project_config(name: &str, region: &str) -> ProjectConfig {
    serde_json::from_value(serde_json::json!({
        "lambda": { "name": name, "region": region }
    }))
    .unwrap()
}

fn production_request() -> EventSourceRequest {
    EventSourceRequest::new(TOPIC).with_version("production")
}

#[tokio::test]
async fn test_missing_topic_makes_no_remote_calls() {
    let harness = Harness::new();

    for request in [EventSourceRequest::default(), EventSourceRequest::new("")] {
        let err = harness.run(&request).await.unwrap_err();
        assert!(matches!(err, StratusError::InvalidInput { .. }));
        assert!(err.to_string().contains("--topic"));
    }

    assert!(harness.log.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_topic_makes_no_remote_calls() {
    let harness = Harness::new();

    let err = harness
        .run(&EventSourceRequest::new("my-topic").with_version("production"))
        .await
        .unwrap_err();
    assert!(matches!(err, StratusError::Validation(_)));
    assert!(harness.log.calls().is_empty());
}

#[tokio::test]
async fn test_end_to_end_production_alias() {
    let harness = Harness::new();
    harness.run(&production_request()).await.unwrap();

    let calls = harness.log.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0], Call::Resolve);
    assert_eq!(calls[1], Call::Connect("us-east-1".to_string()));
    assert_eq!(
        calls[2],
        Call::Inspect {
            name: "myFunction".to_string(),
            qualifier: Some("production".to_string()),
        }
    );

    let Call::AddPermission(permission) = &calls[3] else {
        panic!("expected permission grant, got {:?}", calls[3]);
    };
    assert_eq!(permission.action, "lambda:InvokeFunction");
    assert_eq!(permission.principal, "sns.amazonaws.com");
    assert_eq!(permission.function_name.as_str(), "myFunction");
    assert_eq!(permission.source_arn.as_str(), TOPIC);
    assert_eq!(permission.qualifier.as_deref(), Some("production"));
    let statement_id = permission.statement_id.as_str();
    assert!(statement_id.starts_with("us-east-1-123456789012-my-topic-"));
    let timestamp = statement_id.rsplit('-').next().unwrap();
    assert!(!timestamp.is_empty() && timestamp.chars().all(|c| c.is_ascii_digit()));

    let Call::Subscribe(subscription) = &calls[4] else {
        panic!("expected subscription, got {:?}", calls[4]);
    };
    assert_eq!(subscription.protocol, "lambda");
    assert_eq!(subscription.topic_arn.as_str(), TOPIC);
    assert_eq!(subscription.endpoint, FUNCTION_ARN);
}

#[tokio::test]
async fn test_latest_version_omits_qualifier() {
    let harness = Harness::new();
    harness.run(&EventSourceRequest::new(TOPIC)).await.unwrap();

    let calls = harness.log.calls();
    assert_eq!(
        calls[2],
        Call::Inspect {
            name: "myFunction".to_string(),
            qualifier: None,
        }
    );
    assert!(harness.log.permission_requests()[0].qualifier.is_latest());
}

#[tokio::test]
async fn test_clients_scoped_to_configured_region() {
    let mut harness = Harness::new();
    harness.config = Some(project_config("myFunction", "eu-central-1"));
    harness.run(&production_request()).await.unwrap();

    let connects: Vec<_> = harness
        .log
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Connect(_)))
        .collect();
    assert_eq!(connects, vec![Call::Connect("eu-central-1".to_string())]);
}

#[tokio::test]
async fn test_config_failure_stops_before_connect() {
    let mut harness = Harness::new();
    harness.config = None;

    let err = harness.run(&production_request()).await.unwrap_err();
    assert!(matches!(err, StratusError::MissingConfigField { .. }));
    assert_eq!(harness.log.calls(), vec![Call::Resolve]);
}

#[tokio::test]
async fn test_function_not_found_skips_grant_and_subscribe() {
    let not_found = RemoteError::NotFound {
        message: "Function not found: myFunction:production".to_string(),
    };
    let mut harness = Harness::new();
    harness.inspect = Err(not_found.clone());

    let err = harness.run(&production_request()).await.unwrap_err();
    assert_eq!(err.step(), Some(Step::InspectFunction));
    assert_eq!(err.remote(), Some(&not_found));

    let calls = harness.log.calls();
    assert_eq!(calls.len(), 3);
    assert!(!calls
        .iter()
        .any(|c| matches!(c, Call::AddPermission(_) | Call::Subscribe(_))));
}

#[tokio::test]
async fn test_duplicate_statement_skips_subscribe() {
    let duplicate = RemoteError::Conflict {
        message: "The statement id provided already exists".to_string(),
    };
    let mut harness = Harness::new();
    harness.grant = Err(duplicate.clone());

    let err = harness.run(&production_request()).await.unwrap_err();
    assert_eq!(err.step(), Some(Step::GrantPermission));
    assert_eq!(err.remote(), Some(&duplicate));
    assert!(!harness
        .log
        .calls()
        .iter()
        .any(|c| matches!(c, Call::Subscribe(_))));
}

#[tokio::test]
async fn test_subscription_failure_leaves_permission_granted() {
    let denied = RemoteError::AccessDenied {
        message: "not authorized to perform SNS:Subscribe".to_string(),
    };
    let mut harness = Harness::new();
    harness.subscribe = Err(denied.clone());

    let err = harness.run(&production_request()).await.unwrap_err();
    assert_eq!(err.step(), Some(Step::CreateSubscription));
    assert_eq!(err.remote(), Some(&denied));
    assert_eq!(harness.log.permission_requests().len(), 1);
    assert_eq!(harness.log.calls().len(), 5);
}

#[tokio::test]
async fn test_statement_id_unique_across_runs() {
    let harness = Harness::new();
    harness.run(&production_request()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(2)).await;
    harness.run(&production_request()).await.unwrap();

    let requests = harness.log.permission_requests();
    assert_eq!(requests.len(), 2);
    assert_ne!(requests[0].statement_id, requests[1].statement_id);
}

#[tokio::test]
async fn test_file_config_with_mock_services() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("stratus.json"),
        r#"{"lambda": {"name": "myFunction", "region": "us-east-1"}}"#,
    )
    .expect("Failed to write config");

    let harness = Harness::new();
    let request =
        production_request().with_location(ConfigLocation::new(dir.path(), "stratus.json"));
    stratus_core::SnsEventSource::new(FileConfigResolver, harness.provider())
        .run(&request)
        .await
        .unwrap();

    let calls = harness.log.calls();
    assert_eq!(calls[0], Call::Connect("us-east-1".to_string()));
    assert!(matches!(calls.last(), Some(Call::Subscribe(_))));
}
