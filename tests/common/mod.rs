//! A stateful fake of the BigCommerce v3 hooks API for integration tests.
//!
//! Hooks are owned by the API account (client ID and access token) that
//! created them and are invisible to every other account, as on the real
//! platform.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use bigcommerce_provider::{HostUrl, ProviderConfig, StoreHash};
use serde_json::{json, Map, Value};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const STORE_HASH: &str = "abc123";

#[derive(Clone, Debug, PartialEq, Eq)]
struct Account {
    client_id: String,
    access_token: String,
}

#[derive(Clone, Debug)]
struct StoredHook {
    owner: Account,
    scope: String,
    destination: String,
    is_active: bool,
    headers: Map<String, Value>,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, Default)]
struct FakeState {
    next_id: u64,
    clock: i64,
    hooks: BTreeMap<u64, StoredHook>,
}

/// Handle to the fake API's state; clones share the same hooks.
#[derive(Clone, Debug, Default)]
pub struct FakeHooksApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeHooksApi {
    /// Starts a mock server with the fake hooks API mounted.
    pub async fn start() -> (MockServer, Self) {
        let server = MockServer::start().await;
        let fake = Self::default();

        Mock::given(path_regex(r"^/stores/[A-Za-z0-9]+/v3/hooks(/[^/]+)?$"))
            .respond_with(fake.clone())
            .mount(&server)
            .await;

        (server, fake)
    }

    /// Returns the stored hook as the API would serialize it.
    pub fn hook(&self, id: u64) -> Option<Value> {
        let state = self.state.lock().unwrap();
        state.hooks.get(&id).map(|hook| hook_json(id, hook))
    }

    /// Returns the client ID that owns a hook.
    pub fn owner_of(&self, id: u64) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.hooks.get(&id).map(|hook| hook.owner.client_id.clone())
    }

    /// Returns the number of stored hooks.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().hooks.len()
    }

    /// Removes a hook behind the provider's back.
    pub fn remove(&self, id: u64) {
        self.state.lock().unwrap().hooks.remove(&id);
    }
}

impl Respond for FakeHooksApi {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let header = |name: &str| {
            request
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        let account = Account {
            client_id: header("x-auth-client"),
            access_token: header("x-auth-token"),
        };
        if account.client_id.is_empty() || account.access_token.is_empty() {
            return problem(401, "You are not authorized to perform this action");
        }

        let mut segments = request.url.path().rsplit('/');
        let last = segments.next().unwrap_or_default();
        let id = if last == "hooks" {
            None
        } else {
            match last.parse::<u64>() {
                Ok(id) => Some(id),
                Err(_) => return problem(404, "The requested resource was not found"),
            }
        };

        let mut state = self.state.lock().unwrap();
        match (request.method.as_str(), id) {
            ("POST", None) => {
                let body = match parse_body(request) {
                    Ok(body) => body,
                    Err(response) => return response,
                };
                state.next_id += 1;
                state.clock += 1;
                let id = state.next_id;
                let now = 1_700_000_000 + state.clock;
                let hook = StoredHook {
                    owner: account,
                    scope: body.0,
                    destination: body.1,
                    is_active: body.2,
                    headers: body.3,
                    created_at: now,
                    updated_at: now,
                };
                let response = envelope(&hook_json(id, &hook));
                state.hooks.insert(id, hook);
                response
            }
            ("GET", Some(id)) => match state.hooks.get(&id) {
                Some(hook) if hook.owner == account => envelope(&hook_json(id, hook)),
                _ => problem(404, "The requested resource was not found"),
            },
            ("PUT", Some(id)) => {
                let body = match parse_body(request) {
                    Ok(body) => body,
                    Err(response) => return response,
                };
                state.clock += 1;
                let now = 1_700_000_000 + state.clock;
                match state.hooks.get_mut(&id) {
                    Some(hook) if hook.owner == account => {
                        hook.scope = body.0;
                        hook.destination = body.1;
                        hook.is_active = body.2;
                        hook.headers = body.3;
                        hook.updated_at = now;
                        envelope(&hook_json(id, hook))
                    }
                    _ => problem(404, "The requested resource was not found"),
                }
            }
            ("DELETE", Some(id)) => match state.hooks.get(&id) {
                Some(hook) if hook.owner == account => {
                    let response = envelope(&hook_json(id, hook));
                    state.hooks.remove(&id);
                    response
                }
                _ => problem(404, "The requested resource was not found"),
            },
            _ => problem(405, "Method not allowed"),
        }
    }
}

type HookBody = (String, String, bool, Map<String, Value>);

fn parse_body(request: &Request) -> Result<HookBody, ResponseTemplate> {
    let body: Value = serde_json::from_slice(&request.body)
        .map_err(|_| problem(400, "The request body is not valid JSON"))?;

    let mut errors = Map::new();
    let scope = body["scope"].as_str().unwrap_or_default().to_string();
    if scope.is_empty() {
        errors.insert("scope".to_string(), json!("scope is required"));
    }
    let destination = body["destination"].as_str().unwrap_or_default().to_string();
    if !destination.starts_with("https://") {
        errors.insert(
            "destination".to_string(),
            json!("destination must be a valid https URL"),
        );
    }
    let is_active = body["is_active"].as_bool().unwrap_or(false);
    let headers = body["headers"].as_object().cloned().unwrap_or_default();

    if errors.is_empty() {
        Ok((scope, destination, is_active, headers))
    } else {
        Err(ResponseTemplate::new(422).set_body_json(json!({
            "status": 422,
            "title": "JSON data is missing or invalid",
            "type": "https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes",
            "errors": errors
        })))
    }
}

fn hook_json(id: u64, hook: &StoredHook) -> Value {
    json!({
        "id": id,
        "client_id": hook.owner.client_id,
        "store_hash": STORE_HASH,
        "created_at": hook.created_at,
        "updated_at": hook.updated_at,
        "scope": hook.scope,
        "destination": hook.destination,
        "is_active": hook.is_active,
        "headers": if hook.headers.is_empty() { Value::Null } else { Value::Object(hook.headers.clone()) }
    })
}

fn envelope(data: &Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("X-Rate-Limit-Requests-Left", "149")
        .insert_header("X-Rate-Limit-Requests-Quota", "150")
        .insert_header("X-Rate-Limit-Time-Reset-Ms", "29000")
        .insert_header("X-Rate-Limit-Time-Window-Ms", "30000")
        .set_body_json(json!({"data": data, "meta": {}}))
}

fn problem(status: u16, title: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "status": status,
        "title": title,
        "type": "https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes"
    }))
}

/// Provider configuration pointing at the mock server.
pub fn meta(server: &MockServer) -> ProviderConfig {
    ProviderConfig::builder()
        .store_hash(StoreHash::new(STORE_HASH).unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

/// Converts a JSON object literal into an attribute map.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Planned configuration for a webhook resource.
pub fn webhook_config(client_id: &str, scope: &str, is_active: bool) -> Map<String, Value> {
    object(json!({
        "client_id": client_id,
        "access_token": format!("{client_id}-token"),
        "scope": scope,
        "destination": "https://example.com/hooks",
        "is_active": is_active,
        "header": [
            {"key": "X-Functions-Key", "value": "secret"},
            {"key": "X-Source", "value": "provider-tests"}
        ]
    }))
}
