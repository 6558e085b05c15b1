//! Remote control of a running game
//!
//! A game exposes two calls: `init()` hands out a session id for a new
//! controller, `trigger_button(session, direction, button)` delivers one button
//! event. [`JsonRpcClient`] speaks JSON-RPC 2.0 over HTTP to such a game.

use super::buttons::{Button, Direction};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Identifies one controller towards the game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur during a remote call
#[derive(Debug, Clone)]
pub enum RpcError {
    /// The request could not be delivered or the reply not read
    Http(String),

    /// The reply is not a JSON-RPC response we understand
    Malformed(String),

    /// The game answered with an error object
    Remote { code: i64, message: String },
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RpcError::Http(msg) => write!(f, "HTTP error: {}", msg),
            RpcError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
            RpcError::Remote { code, message } => {
                write!(f, "Remote error {}: {}", code, message)
            }
        }
    }
}

impl std::error::Error for RpcError {}

/// The calls a game offers to remote controllers
pub trait RemoteControl {
    /// Registers a new controller and returns its session id
    fn init(&mut self) -> Result<SessionId, RpcError>;

    /// Delivers one button event for `session`
    fn trigger_button(
        &mut self,
        session: &SessionId,
        direction: Direction,
        button: Button,
    ) -> Result<(), RpcError>;
}

#[derive(Debug, Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: i64,
    message: String,
}

/// Builds a JSON-RPC 2.0 request object
pub fn request(id: u64, method: &str, params: Value) -> Value {
    json!(Request {
        jsonrpc: "2.0",
        id,
        method,
        params,
    })
}

/// Extracts the result of a JSON-RPC 2.0 response object
pub fn parse_response(body: Value) -> Result<Value, RpcError> {
    let response: Response =
        serde_json::from_value(body).map_err(|e| RpcError::Malformed(e.to_string()))?;

    match (response.result, response.error) {
        (_, Some(error)) => Err(RpcError::Remote {
            code: error.code,
            message: error.message,
        }),
        (Some(result), None) => Ok(result),
        // a void method answers with "result": null
        (None, None) => Ok(Value::Null),
    }
}

/// Reads a session id, which games send as a string or a number
pub fn session_from_value(value: Value) -> Result<SessionId, RpcError> {
    match value {
        Value::String(id) => Ok(SessionId(id)),
        Value::Number(id) => Ok(SessionId(id.to_string())),
        other => Err(RpcError::Malformed(format!("unexpected session id: {}", other))),
    }
}

/// JSON-RPC client for a game listening on `http://host:port`
pub struct JsonRpcClient {
    url: String,
    agent: ureq::Agent,
    next_id: u64,
}

impl JsonRpcClient {
    pub fn new(host: &str, port: u16) -> Self {
        JsonRpcClient {
            url: format!("http://{}:{}", host, port),
            agent: ureq::Agent::new_with_defaults(),
            next_id: 1,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn call(&mut self, method: &str, params: Value) -> Result<Value, RpcError> {
        let body = request(self.next_id, method, params);
        self.next_id += 1;

        let mut response = self
            .agent
            .post(&self.url)
            .send_json(&body)
            .map_err(|e| RpcError::Http(format!("{} {}: {}", method, self.url, e)))?;
        let reply: Value = response
            .body_mut()
            .read_json()
            .map_err(|e| RpcError::Malformed(e.to_string()))?;

        parse_response(reply)
    }
}

impl RemoteControl for JsonRpcClient {
    fn init(&mut self) -> Result<SessionId, RpcError> {
        let result = self.call("init", json!([]))?;
        session_from_value(result)
    }

    fn trigger_button(
        &mut self,
        session: &SessionId,
        direction: Direction,
        button: Button,
    ) -> Result<(), RpcError> {
        self.call(
            "trigger_button",
            json!([session.0, direction.name(), button.name()]),
        )?;
        Ok(())
    }
}
