//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.
//! Requests are served one at a time on the calling thread; the store is
//! owned by the serve loop, so no locking is involved.

use std::io::{Cursor, Read as _};

use ::tiny_http::{Header, Method, Request, Response, Server, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::adapters::UuidGenerator;
use crate::api::{self, ApiError, CreateRepositoryRequest, ErrorBody, UpdateRepositoryRequest};
use crate::config::ServerConfig;
use crate::core::services::RepositoryStore;

const COLLECTION_PATH: &str = "/repositories";

// =============================================================================
// SERVE LOOP
// =============================================================================

/// Bind the configured address and serve requests until the process stops
pub fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.address();
    let server = Server::http(&addr)
        .map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;

    log::info!("Listening on http://{addr}");

    let mut store = RepositoryStore::new(UuidGenerator::new());
    for mut request in server.incoming_requests() {
        let response = handle_api_request(&mut store, &mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// A routed response, independent of the HTTP library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    /// HTTP status code
    pub status: u16,
    /// JSON body, absent for 204
    pub body: Option<String>,
}

impl ApiReply {
    /// Parse the body as JSON (test and client convenience)
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(self.body.as_deref().unwrap_or("null"))
    }

    /// Convert into a `tiny_http` response
    #[must_use]
    pub fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let status = StatusCode(self.status);
        match self.body {
            Some(body) => Response::from_data(body.into_bytes())
                .with_header(json_header())
                .with_status_code(status),
            None => Response::from_data(Vec::new()).with_status_code(status),
        }
    }
}

/// Handle an API request and return a response
pub fn handle_api_request(
    store: &mut RepositoryStore,
    request: &mut Request,
) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();
    log::debug!("{method} {url}");

    let reply = match read_body(request) {
        Ok(body) => dispatch(store, &method, &url, &body),
        Err(e) => error_reply(&e),
    };
    reply.into_response()
}

/// Route a request to its handler.
///
/// This is the main routing function that maps URL paths to handlers.
/// The query string, if any, is ignored.
pub fn dispatch(store: &mut RepositoryStore, method: &Method, url: &str, body: &str) -> ApiReply {
    let path = url.split_once('?').map_or(url, |(path, _)| path);

    match (method, path) {
        // GET /repositories - list
        (&Method::Get, COLLECTION_PATH) => handle_result(api::list_repositories(store), 200),

        // POST /repositories - create
        (&Method::Post, COLLECTION_PATH) => match parse_json::<CreateRepositoryRequest>(body) {
            Ok(req) => handle_result(api::create_repository(store, &req), 201),
            Err(e) => error_reply(&e),
        },

        // POST /repositories/{id}/like
        _ if method == &Method::Post && like_id(path).is_some() => {
            let id = like_id(path).unwrap_or("");
            handle_result(api::like_repository(store, id), 200)
        },

        // PUT /repositories/{id} - partial update
        _ if method == &Method::Put && record_id(path).is_some() => {
            let id = record_id(path).unwrap_or("");
            // Unknown IDs are reported before the body is looked at
            if let Err(e) = api::ensure_repository(store, id) {
                return error_reply(&e);
            }
            match parse_json::<UpdateRepositoryRequest>(body) {
                Ok(req) => handle_result(api::update_repository(store, id, req), 200),
                Err(e) => error_reply(&e),
            }
        },

        // DELETE /repositories/{id}
        _ if method == &Method::Delete && record_id(path).is_some() => {
            let id = record_id(path).unwrap_or("");
            match api::delete_repository(store, id) {
                Ok(()) => ApiReply {
                    status: 204,
                    body: None,
                },
                Err(e) => error_reply(&e),
            }
        },

        // 404 for unknown API routes
        _ => error_reply(&ApiError::not_found(format!(
            "API endpoint not found: {method} {path}"
        ))),
    }
}

/// `/repositories/{id}` -> `{id}`, rejecting nested paths
fn record_id(path: &str) -> Option<&str> {
    path.strip_prefix(COLLECTION_PATH)?
        .strip_prefix('/')
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

/// `/repositories/{id}/like` -> `{id}`
fn like_id(path: &str) -> Option<&str> {
    record_id(path.strip_suffix("/like")?)
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

/// Parse a JSON body. An empty body counts as `{}`.
fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a reply with the given success status
fn handle_result<T: Serialize>(result: Result<T, ApiError>, status: u16) -> ApiReply {
    match result {
        Ok(data) => json_reply(&data, status),
        Err(e) => error_reply(&e),
    }
}

/// Create an error JSON reply with appropriate status code
fn error_reply(error: &ApiError) -> ApiReply {
    log::warn!("{error}");
    json_reply(&ErrorBody::from(error), error.status_code())
}

/// Serialize data to a JSON reply with status code
fn json_reply<T: Serialize>(data: &T, status: u16) -> ApiReply {
    match serde_json::to_string(data) {
        Ok(json) => ApiReply {
            status,
            body: Some(json),
        },
        Err(e) => {
            let err = ApiError::internal(format!("Failed to serialize response: {e}"));
            log::warn!("{err}");
            ApiReply {
                status: err.status_code(),
                body: Some(serde_json::json!({ "error": err.message }).to_string()),
            }
        },
    }
}

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("static header is valid")
}
