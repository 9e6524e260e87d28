//! tiny_http server adapter
//!
//! Handles routing, body parsing, response conversion and static assets.
//! The store is opened and migrated by the caller before `serve` binds the
//! port, so clients can never observe a half-initialized store: until the
//! socket exists they simply get connection refused.

use std::io::Cursor;
use std::io::Read as _;

use include_dir::{Dir, include_dir};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{self, ApiError};
use crate::storage::ChoreStore;

/// Embedded web UI, compiled into the server binary
static STATIC_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static");

/// The URL the server listens on for a given port
#[must_use]
pub fn listen_url(port: u16) -> String {
    format!("http://127.0.0.1:{port}")
}

/// Bind the port and serve requests until the process is terminated
///
/// Requests are handled one at a time; store mutations are additionally
/// serialized by the store's own lock.
pub fn serve(store: &ChoreStore, port: u16) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{port}");
    let server =
        Server::http(&addr).map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;

    log::info!("listening on {}", listen_url(port));
    println!("choreboard server running on {}", listen_url(port));

    for mut request in server.incoming_requests() {
        let response = handle_request(store, &mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

/// Route a single request
fn handle_request(store: &ChoreStore, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or(&url);
    let method = request.method().clone();

    log::debug!("{method} {path}");

    match (&method, path) {
        (&Method::Get, "/api/health") => json_response(&api::health(), 200),
        (&Method::Get, "/api/chores") => handle_result(api::list_chores(store), 200),

        (&Method::Post, "/api/chores") => match read_json_body(request) {
            Ok(req) => handle_result(api::create_chore(store, &req), 201),
            Err(e) => error_response(&e),
        },

        // Chore detail: GET /api/chores/{id}
        _ if method == Method::Get && path.starts_with("/api/chores/") => {
            match parse_id(path) {
                Ok(id) => handle_result(api::get_chore(store, id), 200),
                Err(e) => error_response(&e),
            }
        }

        // Chore update: PUT /api/chores/{id}
        _ if method == Method::Put && path.starts_with("/api/chores/") => {
            match parse_id(path) {
                Ok(id) => match read_json_body(request) {
                    Ok(req) => handle_result(api::update_chore(store, id, &req), 200),
                    Err(e) => error_response(&e),
                },
                Err(e) => error_response(&e),
            }
        }

        // Chore delete: DELETE /api/chores/{id}
        _ if method == Method::Delete && path.starts_with("/api/chores/") => {
            match parse_id(path) {
                Ok(id) => handle_result(api::delete_chore(store, id), 200),
                Err(e) => error_response(&e),
            }
        }

        // Unknown API route
        _ if path.starts_with("/api/") => {
            error_response(&ApiError::not_found(format!(
                "API endpoint not found: {method} {path}"
            )))
        }

        // Everything else is a static asset
        (&Method::Get, _) => serve_static(path),

        _ => error_response(&ApiError::not_found(format!("no route for {method} {path}"))),
    }
}

/// Extract the numeric id from `/api/chores/{id}`
///
/// A non-numeric tail can never name a chore, so it is a 404, not a 400.
fn parse_id(path: &str) -> Result<i64, ApiError> {
    let tail = path.strip_prefix("/api/chores/").unwrap_or("");
    tail.parse::<i64>()
        .map_err(|_| ApiError::not_found(format!("Chore '{tail}' not found")))
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse a JSON body from the request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(
    result: Result<T, ApiError>,
    success_status: u16,
) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&data, success_status),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with the error's status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    json_response(&error.body(), error.status_code())
}

/// Serialize data to a JSON response with a status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"error":"serialization"}"#.to_string());
    Response::from_data(json.into_bytes())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
        .with_status_code(StatusCode(status))
}

// =============================================================================
// STATIC ASSETS
// =============================================================================

/// Serve a file from the embedded static directory
fn serve_static(path: &str) -> Response<Cursor<Vec<u8>>> {
    let rel = match path.trim_start_matches('/') {
        "" => "index.html",
        other => other,
    };

    STATIC_DIR.get_file(rel).map_or_else(
        || {
            Response::from_data(b"Not Found".to_vec()).with_status_code(StatusCode(404))
        },
        |file| {
            Response::from_data(file.contents().to_vec())
                .with_header(Header::from_bytes("Content-Type", content_type(rel)).unwrap())
        },
    )
}

/// Content-Type by file extension
fn content_type(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
