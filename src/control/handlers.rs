//! Control operations
//!
//! Routes /get, /set, /add and /remove (plus the pre-0.2.0 aliases
//! /current and /switch) onto the registry. Validation lives here, not
//! in the registry: by the time a mutation reaches the registry it is
//! already committed.

use tracing::{info, warn};

use crate::control::request::Request;
use crate::control::response::Response;
use crate::control::validate::parse_backend_list;
use crate::proxy::BackendRegistry;

/// Route one control request to its operation.
pub async fn dispatch(registry: &BackendRegistry, req: &Request) -> Response {
    match req.path() {
        "/get" | "/current" => get(registry).await,
        "/set" => set(registry, req.query_param("backends")).await,
        // The pre-0.2.0 API spelled the parameter differently.
        "/switch" => set(registry, req.query_param("backend")).await,
        "/add" => add(registry, req.query_param("backend")).await,
        "/remove" => remove(registry, req.query_param("backend")).await,
        _ => Response::not_found(),
    }
}

/// Current list, comma-joined, newline-terminated. Never fails.
async fn get(registry: &BackendRegistry) -> Response {
    Response::ok(format!("{}\n", registry.snapshot().await))
}

/// Replace the whole list. All-or-nothing: one bad entry rejects the
/// request and leaves the registry untouched.
async fn set(registry: &BackendRegistry, backends: Option<String>) -> Response {
    let raw = backends.unwrap_or_default();

    match parse_backend_list(&raw) {
        Ok(parsed) => {
            registry.set(parsed).await;
            info!(backends = %raw, "backend list replaced");
            get(registry).await
        }
        Err(e) => {
            warn!("rejected set: {}", e);
            Response::bad_request(format!("error: {e}"))
        }
    }
}

/// Append one backend. The address is not format-checked here: /set is
/// strict, /add has always accepted any non-empty string, and existing
/// callers rely on that asymmetry.
async fn add(registry: &BackendRegistry, backend: Option<String>) -> Response {
    let Some(backend) = backend.filter(|b| !b.is_empty()) else {
        return Response::bad_request("error: missing 'backend' parameter");
    };

    registry.add(backend.clone()).await;
    info!(backend = %backend, "backend added");
    get(registry).await
}

/// Remove every occurrence of one backend. Removing an address that is
/// not present is a client error; the registry is left untouched.
async fn remove(registry: &BackendRegistry, backend: Option<String>) -> Response {
    let Some(backend) = backend.filter(|b| !b.is_empty()) else {
        return Response::bad_request("error: missing 'backend' parameter");
    };

    let removed = registry.remove(&backend).await;
    if removed == 0 {
        warn!(backend = %backend, "rejected remove: backend not found");
        return Response::bad_request(format!("error: backend '{backend}' not found"));
    }

    info!(backend = %backend, removed, "backend removed");
    get(registry).await
}
