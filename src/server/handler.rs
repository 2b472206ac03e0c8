//! Static file responses
//!
//! Turns a parsed request into one of the server's responses, checked in
//! this order: negotiation (406), existence (404), then the file itself
//! (200, or 500 when it cannot be read).

use tracing::{debug, warn};

use crate::http::negotiate::{extension_of, is_acceptable};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::docroot::DocumentRoot;

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: DocumentRoot,
}

impl StaticFiles {
    pub fn new(root: DocumentRoot) -> Self {
        Self { root }
    }

    pub async fn respond(&self, request: &Request) -> Response {
        let path = self.root.resolve(request.path());
        let extension = extension_of(&path);

        if !is_acceptable(request.accept(), &extension) {
            debug!(
                accept = request.accept().unwrap_or("-"),
                extension = %extension,
                "Not acceptable"
            );
            return Response::not_acceptable();
        }

        // An error while probing counts as absent.
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!(path = %path.display(), "Not found");
            return Response::not_found();
        }

        // Whole file in memory; the file is closed before we respond.
        match tokio::fs::read(&path).await {
            Ok(contents) => Response::ok(contents),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file");
                Response::internal_error()
            }
        }
    }
}
