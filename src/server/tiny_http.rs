//! `tiny_http` server adapter
//!
//! Accepts connections on one thread and answers each request in turn.

use std::io::Cursor;

use anyhow::anyhow;
use tiny_http::{Header, Response, Server, StatusCode};

use super::dispatch::{App, HttpResponse};

/// Serve the dashboard until the listener shuts down
pub fn serve(app: &App) -> anyhow::Result<()> {
    let addr = app.config().server.addr();
    let server = Server::http(&addr).map_err(|e| anyhow!("failed to start server on {addr}: {e}"))?;

    log::info!(
        "serving on http://{addr} (database {})",
        app.config().database.path.display()
    );

    for request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = app.handle(&method, &url);
        log::debug!("{method} {url} -> {}", response.status);

        if let Err(e) = request.respond(into_tiny_http(response)) {
            log::warn!("failed to send response for {url}: {e}");
        }
    }

    Ok(())
}

/// Convert a dispatch response into a `tiny_http` response
fn into_tiny_http(response: HttpResponse) -> Response<Cursor<Vec<u8>>> {
    let mut out = Response::from_data(response.body).with_status_code(StatusCode(response.status));
    if let Ok(header) = Header::from_bytes("Content-Type", response.content_type) {
        out.add_header(header);
    }
    out
}
