//! Request dispatch
//!
//! Turns a resolved route into an HTTP response. Each request opens its own
//! store connection; the connection is dropped when `handle` returns,
//! whether the page rendered, was not found, or failed.

use askama::Template;

use crate::adapters::SqliteStore;
use crate::config::AppConfig;
use crate::domain::ports::{Clock, DashboardRepository};
use crate::pages::{self, PageContext, PageError};

use super::router::Route;

/// A framework-independent HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// `Content-Type` header value
    pub content_type: &'static str,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A rendered HTML page
    #[must_use]
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into_bytes(),
        }
    }

    /// A plain-text 404
    #[must_use]
    pub fn not_found(message: &str) -> Self {
        Self {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            body: message.as_bytes().to_vec(),
        }
    }

    /// A plain-text 500; details stay in the log
    #[must_use]
    pub fn internal_error() -> Self {
        Self {
            status: 500,
            content_type: "text/plain; charset=utf-8",
            body: b"Internal Server Error".to_vec(),
        }
    }

    /// Body as UTF-8 text (lossy)
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The dashboard application: configuration plus clock
pub struct App {
    config: AppConfig,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create an application from config and a clock
    #[must_use]
    pub fn new(config: AppConfig, clock: Box<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle one request
    pub fn handle(&self, method: &tiny_http::Method, url: &str) -> HttpResponse {
        let route = Route::resolve(method, url);
        if route == Route::NotFound {
            return HttpResponse::not_found("Not Found");
        }

        let store = match SqliteStore::open(&self.config.database.path) {
            Ok(store) => store,
            Err(e) => {
                log::error!("{method} {url}: {e}");
                return HttpResponse::internal_error();
            },
        };

        let response = self.render(&store, route);
        if response.status >= 500 {
            log::error!("{method} {url} -> {}", response.status);
        }
        response
    }

    /// Render a route against any repository
    pub fn render(&self, repo: &dyn DashboardRepository, route: Route) -> HttpResponse {
        let ctx = PageContext {
            maptiler_key: &self.config.map.maptiler_key,
            reference_date: self.config.dashboard.reference_date.resolve(self.clock.as_ref()),
            clock: self.clock.as_ref(),
        };

        match route {
            Route::Home => respond(pages::home(repo, &ctx)),
            Route::Customers => respond(pages::customers(repo)),
            Route::Customer(id) => respond(pages::customer_detail(repo, id)),
            Route::Site(id) => respond(pages::site_detail(repo, id)),
            Route::Job(id) => respond(pages::job_detail(repo, &ctx, id)),
            Route::Calendar => respond(pages::calendar(repo)),
            Route::NotFound => HttpResponse::not_found("Not Found"),
        }
    }
}

/// Convert a page result into a response
fn respond<T: Template>(result: Result<T, PageError>) -> HttpResponse {
    match result {
        Ok(view) => match view.render() {
            Ok(html) => HttpResponse::html(html),
            Err(e) => {
                log::error!("template rendering failed: {e}");
                HttpResponse::internal_error()
            },
        },
        Err(e) if e.is_not_found() => HttpResponse::not_found(&e.message),
        Err(e) => {
            log::error!("{e}");
            HttpResponse::internal_error()
        },
    }
}
