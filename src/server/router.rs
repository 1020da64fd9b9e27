//! URL routing
//!
//! Maps a method and request URL to one of the dashboard pages. Only `GET`
//! is served; IDs must be unsigned integers.

use tiny_http::Method;

/// A resolved dashboard route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Home,
    /// `GET /customers`
    Customers,
    /// `GET /customers/{id}`
    Customer(i64),
    /// `GET /sites/{id}`
    Site(i64),
    /// `GET /jobs/{id}`
    Job(i64),
    /// `GET /calendar`
    Calendar,
    /// Anything else
    NotFound,
}

impl Route {
    /// Resolve a request to a route
    ///
    /// The query string is ignored.
    #[must_use]
    pub fn resolve(method: &Method, url: &str) -> Self {
        if *method != Method::Get {
            return Self::NotFound;
        }

        let path = url.split_once('?').map_or(url, |(path, _)| path);

        match path {
            "/" => Self::Home,
            "/customers" => Self::Customers,
            "/calendar" => Self::Calendar,
            _ => {
                if let Some(id) = id_after(path, "/customers/") {
                    Self::Customer(id)
                } else if let Some(id) = id_after(path, "/sites/") {
                    Self::Site(id)
                } else if let Some(id) = id_after(path, "/jobs/") {
                    Self::Job(id)
                } else {
                    Self::NotFound
                }
            },
        }
    }
}

/// Parse the integer segment following `prefix`, if the rest is all digits
fn id_after(path: &str, prefix: &str) -> Option<i64> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}
