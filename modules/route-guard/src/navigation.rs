use std::collections::HashMap;

/// Where the guard is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSide {
    /// Server-side rendering. No session cookies or local credentials are available here.
    Server,
    /// In the browser after hydration.
    Client,
}

/// A pending navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    path: String,
    query: HashMap<String, String>,
    side: RenderSide,
}

impl Navigation {
    #[must_use]
    pub fn new(path: impl Into<String>, side: RenderSide) -> Self {
        Self {
            path: path.into(),
            query: HashMap::new(),
            side,
        }
    }

    /// Navigation evaluated in the browser.
    #[must_use]
    pub fn client(path: impl Into<String>) -> Self {
        Self::new(path, RenderSide::Client)
    }

    /// Navigation evaluated during server-side rendering.
    #[must_use]
    pub fn server(path: impl Into<String>) -> Self {
        Self::new(path, RenderSide::Server)
    }

    /// Parse `path?query` into a navigation. Query values are percent-decoded;
    /// an undecodable query string is dropped.
    #[must_use]
    pub fn from_uri(uri: &str, side: RenderSide) -> Self {
        let (path, query) = uri.split_once('?').unwrap_or((uri, ""));
        let query = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
            .map(|pairs| pairs.into_iter().collect())
            .unwrap_or_default();

        Self {
            path: path.to_owned(),
            query,
            side,
        }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn side(&self) -> RenderSide {
        self.side
    }

    /// True if the path is the admin section or below it.
    #[must_use]
    pub fn is_admin_path(&self) -> bool {
        is_admin_path(&self.path)
    }
}

/// True if `path` is the admin section or below it, trailing slash included.
#[must_use]
pub fn is_admin_path(path: &str) -> bool {
    path.strip_prefix(crate::ADMIN_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
