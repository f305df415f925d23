//! API module contract and method registry.
//!
//! The server itself owns no API business logic; it dispatches `/api/{method}`
//! requests into whatever [`ApiModule`] was injected at startup. A module is a
//! mapping from method name to an async handler of the request's query
//! parameters, plus a doc handler that renders documentation pages by URL.

use std::{collections::HashMap, sync::Arc};

use futures::future::BoxFuture;

use crate::error::api::ApiError;

/// Query parameters handed to an API method, as decoded key/value pairs.
pub type QueryParams = HashMap<String, String>;

/// Outcome of an API method: a JSON value on success, or an error carrying an
/// optional numeric status code.
pub type MethodResult = Result<serde_json::Value, ApiError>;

/// An installed API method handler.
pub type MethodHandler =
    Arc<dyn Fn(QueryParams) -> BoxFuture<'static, MethodResult> + Send + Sync>;

/// An installed doc handler, invoked with the request URL.
pub type DocHandler =
    Arc<dyn Fn(String) -> BoxFuture<'static, Result<String, ApiError>> + Send + Sync>;

/// The call contract between the request pipeline and the API module.
pub trait ApiModule: Send + Sync {
    /// Looks up a method by name. `None` means the method does not exist and
    /// the request falls through to the 404 catch-all.
    fn handler(&self, method: &str) -> Option<MethodHandler>;

    /// Renders the documentation page for a request URL. A missing page is
    /// reported with the not-found sentinel (see [`ApiError::not_found`]).
    fn doc(&self, url: &str) -> BoxFuture<'static, Result<String, ApiError>>;
}

/// HashMap-backed [`ApiModule`] the application and tests install methods into.
#[derive(Default)]
pub struct Registry {
    methods: HashMap<String, MethodHandler>,
    docs: Option<DocHandler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a method under a name, replacing any previous handler.
    pub fn with_method(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(QueryParams) -> BoxFuture<'static, MethodResult> + Send + Sync + 'static,
    ) -> Self {
        self.methods.insert(name.into(), Arc::new(handler));

        self
    }

    /// Installs the doc handler.
    pub fn with_docs(
        mut self,
        handler: impl Fn(String) -> BoxFuture<'static, Result<String, ApiError>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.docs = Some(Arc::new(handler));

        self
    }
}

impl ApiModule for Registry {
    fn handler(&self, method: &str) -> Option<MethodHandler> {
        self.methods.get(method).cloned()
    }

    fn doc(&self, url: &str) -> BoxFuture<'static, Result<String, ApiError>> {
        match &self.docs {
            Some(handler) => handler(url.to_string()),
            // No doc handler installed: every docs page is missing
            None => Box::pin(async { Err(ApiError::not_found()) }),
        }
    }
}
