//! Named assertion lookup.
//!
//! Handlers live in an explicit name -> handler map. Asking for a name that
//! was never bound yields [`AssertionNotFoundError`] carrying that name;
//! asking for a bound name hands back the handler untouched.

mod builtins;

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{AssertionError, AssertionNotFoundError};

/// Receives the topic and the expected arguments of a vow.
pub type AssertionHandler =
    Arc<dyn Fn(&Value, &[Value]) -> Result<(), AssertionError> + Send + Sync>;

pub struct AssertionResolver<H = AssertionHandler> {
    handlers: HashMap<String, H>,
}

impl<H> AssertionResolver<H> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Binds `handler` under `name`, returning whatever was bound there before.
    pub fn bind(&mut self, name: impl Into<String>, handler: H) -> Option<H> {
        let name = name.into();
        tracing::trace!(assertion = %name, "binding assertion");
        self.handlers.insert(name, handler)
    }

    pub fn unbind(&mut self, name: &str) -> Option<H> {
        self.handlers.remove(name)
    }

    pub fn resolve(&self, name: &str) -> Result<&H, AssertionNotFoundError> {
        self.handlers
            .get(name)
            .ok_or_else(|| AssertionNotFoundError::new(name))
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl AssertionResolver<AssertionHandler> {
    /// A resolver with the standard assertions already bound.
    pub fn with_builtins() -> Self {
        let mut resolver = Self::new();
        builtins::register(&mut resolver);
        resolver
    }

    pub fn bind_fn<F>(&mut self, name: impl Into<String>, handler: F) -> Option<AssertionHandler>
    where
        F: Fn(&Value, &[Value]) -> Result<(), AssertionError> + Send + Sync + 'static,
    {
        self.bind(name, Arc::new(handler))
    }

    /// Resolves `name` and runs it against `topic`.
    pub fn check(&self, name: &str, topic: &Value, args: &[Value]) -> Result<(), AssertionError> {
        let handler = self.resolve(name)?;
        handler(topic, args)
    }
}

impl<H> Default for AssertionResolver<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for AssertionResolver<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionResolver")
            .field("names", &self.names())
            .finish()
    }
}
