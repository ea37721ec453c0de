//! Correlation identifier attached to each request.
//!
//! The identifier is held in Tokio task-local storage. Errors built while it
//! is in scope record it, and the trace middleware echoes it to the client.
//! Task locals do not follow work onto other tasks or blocking threads; wrap
//! that work with [`TraceId::scope`] or [`TraceId::bind_blocking`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// UUID identifying one request across logs and error payloads.
///
/// # Examples
/// ```
/// use nudilog::TraceId;
///
/// let id: TraceId = "6f1c1f8e-3b7a-4c55-9a8e-0d3a9f2b7c41".parse().expect("uuid");
/// assert_eq!(id.to_string(), "6f1c1f8e-3b7a-4c55-9a8e-0d3a9f2b7c41");
/// assert!(TraceId::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random (v4) identifier.
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }

    /// Capture the current identifier into a closure destined for
    /// `spawn_blocking`, restoring it while the closure runs.
    pub fn bind_blocking<F, R>(f: F) -> impl FnOnce() -> R + Send + 'static
    where
        F: FnOnce() -> R + Send + 'static,
    {
        let captured = Self::current();
        move || match captured {
            Some(id) => CURRENT.sync_scope(id, f),
            None => f(),
        }
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
