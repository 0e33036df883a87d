use std::fmt;
use std::sync::Arc;

use crate::registry::global_registry;
use crate::status_codes::{CanonicalCode, StatusCanonicalCode};

/// Status is the status of a Span: a canonical code and an optional
/// description.
///
/// Statuses are immutable. Description-less statuses are shared templates
/// handed out by a StatusRegistry, so always compare statuses with `==`;
/// whether two `Arc<Status>` point at the same allocation is an
/// implementation detail.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Status<C = StatusCanonicalCode> {
    code: C,
    description: Option<String>,
}

impl<C: CanonicalCode> Status<C> {
    pub(crate) fn new(code: C, description: Option<String>) -> Self {
        Status { code, description }
    }

    /// code returns the canonical code of the status.
    pub fn code(&self) -> C {
        self.code
    }

    /// description returns the description, if one was supplied.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_unset(&self) -> bool {
        self.code == C::UNSET
    }

    pub fn is_ok(&self) -> bool {
        self.code == C::OK
    }

    pub fn is_error(&self) -> bool {
        self.code == C::ERROR
    }
}

impl Status {
    /// create returns a Status for the code with an optional description.
    ///
    /// Without a description the shared template for the code is returned.
    /// With one, a new Status is built on every call.
    pub fn create(code: StatusCanonicalCode, description: Option<&str>) -> Arc<Status> {
        global_registry().create(code, description)
    }

    /// unset returns the default status, assigned to spans before an outcome
    /// is known.
    pub fn unset() -> Arc<Status> {
        global_registry().unset()
    }

    /// ok returns the status of an operation validated to have completed
    /// successfully.
    pub fn ok() -> Arc<Status> {
        global_registry().ok()
    }

    /// error returns the status of an operation that contains an error.
    pub fn error() -> Arc<Status> {
        global_registry().error()
    }

    /// with_description derives a Status with the same code and the given
    /// description.
    ///
    /// ```rust
    /// use span_status::{Status, StatusCanonicalCode};
    ///
    /// let status = Status::error().with_description("could not find 'important_file.txt'");
    /// assert_eq!(status.code(), StatusCanonicalCode::Error);
    /// ```
    pub fn with_description(&self, description: &str) -> Arc<Status> {
        Status::create(self.code, Some(description))
    }
}

impl<C: CanonicalCode> Default for Status<C> {
    fn default() -> Self {
        Self::new(C::UNSET, None)
    }
}

impl<C: fmt::Display> fmt::Display for Status<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.code, description),
            None => write!(f, "{}", self.code),
        }
    }
}
