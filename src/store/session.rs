//! Where the store gets its bearer token from.

use crate::model::AuthSession;

/// The authenticated user as far as the store cares: just the token.
#[derive(Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub token: String,
}

impl std::fmt::Debug for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUser")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl CurrentUser {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Read synchronously at dispatch time, before any transport call.
pub trait SessionContext: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;
}

impl SessionContext for CurrentUser {
    fn current_user(&self) -> Option<CurrentUser> {
        Some(self.clone())
    }
}

impl SessionContext for AuthSession {
    fn current_user(&self) -> Option<CurrentUser> {
        Some(CurrentUser::new(self.token.clone()))
    }
}

/// A logged-out client holds `None`.
impl<S: SessionContext> SessionContext for Option<S> {
    fn current_user(&self) -> Option<CurrentUser> {
        self.as_ref().and_then(SessionContext::current_user)
    }
}

/// The token to present, if there is a non-blank one.
pub(crate) fn bearer_token<S: SessionContext + ?Sized>(session: &S) -> Option<String> {
    session
        .current_user()
        .map(|user| user.token)
        .filter(|token| !token.trim().is_empty())
}
