//! Who is acting. Every owner-scoped operation asks the session first and
//! fails with [`crate::error::FolioError::Unauthorized`] when nobody is
//! signed in.

use crate::model::UserId;

pub trait Session {
    fn current_user(&self) -> Option<UserId>;
}

/// A session fixed at construction, as used by the CLI and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticSession {
    user: Option<UserId>,
}

impl StaticSession {
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl Session for StaticSession {
    fn current_user(&self) -> Option<UserId> {
        self.user
    }
}
