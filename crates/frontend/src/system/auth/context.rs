use contracts::enums::role::Role;
use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// App-wide session handle. The inner signal is private; the session is
/// mutated only through `establish` (login) and `clear` (logout, 401).
#[derive(Clone, Copy)]
pub struct SessionContext(RwSignal<Session>);

impl SessionContext {
    /// Restore from localStorage. Presence of a token is enough to count
    /// as logged in; a stale token is discovered lazily via the first 401.
    fn restore() -> Self {
        let session = match (storage::get_access_token(), storage::get_user()) {
            (Some(access_token), Some(user)) => Session {
                access_token: Some(access_token),
                user: Some(user),
            },
            _ => Session::default(),
        };
        Self(RwSignal::new(session))
    }

    pub fn get(&self) -> Session {
        self.0.get()
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.0.with_untracked(|s| s.access_token.clone())
    }

    pub fn user_untracked(&self) -> Option<SessionUser> {
        self.0.with_untracked(|s| s.user.clone())
    }

    pub fn establish(&self, access_token: String, user: SessionUser) {
        storage::save_session(&access_token, &user);
        self.0.set(Session {
            access_token: Some(access_token),
            user: Some(user),
        });
    }

    /// Drops the session everywhere. Safe to call from late async
    /// completions; a disposed signal just discards the write.
    pub fn clear(&self) {
        storage::clear_session();
        let _ = self.0.try_set(Session::default());
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    provide_context(SessionContext::restore());
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
