#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{Identity, Role};
    use crate::state::session::{SessionContext, SessionState};
    use leptos::*;

    pub fn admin_identity() -> Identity {
        Identity {
            id: "u-admin".into(),
            name: "Admin Example".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            department: None,
            position: Some("People Ops".into()),
            leave_balance: None,
        }
    }

    pub fn member_identity() -> Identity {
        Identity {
            id: "u-member".into(),
            name: "Member Example".into(),
            email: "member@example.com".into(),
            role: Role::User,
            department: Some("Engineering".into()),
            position: None,
            leave_balance: Some(12),
        }
    }

    pub fn provide_session(user: Option<Identity>, loading: bool) -> SessionContext {
        let authenticated = user.is_some();
        let (session, set_session) = create_signal(SessionState {
            access_token: authenticated.then(|| "test-access".to_string()),
            refresh_token: authenticated.then(|| "test-refresh".to_string()),
            user,
            loading,
        });
        provide_context((session, set_session));
        (session, set_session)
    }

    pub fn provide_anonymous_session(loading: bool) -> SessionContext {
        provide_session(None, loading)
    }
}
