use leptos::*;

use crate::{
    api::{ApiClient, ApiError, AuthData, Identity, LoginRequest, RegisterRequest, Role},
    utils::storage,
};

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// The single owned session object. Tokens and identity are only ever
/// written through the actions in this module; `is_authenticated` and
/// `role` are derived on read so they cannot desync from the tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role().map(Role::is_admin).unwrap_or(false)
    }
}

/// Commit rule for hydration: tokens are adopted only when both survive
/// the round trip through durable storage; anything else is "no session".
pub fn apply_hydration(
    state: &mut SessionState,
    access: Option<String>,
    refresh: Option<String>,
) {
    if let (Some(access), Some(refresh)) = (access, refresh) {
        state.access_token = Some(access);
        state.refresh_token = Some(refresh);
    }
}

/// One-time resolver: reads persisted tokens, resolves the identity when a
/// token exists, and drops `loading` exactly once. Never flips `loading`
/// back to true.
pub async fn hydrate(api: &ApiClient, set_session: WriteSignal<SessionState>) {
    let (access, refresh) = storage::read_tokens();
    resolve_session(api, set_session, access, refresh).await;
}

/// Durable storage is wiped only when the backend rejects the token; a
/// transport or decode failure keeps the persisted pair so the next start
/// can retry, and the session simply finishes loading with whatever was
/// committed.
async fn resolve_session(
    api: &ApiClient,
    set_session: WriteSignal<SessionState>,
    access: Option<String>,
    refresh: Option<String>,
) {
    let has_tokens = access.is_some() && refresh.is_some();
    set_session.update(|state| apply_hydration(state, access, refresh));

    if !has_tokens {
        log::info!("No persisted session found");
        set_session.update(|state| state.loading = false);
        return;
    }

    match api.get_me().await {
        Ok(identity) => set_session.update(|state| {
            state.user = Some(identity);
            state.loading = false;
        }),
        Err(err) if err.unauthorized => {
            log::warn!("Persisted session rejected: {}", err);
            storage::clear_tokens();
            set_session.update(|state| *state = SessionState::default());
        }
        Err(err) => {
            log::warn!("Could not resolve identity, keeping stored tokens: {}", err);
            set_session.update(|state| state.loading = false);
        }
    }
}

/// Idempotent: storing the same pair twice leaves state and storage
/// unchanged.
pub fn store_tokens(set_session: WriteSignal<SessionState>, access: &str, refresh: &str) {
    if let Err(err) = storage::persist_tokens(access, refresh) {
        log::warn!("Failed to persist tokens: {}", err);
    }
    let access = access.to_string();
    let refresh = refresh.to_string();
    set_session.update(|state| {
        state.access_token = Some(access);
        state.refresh_token = Some(refresh);
    });
}

/// Unconditional teardown: in-memory session and both storage keys, no
/// error when already cleared.
pub fn clear_session(set_session: WriteSignal<SessionState>) {
    storage::clear_tokens();
    set_session.update(|state| *state = SessionState::default());
}

fn commit_auth(auth: &AuthData, set_session: WriteSignal<SessionState>) {
    store_tokens(set_session, &auth.access_token, &auth.refresh_token);
    let identity = auth.identity().cloned();
    set_session.update(|state| state.user = identity);
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState {
        loading: true,
        ..SessionState::default()
    });

    let api = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        hydrate(&api, set_session).await;
    });

    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_session: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    let auth = api.login(&request).await?;
    commit_auth(&auth, set_session);
    Ok(())
}

pub async fn register_request(
    request: RegisterRequest,
    api: &ApiClient,
    set_session: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    let auth = api.register(&request).await?;
    commit_auth(&auth, set_session);
    Ok(())
}

/// The session is cleared even when the backend call fails: logout must
/// always leave the client unauthenticated.
pub async fn logout(
    api: &ApiClient,
    set_session: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    let result = api.logout().await;
    clear_session(set_session);
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_session).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { register_request(payload, &api, set_session).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_session).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test(flavor = "current_thread")]
    async fn login_commits_tokens_and_identity() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({
                "success": true,
                "message": "Logged in",
                "data": {
                    "user": {
                        "id": "u1",
                        "name": "Alice",
                        "email": "alice@example.com",
                        "role": "user"
                    },
                    "accessToken": "abc",
                    "refreshToken": "xyz"
                }
            }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
            },
            &api,
            set_session,
        )
        .await
        .unwrap();

        let snapshot = session.get();
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.access_token.as_deref(), Some("abc"));
        assert_eq!(snapshot.role(), Some(Role::User));
        runtime.dispose();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_login_leaves_session_untouched() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(json!({
                "success": false,
                "message": "Invalid credentials"
            }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let err = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "wrong".into(),
            },
            &api,
            set_session,
        )
        .await
        .unwrap_err();

        assert_eq!(err.message, "Invalid credentials");
        assert!(!session.get().is_authenticated());
        runtime.dispose();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn logout_clears_session_even_when_backend_call_fails() {
        // No stored token on the host, so the logout request fails locally;
        // the session must still be torn down.
        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState {
            access_token: Some("abc".into()),
            refresh_token: Some("xyz".into()),
            user: Some(crate::test_support::fixtures::member_identity()),
            loading: false,
        });
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9");

        let _ = logout(&api, set_session).await;

        let snapshot = session.get();
        assert!(!snapshot.is_authenticated());
        assert!(snapshot.refresh_token.is_none());
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn store_tokens_is_idempotent() {
        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState::default());

        store_tokens(set_session, "abc", "xyz");
        let first = session.get();
        store_tokens(set_session, "abc", "xyz");
        assert_eq!(first, session.get());
        runtime.dispose();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn hydrate_with_empty_storage_finishes_unauthenticated() {
        // No window on the host, so durable storage is empty; loading must
        // still drop without any network traffic.
        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState {
            loading: true,
            ..SessionState::default()
        });
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9");

        hydrate(&api, set_session).await;

        let snapshot = session.get();
        assert!(!snapshot.is_authenticated());
        assert!(snapshot.user.is_none());
        assert!(!snapshot.loading);
        runtime.dispose();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn transient_identity_failure_keeps_committed_tokens() {
        // The identity call fails for a non-auth reason here; the committed
        // token pair must survive and loading must still finish.
        let runtime = create_runtime();
        let (session, set_session) = create_signal(SessionState {
            loading: true,
            ..SessionState::default()
        });
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9");

        resolve_session(&api, set_session, Some("abc".into()), Some("xyz".into())).await;

        let snapshot = session.get();
        assert_eq!(snapshot.access_token.as_deref(), Some("abc"));
        assert_eq!(snapshot.refresh_token.as_deref(), Some("xyz"));
        assert!(snapshot.user.is_none());
        assert!(!snapshot.loading);
        runtime.dispose();
    }

    #[test]
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (session, _set_session) = use_session();
            let snapshot = session.get();
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.user.is_none());
            assert!(!snapshot.loading);
        });
    }

    #[test]
    fn clear_session_is_safe_when_already_cleared() {
        with_runtime(|| {
            let (session, set_session) = create_signal(SessionState::default());
            clear_session(set_session);
            clear_session(set_session);
            assert!(!session.get().is_authenticated());
        });
    }
}
