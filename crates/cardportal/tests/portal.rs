//! Integration tests for the portal context: a visitor's full journey
//! through login, guarded pages, language switching and logout.

use std::sync::Arc;
use std::time::Duration;

use cardportal::prelude::*;
use cardportal::session::SessionConfig;
use tokio::sync::Notify;

// =========================================================================
// Helpers
// =========================================================================

/// Holds every credential check until the test releases it, then accepts
/// only `demo` / `123456`.
#[derive(Clone, Default)]
struct GatedAuth {
    gate: Arc<Notify>,
}

impl GatedAuth {
    fn release(&self) {
        self.gate.notify_one();
    }
}

impl Authenticator for GatedAuth {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserIdentity, SessionError> {
        self.gate.notified().await;
        if username == "demo" && password == "123456" {
            Ok(UserIdentity::new("demo", "demo@example.com"))
        } else {
            Err(SessionError::AuthFailed("mismatch".into()))
        }
    }
}

fn gated_context() -> (PortalContext<GatedAuth>, GatedAuth) {
    let auth = GatedAuth::default();
    let ctx = PortalContext::builder().build_with(auth.clone());
    (ctx, auth)
}

fn instant_context() -> PortalContext {
    PortalContext::builder()
        .config(PortalConfig {
            session: SessionConfig {
                login_latency_ms: 0,
                ..SessionConfig::default()
            },
            ..PortalConfig::default()
        })
        .build()
}

// =========================================================================
// Session properties
// =========================================================================

#[tokio::test]
async fn test_only_demo_pair_authenticates() {
    let ctx = instant_context();
    let session = ctx.session();

    let bad = [
        ("demo", "1234567"),
        ("demo", "12345"),
        ("admin", "123456"),
        ("demo@example.com", "123456"),
        ("", ""),
        ("123456", "demo"),
    ];
    for (u, p) in bad {
        assert!(!session.login(u, p).await.unwrap(), "({u:?}, {p:?})");
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    assert!(session.login("demo", "123456").await.unwrap());
    assert!(session.is_authenticated());
    assert_eq!(session.current_user().unwrap().username, "demo");
}

#[tokio::test]
async fn test_pending_is_observable_until_check_resolves() {
    let (ctx, auth) = gated_context();
    let session = ctx.session();
    let login = session.login("demo", "123456");
    tokio::pin!(login);

    // Poll once: the state flips before the authenticator is awaited.
    assert!(
        tokio::time::timeout(Duration::from_millis(1), &mut login)
            .await
            .is_err()
    );
    assert!(session.is_pending());
    assert!(!session.is_authenticated());
    assert_eq!(guard(Route::Dashboard, session), NavigationIntent::Stay);
    assert_eq!(
        flows::login_button_label(session, ctx.localization()),
        "登錄中..."
    );

    auth.release();

    assert!(login.await.unwrap());
    assert!(!session.is_pending());
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_double_submit_is_rejected_not_queued() {
    let (ctx, auth) = gated_context();
    let session = ctx.session();
    let first = flows::submit_login(session, "demo", "123456");
    tokio::pin!(first);
    assert!(
        tokio::time::timeout(Duration::from_millis(1), &mut first)
            .await
            .is_err()
    );

    let second = flows::submit_login(session, "demo", "wrong").await;
    assert!(matches!(second, Err(SessionError::LoginInProgress)));

    auth.release();
    let outcome = first.await.unwrap();
    assert!(outcome.succeeded());
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let ctx = instant_context();
    let session = ctx.session();
    session.login("demo", "123456").await.unwrap();

    session.logout();
    let after_first = session.state();
    session.logout();

    assert_eq!(session.state(), after_first);
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
}

// =========================================================================
// Full journey
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_visitor_journey_with_default_latency() {
    let ctx = PortalContext::builder().build();
    let session = ctx.session();
    let l10n = ctx.localization();

    // Landing page, then a deep link to the dashboard bounces to login.
    assert_eq!(guard(Route::Index, session), NavigationIntent::Stay);
    assert_eq!(
        guard(Route::from_path("/dashboard"), session),
        NavigationIntent::Redirect(Route::Login)
    );

    // Switch to English before logging in.
    assert_eq!(Language::Zh.toggle_label(), "EN");
    assert_eq!(l10n.toggle(), Language::En);

    // A typo first, then the right password.
    let failed = flows::submit_login(session, "demo", "12345").await.unwrap();
    assert_eq!(failed.notice.render(l10n).title, "Login Failed");
    assert_eq!(failed.navigate, NavigationIntent::Stay);

    let start = tokio::time::Instant::now();
    let ok = flows::submit_login(session, "demo", "123456").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(ok.navigate, NavigationIntent::Redirect(Route::Dashboard));
    assert_eq!(ok.notice.render(l10n).title, "Login Successful");

    // Dashboard greets the user in the active language.
    assert_eq!(guard(Route::Dashboard, session), NavigationIntent::Stay);
    let user = session.current_user().unwrap();
    assert_eq!(flows::welcome_message(l10n, &user), "Welcome back, demo!");
    l10n.set_language(Language::Zh);
    assert_eq!(flows::welcome_message(l10n, &user), "歡迎回來，demo！");

    // Landing page now forwards to the dashboard.
    assert_eq!(
        guard(Route::Index, session),
        NavigationIntent::Redirect(Route::Dashboard)
    );

    // Logout returns to the landing page and protected pages close again.
    assert_eq!(
        flows::logout(session),
        NavigationIntent::Redirect(Route::Index)
    );
    assert_eq!(
        guard(Route::CardDetails, session),
        NavigationIntent::Redirect(Route::Login)
    );
}

#[tokio::test(start_paused = true)]
async fn test_password_reset_uses_configured_latency() {
    let ctx = PortalContext::builder()
        .config_json(r#"{"default_language": "en", "password_reset_latency_ms": 500}"#)
        .unwrap()
        .build();
    let start = tokio::time::Instant::now();

    let outcome = flows::request_password_reset(
        "demo@example.com",
        ctx.config().password_reset_latency(),
    )
    .await;

    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(
        outcome.notice().render(ctx.localization()).title,
        "Reset email sent"
    );
    assert!(
        outcome
            .confirmation(ctx.localization())
            .unwrap()
            .contains("demo@example.com")
    );
}

// =========================================================================
// Startup ordering
// =========================================================================

#[test]
fn test_scope_rejects_access_before_context() {
    let mut scope: Scope = Scope::empty();

    let err = scope.localization().err().unwrap();
    assert!(matches!(err, PortalError::NotInitialized(_)));

    scope.set(instant_context());
    assert_eq!(
        scope.localization().unwrap().translate("login.button"),
        "登錄"
    );
}

#[test]
fn test_invalid_language_tag_surfaces_as_portal_error() {
    let ctx = instant_context();

    let err: PortalError = ctx
        .localization()
        .set_language_tag("xx")
        .unwrap_err()
        .into();

    assert!(matches!(err, PortalError::I18n(_)));
    assert_eq!(ctx.localization().active_language(), Language::Zh);
}
