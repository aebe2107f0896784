//! Page-level flows: what happens when a visitor submits a form.
//!
//! Each flow talks to the managers and returns what the page should show
//! (a [`Notice`] for the toast layer) and where it should go (a
//! [`NavigationIntent`]). Rendering and navigation stay outside.

use std::sync::LazyLock;
use std::time::Duration;

use cardportal_i18n::Localizer;
use cardportal_session::{AuthSession, SessionError, UserIdentity};
use regex::Regex;

use crate::routing::{NavigationIntent, Route};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    /// Shown in error colors.
    Destructive,
}

/// A toast to show, as translation keys.
///
/// Keys rather than text, so the notice renders in whatever language is
/// active when the toast layer gets to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

impl Notice {
    const fn info(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            variant: NoticeVariant::Default,
        }
    }

    const fn error(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            variant: NoticeVariant::Destructive,
        }
    }

    /// Translates both keys in the active language.
    pub fn render(&self, l10n: &impl Localizer) -> RenderedNotice {
        RenderedNotice {
            title: l10n.translate(self.title).to_string(),
            description: l10n.translate(self.description).to_string(),
            variant: self.variant,
        }
    }
}

/// A notice with its text resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

pub const LOGIN_INCOMPLETE: Notice =
    Notice::error("login.error.empty", "login.error.emptyDesc");
pub const LOGIN_SUCCEEDED: Notice =
    Notice::info("login.success", "login.success.desc");
pub const LOGIN_FAILED: Notice =
    Notice::error("login.error.failed", "login.error.failedDesc");
pub const RESET_EMAIL_MISSING: Notice =
    Notice::error("forgot.error.empty", "forgot.error.emptyDesc");
pub const RESET_EMAIL_INVALID: Notice =
    Notice::error("forgot.error.invalid", "forgot.error.invalidDesc");
pub const RESET_EMAIL_SENT: Notice =
    Notice::info("forgot.success.toast", "forgot.success.toastDesc");

// ---------------------------------------------------------------------------
// Login / logout
// ---------------------------------------------------------------------------

/// Result of submitting the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    pub notice: Notice,
    pub navigate: NavigationIntent,
}

impl LoginOutcome {
    pub fn succeeded(&self) -> bool {
        self.navigate == NavigationIntent::Redirect(Route::Dashboard)
    }
}

/// Submits the login form.
///
/// Both fields must be non-empty before the session manager is even asked;
/// otherwise the visitor gets the "please fill in everything" notice.
/// Success sends them to the dashboard, failure keeps them on the form.
///
/// # Errors
/// Passes through [`SessionError::LoginInProgress`] when the form is
/// submitted again before the previous attempt resolved. The page should
/// have its button disabled (see [`login_button_label`]), so this means a
/// double-submit slipped through.
pub async fn submit_login(
    session: &impl AuthSession,
    username: &str,
    password: &str,
) -> Result<LoginOutcome, SessionError> {
    if username.is_empty() || password.is_empty() {
        return Ok(LoginOutcome {
            notice: LOGIN_INCOMPLETE,
            navigate: NavigationIntent::Stay,
        });
    }

    let outcome = if session.login(username, password).await? {
        LoginOutcome {
            notice: LOGIN_SUCCEEDED,
            navigate: NavigationIntent::Redirect(Route::Dashboard),
        }
    } else {
        LoginOutcome {
            notice: LOGIN_FAILED,
            navigate: NavigationIntent::Stay,
        }
    };
    Ok(outcome)
}

/// Logs out and sends the visitor back to the landing page.
pub fn logout(session: &impl AuthSession) -> NavigationIntent {
    session.logout();
    NavigationIntent::Redirect(Route::Index)
}

/// The login button text: a progress label while the check runs.
pub fn login_button_label<'a>(
    session: &impl AuthSession,
    l10n: &'a impl Localizer,
) -> &'a str {
    if session.is_pending() {
        l10n.translate("login.loading")
    } else {
        l10n.translate("login.button")
    }
}

/// The dashboard greeting for `user`.
pub fn welcome_message(l10n: &impl Localizer, user: &UserIdentity) -> String {
    l10n.translate_with("dashboard.welcome", &[("username", user.username.as_str())])
}

// ---------------------------------------------------------------------------
// Password reset
// ---------------------------------------------------------------------------

/// Loose shape check: something, `@`, something, `.`, something, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Result of submitting the forgot-password form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The address was missing or malformed; nothing was sent.
    Rejected(Notice),
    /// The (simulated) reset email went out.
    Sent { email: String, notice: Notice },
}

impl ResetOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Rejected(notice) | Self::Sent { notice, .. } => *notice,
        }
    }

    /// The confirmation paragraph naming the address, once sent.
    pub fn confirmation(&self, l10n: &impl Localizer) -> Option<String> {
        match self {
            Self::Sent { email, .. } => Some(
                l10n.translate_with("forgot.success.description", &[("email", email.as_str())]),
            ),
            Self::Rejected(_) => None,
        }
    }
}

/// Submits the forgot-password form.
///
/// Validates the address, then waits `latency` to stand in for the mail
/// service. There is no real delivery.
pub async fn request_password_reset(email: &str, latency: Duration) -> ResetOutcome {
    if email.is_empty() {
        return ResetOutcome::Rejected(RESET_EMAIL_MISSING);
    }
    if !is_valid_email(email) {
        tracing::debug!(%email, "password reset rejected, malformed address");
        return ResetOutcome::Rejected(RESET_EMAIL_INVALID);
    }

    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    tracing::info!(%email, "password reset email sent");

    ResetOutcome::Sent {
        email: email.to_string(),
        notice: RESET_EMAIL_SENT,
    }
}
