//! Drives one visitor through the portal and prints what each page would
//! show. Set `RUST_LOG=debug` to watch the state transitions.

use cardportal::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Page stand-ins
// ---------------------------------------------------------------------------

fn visit(ctx: &PortalContext, path: &str) -> Route {
    let route = Route::from_path(path);
    match guard(route, ctx.session()) {
        NavigationIntent::Stay => route,
        NavigationIntent::Redirect(to) => {
            println!("  {path} → {to}");
            to
        }
    }
}

fn toast(ctx: &PortalContext, notice: flows::Notice) {
    let rendered = notice.render(ctx.localization());
    println!("  [{:?}] {}: {}", rendered.variant, rendered.title, rendered.description);
}

async fn login(ctx: &PortalContext, username: &str, password: &str) -> Result<(), PortalError> {
    let l10n = ctx.localization();
    println!("  {} ({username})", flows::login_button_label(ctx.session(), l10n));

    let outcome = flows::submit_login(ctx.session(), username, password).await?;
    toast(ctx, outcome.notice);
    if let NavigationIntent::Redirect(to) = outcome.navigate {
        visit(ctx, to.path());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ctx = PortalContext::builder().build();
    let l10n = ctx.localization();

    println!("{}", l10n.translate("platform.title"));
    visit(&ctx, "/card-details");

    login(&ctx, "demo", "").await?;
    login(&ctx, "demo", "000000").await?;

    println!("  [{}]", l10n.active_language().toggle_label());
    l10n.toggle();

    login(&ctx, "demo", "123456").await?;
    if let Some(user) = ctx.session().current_user() {
        println!("{}", flows::welcome_message(l10n, &user));
        println!("  {}: {}", l10n.translate("dashboard.email"), user.email);
    }

    let reset = flows::request_password_reset(
        "demo@example.com",
        ctx.config().password_reset_latency(),
    )
    .await;
    toast(&ctx, reset.notice());

    let next = flows::logout(ctx.session());
    if let NavigationIntent::Redirect(to) = next {
        visit(&ctx, to.path());
    }
    println!("{}", l10n.translate("platform.title"));

    tracing::info!(state = %ctx.session().state(), "walkthrough finished");
    Ok(())
}
