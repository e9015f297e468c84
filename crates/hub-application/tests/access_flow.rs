//! End-to-end navigation scenarios over a file-backed session.

use std::sync::Arc;

use hub_application::{AuthOutcome, HubContext, Navigator};
use hub_core::config::HubConfig;
use hub_core::identity::{IdentityDirectory, Role, StaticDirectory};
use hub_core::routing::{ROUTES, View};
use hub_infrastructure::MemorySessionSlot;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> HubConfig {
    HubConfig {
        storage_dir: Some(dir.path().to_path_buf()),
        auth_delay_ms: 0,
        ..HubConfig::default()
    }
}

async fn memory_context() -> HubContext {
    let config = HubConfig {
        auth_delay_ms: 0,
        ..HubConfig::default()
    };
    HubContext::with_parts(
        config,
        Arc::new(MemorySessionSlot::new()),
        Arc::new(StaticDirectory::demo()),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn unauthenticated_goals_then_planner_login_lands_on_dashboard() {
    let context = memory_context().await;
    let mut nav = context.navigator();

    let first = nav.navigate("/goals").await;
    assert_eq!(first.redirects, vec!["/login"]);
    assert_eq!(first.view, View::Login);

    let outcome = context
        .session_store
        .authenticate("planejamento@hering.com", "demo123")
        .await
        .unwrap();
    assert!(outcome.is_authenticated());

    // Post-login landing comes from the login route, not the original request.
    let landing = nav.refresh().await;
    assert_eq!(landing.redirects, vec!["/dashboard"]);
    assert_eq!(landing.view, View::Dashboard);
    assert_eq!(nav.location(), "/dashboard");
}

#[tokio::test]
async fn seller_requesting_dashboard_is_sent_to_seller_view() {
    let context = memory_context().await;
    let mut nav = context.navigator();
    context
        .session_store
        .authenticate("vendedor@hering.com", "demo123")
        .await
        .unwrap();

    let result = nav.navigate("/dashboard").await;

    assert_eq!(result.redirects, vec!["/vendedor"]);
    assert_eq!(result.view, View::SellerDashboard);
}

#[tokio::test]
async fn role_restricted_views_never_render_for_other_role() {
    let context = memory_context().await;
    let directory = StaticDirectory::demo();

    for identity in directory.list() {
        context
            .session_store
            .authenticate(&identity.email, "x")
            .await
            .unwrap();
        let mut nav: Navigator = context.navigator();

        for route in ROUTES {
            let Some(required) = route.required_role() else {
                continue;
            };
            if required == identity.role {
                continue;
            }
            let result = nav.navigate(route.path).await;
            assert_ne!(result.view, route.view);
            assert_eq!(nav.location(), identity.role.default_path());
        }
    }
}

#[tokio::test]
async fn logout_returns_to_login_and_session_does_not_restore() {
    let temp_dir = TempDir::new().unwrap();
    let context = HubContext::bootstrap(config_in(&temp_dir)).await.unwrap();
    let mut nav = context.navigator();

    context
        .session_store
        .authenticate("vendedor@hering.com", "x")
        .await
        .unwrap();
    assert_eq!(nav.navigate("/clients").await.view, View::Clients);

    context.session_store.clear().await.unwrap();
    let after = nav.refresh().await;
    assert_eq!(after.view, View::Login);

    let reopened = HubContext::bootstrap(config_in(&temp_dir)).await.unwrap();
    assert!(reopened.session_store.current().await.is_none());
}

#[tokio::test]
async fn failed_login_stays_on_login_with_message() {
    let context = memory_context().await;
    let mut nav = context.navigator();

    let outcome = context
        .session_store
        .authenticate("unknown@x.com", "x")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        AuthOutcome::Rejected {
            message: "Credenciais inválidas. Tente novamente."
        }
    );
    assert_eq!(nav.refresh().await.view, View::Login);
}

#[tokio::test]
async fn persisted_session_survives_restart_for_each_role() {
    for role in [Role::Seller, Role::Planner] {
        let temp_dir = TempDir::new().unwrap();
        let identity = StaticDirectory::demo()
            .list()
            .into_iter()
            .find(|i| i.role == role)
            .unwrap();

        let context = HubContext::bootstrap(config_in(&temp_dir)).await.unwrap();
        context
            .session_store
            .authenticate(&identity.email, "secret")
            .await
            .unwrap();

        let restarted = HubContext::bootstrap(config_in(&temp_dir)).await.unwrap();
        assert_eq!(restarted.session_store.current().await, Some(identity.clone()));

        let mut nav = restarted.navigator();
        let landing = nav.navigate("/").await;
        assert_eq!(landing.location, role.default_path());
    }
}

#[tokio::test]
async fn malformed_session_file_starts_logged_out() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("hering_user.json"), "{\"role\":").unwrap();

    let context = HubContext::bootstrap(config_in(&temp_dir)).await.unwrap();

    assert!(context.session_store.current().await.is_none());
    let mut nav = context.navigator();
    assert_eq!(nav.navigate("/reports").await.view, View::Login);
}
