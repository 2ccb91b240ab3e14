//! Agents View
//!
//! Loads the agent administration view once against the configured platform
//! API and prints what an operator would see: the active workspace, its
//! enrollment token and its agents.

use agents_view::api::ApiClient;
use agents_view::config::Config;
use agents_view::controller::Services;
use agents_view::ui::{ConsoleNotifications, DeclineAll, StdoutClipboard};
use agents_view::AgentsView;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let api = Arc::new(ApiClient::new(&config.api)?);
    let services = Services {
        workspaces: api.clone(),
        agents: api,
        dialog: Arc::new(DeclineAll),
        notifications: Arc::new(ConsoleNotifications),
        clipboard: Arc::new(StdoutClipboard),
    };

    let mut view = AgentsView::new(services, config.view);
    view.init();
    view.settle().await;

    let Some(workspace) = view.active_workspace() else {
        anyhow::bail!("No workspace could be loaded from {}", config.api.base_url);
    };

    println!("Workspace: {}", workspace);
    match view.token().decoded() {
        Some(token) => println!("Enrollment token: {}", token),
        None => println!("Enrollment token: <none>"),
    }
    println!("{:<8} {:<32} {:<8} STATUS", "ID", "NAME", "ACTIVE");
    for agent in view.agents() {
        println!(
            "{:<8} {:<32} {:<8} {}",
            agent.id, agent.name, agent.active, agent.status
        );
    }
    Ok(())
}
