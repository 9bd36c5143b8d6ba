use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use recipes_rs::config::{AppConfig, CliArgs};
use recipes_rs::controller::AppController;
use recipes_rs::data::{
    DataRepository, ErrorManager, FilePreferences, LocalData, RemoteData, TcpConnectivity,
};
use recipes_rs::logging;
use recipes_rs::model::AppModel;
use recipes_rs::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = AppConfig::from_args(&args)?;

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Recipes-RS Starting ===");

    let model = Arc::new(build_model(&config)?);
    let controller = AppController::new(model.clone());

    // First load runs in the background so the TUI shows the loading state
    controller.spawn_refresh();

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Recipes-RS shutting down");
    Ok(())
}

fn build_model(config: &AppConfig) -> Result<AppModel> {
    let base_url = config.base_url()?;

    let connectivity = TcpConnectivity::for_url(&base_url, config.connectivity_timeout())
        .ok_or_else(|| anyhow::anyhow!("base URL {} has no host to check connectivity against", base_url))?;
    let remote = RemoteData::new(
        &base_url,
        config.connect_timeout(),
        config.read_timeout(),
        Arc::new(connectivity),
    )?;
    tracing::debug!(url = %remote.recipes_url(), "Remote data source ready");

    let preferences = FilePreferences::open(&config.preferences_path)?;
    let local = LocalData::new(Arc::new(preferences), config.favourites_key.clone());

    let repository = Arc::new(DataRepository::new(Arc::new(remote), local));
    Ok(AppModel::new(repository, ErrorManager::default()))
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> Result<()> {
    loop {
        model.auto_clear_old_toasts().await;

        let ui_state = model.get_ui_state().await;
        let recipes = model.recipes_list.recipes().await;
        let recipe = model.details.recipe_data().await;
        let is_favourite = model.details.is_favourite_state().await;

        terminal.draw(|f| {
            AppView::render(f, &ui_state, &recipes, recipe.as_ref(), &is_favourite);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
