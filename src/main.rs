use eyre::{Context, Result};
use parley::app::services::{ActionService, ClipboardService, EventService};
use parley::app::{App, destruct_terminal_for_panic};
use parley::backend::new_backend;
use parley::cli::Command;
use parley::config::{init_logger, init_theme};
use parley::models::Action;
use tokio::{sync::mpsc, task};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    init_logger(&config.log)?;

    let theme = init_theme(&config.theme)?;
    let backend = new_backend(&config.backend).wrap_err("initializing backend")?;

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let mut events = EventService::new();
    let token = CancellationToken::new();

    let mut task_set = task::JoinSet::new();

    let mut action_service =
        ActionService::new(backend, action_rx, events.event_tx(), token.clone());
    task_set.spawn(async move { action_service.run().await });

    if let Err(err) = ClipboardService::init() {
        log::warn!("clipboard service is not available: {err}");
    } else {
        let token_clone = token.clone();
        task_set.spawn(async move { ClipboardService::start(token_clone).await });
    }

    let mut app = App::new(theme, action_tx, &mut events, token.clone());
    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();
    task_set.abort_all();
    while let Some(res) = task_set.join_next().await {
        match res {
            Ok(_) => {}
            Err(err) if err.is_cancelled() => {}
            Err(err) => log::error!("task error: {}", err),
        }
    }

    Ok(())
}
