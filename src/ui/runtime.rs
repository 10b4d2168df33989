use crate::config::{Config, TokenStore};
use crate::gateway::ApiClient;
use crate::session::{perform, RemoteAction, UiCommand, Worker};
use crate::shutdown::{wait_for_signal, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 64;

pub fn run(config: Config, tokens: TokenStore) -> io::Result<()> {
    let token = tokens.load().map_err(io::Error::other)?;
    let resumed = token.is_some();
    let client = ApiClient::new(&config.api)
        .map_err(io::Error::other)?
        .with_token(token);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let shutdown = ShutdownHandle::new();
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_worker(
        Worker::new(client, tokens),
        command_rx,
        events.sender(),
        shutdown.clone(),
    ));
    runtime.spawn(forward_signals(events.sender(), shutdown.clone()));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.display.clone());
    app.set_command_sender(command_tx);
    if resumed {
        tracing::info!("stored token found, opening management screen");
        app.resume();
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Remote(outcome)) => app.on_remote(outcome),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}

/// Executes commands until the UI goes away. Auth actions run inline so
/// token changes keep their order; data actions run as their own tasks.
async fn run_worker(
    mut worker: Worker,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    loop {
        let command = tokio::select! {
            _ = shutdown.wait() => break,
            command = commands.recv() => match command {
                Some(command) => command,
                None => break,
            },
        };

        match command.action {
            RemoteAction::Auth(action) => {
                let outcome = worker.authenticate(command.ticket, action).await;
                if events.send(AppEvent::Remote(outcome)).is_err() {
                    break;
                }
            }
            RemoteAction::Data(action) => {
                let client = worker.client().clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let outcome = perform(&client, command.ticket, action).await;
                    let _ = events.send(AppEvent::Remote(outcome));
                });
            }
        }
    }
    tracing::debug!("worker stopped");
}

async fn forward_signals(events: Sender<AppEvent>, shutdown: ShutdownHandle) {
    tokio::select! {
        _ = shutdown.wait() => {}
        _ = wait_for_signal() => {
            shutdown.signal();
            let _ = events.send(AppEvent::Shutdown);
        }
    }
}
