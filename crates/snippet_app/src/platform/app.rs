use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use snippet_core::{update, AppState, Msg, SessionConfig};
use snippet_engine::{EngineEvent, EngineEvents, EngineHandle};
use snippet_logging::{snippet_debug, snippet_info};

use super::clipboard::{ClipboardSink, Osc52Clipboard};
use super::effects::EffectRunner;
use super::input::{parse_command, Command};
use super::prefs::PrefsStore;
use super::ui;

enum AppEvent {
    Input(Command),
    InputClosed,
    Engine(Msg),
}

pub fn run_app(
    config: SessionConfig,
    engine: EngineHandle,
    events: EngineEvents,
    prefs: PrefsStore,
) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_reader(event_tx.clone())?;
    spawn_engine_pump(events, event_tx)?;

    let runner = EffectRunner::new(engine, prefs, Osc52Clipboard::stdout(), io::stdout());
    let mut session = Session::new(AppState::new(config), runner);
    let mut out = io::stdout();

    session.dispatch(Msg::SessionStarted);
    ui::paint(&mut out, &session.state.view()).context("drawing screen")?;

    while let Ok(event) = event_rx.recv() {
        let repaint = match event {
            AppEvent::Engine(msg) => session.dispatch(msg),
            AppEvent::Input(Command::Session(msg)) => session.dispatch(msg),
            AppEvent::Input(Command::Redraw) => true,
            AppEvent::Input(Command::Help) => {
                ui::print_help(&mut out).context("printing help")?;
                false
            }
            AppEvent::Input(Command::Unknown(line)) => {
                writeln!(out, "Unknown command '{line}' (? for help)")?;
                false
            }
            AppEvent::Input(Command::Quit) | AppEvent::InputClosed => break,
        };
        if repaint {
            ui::paint(&mut out, &session.state.view()).context("drawing screen")?;
        }
    }

    snippet_info!("session ended");
    ui::set_location(&mut out, None)?;
    Ok(())
}

/// State plus the effect runner; one message in, effects and their
/// follow-up messages run to completion.
struct Session<C: ClipboardSink, W: Write> {
    state: AppState,
    runner: EffectRunner<C, W>,
}

impl<C: ClipboardSink, W: Write> Session<C, W> {
    fn new(state: AppState, runner: EffectRunner<C, W>) -> Self {
        Self { state, runner }
    }

    /// Returns whether the screen needs a redraw.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            snippet_debug!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            if !effects.is_empty() {
                let view = self.state.view();
                inbox.extend(self.runner.run(effects, &view));
            }
        }
        self.state.consume_dirty()
    }
}

fn engine_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogLoaded { request_id, result } => match result {
            Ok(catalog) => Msg::CatalogLoaded {
                request_id,
                catalog,
            },
            Err(err) => Msg::CatalogFailed {
                request_id,
                reason: err.to_string(),
            },
        },
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("snippet-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if event_tx.send(AppEvent::Input(parse_command(&line))).is_err() {
                    return;
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

fn spawn_engine_pump(events: EngineEvents, event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("snippet-engine-pump".to_string())
        .spawn(move || {
            while let Some(event) = events.recv() {
                if event_tx.send(AppEvent::Engine(engine_msg(event))).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}
