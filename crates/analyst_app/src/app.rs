use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::time::Duration;

use analyst_core::{update, AppState, Msg};
use app_logging::app_info;

use crate::commands::{self, Command};
use crate::effects::EffectRunner;
use crate::examples::EXAMPLES;
use crate::render;

/// How often the submit wait loop wakes up to check for a response.
const RESPONSE_POLL: Duration = Duration::from_millis(20);
/// Health checks are bounded, unlike analysis requests.
const HEALTH_WAIT: Duration = Duration::from_secs(10);

pub fn run_app() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(stdin.lock(), stdout.lock())
}

fn run_loop(mut input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (notice_tx, notice_rx) = mpsc::channel::<String>();
    let runner = EffectRunner::new(msg_tx, notice_tx)?;

    let mut state = AppState::new();
    writeln!(out, "Site analyst. Type 'help' for commands.")?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Completions that arrived between commands (e.g. a superseded
        // request finishing late) are applied before the next action.
        state = drain_pending(state, &msg_rx, &runner);

        let command = match commands::parse(trimmed) {
            Ok(command) => command,
            Err(usage) => {
                writeln!(out, "{usage}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                for help_line in commands::help_lines() {
                    writeln!(out, "{help_line}")?;
                }
            }
            Command::Show => render_view(&state, &mut out)?,
            Command::EditUrl(url) => {
                state = dispatch(state, Msg::UrlEdited(url), &runner);
                state.consume_dirty();
                writeln!(out, "URL set.")?;
            }
            Command::EditQuery(query) => {
                state = dispatch(state, Msg::QueryEdited(query), &runner);
                state.consume_dirty();
                writeln!(out, "Query set.")?;
            }
            Command::ChooseExample(index) => {
                let preset = &EXAMPLES[index];
                state = dispatch(
                    state,
                    Msg::ExampleChosen {
                        url: preset.url.to_string(),
                        query: preset.query.to_string(),
                    },
                    &runner,
                );
                state.consume_dirty();
                writeln!(out, "Loaded example: {}", preset.label)?;
                writeln!(out, "  url   {}", preset.url)?;
                writeln!(out, "  query {}", preset.query)?;
            }
            Command::Submit => {
                app_info!("submit url={} query_len={}", state.view().url.len(), state.view().query.len());
                state = dispatch(state, Msg::SubmitClicked, &runner);
                if state.view().request.is_loading() {
                    writeln!(out, "Analyzing...")?;
                    out.flush()?;
                    state = wait_for_terminal(state, &msg_rx, &runner);
                }
                render_view(&state, &mut out)?;
            }
            Command::CheckHealth => {
                runner.check_health();
                match notice_rx.recv_timeout(HEALTH_WAIT) {
                    Ok(notice) => writeln!(out, "{notice}")?,
                    Err(_) => writeln!(out, "Health check timed out")?,
                }
            }
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn drain_pending(mut state: AppState, msg_rx: &mpsc::Receiver<Msg>, runner: &EffectRunner) -> AppState {
    while let Ok(msg) = msg_rx.try_recv() {
        state = dispatch(state, msg, runner);
    }
    state
}

/// Blocks until the request leaves `Loading`. The wait is unbounded, matching
/// the client's missing request deadline; the response itself decides when.
fn wait_for_terminal(
    mut state: AppState,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &EffectRunner,
) -> AppState {
    while state.view().request.is_loading() {
        match msg_rx.recv_timeout(RESPONSE_POLL) {
            Ok(msg) => state = dispatch(state, msg, runner),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    state
}

fn render_view(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    for line in render::render(&state.view()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
