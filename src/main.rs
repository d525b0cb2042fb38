use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

use tconv::app::{ConverterApp, EventResult};
use tconv::cli::{self, CliRequest};
use tconv::kernel::Effect;
use tconv::services::load_settings;
use tconv::tui::crossterm::into_input_event;
use tconv::tui::osc52;
use tconv::tui::terminal_guard::{QuitSignals, TerminalGuard, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    let request = match cli::parse_args(std::env::args().skip(1)) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("tconv: {err}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    match request {
        CliRequest::Help => {
            println!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        CliRequest::Convert { value, unit } => match cli::convert_once(&value, unit) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("tconv: {err}");
                ExitCode::from(2)
            }
        },
        CliRequest::Interactive => match run_interactive() {
            Ok(None) => ExitCode::SUCCESS,
            Ok(Some(signal)) => ExitCode::from(signal.exit_code()),
            Err(err) => {
                eprintln!("tconv: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_interactive() -> io::Result<Option<TerminationSignal>> {
    let _logging = logging::init();
    let settings = load_settings();
    let mut app = ConverterApp::new(&settings);

    let guard = TerminalGuard::enter()?;
    let release = guard.release_handle();
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = release.release();
        previous_hook(info);
    }));

    let signals = quit_signals();

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut dirty = true;
    let mut received = None;
    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                app.render(frame, area);
            })?;
            dirty = false;
        }

        if let Some(signal) = signals.take() {
            tracing::info!(?signal, "leaving on signal");
            received = Some(signal);
            break;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };

        match app.handle_input(&event) {
            EventResult::Quit => break,
            EventResult::Consumed => dirty = true,
            EventResult::Ignored => {}
        }
        run_effects(&mut app);
    }

    tracing::info!("exiting");
    drop(terminal);
    drop(guard);
    Ok(received)
}

fn quit_signals() -> QuitSignals {
    #[cfg(unix)]
    {
        match QuitSignals::register() {
            Ok(signals) => return signals,
            Err(err) => tracing::warn!(error = %err, "failed to install signal handlers"),
        }
    }
    QuitSignals::default()
}

fn run_effects(app: &mut ConverterApp) {
    for effect in app.take_effects() {
        match effect {
            Effect::SetClipboardText(text) => match osc52::copy_to_clipboard(&text) {
                Ok(()) => tracing::debug!(bytes = text.len(), "results copied"),
                Err(err) => tracing::warn!(error = %err, "clipboard copy failed"),
            },
        }
    }
}
