use super::App;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, EventStream},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Result;
use std::{panic, time::Duration};

fn restore_terminal() -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), DisableBracketedPaste, DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

pub async fn run(app: &mut App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    terminal.clear()?;
    app.draw(&mut terminal)?;

    let tick_rate = Duration::from_millis(app.state().ui.tick_rate_ms);
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut events = EventStream::new();

    while !app.should_exit() {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        app.handle_event(&event);
                        app.draw(&mut terminal)?;
                    }
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event error");
                        break;
                    }
                    None => break,
                }
            }
            _ = ticker.tick() => {
                if app.tick() {
                    app.draw(&mut terminal)?;
                }
            }
        }
    }

    terminal.show_cursor()?;
    restore_terminal()?;

    Ok(())
}
