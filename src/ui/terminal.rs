use crate::app::{mode::AppMode, App, AppEvent};
use crate::ui::render;
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Run until the app asks to quit. Redraws only after an event.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if !event::poll(POLL_TIMEOUT)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Paste(text) => {
                    debug!(bytes = text.len(), "paste received");
                    app.handle_event(AppEvent::Paste(text));
                }
                Event::Resize(_, _) => {}
                _ => continue,
            }

            self.render_frame(app)?;
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal
            .draw(|frame| render::draw(frame, &render_state))?;
        Ok(())
    }
}
