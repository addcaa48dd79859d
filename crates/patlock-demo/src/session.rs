#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`TerminalSession`] enters raw mode, switches to the alternate screen,
//! enables mouse capture and hides the cursor. Everything is undone in
//! reverse order when the session is dropped, and a panic hook restores the
//! terminal before the panic message is printed.

use std::io::{self, Write};
use std::sync::OnceLock;

use crossterm::{cursor, event, execute, terminal};

/// RAII guard over the terminal modes the demo needs.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
    mouse_capture: bool,
}

impl TerminalSession {
    /// Enter raw mode, the alternate screen and mouse capture.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the setup sequence
    /// cannot be written.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        let mut session = Self {
            alternate_screen: false,
            mouse_capture: false,
        };
        let mut stdout = io::stdout();

        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Hide
        )?;
        session.alternate_screen = true;

        execute!(stdout, event::EnableMouseCapture)?;
        session.mouse_capture = true;
        tracing::info!("alternate screen and mouse capture enabled");

        Ok(session)
    }

    /// Terminal size as `(columns, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        if self.mouse_capture {
            let _ = execute!(stdout, event::DisableMouseCapture);
            self.mouse_capture = false;
        }

        let _ = execute!(stdout, cursor::Show);

        if self.alternate_screen {
            let _ = execute!(stdout, terminal::LeaveAlternateScreen);
            self.alternate_screen = false;
        }

        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::info!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, event::DisableMouseCapture);
    let _ = execute!(stdout, cursor::Show);
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}
