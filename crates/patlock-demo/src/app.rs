#![forbid(unsafe_code)]

//! Event loop tying the terminal to a [`PatternLock`].

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use patlock::{
    Feedback, LockConfig, LockEvent, PatternGenerator, PatternLock, PointerButton, PointerEvent,
    PointerEventKind, Result, Rgb,
};

use crate::canvas::{self, Canvas, TEXT};
use crate::session::TerminalSession;

/// How long the success frame stays up before the demo exits.
const UNLOCK_PAUSE: Duration = Duration::from_millis(800);

/// What the status line currently reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Waiting for a gesture.
    Prompt,
    /// The last gesture was wrong.
    Rejected,
    /// Attempts ran out and the hint changed.
    NewTarget,
    /// The lock is open.
    Unlocked,
}

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep processing events.
    Continue,
    /// Restore the terminal and exit.
    Quit,
}

/// Translate a terminal mouse report into a pointer event.
///
/// Scroll reports have no pointer counterpart.
pub fn pointer_event(mouse: &MouseEvent) -> Option<PointerEvent> {
    let button = |b: MouseButton| match b {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    };
    let kind = match mouse.kind {
        MouseEventKind::Down(b) => PointerEventKind::Down(button(b)),
        MouseEventKind::Up(b) => PointerEventKind::Up(button(b)),
        MouseEventKind::Drag(b) => PointerEventKind::Drag(button(b)),
        MouseEventKind::Moved => PointerEventKind::Moved,
        _ => return None,
    };
    Some(PointerEvent::new(
        kind,
        canvas::cell_to_layout(mouse.column, mouse.row),
    ))
}

/// Demo state: the lock plus what to tell the user.
#[derive(Debug)]
pub struct App {
    lock: PatternLock,
    status: Status,
    columns: u16,
    rows: u16,
}

impl App {
    /// A fresh lock, seeded when `seed` is given.
    pub fn new(config: LockConfig, seed: Option<u64>) -> Self {
        let generator = seed.map_or_else(PatternGenerator::from_entropy, PatternGenerator::seeded);
        Self {
            lock: PatternLock::with_generator(config, generator),
            status: Status::Prompt,
            columns: 0,
            rows: 0,
        }
    }

    /// The lock being driven.
    #[inline]
    pub fn lock(&self) -> &PatternLock {
        &self.lock
    }

    /// Current status line state.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Fit the grid to a terminal of `columns` x `rows` cells.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.lock.resize(canvas::grid_area(columns, rows));
        if !self.lock.is_unlocked() {
            self.status = Status::Prompt;
        }
    }

    /// Forward a mouse report to the lock.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let Some(event) = pointer_event(mouse) else {
            return;
        };
        let mut events: Vec<LockEvent> = Vec::new();
        self.lock.handle_event(&event, &mut events);

        if events.is_empty() {
            if matches!(event.kind, PointerEventKind::Down(PointerButton::Primary))
                && !self.lock.is_unlocked()
            {
                self.status = Status::Prompt;
            }
            return;
        }
        for event in &events {
            self.status = match event {
                LockEvent::Unlocked => Status::Unlocked,
                LockEvent::TargetRegenerated(_) => Status::NewTarget,
                LockEvent::VisualFeedback(Feedback::Failure) => Status::Rejected,
                _ => continue,
            };
        }
    }

    /// React to a key press.
    pub fn handle_key(&self, key: &KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            _ => Control::Continue,
        }
    }

    /// The status line text and colour.
    pub fn status_line(&self) -> (String, Rgb) {
        let style = &self.lock.config().style;
        let remaining = self.lock.remaining_attempts();
        match self.status {
            Status::Prompt => (
                format!("Draw the pattern. {remaining} attempts left. q quits."),
                TEXT,
            ),
            Status::Rejected => (
                format!("Wrong pattern. {remaining} attempts left."),
                style.failure,
            ),
            Status::NewTarget => ("Out of attempts. New hint.".to_owned(), style.failure),
            Status::Unlocked => ("Unlocked.".to_owned(), style.success),
        }
    }

    /// Rasterize the current frame.
    pub fn paint(&self) -> Canvas {
        let mut canvas = Canvas::new(self.columns, self.rows);
        canvas.text(0, 0, &format!("Hint: {}", self.lock.hint()), TEXT);
        let (status, color) = self.status_line();
        canvas.text(0, 1, &status, color);
        for segment in self.lock.segments() {
            canvas.draw_segment(&segment);
        }
        for point in self.lock.points() {
            canvas.draw_point(&point);
        }
        canvas
    }

    /// Run until the user quits or the lock opens. Returns whether it opened.
    pub fn run(&mut self, session: &TerminalSession) -> Result<bool> {
        let (columns, rows) = session.size()?;
        self.resize(columns, rows);
        let mut stdout = io::stdout();

        loop {
            self.paint().flush(&mut stdout)?;
            if self.lock.is_unlocked() {
                std::thread::sleep(UNLOCK_PAUSE);
                return Ok(true);
            }

            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(&key) == Control::Quit {
                        tracing::info!("quit requested");
                        return Ok(false);
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(&mouse),
                Event::Resize(columns, rows) => self.resize(columns, rows),
                _ => {}
            }
        }
    }
}
