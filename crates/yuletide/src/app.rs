//! Application state, event loop and screen composition.

use std::time::Instant;

use chrono::{Datelike, Local, NaiveDateTime};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Block,
};
use yuletide_config::Config;
use yuletide_core::{ColorTheme, Countdown, GiftStage, GiftState};
use yuletide_snow::{BACKDROP, CellMetrics, DrawingContext, FrameHandle, FrameScheduler, Snowfall};

use crate::archive::ArchiveSheet;
use crate::frame_clock::FrameClock;
use crate::{card, gift};

/// Which card the main area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// This year's gift (and card, once revealed).
    Current,
    /// A past year's card, always revealed.
    Archived(i32),
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Start of the run, all animation timing is relative to it.
    started: Instant,
    gift: GiftState,
    view: View,
    archive: ArchiveSheet,
    clock: FrameClock,
    /// Snow layer, `None` when there is no drawing context.
    snow: Option<Snowfall>,
    /// Pending redraw of the foreground.
    ui_frame: Option<FrameHandle>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let started = Instant::now();
        Self {
            running: false,
            clock: FrameClock::new(config.display.fps, started),
            config,
            color_theme: ColorTheme::default(),
            started,
            gift: GiftState::new(),
            view: View::Current,
            archive: ArchiveSheet::default(),
            snow: None,
            ui_frame: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.mount_snow(size.width, size.height);
        self.ui_frame = Some(self.clock.request_frame());

        while self.running {
            let timeout = self.clock.timeout(Instant::now());
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }

            let due = self.clock.take_due(Instant::now());
            if due.is_empty() {
                continue;
            }
            if self.ui_frame.is_some_and(|handle| due.contains(&handle)) {
                self.ui_frame = Some(self.clock.request_frame());
            }
            terminal.draw(|frame| self.render(frame, &due))?;
        }

        self.unmount_snow();
        if let Some(handle) = self.ui_frame.take() {
            self.clock.cancel_frame(handle);
        }
        Ok(())
    }

    /// Mount the snow layer if the terminal can draw it.
    fn mount_snow(&mut self, columns: u16, rows: u16) {
        let term = std::env::var("TERM").ok();
        self.mount_snow_on(term.as_deref(), columns, rows);
    }

    /// Mount the snow layer for the terminal named `term`.
    fn mount_snow_on(&mut self, term: Option<&str>, columns: u16, rows: u16) {
        let display = &self.config.display;
        let context = if display.snow {
            let metrics = CellMetrics {
                width_px: display.cell_width_px,
                height_px: display.cell_height_px,
            };
            DrawingContext::acquire(metrics, term)
        } else {
            None
        };
        self.snow = Snowfall::mount(context, columns, rows, seed(), &mut self.clock);
    }

    /// Tear down the snow layer; resize events stop reaching it.
    fn unmount_snow(&mut self) {
        if let Some(snow) = self.snow.take() {
            snow.unmount(&mut self.clock);
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, due: &[FrameHandle]) {
        let area = frame.area();
        let elapsed_ms = self.elapsed_ms();
        let now = Local::now().naive_local();
        self.gift.update(elapsed_ms);

        match self.snow.as_mut() {
            Some(snow) => snow.render(area, frame.buffer_mut(), BACKDROP, due, &mut self.clock),
            None => {
                let (r, g, b) = BACKDROP;
                frame.render_widget(Block::new().style(Style::new().bg(Color::Rgb(r, g, b))), area);
            }
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Screen
            Constraint::Length(1), // Help text
        ])
        .split(area);

        match self.view {
            View::Current if self.gift.stage() == GiftStage::Revealed => {
                let card = self.config.cards.resolve(now.year());
                card::render(frame, chunks[0], &card, false);
            }
            View::Current => {
                let view = self.gift_view(now, elapsed_ms);
                gift::render(frame, chunks[0], &view);
            }
            View::Archived(year) => {
                let card = self.config.cards.resolve(year);
                card::render(frame, chunks[0], &card, true);
            }
        }

        frame.render_widget(self.help_line(now.year()), chunks[1]);

        let years = self.config.cards.archive(now.year());
        self.archive
            .render(frame, area, &years, self.color_theme.color());
    }

    fn gift_view(&self, now: NaiveDateTime, elapsed_ms: u64) -> gift::GiftView {
        gift::GiftView {
            year: now.year(),
            unlocked: self.config.unlock.is_unlocked(now.date()),
            countdown: Countdown::until(now, self.config.unlock),
            shake: self.gift.shake_offset(elapsed_ms),
            unwrap: self.gift.unwrap_progress(elapsed_ms),
            color: self.color_theme.color(),
        }
    }

    fn help_line(&self, year: i32) -> Line<'static> {
        let color = self.color_theme.color();
        let mut spans = vec!["q".bold().fg(color), " quit  ".dark_gray()];
        match self.view {
            View::Current if self.gift.stage() == GiftStage::Wrapped => {
                spans.extend(["enter".bold().fg(color), " open  ".dark_gray()]);
            }
            View::Archived(_) => {
                spans.extend(["b".bold().fg(color), " back  ".dark_gray()]);
            }
            View::Current => {}
        }
        if !self.config.cards.archive(year).is_empty() {
            spans.extend(["a".bold().fg(color), " past years  ".dark_gray()]);
        }
        spans.extend(["c".bold().fg(color), " cycle color".dark_gray()]);
        Line::from(spans).centered()
    }

    /// Updates the state of [`App`] from one crossterm event.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Resize(columns, rows) => {
                if let Some(snow) = self.snow.as_mut() {
                    snow.on_resize(columns, rows);
                }
            }
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        if self.archive.is_open() {
            self.on_archive_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => match self.view {
                View::Archived(_) => self.view = View::Current,
                View::Current => self.quit(),
            },
            KeyCode::Enter | KeyCode::Char(' ') => self.press_gift(),
            KeyCode::Char('a') => self.open_archive(),
            KeyCode::Char('b') | KeyCode::Backspace => self.view = View::Current,
            KeyCode::Char('c') => self.cycle_color_theme(),
            _ => {}
        }
    }

    fn on_archive_key(&mut self, key: KeyEvent) {
        let years = self.config.cards.archive(Local::now().year());
        match key.code {
            KeyCode::Esc | KeyCode::Char('a') => self.archive.close(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Left | KeyCode::Char('h') => self.archive.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.archive.select_next(&years),
            KeyCode::Enter => {
                if let Some(year) = self.archive.selected_year(&years) {
                    log::info!("opening archived card for {year}");
                    self.view = View::Archived(year);
                }
                self.archive.close();
            }
            _ => {}
        }
    }

    /// Press the gift box. Only meaningful on the current year's gift.
    fn press_gift(&mut self) {
        if self.view != View::Current {
            return;
        }
        let unlocked = self.config.unlock.is_unlocked(Local::now().date_naive());
        let before = self.gift.stage();
        self.gift.press(self.elapsed_ms(), unlocked);
        if before != self.gift.stage() {
            log::info!("gift unwrapping");
        } else if !unlocked {
            log::debug!("gift is locked");
        }
    }

    fn open_archive(&mut self) {
        let years = self.config.cards.archive(Local::now().year());
        self.archive.open(&years);
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Seed captured at startup for the snow's randomness.
fn seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
