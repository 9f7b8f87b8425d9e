use std::cell::RefCell;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_config::{Config, ProfileConfig};
use folio_core::Focus;
use folio_particles::{CanvasSurface, ParticleField, surface_size};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap, canvas::Canvas},
};

mod carousel;
mod contact;
mod mailto;

use crate::carousel::Carousel;
use crate::contact::{ContactField, ContactForm};

/// Poll timeout per frame; keeps the backdrop animating near display rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Indigo from the backdrop palette, reused for UI accents.
const ACCENT: Color = Color::Rgb(99, 102, 241);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Monotonic clock the animations run on.
    started: Instant,
    /// Whether the backdrop was enabled in config.
    backdrop_enabled: bool,
    /// Animated particle backdrop; absent when disabled or the terminal
    /// reported no drawable area at startup.
    backdrop: Option<ParticleField>,
    /// Hero line contents.
    profile: ProfileConfig,
    /// Project carousel state.
    carousel: Carousel,
    /// Contact form state.
    contact: ContactForm,
    /// Address contact submissions are sent to.
    contact_email: String,
    /// Which pane receives keyboard input.
    focus: Focus,
}

impl App {
    /// Construct a new instance of [`App`] from loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            started: Instant::now(),
            backdrop_enabled: config.backdrop.enabled,
            backdrop: None,
            profile: config.profile,
            carousel: Carousel::new(config.projects, config.carousel.autoplay_ms),
            contact: ContactForm::default(),
            contact_email: config.contact.email,
            focus: Focus::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();

        if self.backdrop_enabled {
            let size = terminal.size()?;
            let (width, height) = surface_size(size.width, size.height);
            // A terminal with no drawable area leaves the backdrop
            // inert rather than failing startup.
            if width > 0.0 && height > 0.0 {
                self.backdrop = Some(ParticleField::new(width, height));
            }
        }

        while self.running {
            self.carousel.tick(self.elapsed_ms());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds since the animation clock started.
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let time_ms = self.elapsed_ms() as f64;

        if let Some(field) = &mut self.backdrop {
            render_backdrop(frame, field, area, time_ms);
        }

        let chunks = Layout::vertical([
            Constraint::Length(3), // Hero
            Constraint::Fill(1),   // Projects
            Constraint::Length(7), // Contact form
            Constraint::Length(1), // Help text
        ])
        .split(area);

        self.render_hero(frame, chunks[0]);
        self.render_projects(frame, chunks[1]);
        self.render_contact(frame, chunks[2]);
        self.render_help(frame, chunks[3]);
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::from(self.profile.name.clone().bold().fg(ACCENT)),
            Line::from(self.profile.tagline.clone().dark_gray()),
        ];
        let hero = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(hero, area);
    }

    fn render_projects(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Projects ")
            .border_style(self.pane_style(Focus::Projects));

        let mut lines: Vec<Line> = Vec::new();
        if self.carousel.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from("No projects configured yet.".dark_gray()));
        } else if let Some(project) = self.carousel.current() {
            lines.push(Line::raw(""));
            lines.push(Line::from(project.title.clone().bold().fg(ACCENT)));
            lines.push(Line::raw(""));
            lines.push(Line::from(project.description.clone()));
            if let Some(url) = &project.url {
                lines.push(Line::raw(""));
                lines.push(Line::from(url.clone().dark_gray()));
            }
            lines.push(Line::raw(""));
            lines.push(self.carousel_dots());
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    /// Dot indicator row with the `current / total` counter.
    fn carousel_dots(&self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();
        for i in 0..self.carousel.len() {
            if i == self.carousel.current_index() {
                spans.push("●".fg(ACCENT));
            } else {
                spans.push("○".dark_gray());
            }
            spans.push(Span::raw(" "));
        }
        spans.push(
            Span::raw(format!(
                " {} / {}",
                self.carousel.current_index() + 1,
                self.carousel.len()
            ))
            .dark_gray(),
        );
        Line::from(spans)
    }

    fn render_contact(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Contact;
        let block = Block::bordered()
            .title(" Contact ")
            .border_style(self.pane_style(Focus::Contact));

        let mut lines: Vec<Line> = Vec::new();
        for field in ContactField::ALL {
            let active = focused && field == self.contact.active();
            let marker = if active { "▌" } else { " " };
            let mut spans = vec![
                marker.fg(ACCENT),
                Span::raw(format!("{:>8}: ", field.label())).dark_gray(),
                Span::raw(self.contact.value(field).to_string()),
            ];
            if active {
                spans.push("_".fg(ACCENT));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::raw(""));
        match self.contact.status() {
            Some(status) => lines.push(Line::from(status.to_string()).fg(ACCENT)),
            None => {
                lines.push(Line::from(format!("  Sends to {}", self.contact_email)).dark_gray());
            }
        }

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = match self.focus {
            Focus::Projects => Line::from(vec![
                "←/→".bold().fg(ACCENT),
                " slide  ".dark_gray(),
                "1-9".bold().fg(ACCENT),
                " jump  ".dark_gray(),
                "Tab".bold().fg(ACCENT),
                " contact  ".dark_gray(),
                "q".bold().fg(ACCENT),
                " quit".dark_gray(),
            ]),
            Focus::Contact => Line::from(vec![
                "Enter".bold().fg(ACCENT),
                " next field / send  ".dark_gray(),
                "↑/↓".bold().fg(ACCENT),
                " field  ".dark_gray(),
                "Tab".bold().fg(ACCENT),
                " projects  ".dark_gray(),
                "Esc".bold().fg(ACCENT),
                " quit".dark_gray(),
            ]),
        }
        .centered();
        frame.render_widget(help, area);
    }

    /// Border style for a pane, highlighted while it has focus.
    fn pane_style(&self, pane: Focus) -> Style {
        if self.focus == pane {
            Style::new().fg(ACCENT)
        } else {
            Style::new().dark_gray()
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout so the backdrop keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                Event::Mouse(_) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Track the new terminal size. Particles are left where they are;
    /// ones outside the shrunk surface drift back on their own.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        if let Some(field) = &mut self.backdrop {
            let (width, height) = surface_size(cols, rows);
            field.resize(width, height);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab) => self.toggle_focus(),
            _ => match self.focus {
                Focus::Projects => self.on_projects_key(key),
                Focus::Contact => self.on_contact_key(key),
            },
        }
    }

    fn on_projects_key(&mut self, key: KeyEvent) {
        let now_ms = self.elapsed_ms();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Left | KeyCode::Char('h') => self.carousel.prev(now_ms),
            KeyCode::Right | KeyCode::Char('l') => self.carousel.next(now_ms),
            KeyCode::Char(c @ '1'..='9') => {
                self.carousel.go_to(c as usize - '1' as usize, now_ms);
            }
            _ => {}
        }
    }

    fn on_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => {
                if self.contact.active() == ContactField::Message {
                    self.submit_contact();
                } else {
                    self.contact.focus_next();
                }
            }
            KeyCode::Down => self.contact.focus_next(),
            KeyCode::Up | KeyCode::BackTab => self.contact.focus_prev(),
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) => self.contact.insert(c),
            _ => {}
        }
    }

    /// Compose the mailto URL and hand it to the system opener.
    fn submit_contact(&mut self) {
        if !self.contact.ready() {
            self.contact
                .set_status("Fill in name, email, and message first.".to_string());
            return;
        }
        let url = mailto::compose(
            &self.contact_email,
            &self.contact.name,
            &self.contact.email,
            &self.contact.message,
        );
        match mailto::open(&url) {
            Ok(()) => self.contact.set_status("Opened your mail client.".to_string()),
            // Best-effort handoff: surface the URL so nothing is lost.
            Err(_) => self.contact.set_status(url),
        }
    }

    /// Move keyboard focus to the other pane. Autoplay runs only while
    /// the carousel is the focused pane.
    fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        let now_ms = self.elapsed_ms();
        self.carousel.set_paused(self.focus != Focus::Projects, now_ms);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Paint one backdrop frame across `area`.
fn render_backdrop(frame: &mut Frame, field: &mut ParticleField, area: Rect, time_ms: f64) {
    let width = field.width();
    let height = field.height();
    // Canvas::paint wants Fn, so the field mutates through a RefCell.
    let field = RefCell::new(field);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            let mut surface = CanvasSurface::new(ctx, height);
            field.borrow_mut().step(&mut surface, time_ms);
        });
    frame.render_widget(canvas, area);
}
