use std::path::PathBuf;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use paperbuddy_config::Config;
use paperbuddy_starfield::{FrameQueue, PixelSurface, StarField, StarFieldOptions, StarFieldView};
use ratatui::{DefaultTerminal, Frame, Terminal, backend::Backend, layout::Rect};

mod hero;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    App::new(config, Rect::new(0, 0, size.width, size.height))
        .with_config_path(Config::config_path())
        .run(terminal)
}

/// Deadline after `deadline`, skipping any frames missed by `now`.
fn next_deadline(deadline: Instant, interval: Duration, now: Instant) -> Instant {
    let next = deadline + interval;
    if next <= now { now + interval } else { next }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded settings; speed changes are written back.
    config: Config,
    /// Where settings are saved; nothing is saved when unset.
    config_path: Option<PathBuf>,
    /// Whether the hero text is drawn.
    show_hero: bool,
    /// Pixels the starfield paints into.
    surface: PixelSurface,
    /// Pending display refreshes.
    frames: FrameQueue,
    /// The background animation.
    starfield: StarField,
}

impl App {
    /// Construct a new instance of [`App`] sized to `area`.
    pub fn new(config: Config, area: Rect) -> Self {
        let mut surface = PixelSurface::default();
        let mut frames = FrameQueue::new();
        let options = StarFieldOptions {
            star_count: config.star_count,
            palette: config.palette,
            speed: config.speed,
            seed: config.seed,
        };
        let starfield = StarField::initialize(&mut surface, &area, &mut frames, &options);
        Self {
            running: false,
            show_hero: config.show_hero,
            config,
            config_path: None,
            surface,
            frames,
            starfield,
        }
    }

    /// Persist setting changes to `path`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.drive(&mut terminal, Self::handle_crossterm_events)
    }

    /// Loop until quit or the first error, then tear the starfield down.
    fn drive<B, P>(&mut self, terminal: &mut Terminal<B>, poll: P) -> color_eyre::Result<()>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        P: FnMut(&mut Self, Instant) -> color_eyre::Result<()>,
    {
        let result = self.run_loop(terminal, poll);
        self.starfield.teardown(&mut self.frames);
        result
    }

    fn run_loop<B, P>(&mut self, terminal: &mut Terminal<B>, mut poll: P) -> color_eyre::Result<()>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        P: FnMut(&mut Self, Instant) -> color_eyre::Result<()>,
    {
        let frame_interval = Duration::from_secs(1) / self.config.frame_rate;
        let mut next_frame = Instant::now();

        self.running = true;
        while self.running {
            poll(&mut *self, next_frame)?;
            let now = Instant::now();
            if now >= next_frame {
                self.dispatch_frames();
                terminal.draw(|frame| self.render(frame))?;
                next_frame = next_deadline(next_frame, frame_interval, now);
            }
        }
        Ok(())
    }

    /// Deliver this refresh to the starfield.
    fn dispatch_frames(&mut self) {
        for handle in self.frames.tick() {
            self.starfield
                .on_frame(handle, &mut self.surface, &mut self.frames);
        }
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(StarFieldView::new(&self.surface), area);
        if self.show_hero {
            hero::render(frame, area, self.starfield.speed());
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next frame deadline.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.on_resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('h')) => self.toggle_hero(),
            _ => {}
        }
    }

    /// Refit the starfield to the new terminal size.
    fn on_resize(&mut self, width: u16, height: u16) {
        self.starfield
            .on_resize(&mut self.surface, &Rect::new(0, 0, width, height));
    }

    /// Cycle the drift speed and remember it.
    fn cycle_speed(&mut self) {
        let speed = self.starfield.speed().next();
        self.starfield.set_speed(speed);
        self.config.speed = speed;
        if let Some(path) = &self.config_path
            && let Err(err) = self.config.save_to(path)
        {
            tracing::warn!(error = %err, "failed to save speed setting");
        }
    }

    /// Show or hide the hero text.
    fn toggle_hero(&mut self) {
        self.show_hero = !self.show_hero;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
