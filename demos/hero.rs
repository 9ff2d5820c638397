//! Hero Demo: a terminal landing screen with a typewriter tagline.
//!
//! Demonstrates:
//! - TypewriterActor streaming frames from its own thread
//! - TypewriterLine, TextBlock and StatusBar composition
//! - Loading a typewriter config from JSON
//!
//! Usage: `cargo run --example hero [config.json]`
//! Logs go to stderr; set `RUST_LOG=typewriter=debug` to see them.

use crossbeam_channel::select;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use typewriter::layout::Rect;
use typewriter::widget::{Align, StatusBarConfig, TypewriterLineConfig};
use typewriter::{
    Frame, InputEvent, Modifiers, OutputBuffer, Rgb, StatusBar, Terminal, TextBlock,
    TypewriterActor, TypewriterConfig, TypewriterLine, Widget,
};

const NAME: &str = "Rhenjiro M. Gunawan";
const SUMMARY: &str = "I craft performant, delightful apps with modern web technologies. \
                       Open to impactful opportunities and collaborations.";
const LOCATION: &str = "Hayward, CA";

const BACKGROUND: Rgb = Rgb::new(12, 12, 20);
const CONTENT_WIDTH: u16 = 72;
const TAGLINE_WIDTH: u16 = 32;
const POLL_INTERVAL: Duration = Duration::from_millis(16);

struct Hero {
    name: TextBlock,
    tagline: TypewriterLine,
    summary: TextBlock,
    location: TextBlock,
    status: StatusBar,
}

impl Hero {
    fn new() -> Self {
        let tagline = TypewriterLineConfig {
            prefix: "I'm a ".to_owned(),
            fg: Rgb::new(120, 200, 255),
            bg: Some(BACKGROUND),
            modifiers: Modifiers::BOLD,
            ..TypewriterLineConfig::default()
        };

        let mut name = TextBlock::new(Rect::ZERO, NAME)
            .with_style(Rgb::WHITE, Modifiers::BOLD)
            .with_align(Align::Center);
        name.set_bg(Some(BACKGROUND));

        let mut summary = TextBlock::new(Rect::ZERO, SUMMARY)
            .with_style(Rgb::new(190, 190, 200), Modifiers::empty())
            .with_align(Align::Center);
        summary.set_bg(Some(BACKGROUND));

        let mut location = TextBlock::new(Rect::ZERO, format!("📍 {LOCATION}"))
            .with_style(Rgb::new(150, 150, 150), Modifiers::DIM)
            .with_align(Align::Center);
        location.set_bg(Some(BACKGROUND));

        let mut status = StatusBar::with_config(Rect::ZERO, StatusBarConfig::default());
        status.set_right("q / Esc to quit");

        Self {
            name,
            tagline: TypewriterLine::with_config(Rect::ZERO, tagline),
            summary,
            location,
            status,
        }
    }

    /// Place every widget for a `width` x `height` screen.
    fn layout(&mut self, width: u16, height: u16) {
        let (body, footer) = Rect::from_size(width, height).split_vertical(height.saturating_sub(1));
        let content_width = CONTENT_WIDTH.min(body.width.saturating_sub(4));
        let summary_rows = TextBlock::measure(SUMMARY, content_width);

        // name, gap, tagline, gap, summary, gap, location
        let content = body.centered(content_width, summary_rows.saturating_add(6));
        self.name.set_bounds(content.row(0));

        // Fixed width so the prefix stays put while phrases change.
        self.tagline.set_bounds(content.row(2).centered(TAGLINE_WIDTH, 1));

        let (_, rest) = content.split_vertical(4);
        let (summary, rest) = rest.split_vertical(summary_rows);
        self.summary.set_bounds(summary);
        self.location.set_bounds(rest.row(1));
        self.status.set_bounds(footer);
    }

    fn set_frame(&mut self, frame: Frame) {
        let phase = if frame.done { "done" } else { "typing" };
        self.status.set_left(phase);
        self.tagline.update(frame);
    }

    fn render(&mut self, out: &mut OutputBuffer, full: bool) {
        let widgets: [&mut dyn Widget; 5] = [
            &mut self.name,
            &mut self.tagline,
            &mut self.summary,
            &mut self.location,
            &mut self.status,
        ];
        for widget in widgets {
            if full || widget.needs_redraw() {
                widget.render(out);
                widget.clear_redraw();
            }
        }
    }
}

fn hero_config() -> typewriter::Result<TypewriterConfig> {
    if let Some(path) = std::env::args().nth(1) {
        let json = std::fs::read_to_string(&path)?;
        info!(%path, "loading typewriter config");
        return TypewriterConfig::from_json(&json);
    }

    Ok(
        TypewriterConfig::new(["Tech Enthusiast", "Hobbyist", "Software Developer"])
            .with_timing(
                Duration::from_millis(70),
                Duration::from_millis(40),
                Duration::from_millis(400),
                Duration::from_millis(100),
            )
            .with_loop(false),
    )
}

/// Paint the whole screen background before the widgets draw over it.
fn clear(out: &mut OutputBuffer, width: u16, height: u16) {
    out.reset_attrs();
    out.set_bg(BACKGROUND);
    out.clear_screen();
    for y in 0..height {
        out.cursor_move(0, y);
        out.write_spaces(width as usize);
    }
    out.reset_attrs();
}

fn main() -> typewriter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = hero_config()?;
    let mut terminal = Terminal::enter()?;
    let mut actor = TypewriterActor::spawn(config)?;

    let mut hero = Hero::new();
    let mut out = OutputBuffer::new();
    hero.layout(terminal.width(), terminal.height());
    let mut full_redraw = true;

    loop {
        select! {
            recv(actor.receiver()) -> frame => {
                if let Ok(frame) = frame {
                    hero.set_frame(frame);
                }
            }
            default(POLL_INTERVAL) => {}
        }
        // Frames can pile up while we draw; only the newest matters.
        if let Some(frame) = actor.latest() {
            hero.set_frame(frame);
        }

        while let Some(event) = terminal.poll_event(Duration::ZERO)? {
            if event.is_quit() {
                actor.destroy();
                return Ok(());
            }
            if let InputEvent::Resize { width, height } = event {
                hero.layout(width, height);
                full_redraw = true;
            }
        }

        out.clear();
        if full_redraw {
            clear(&mut out, terminal.width(), terminal.height());
        }
        hero.render(&mut out, full_redraw);
        full_redraw = false;

        if !out.is_empty() {
            terminal.present(&out)?;
        }
    }
}
