//! Trace Demo: run a typewriter on virtual time and print every frame.
//!
//! No terminal and no sleeping: the clock jumps straight to each deadline,
//! so a full animation prints instantly. Handy for checking a config.
//!
//! Usage: `cargo run --example trace [config.json]`

use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use typewriter::{Typewriter, TypewriterConfig};

/// Stop looping configs after this much virtual time.
const HORIZON: Duration = Duration::from_secs(20);

fn main() -> typewriter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TypewriterConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => TypewriterConfig::new(["Go", "Rust"]).with_loop(false),
    };
    info!(words = ?config.words, looping = config.looping, "tracing typewriter");

    let mut typewriter = Typewriter::new(config);
    print_frame(&typewriter);

    while !typewriter.is_done() && typewriter.elapsed() < HORIZON {
        let Some(wait) = typewriter.time_until_next() else {
            break;
        };
        // Zero-delay steps still need their own advance.
        if typewriter.advance(wait) {
            print_frame(&typewriter);
        }
    }

    println!("{:>8}  finished in phase {}", "", typewriter.phase());
    Ok(())
}

fn print_frame(typewriter: &Typewriter) {
    let caret = if typewriter.caret_visible() { '|' } else { ' ' };
    println!(
        "{:>6}ms  {:<10} {}{}",
        typewriter.elapsed().as_millis(),
        typewriter.phase().as_str(),
        typewriter.text(),
        caret,
    );
}
