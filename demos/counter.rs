//! Counter Demo - an engine-style loop driving a one-line UI.
//!
//! A fixed-rate loop increments a score sixty times; the render effect
//! repaints a single status line after every tick.
//!
//! Run with: cargo run --example counter

use std::io;
use std::thread;
use std::time::Duration;

use tether::{LineRenderer, Update, mount};

fn main() -> io::Result<()> {
    println!("=== tether Counter Demo ===\n");

    let renderer = LineRenderer::stdout(|score: &i64| format!("Score: {score}"));
    let (score, set_score, handle) = mount(0i64, Vec::new(), renderer)?;

    // Engine loop: one tick per frame
    for _ in 0..60 {
        set_score.set(Update::apply(|score| score + 1));
        thread::sleep(Duration::from_millis(16));
    }

    handle.unmount();
    println!("Final score: {}", score.get());
    Ok(())
}
