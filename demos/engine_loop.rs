//! Engine Loop Demo - typed simulation state with an effect chain.
//!
//! A tiny physics body bounces inside a corridor. The simulation tick only
//! integrates position; a bounce effect re-sets the state whenever the body
//! leaves the corridor, so by the time the render effect runs, every frame
//! the UI sees is already back in range.
//!
//! Run with: cargo run --example engine_loop

use std::io;
use std::thread;
use std::time::Duration;

use serde::Serialize;
use tether::{LineRenderer, Setter, Update, mount, side_effect};

const CORRIDOR: f64 = 24.0;

#[derive(Clone, Serialize)]
struct Body {
    x: f64,
    vx: f64,
}

fn main() -> io::Result<()> {
    println!("=== tether Engine Loop Demo ===\n");

    // Bounce effect: runs before the render effect, re-setting out-of-range
    // frames. The nested dispatch repaints first, depth-first.
    let bounce = side_effect(|body: &Body, set: &Setter<Body>| {
        if body.x < 0.0 || body.x > CORRIDOR {
            let clamped = body.x.clamp(0.0, CORRIDOR);
            set.set(Body {
                x: clamped,
                vx: -body.vx,
            });
        }
    });

    let renderer = LineRenderer::stdout(|body: &Body| {
        let column = body.x.round() as usize;
        let mut track = vec!['.'; CORRIDOR as usize + 1];
        track[column.min(CORRIDOR as usize)] = 'o';
        track.into_iter().collect::<String>()
    });

    let (body, tick, handle) = mount(Body { x: 0.0, vx: 1.6 }, vec![bounce], renderer)?;

    // Fixed-timestep loop
    for _ in 0..90 {
        tick.set(Update::apply(|body: &Body| Body {
            x: body.x + body.vx,
            vx: body.vx,
        }));
        thread::sleep(Duration::from_millis(33));
    }

    handle.unmount();
    println!("Body stopped at x = {:.1}", body.get().x);
    Ok(())
}
