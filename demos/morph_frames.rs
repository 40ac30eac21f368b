//! Drives a morph engine headlessly and prints frame statistics
//!
//! Builds the engine from an inline TOML config, morphs to the glyph and
//! back, and reports what each sampled frame would draw.

use anyhow::Context;
use morph_engine::{load_config_from_str, DrawCommand, MorphEngine};

const CONFIG: &str = r#"
payload = "https://example.com/u/morph"
error_correction = "medium"
avatar_size = 20.0

[viewport]
width = 480.0
height = 480.0

[timing]
forward_duration_s = 3.0
backward_duration_s = 2.0
"#;

const FRAME_S: f64 = 1.0 / 60.0;

fn report(engine: &mut MorphEngine, time_s: f64) {
    let commands = engine.compute_frame(time_s);
    let blits = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::SpriteBlit { .. }))
        .count();
    let stats = engine.last_stats();
    println!(
        "  t={:>5.2}s progress={:.3} drawn={:>4} culled={:>4} commands={:>4} blits={:>4}",
        time_s,
        engine.progress(),
        stats.drawn_points,
        stats.culled_points,
        stats.commands,
        blits
    );
}

fn run_until(engine: &mut MorphEngine, from_s: f64, to_s: f64) -> f64 {
    let mut t = from_s;
    let mut frame = 0u32;
    while t < to_s {
        t += FRAME_S;
        frame += 1;
        if frame % 30 == 0 {
            report(engine, t);
        } else {
            engine.compute_frame(t);
        }
        for event in engine.drain_threshold_events() {
            println!("  haptic #{} at {:.2}", event.index, event.threshold);
        }
    }
    t
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Morph Engine Frame Demo");
    println!("=======================");

    let config = load_config_from_str(CONFIG).context("demo config should parse")?;
    let mut engine = MorphEngine::new(config).context("engine initialization failed")?;

    let shape = engine.shape();
    println!(
        "{} points, {}x{} matrix, {:?} solver, total distance {:.1}",
        shape.shape_a.len(),
        shape.matrix_size,
        shape.matrix_size,
        shape.solver_mode,
        shape.total_distance
    );

    let empty = engine.compute_frame(0.0).len();
    println!("\nBefore texture is ready: {} commands", empty);
    engine.set_texture_ready(true);

    println!("\nMorphing to glyph:");
    engine.toggle();
    let t = run_until(&mut engine, 0.0, 3.5);

    println!("\nMorphing back to torus:");
    engine.toggle();
    run_until(&mut engine, t, t + 2.5);

    Ok(())
}
