//! Stroke demo: Feed a jittery stroke through both submission modes.
//!
//! Run with `RUST_LOG=stabilizer=trace` to watch each regeneration.

use stabilizer::{average_position_distance, Sample, Stabilizer, StrokeSession};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A spiral with deterministic jitter, sampled sparsely.
fn jittery_stroke(len: u32) -> Vec<Sample> {
    (0..len)
        .map(|i| {
            let t = f64::from(i) * 0.2;
            let jitter = ((i * 7919) % 13) as f64 / 13.0 - 0.5;
            Sample::new(
                t.cos() * t * 10.0 + jitter * 3.0,
                t.sin() * t * 10.0 - jitter * 3.0,
                0.4 + (t * 0.5).sin().abs() * 0.5,
            )
        })
        .collect()
}

fn main() -> stabilizer::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stabilizer=debug")),
        )
        .init();

    let raw = jittery_stroke(120);

    println!("Stroke Stabilizer Demo");
    println!("======================");
    println!();
    println!("Raw samples:         {}", raw.len());
    println!("Raw mean step:       {:.3}", average_position_distance(&raw));
    println!();

    // Blocking mode: one batch per sample.
    let stabilizer = Stabilizer::new(8)?;
    let mut drawn = Vec::new();
    for (i, sample) in raw.iter().enumerate() {
        let batch = stabilizer.submit(*sample)?;
        if i % 20 == 0 {
            println!("sample {i:>3}: {:>3} newly final", batch.len());
        }
        drawn.extend(batch);
    }
    drawn.extend(stabilizer.close()?);
    println!();
    println!("Blocking output:     {}", drawn.len());
    println!("Smoothed mean step:  {:.3}", average_position_distance(&drawn));

    // Deferred mode: completions run here when we dispatch.
    let collected = Arc::new(Mutex::new(Vec::new()));
    for sample in &raw {
        let sink = collected.clone();
        stabilizer.submit_deferred(*sample, move |batch| {
            if let Ok(mut out) = sink.lock() {
                out.extend(batch);
            }
        })?;
    }
    let sink = collected.clone();
    stabilizer.close_deferred(move |batch| {
        if let Ok(mut out) = sink.lock() {
            out.extend(batch);
        }
    })?;

    let mut completions = 0;
    while completions < raw.len() + 1 {
        let ran = stabilizer.dispatch_timeout(Duration::from_secs(1));
        if ran == 0 {
            break;
        }
        completions += ran;
    }
    let deferred = collected.lock().map(|out| out.len()).unwrap_or(0);
    println!("Deferred output:     {deferred} ({completions} completions)");

    // Pass-through for comparison.
    let mut session = StrokeSession::new(0)?;
    let mut passthrough: usize = raw.iter().map(|s| session.submit(*s).len()).sum();
    passthrough += session.close().len();
    println!("Pass-through output: {passthrough}");

    Ok(())
}
