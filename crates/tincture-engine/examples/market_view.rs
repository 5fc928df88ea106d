//! Tincture realtime controller: run a market simulation and grab frames.
//!
//! Demonstrates:
//!   1. Loading suppliers from a source and building a controller
//!   2. Starting the background tick loop
//!   3. Polling the latest-wins frame slot the way a display timer would
//!   4. Restarting with fresh seeds, then stopping
//!
//! The last frame is written as a binary PPM next to the system temp dir.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example market_view

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::thread;
use std::time::Duration;

use tincture_core::{InMemorySource, Supplier, SupplierId};
use tincture_engine::{SimConfig, SimulationController};
use tincture_render::Frame;
use tracing_subscriber::EnvFilter;

// ─── Suppliers ──────────────────────────────────────────────────

fn suppliers() -> Vec<Supplier> {
    let rows: [(&str, f64, f64, f64, f64, f64); 6] = [
        ("Northwind Grain", 82.0, 12.0, 90.0, 14.5, 3.0),
        ("Harbor Steel", 64.0, 25.0, 71.0, 22.0, 6.0),
        ("Lumen Fabrics", 91.0, 4.0, 66.0, 9.0, 2.0),
        ("Copperline", 45.0, 18.0, 88.0, 11.0, 4.0),
        ("Greenfield Co-op", 73.0, 7.0, 79.0, 7.5, 5.0),
        ("Atlas Freight", 58.0, 31.0, 60.0, 18.0, 1.5),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, &(name, q, exp, rel, cost, speed))| Supplier {
            id: SupplierId(i as u32 + 1),
            name: name.to_string(),
            quality: q,
            experience_years: exp,
            reliability: rel,
            supply_cost: cost,
            delivery_speed_days: speed,
        })
        .collect()
}

// ─── PPM output ─────────────────────────────────────────────────

fn write_ppm(frame: &Frame, path: &std::path::Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", frame.width(), frame.height())?;
    for y in 0..frame.height() {
        for px in frame.row(y).chunks_exact(4) {
            // BGRA -> RGB
            out.write_all(&[px[2], px[1], px[0]])?;
        }
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SimConfig {
        seed: Some(2024),
        ..SimConfig::default()
    };
    let mut controller = SimulationController::new(config, InMemorySource::new(suppliers()))?;

    println!("Legend:");
    for entry in controller.legend() {
        println!(
            "  {:<18} strength {:.3}  colour {:?}",
            entry.name, entry.strength, entry.color
        );
    }

    controller.start()?;

    // Poll at a display rate slightly faster than the tick rate.
    let mut last_seen = 0;
    for _ in 0..50 {
        thread::sleep(Duration::from_millis(40));
        let ticks = controller.ticks();
        if ticks != last_seen && controller.latest_frame().is_some() {
            last_seen = ticks;
        }
    }
    println!("ticks after 2s: {}", controller.ticks());
    println!("last tick: {:?}", controller.last_metrics());

    controller.restart()?;
    thread::sleep(Duration::from_millis(500));
    controller.stop()?;

    if let Some(frame) = controller.latest_frame() {
        let path = std::env::temp_dir().join("tincture_market_view.ppm");
        write_ppm(&frame, &path)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
