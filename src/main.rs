//! Headless host for the wave grid generators.
//!
//! Drives either generator through a fixed-step tick loop, the way a render
//! loop would, and optionally writes a PNG of the final frame.

use std::time::Instant;

use clap::Parser;
use log::info;

use wavegrid::cells::CellMatrixGenerator;
use wavegrid::cli::{Args, Variant};
use wavegrid::error::{WaveError, WaveResult};
use wavegrid::noise::UnitPerlin;
use wavegrid::snapshot;
use wavegrid::surface::SurfaceGenerator;

fn run_surface(args: &Args) -> WaveResult<()> {
    let config = args.surface_config();
    let mut generator = SurfaceGenerator::build(&config, UnitPerlin::new(args.seed))?;

    for frame in 0..args.ticks {
        generator.tick(args.tick_time(frame));
    }

    let (min, max) = generator
        .mesh()
        .positions()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[1]), hi.max(p[1]))
        });
    let params = generator.field().params();
    println!(
        "  Grid: {}x{} at spacing {:?}",
        generator.dims().width(),
        generator.dims().height(),
        generator.spacing()
    );
    println!(
        "  Noise: scale {}, intensity {}, speed {}, {} octaves",
        params.scale, params.intensity, params.speed, params.detail_levels
    );
    println!("  Vertices: {}", generator.mesh().positions().len());
    println!("  Triangles: {}", generator.dims().triangle_count());
    println!("  Final heights: {:.3}..{:.3}", min, max);

    if let Some(path) = &args.output {
        snapshot::save_heightmap(generator.mesh(), generator.dims(), path)?;
        println!("  Output: {}", path.display());
    }

    Ok(())
}

fn run_cells(args: &Args) -> WaveResult<()> {
    let config = args.cells_config();
    let mut generator = CellMatrixGenerator::build(&config, UnitPerlin::new(args.seed))?;

    for frame in 0..args.ticks {
        generator.tick(args.tick_time(frame));
    }

    let (min, max) = generator
        .instances()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c.scale[1]), hi.max(c.scale[1]))
        });
    let params = generator.field().params();
    println!(
        "  Grid: {}x{} cubes of size {:?}",
        generator.dims().width(),
        generator.dims().height(),
        generator.cube_size()
    );
    println!(
        "  Noise: scale {}, intensity {}, speed {}, detail offset {}, {} octaves",
        params.scale, params.intensity, params.speed, params.detail_offset, params.detail_levels
    );
    println!("  Cubes: {}", generator.instances().len());
    println!("  Final cube heights: {:.3}..{:.3}", min, max);

    if let Some(path) = &args.output {
        snapshot::save_cell_colors(generator.instances(), generator.dims(), path)?;
        println!("  Output: {}", path.display());
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if !(args.fps.is_finite() && args.fps > 0.0) {
        let msg = format!("fps must be above 0 (got {})", args.fps);
        return Err(WaveError::configuration(msg).into());
    }

    println!("Wavegrid ({:?})", args.variant);
    println!("  Seed: {}", args.seed);
    println!("  Ticks: {} at {} fps", args.ticks, args.fps);

    let start = Instant::now();
    match args.variant {
        Variant::Surface => run_surface(&args)?,
        Variant::Cells => run_cells(&args)?,
    }

    let elapsed = start.elapsed();
    info!(
        "Simulated {} ticks in {:.2}ms",
        args.ticks,
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
