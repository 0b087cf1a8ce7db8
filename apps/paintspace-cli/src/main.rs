use clap::{Parser, Subcommand};
use glam::Vec3;
use paintspace_common::{BrushConfig, HandPose};
use paintspace_export::ObjExporter;
use paintspace_input::{PaintAction, ScriptedDevice, poses};
use paintspace_kernel::{MessageLevel, PaintBrush};
use paintspace_render::{DebugTextRenderer, InstancedMesh, Renderer, SprayEmitter};
use std::collections::BTreeMap;
use std::f32::consts::PI;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paintspace-cli", about = "CLI tool for the paintspace brush")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the effective brush configuration as JSON
    Config {
        /// Brush configuration file (JSON)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Run a scripted painting session against a simulated tracking device
    Simulate {
        /// Number of render ticks to run
        #[arg(short, long, default_value = "240")]
        ticks: u64,
        /// Seconds per render tick
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Brush configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the painted instances to this OBJ file
        #[arg(short, long)]
        export: Option<PathBuf>,
        /// Maximum number of instances to print
        #[arg(long, default_value = "20")]
        show: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("paintspace-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", paintspace_kernel::crate_info());
            println!("input: {}", paintspace_input::crate_info());
            println!("render: {}", paintspace_render::crate_info());
            println!("export: {}", paintspace_export::crate_info());
        }
        Commands::Config { path } => {
            let config = load_config(path.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            println!("spatial unit: {}", config.spatial_unit());
        }
        Commands::Simulate {
            ticks,
            dt,
            config,
            export,
            show,
        } => {
            let config = load_config(config.as_deref())?;
            simulate(&config, ticks, dt, export.as_deref(), show)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BrushConfig> {
    let config = match path {
        Some(path) => BrushConfig::from_json_file(path)?,
        None => BrushConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Hand pose for tick `i` of `total`.
///
/// The script pinches along a half circle, opens the hand, sprays, then
/// opens again.
fn scripted_pose(i: u64, total: u64) -> HandPose {
    let progress = i as f32 / total.max(1) as f32;
    match progress {
        p if p < 0.5 => {
            let angle = p / 0.5 * PI;
            poses::pinch(Vec3::new(angle.cos() * 0.3, angle.sin() * 0.3, 1.0))
        }
        p if p < 0.6 => poses::open(Vec3::new(-0.3, 0.0, 1.0)),
        p if p < 0.9 => poses::spray(Vec3::new(-0.3, 0.0, 1.0)),
        _ => poses::open(Vec3::new(-0.3, 0.0, 1.0)),
    }
}

fn simulate(
    config: &BrushConfig,
    ticks: u64,
    dt: f32,
    export: Option<&Path>,
    show: usize,
) -> anyhow::Result<()> {
    println!(
        "Simulating {ticks} ticks at dt={dt}s (spatial unit {})",
        config.spatial_unit()
    );

    let mut device = ScriptedDevice::new();
    let mut brush = PaintBrush::new(config, InstancedMesh::new(), SprayEmitter::new())?;
    let mut actions: BTreeMap<String, usize> = BTreeMap::new();
    let mut location = Vec3::ZERO;

    for i in 0..ticks {
        // The device samples at half the render rate, so every other tick
        // sees a frame it has already processed.
        if i % 2 == 0 {
            let pose = scripted_pose(i, ticks);
            location = poses::index_tip(&pose).unwrap_or(location);
            device.push_hands(vec![pose]);
        }
        let report = brush.tick(&mut device, location, dt);
        if report.action != PaintAction::NoOp {
            *actions.entry(format!("{:?}", report.action)).or_default() += 1;
        }
    }

    tracing::info!(instances = brush.sink().len(), "session complete");
    println!("Actions:");
    for (action, count) in &actions {
        println!("  {action}: {count}");
    }
    println!(
        "Spray: activations={}, deactivations={}, active={}",
        brush.effect().activations(),
        brush.effect().deactivations(),
        brush.is_spraying()
    );
    print!("{}", DebugTextRenderer::with_limit(show).render(brush.sink()));

    if let Some(path) = export {
        let mut exporter = ObjExporter::new(path);
        let msg = brush.export(&mut exporter);
        match msg.level {
            MessageLevel::Success => println!("{} ({})", msg.text, exporter.path().display()),
            MessageLevel::Failure => println!("{}", msg.text),
        }
    }
    Ok(())
}
