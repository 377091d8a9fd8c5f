mod scenario;
mod viewer;

use clap::{Parser, Subcommand};
use log::info;
use orbitsim_core::Simulator;
use scenario::{particles_or_default, ParticleArg};
use viewer::{ViewerApp, ViewerSettings};

#[derive(Parser)]
#[command(name = "orbitsim")]
#[command(about = "Particles rotating about the origin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance the particles once and print their positions
    Run {
        /// Simulated time to cover
        #[arg(short, long, default_value_t = 0.1)]
        duration: f64,

        /// Particle as X,Y,OMEGA (repeatable; defaults to a three-particle demo scene)
        #[arg(short, long = "particle", allow_hyphen_values = true)]
        particles: Vec<ParticleArg>,
    },
    /// Animate the particles in a window
    View {
        /// Simulated time covered by each frame
        #[arg(long, default_value_t = 0.01)]
        frame_duration: f64,

        /// Wall-clock delay between frames, in milliseconds
        #[arg(long, default_value_t = 10)]
        frame_interval_ms: u64,

        /// Frames before the animation restarts from the initial state
        #[arg(long, default_value_t = 100)]
        frames: u32,

        /// Particle as X,Y,OMEGA (repeatable; defaults to a three-particle demo scene)
        #[arg(short, long = "particle", allow_hyphen_values = true)]
        particles: Vec<ParticleArg>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            duration,
            particles,
        } => run(duration, &particles),
        Commands::View {
            frame_duration,
            frame_interval_ms,
            frames,
            particles,
        } => view(
            ViewerSettings {
                frame_duration,
                frame_interval_ms,
                frames,
            },
            &particles,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(duration: f64, particles: &[ParticleArg]) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulator::new(particles_or_default(particles));
    info!("running {} particles for {}", sim.len(), duration);

    let steps = sim.advance(duration)?;
    println!("sub-steps = {}", steps);
    for (i, p) in sim.particles().iter().enumerate() {
        println!("p{} x={:.6} y={:.6} r={:.6}", i, p.x, p.y, p.radius());
    }

    Ok(())
}

fn view(
    settings: ViewerSettings,
    particles: &[ParticleArg],
) -> Result<(), Box<dyn std::error::Error>> {
    let initial = particles_or_default(particles);
    info!(
        "viewing {} particles, {} per frame",
        initial.len(),
        settings.frame_duration
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "orbitsim",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(initial, settings, cc)))),
    )?;

    Ok(())
}
