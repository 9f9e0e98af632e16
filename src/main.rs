#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_core::settings::{
    DEFAULT_PARTICLE_COUNT, DEFAULT_ROTATION_INTERVAL_MS, DEFAULT_TYPING_INTERVAL_MS,
};
use portfolio_core::{MotionSettings, Portfolio};

/// Global motion settings, set from command line
static SETTINGS: OnceLock<MotionSettings> = OnceLock::new();

/// Get the motion settings (set from command line or default)
pub fn get_settings() -> MotionSettings {
    SETTINGS.get().copied().unwrap_or_default()
}

/// Portfolio - single-page developer profile
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Single-page developer portfolio")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fixed seed for the hero particle field
    #[arg(long)]
    seed: Option<u64>,

    /// Number of hero particles
    #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    particles: usize,

    /// Milliseconds between typed characters
    #[arg(long, default_value_t = DEFAULT_TYPING_INTERVAL_MS)]
    typing_ms: u64,

    /// Milliseconds each rotating role stays up
    #[arg(long, default_value_t = DEFAULT_ROTATION_INTERVAL_MS)]
    rotation_ms: u64,

    /// Show every effect in its final state
    #[arg(long)]
    reduced_motion: bool,

    /// Validate the content, print a summary and exit
    #[arg(long)]
    check: bool,

    /// Print the --check summary as JSON
    #[arg(long, requires = "check")]
    json: bool,
}

impl Args {
    fn motion_settings(&self) -> MotionSettings {
        MotionSettings {
            typing_interval_ms: self.typing_ms,
            rotation_interval_ms: self.rotation_ms,
            particle_count: self.particles,
            particle_seed: self.seed,
            reduced_motion: self.reduced_motion,
            ..MotionSettings::default()
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn print_summary(content: &Portfolio, json: bool) -> Result<()> {
    let summary = content.summary();
    if json {
        let out = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", out);
        return Ok(());
    }

    println!("Portfolio content OK: {}", summary.name);
    println!("  Sections:       {}", summary.sections.join(", "));
    println!("  Skills:         {}", summary.skills);
    println!("  Projects:       {}", summary.projects);
    println!("  Certifications: {}", summary.certifications);
    println!("  Social links:   {}", summary.socials);
    println!("  Roles:          {}", summary.roles);
    println!(
        "  Resume:         {}",
        if summary.resume { "yes" } else { "no" }
    );
    Ok(())
}

#[cfg(feature = "desktop")]
fn launch(title: &str) {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let config = Config::new()
        .with_background_color(theme::colors::BACKGROUND_RGBA)
        .with_window(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(1280.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn launch(_title: &str) {
    dioxus::LaunchBuilder::web().launch(app::App);
}

#[cfg(not(any(feature = "desktop", feature = "web")))]
compile_error!("enable the `desktop` or `web` feature");

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let content = Portfolio::default_content();
    content
        .validate()
        .context("Portfolio content is not well-formed")?;

    let settings = args.motion_settings();
    settings.validate().context("Invalid motion settings")?;

    if args.check {
        return print_summary(&content, args.json);
    }

    let _ = SETTINGS.set(settings);
    tracing::info!(
        particles = settings.particle_count,
        seed = ?settings.particle_seed,
        reduced_motion = settings.reduced_motion,
        "Starting portfolio for {}",
        content.profile.name
    );

    launch(&format!("{} - Portfolio", content.profile.name));
    Ok(())
}
