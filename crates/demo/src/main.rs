// File: crates/demo/src/main.rs
// Summary: CLI entry: `render` lays out one series, `dashboard` renders every panel of a page.

mod dashboard;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use bastion_chart::Encoding;
use bastion_dashboard::{PageKind, Role};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bastion-demo")]
#[command(about = "Render bar/line/area charts to SVG and PNG")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one series
    Render(RenderArgs),

    /// Mount a dashboard page, refresh its panels and write one SVG per panel
    Dashboard(DashboardArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Values separated by commas, semicolons or spaces
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    pub values: Option<String>,

    /// CSV file to read the series from
    #[arg(long, requires = "column")]
    pub csv: Option<PathBuf>,

    /// Column header to read from the CSV file
    #[arg(long)]
    pub column: Option<String>,

    /// bar, line or area (default: from config, else bar)
    #[arg(short, long)]
    pub encoding: Option<Encoding>,

    /// cyan, purple, blue, green or red; anything else renders red
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub width: Option<f64>,

    #[arg(long)]
    pub height: Option<f64>,

    /// Emit static geometry with no entrance animation
    #[arg(long)]
    pub no_animate: bool,

    #[arg(long)]
    pub title: Option<String>,

    /// TOML file with chart defaults; flags win over it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SVG output path
    #[arg(short, long)]
    pub out: PathBuf,

    /// Also dump the scene as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Also rasterize to PNG
    #[arg(long)]
    pub png: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {
    /// security, fraud or quantum
    #[arg(short, long)]
    pub page: PageKind,

    /// Directory for the panel SVGs
    #[arg(short, long, default_value = "target/dashboard")]
    pub out_dir: PathBuf,

    /// Per-panel refresh timeout
    #[arg(long, default_value = "2000")]
    pub timeout_ms: u64,

    /// Simulated source latency
    #[arg(long, default_value = "150")]
    pub latency_ms: u64,

    /// Role of the viewer; pages above it are not rendered
    #[arg(long, default_value = "viewer")]
    pub role: Role,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "bastion=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => render::run(&args),
        Commands::Dashboard(args) => dashboard::run(&args).await,
    }
}
