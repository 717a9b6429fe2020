use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use snake_hunt::game::GameConfig;
use snake_hunt::modes::HumanMode;
use snake_hunt::persistence::Store;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_hunt")]
#[command(version, about = "Snake game with predators that hunt you down")]
struct Cli {
    /// Starting playfield size
    #[arg(long, default_value = "standard")]
    preset: Preset,

    /// Playfield width in cells (overrides the preset)
    #[arg(long)]
    width: Option<usize>,

    /// Playfield height in cells (overrides the preset)
    #[arg(long)]
    height: Option<usize>,

    /// Cell size in playfield units
    #[arg(long)]
    cell_size: Option<i32>,

    /// JSON file with game tuning; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the high score and settings
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Log destination; the terminal is taken by the game
    #[arg(long, default_value = "snake_hunt.log")]
    log_file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 10x10 cells
    Small,
    /// 40x30 cells
    Standard,
    /// 60x45 cells
    Large,
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            GameConfig::from_json(&json)
                .with_context(|| format!("Failed to parse config file {:?}", path))?
        }
        None => match cli.preset {
            Preset::Small => GameConfig::small(),
            Preset::Standard => GameConfig::default(),
            Preset::Large => GameConfig::large(),
        },
    };
    config.validate().context("Invalid game configuration")?;

    if cli.width.is_some() || cli.height.is_some() {
        let cols = match cli.width {
            Some(width) => cell_count(width, "--width")?,
            None => config.playfield_width / config.cell_size,
        };
        let rows = match cli.height {
            Some(height) => cell_count(height, "--height")?,
            None => config.playfield_height / config.cell_size,
        };
        config.playfield_width = cols
            .checked_mul(config.cell_size)
            .context("--width is too large for the cell size")?;
        config.playfield_height = rows
            .checked_mul(config.cell_size)
            .context("--height is too large for the cell size")?;
    }
    if let Some(cell_size) = cli.cell_size {
        ensure!(cell_size > 0, "--cell-size must be positive, got {cell_size}");
        let cols = config.playfield_width / config.cell_size;
        let rows = config.playfield_height / config.cell_size;
        ensure!(
            cols.checked_mul(cell_size).is_some() && rows.checked_mul(cell_size).is_some(),
            "--cell-size {cell_size} makes the playfield too large"
        );
        config = config.with_cell_size(cell_size);
    }

    config
        .validate()
        .context("Invalid playfield from command-line options")?;
    Ok(config)
}

fn cell_count(cells: usize, flag: &str) -> Result<i32> {
    i32::try_from(cells).with_context(|| format!("{flag} {cells} is too large"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    let config = build_config(&cli)?;
    tracing::info!(
        width = config.playfield_width,
        height = config.playfield_height,
        cell_size = config.cell_size,
        data_dir = ?cli.data_dir,
        "starting snake_hunt"
    );

    let store = Store::new(&cli.data_dir);
    let mut human_mode = HumanMode::new(config, store, cli.seed);
    human_mode.run().await?;

    Ok(())
}
