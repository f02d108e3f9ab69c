use anyhow::Result;
use clap::Parser;
use smart_snake::game::GameConfig;
use smart_snake::modes::AutoMode;
use smart_snake::persist;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smart_snake")]
#[command(version, about = "Self-playing snake in the terminal")]
struct Cli {
    /// Board width in pixels (must be a multiple of the cell size)
    #[arg(long)]
    board_width: Option<i32>,

    /// Board height in pixels (must be a multiple of the cell size)
    #[arg(long)]
    board_height: Option<i32>,

    /// Grid pitch in pixels
    #[arg(long)]
    cell_size: Option<i32>,

    /// Starting interval between snake movements, in milliseconds
    #[arg(long)]
    tempo_ms: Option<u64>,

    /// Directory for scores and settings
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "debug")]
    init_logging()?;

    // Persisted settings first, CLI flags on top
    let settings_path = persist::settings_path(&cli.data_dir);
    let mut config = match persist::settings::load(&settings_path) {
        Ok(Some(config)) => config,
        Ok(None) => GameConfig::default(),
        Err(err) => {
            log::warn!("ignoring unreadable settings: {err:#}");
            GameConfig::default()
        }
    };

    if let Some(width) = cli.board_width {
        config.board_width = width;
    }
    if let Some(height) = cli.board_height {
        config.board_height = height;
    }
    if let Some(cell_size) = cli.cell_size {
        config.cell_size = cell_size;
    }
    if let Some(tempo_ms) = cli.tempo_ms {
        config.initial_tempo_ms = tempo_ms;
        config.min_tempo_ms = config.min_tempo_ms.min(tempo_ms);
    }

    config.validate()?;

    let mut mode = AutoMode::new(config.clone(), &cli.data_dir);
    mode.run().await?;

    if let Err(err) = persist::settings::save(&settings_path, &config) {
        log::warn!("could not save settings: {err:#}");
    }

    Ok(())
}

#[cfg(feature = "debug")]
fn init_logging() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("smart_snake.log")?)
        .apply()?;

    Ok(())
}
