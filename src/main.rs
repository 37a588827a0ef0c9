use anyhow::{bail, Result};
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Grid width, border included
    #[arg(long, default_value = "60")]
    width: usize,

    /// Grid height, border included
    #[arg(long, default_value = "25")]
    height: usize,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "120")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.width < 5 || cli.height < 5 {
        bail!("grid must be at least 5x5 so the snake and border fit");
    }
    if cli.tick_ms == 0 {
        bail!("tick interval must be at least 1 ms");
    }

    let mut config = GameConfig::new(cli.width, cli.height);
    config.tick_ms = cli.tick_ms;

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await
}
