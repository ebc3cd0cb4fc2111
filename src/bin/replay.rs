use anyhow::{Context, Result};
use clap::Parser;

use connect_four::cli::ConfigArgs;
use connect_four::game::GameResult;
use connect_four::replay::replay;

/// Replay a list of column drops and print the resulting board.
#[derive(Parser)]
#[command(name = "replay", about = "Replay Connect Four moves headlessly")]
struct Cli {
    /// Comma-separated column indices, e.g. 0,0,1,1,2,2,3
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    moves: Vec<isize>,

    #[command(flatten)]
    settings: ConfigArgs,
}

fn main() -> Result<()> {
    env_logger::builder().format_target(false).init();

    let cli = Cli::parse();
    let config = cli.settings.resolve()?;
    let mut game = config.new_game().context("creating game")?;

    let report = replay(&mut game, &cli.moves);
    for record in report.rejected() {
        println!(
            "move {} (column {}) ignored: {:?}",
            record.index, record.column, record.outcome
        );
    }
    if report.skipped > 0 {
        println!(
            "game ended after move {}; ignoring {} remaining move(s)",
            report.records.len(),
            report.skipped
        );
    }

    print!("{}", game.board());
    match game.result() {
        Some(GameResult::Win(player)) => println!("Player {} won!", player.number()),
        Some(GameResult::Tie) => println!("Tie!"),
        None => println!(
            "In progress: player {} to move",
            game.current_player().number().number()
        ),
    }

    Ok(())
}
