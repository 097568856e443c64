#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, print_board, CliPlayer, GameEngine, GameStatus, Player, RandomPlayer,
    SearchPlayer, Side,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum SideArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::X => Side::X,
            SideArg::O => Side::O,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Opponent {
    Random,
    Search,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the engine on the local machine.
    Play {
        #[arg(long, value_enum, default_value_t = SideArg::X, help = "Side you play; X moves first")]
        side: SideArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run engine-vs-opponent games and report a win/loss/draw tally.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Drive one game to completion, X moving first. Alternation lives here;
/// the engine below accepts either side at any time.
#[cfg(feature = "std")]
fn run_game(
    rng: &mut SmallRng,
    x_player: &mut dyn Player,
    o_player: &mut dyn Player,
) -> anyhow::Result<GameStatus> {
    let mut engine = GameEngine::new();
    let mut side = Side::X;
    loop {
        let position = match side {
            Side::X => x_player.select_move(rng, engine.board(), side),
            Side::O => o_player.select_move(rng, engine.board(), side),
        }
        .map_err(|e| anyhow::anyhow!(e))?;
        let status = engine
            .apply_move(position, side)
            .map_err(|e| anyhow::anyhow!(e))?;
        x_player.notify_move(position, side);
        o_player.notify_move(position, side);
        log::debug!("{} -> {}, status {:?}", side, position, status);
        if status != GameStatus::InProgress {
            return Ok(status);
        }
        side = side.opponent();
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { side, seed } => {
            let human: Side = side.into();
            let mut rng = make_rng(seed);
            let mut cli_player = CliPlayer::new();
            let mut engine_player = SearchPlayer::new();
            println!("You are {}. X moves first.", human);

            let mut game = GameEngine::new();
            let mut side = Side::X;
            let status = loop {
                let position = if side == human {
                    cli_player.select_move(&mut rng, game.board(), side)
                } else {
                    engine_player.select_move(&mut rng, game.board(), side)
                }
                .map_err(|e| anyhow::anyhow!(e))?;
                let status = game
                    .apply_move(position, side)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if side != human {
                    cli_player.notify_move(position, side);
                }
                if status != GameStatus::InProgress {
                    break status;
                }
                side = side.opponent();
            };

            print_board(game.board());
            match status {
                GameStatus::Won(winner) if winner == human => {
                    println!("Ok, you won :O");
                }
                GameStatus::Won(_) => println!("The engine wins."),
                GameStatus::Drawn => println!("Cat's game :)"),
                GameStatus::InProgress => unreachable!("loop exits only on a finished game"),
            }
        }
        Commands::Sim {
            games,
            opponent,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mut engine_player = SearchPlayer::new();
            let mut random_player = RandomPlayer::new();
            let mut search_player = SearchPlayer::new();

            let mut wins = 0u32;
            let mut losses = 0u32;
            let mut draws = 0u32;
            for game_index in 0..games {
                // Alternate which side the engine takes from game to game.
                let engine_side = if game_index % 2 == 0 { Side::X } else { Side::O };
                let other: &mut dyn Player = match opponent {
                    Opponent::Random => &mut random_player,
                    Opponent::Search => &mut search_player,
                };
                let status = match engine_side {
                    Side::X => run_game(&mut rng, &mut engine_player, other)?,
                    Side::O => run_game(&mut rng, other, &mut engine_player)?,
                };
                match status {
                    GameStatus::Won(winner) if winner == engine_side => wins += 1,
                    GameStatus::Won(_) => losses += 1,
                    GameStatus::Drawn => draws += 1,
                    GameStatus::InProgress => unreachable!("run_game returns finished games"),
                }
                log::info!(
                    "game {}: engine as {} -> {:?}",
                    game_index,
                    engine_side,
                    status
                );
            }
            println!(
                "{} games vs {:?}: {} won, {} lost, {} drawn",
                games, opponent, wins, losses, draws
            );
        }
    }
    Ok(())
}
