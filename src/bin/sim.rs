use clap::Parser;
use flotilla::{default_fleet, size_census, Board, BoardError, GameEngine, Targeter};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play automated games of the targeting engine against random fleets.
#[derive(Parser)]
struct Args {
    /// RNG seed for board setup and targeting.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 10)]
    rows: usize,
    #[arg(long, default_value_t = 10)]
    cols: usize,
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,
}

/// Set up a board, retrying with a fresh grid when a dense layout cannot
/// be completed within the placement budget.
fn set_up_board(args: &Args, rng: &mut SmallRng) -> anyhow::Result<Board> {
    let mut board = Board::new(args.rows, args.cols, default_fleet());
    for _ in 0..10 {
        match board.place_ships(rng) {
            Ok(()) => return Ok(board),
            Err(BoardError::PlacementImpossible { ship_id }) => {
                log::info!("retrying setup, ship {} did not fit", ship_id);
                board.reset_board();
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    }
    Err(anyhow::anyhow!("board setup failed after 10 attempts"))
}

fn main() -> anyhow::Result<()> {
    flotilla::init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut shot_counts = Vec::with_capacity(args.games);
    for _ in 0..args.games {
        let board = set_up_board(&args, &mut rng)?;
        let mut engine = GameEngine::new(board);
        let mut targeter = Targeter::new(args.rows, args.cols, size_census(&default_fleet()));

        while !engine.all_sunk() {
            let Some((x, y)) = targeter.next_attack(&mut rng) else {
                break;
            };
            let report = engine.resolve_shot(x, y).map_err(|e| anyhow::anyhow!(e))?;
            targeter
                .register_attack(x, y, report.hit, report.sunk)
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        shot_counts.push(targeter.shots_fired());
    }

    let total: usize = shot_counts.iter().sum();
    let summary = json!({
        "games": shot_counts.len(),
        "board": format!("{}x{}", args.rows, args.cols),
        "shots_mean": total as f64 / shot_counts.len().max(1) as f64,
        "shots_min": shot_counts.iter().min(),
        "shots_max": shot_counts.iter().max(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
