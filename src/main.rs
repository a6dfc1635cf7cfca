use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use rand::{rngs::StdRng, SeedableRng};
use slider_search::{bounded_depth_first_search, breadth_first_search, Outcome, Puzzle};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "slider-search")]
#[command(about = "Solve a sliding puzzle by breadth-first and bounded depth-first search")]
struct Args {
    /// Side length of the board
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..))]
    size: u8,

    /// Number of random moves applied to the solved board
    #[arg(long, default_value_t = 4)]
    scramble: usize,

    /// Depth ceiling for the bounded depth-first search
    #[arg(long, default_value_t = 10)]
    max_depth: usize,

    /// Scramble seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start board instead of a scramble, rows separated by '/', e.g. "1 2 3/4 0 6/7 5 8"
    #[arg(long)]
    board: Option<Puzzle>,

    #[arg(long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Bfs,
    Dfs,
    Both,
}

fn main() {
    env_logger::builder()
        .format(|f, rec| writeln!(f, "{}: {}", rec.level(), rec.args()))
        .target(env_logger::Target::Stderr)
        .init();

    std::process::exit(match run(Args::parse()) {
        Ok(()) => 0,
        Err(err) => {
            display_error(&err);
            1
        }
    })
}

fn run(args: Args) -> io::Result<()> {
    let start = match args.board {
        Some(board) => board,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            log::info!("scrambling {} moves with seed {}", args.scramble, seed);
            let mut puzzle = Puzzle::new(args.size as usize);
            puzzle.scramble(args.scramble, &mut StdRng::seed_from_u64(seed));
            puzzle
        }
    };
    if !start.is_solvable() {
        log::warn!("board is not solvable, searches will exhaust the reachable states");
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{}", "Start:".bold())?;
    write!(out, "{}", start)?;

    if matches!(args.strategy, Strategy::Bfs | Strategy::Both) {
        let outcome = breadth_first_search(&start);
        report(&mut out, "Breadth-first", &outcome)?;
    }
    if matches!(args.strategy, Strategy::Dfs | Strategy::Both) {
        let outcome = bounded_depth_first_search(&start, args.max_depth);
        let name = format!("Bounded depth-first (max depth {})", args.max_depth);
        report(&mut out, &name, &outcome)?;
    }
    out.flush()
}

fn report(out: &mut impl Write, name: &str, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Found(path) => {
            let heading = format!("{}: {} moves", name, path.len());
            writeln!(out, "{}", heading.as_str().green().bold())?;
            writeln!(out, "{}", path)
        }
        Outcome::NoSolution => {
            let heading = format!("{}: no solution", name);
            writeln!(out, "{}", heading.as_str().red().bold())
        }
    }
}

fn display_error(mut err: &dyn std::error::Error) {
    loop {
        log::error!("{}", err);
        if let Some(src) = err.source() {
            err = src;
        } else {
            break;
        }
    }
}
