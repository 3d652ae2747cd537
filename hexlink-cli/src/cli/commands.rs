//! Command implementations and argument parsing for the `hexlink` binary.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hexlink_board::{Board, BoardError, Game, GameError, RandomPlayer, Seat};
use hexlink_core::{
    GenerateError, GraphError, LoadError, RandomGraphBuilder, SearchStrategy, WeightedGraph,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::human::HumanPlayer;

const DEFAULT_BOARD_SIZE: usize = 11;
const DEFAULT_DISCONNECTED: i64 = -1;

const INSTRUCTIONS: &str = "\
How to play: players take turns to place a piece on the board. Player 1 plays 'O' and
player 2 plays 'X'. The first player to link their edges of the board wins: player 1
links the left and right edges, player 2 the top and bottom. Enter a move as the row
number followed by a space and the column number, e.g. '2 3'.

";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hexlink",
    about = "Play Hex and query graph connectivity with cached spanning forests."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Play a game of Hex against a random opponent.
    Play(PlayArgs),
    /// Report whether two vertices of an edge-list graph are connected.
    Check(CheckArgs),
    /// Draw a random graph and summarise its connectivity.
    Generate(GenerateArgs),
}

/// Options accepted by the `play` command.
#[derive(Debug, Args, Clone)]
pub struct PlayArgs {
    /// Number of columns.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub height: usize,

    /// Let a random player take the first seat instead of reading moves.
    #[arg(long)]
    pub autoplay: bool,

    /// Seed for the random players; drawn from the OS when absent.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Edge-list file with integer weights.
    pub path: PathBuf,

    /// First vertex.
    #[arg(long)]
    pub from: usize,

    /// Second vertex.
    #[arg(long)]
    pub to: usize,

    /// Weight that marks a missing edge.
    #[arg(long, default_value_t = DEFAULT_DISCONNECTED, allow_negative_numbers = true)]
    pub disconnected: i64,

    /// Search the live weights instead of the cached spanning forest.
    #[arg(long)]
    pub live: bool,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,

    /// Fraction of vertex pairs that receive an edge, in `[0, 1]`.
    #[arg(long, default_value_t = 0.5)]
    pub density: f64,

    /// Smallest edge weight.
    #[arg(long, default_value_t = 1)]
    pub min: i64,

    /// Largest edge weight.
    #[arg(long, default_value_t = 10)]
    pub max: i64,

    /// Thread a spanning tree through every vertex before sampling.
    #[arg(long)]
    pub connected: bool,

    /// Seed for the generator; drawn from the OS when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write the graph as an edge list to this path.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing to the terminal failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    /// Writing the generated edge list failed.
    #[error("failed to write `{path}`: {source}")]
    Export {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Loading an edge list failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Random generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// A connectivity query was rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The board could not be created.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The game stopped before a winner emerged.
    #[error(transparent)]
    Game(#[from] GameError),
}

impl CliError {
    /// Returns the stable code of the library error behind this failure.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Output(_) | Self::Export { .. } => None,
            Self::Load(err) => Some(err.code().as_str()),
            Self::Generate(err) => Some(err.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Board(err) => Some(err.code().as_str()),
            Self::Game(err) => Some(err.code().as_str()),
        }
    }
}

/// Outcome of a `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    /// Seat that joined its borders.
    pub winner: Seat,
    /// Pieces placed by both seats.
    pub moves: usize,
    /// Whether a random player took the first seat.
    pub autoplay: bool,
}

/// Outcome of a `check` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// File the graph was loaded from.
    pub path: PathBuf,
    /// Vertices in the loaded graph.
    pub vertices: usize,
    /// Connected pairs in the loaded graph.
    pub edges: usize,
    /// First queried vertex.
    pub from: usize,
    /// Second queried vertex.
    pub to: usize,
    /// Search used to answer the query.
    pub strategy: SearchStrategy,
    /// Whether `from` reaches `to`.
    pub connected: bool,
}

/// Outcome of a `generate` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Vertices in the generated graph.
    pub vertices: usize,
    /// Edges in the generated graph.
    pub edges: usize,
    /// Edges kept by the spanning forest.
    pub forest_edges: usize,
    /// Connected components.
    pub components: usize,
    /// Where the edge list was written, if requested.
    pub output: Option<PathBuf>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A finished game.
    Play(PlaySummary),
    /// A connectivity query.
    Check(CheckSummary),
    /// A generated graph.
    Generate(GenerateSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// `play` reads moves from `input` and writes the instructions, prompts and
/// boards to `output`; the other commands ignore both.
///
/// # Errors
/// Returns [`CliError`] when the command fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hexlink_cli::cli::{Cli, Command, ExecutionSummary, GenerateArgs, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateArgs {
///         vertices: 8,
///         density: 0.5,
///         min: 1,
///         max: 9,
///         connected: true,
///         seed: Some(3),
///         output: None,
///     }),
/// };
/// let summary = run_cli(cli, std::io::empty(), std::io::sink())?;
/// let ExecutionSummary::Generate(generated) = summary else {
///     panic!("generate reports a graph summary");
/// };
/// assert_eq!(generated.components, 1);
/// assert_eq!(generated.edges, 14);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, output),
    fields(command = field::Empty),
)]
pub fn run_cli(
    cli: Cli,
    input: impl BufRead,
    output: impl Write,
) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Play(args) => {
            span.record("command", field::display("play"));
            run_play(args, input, output).map(ExecutionSummary::Play)
        }
        Command::Check(args) => {
            span.record("command", field::display("check"));
            run_check(args).map(ExecutionSummary::Check)
        }
        Command::Generate(args) => {
            span.record("command", field::display("generate"));
            run_generate(args).map(ExecutionSummary::Generate)
        }
    }
}

#[instrument(
    name = "cli.play",
    err,
    skip(args, input, output),
    fields(width = args.width, height = args.height, autoplay = args.autoplay),
)]
pub(super) fn run_play(
    args: PlayArgs,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<PlaySummary, CliError> {
    let board = Board::new(args.width, args.height)?;
    let mut seeds = seeded_rng(args.seed);
    let mut two = RandomPlayer::new(SmallRng::seed_from_u64(seeds.r#gen()));
    let mut game = Game::new(board);

    let result = if args.autoplay {
        let mut one = RandomPlayer::new(SmallRng::seed_from_u64(seeds.r#gen()));
        game.play(&mut one, &mut two)?
    } else {
        output.write_all(INSTRUCTIONS.as_bytes())?;
        let mut one = HumanPlayer::new(input, &mut output);
        game.play(&mut one, &mut two)?
    };
    write!(output, "\n{}", game.board())?;

    info!(winner = %result.winner, moves = result.moves, "game finished");
    Ok(PlaySummary {
        winner: result.winner,
        moves: result.moves,
        autoplay: args.autoplay,
    })
}

#[instrument(
    name = "cli.check",
    err,
    skip(args),
    fields(path = %args.path.display(), from = args.from, to = args.to, live = args.live),
)]
pub(super) fn run_check(args: CheckArgs) -> Result<CheckSummary, CliError> {
    let CheckArgs {
        path,
        from,
        to,
        disconnected,
        live,
    } = args;
    let mut graph = WeightedGraph::from_edge_list(&path, disconnected)?;
    let strategy = SearchStrategy::from_cache_flag(!live);
    let connected = graph.is_connected(from, to, strategy)?;

    info!(connected, "connectivity checked");
    Ok(CheckSummary {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        path,
        from,
        to,
        strategy,
        connected,
    })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(vertices = args.vertices, density = args.density, seed = field::Empty),
)]
pub(super) fn run_generate(args: GenerateArgs) -> Result<GenerateSummary, CliError> {
    if let Some(seed) = args.seed {
        Span::current().record("seed", seed);
    }
    let mut rng = seeded_rng(args.seed);
    let mut graph = RandomGraphBuilder::new(args.vertices, DEFAULT_DISCONNECTED)
        .with_edge_density(args.density)
        .with_weight_range(args.min, args.max)
        .with_full_connectivity(args.connected)
        .build(&mut rng)?;

    if let Some(path) = &args.output {
        export_edge_list(&graph, path)?;
    }

    let forest_edges = graph.spanning_forest().edge_count();
    let components = graph.component_count();
    info!(
        edges = graph.edge_count(),
        forest_edges, components, "graph generated"
    );
    Ok(GenerateSummary {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        forest_edges,
        components,
        output: args.output,
    })
}

fn export_edge_list(graph: &WeightedGraph<i64>, path: &Path) -> Result<(), CliError> {
    let to_export = |source| CliError::Export {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_export)?;
    let mut writer = BufWriter::new(file);
    graph.write_edge_list(&mut writer).map_err(to_export)?;
    writer.flush().map_err(to_export)
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hexlink_board::Seat;
/// # use hexlink_cli::cli::{ExecutionSummary, PlaySummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Play(PlaySummary {
///     winner: Seat::One,
///     moves: 9,
///     autoplay: false,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "Well done, you win!\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Play(play) => match (play.autoplay, play.winner) {
            (true, winner) => writeln!(writer, "Player {} wins", winner.number()),
            (false, Seat::One) => writeln!(writer, "Well done, you win!"),
            (false, Seat::Two) => writeln!(writer, "Bad luck, you lose!"),
        },
        ExecutionSummary::Check(check) => {
            let verdict = if check.connected {
                "connected"
            } else {
                "not connected"
            };
            let strategy = match check.strategy {
                SearchStrategy::Live => "live",
                SearchStrategy::SpanningForest => "spanning forest",
            };
            writeln!(writer, "graph: {}", check.path.display())?;
            writeln!(writer, "vertices: {}", check.vertices)?;
            writeln!(writer, "edges: {}", check.edges)?;
            writeln!(writer, "search: {strategy}")?;
            writeln!(writer, "{} -> {}: {verdict}", check.from, check.to)
        }
        ExecutionSummary::Generate(generated) => {
            writeln!(writer, "vertices: {}", generated.vertices)?;
            writeln!(writer, "edges: {}", generated.edges)?;
            writeln!(writer, "spanning forest edges: {}", generated.forest_edges)?;
            writeln!(writer, "components: {}", generated.components)?;
            if let Some(path) = &generated.output {
                writeln!(writer, "edge list: {}", path.display())?;
            }
            Ok(())
        }
    }
}
