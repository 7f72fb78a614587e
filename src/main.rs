//! `arcade-chess` - play the chess mini-game in a terminal
//!
//! Moves are typed in coordinate notation (`e2e4`, `e7e8q`). Other commands:
//! `moves <square>`, `next` (after a game ends), `reset`,
//! `mode <single|multi>`, `difficulty <1-15>`, `help` and `quit`. With `--save` the game is written to disk after every
//! completed ply and `--resume` continues from that file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use arcade_chess::game::components::GamePhase;
use arcade_chess::game::resources::{RoundResult, MAX_ROUND};
use arcade_chess::{init_logging, GameMode, GameSnapshot, MoveOutcome, Session, SessionConfig};
use chess_engine::{Color, Difficulty, PieceType, Square};
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "arcade-chess", version, about = "Play chess against the computer in a terminal")]
struct Cli {
    /// Single player against the computer, or two players at one keyboard
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// AI strength, 1 (random) to 15
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=15))]
    difficulty: Option<u8>,

    /// Color played by the computer
    #[arg(long, value_enum)]
    ai_color: Option<ColorArg>,

    /// Pause before the computer starts thinking
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// JSON session config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a snapshot here after every completed move
    #[arg(long)]
    save: Option<PathBuf>,

    /// Continue the game stored at the --save path
    #[arg(long, requires = "save")]
    resume: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Single,
    Multi,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => GameMode::Single,
            ModeArg::Multi => GameMode::Multi,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    White,
    Black,
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::White => Color::White,
            ColorArg::Black => Color::Black,
        }
    }
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if let Some(value) = self.difficulty {
            config.difficulty = Difficulty::new(value)?;
        }
        if let Some(color) = self.ai_color {
            config.ai_color = color.into();
        }
        if let Some(delay) = self.ai_delay_ms {
            config.ai_delay_ms = delay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    },
    Promote(PieceType),
    Moves(Square),
    Mode(GameMode),
    Difficulty(Difficulty),
    NextRound,
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        bail!("empty command");
    };
    let arg = words.next();

    let command = match (head.to_ascii_lowercase().as_str(), arg) {
        ("quit" | "exit", None) => Command::Quit,
        ("reset" | "new", None) => Command::Reset,
        ("next", None) => Command::NextRound,
        ("help" | "?", None) => Command::Help,
        ("moves", Some(square)) => Command::Moves(square.parse()?),
        ("mode", Some(mode)) => Command::Mode(mode.parse()?),
        ("difficulty", Some(value)) => {
            let value: u8 = value.parse().context("difficulty must be a number")?;
            Command::Difficulty(Difficulty::new(value)?)
        }
        (text, None) if text.len() == 1 => {
            let piece = text
                .chars()
                .next()
                .and_then(PieceType::from_letter)
                .context("promotion piece must be one of q, r, b, n")?;
            Command::Promote(piece)
        }
        (text, None) if text.len() == 4 || text.len() == 5 => {
            let (Some(from), Some(to), Some(rest)) = (text.get(0..2), text.get(2..4), text.get(4..))
            else {
                bail!("moves look like e2e4");
            };
            let from: Square = from.parse()?;
            let to: Square = to.parse()?;
            let promotion = match rest.chars().next() {
                Some(c) => Some(
                    PieceType::from_letter(c).context("unknown promotion piece")?,
                ),
                None => None,
            };
            Command::Move { from, to, promotion }
        }
        _ => bail!("unrecognised command {line:?} (type help)"),
    };
    Ok(command)
}

const HELP: &str = "\
  e2e4        move a piece (append q/r/b/n to promote, e.g. e7e8q)
  q|r|b|n     choose the piece for a pending promotion
  moves e2    list the moves of the piece on e2
  mode multi  switch to two players (starts a new game)
  difficulty 8
  next        after a game ends, play the next round (or retry this one)
  reset       start over from round 1
  quit";

fn render(session: &Session) {
    let state = session.state();
    println!();
    if session.config().mode.has_ai() {
        println!("round {} / {MAX_ROUND}", session.round());
    }
    println!("{}", state.board());
    if let Some((from, to)) = state.last_move() {
        println!("last move: {from}{to}");
    }
    let captured = state.captured();
    if !captured.white_captured.is_empty() || !captured.black_captured.is_empty() {
        println!(
            "material: {:+} (white took {}, black took {})",
            captured.material_advantage(),
            captured.white_captured.len(),
            captured.black_captured.len()
        );
    }
    match state.phase() {
        GamePhase::AwaitingMove(color) => {
            let mut banner = format!("{color} to move");
            if state.is_checkmate(color) {
                banner.push_str(" (checkmated)");
            } else if state.is_in_check(color) {
                banner.push_str(" (check)");
            }
            println!("{banner}");
        }
        GamePhase::PromotionPending(pending) => {
            println!("promote the pawn on {}: q, r, b or n", pending.to);
        }
        GamePhase::GameOver(outcome) => {
            println!("{} - type next, reset or quit", outcome.message());
        }
    }
}

fn report(outcome: &MoveOutcome) {
    if let Some(record) = outcome.record() {
        match record.captured {
            Some(piece) => println!("{} takes {:?}", record.notation(), piece.piece_type),
            None => println!("{}", record.notation()),
        }
    }
}

fn save(session: &Session, path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    if session.state().pending_promotion().is_some() {
        return Ok(());
    }
    session.snapshot()?.save(path)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let config = cli.session_config()?;
    let mut session = match (&cli.save, cli.resume) {
        (Some(path), true) if path.exists() => {
            let snapshot = GameSnapshot::load(path)
                .with_context(|| format!("cannot resume from {}", path.display()))?;
            Session::from_snapshot(config, &snapshot)
        }
        _ => Session::new(config),
    };
    session.resume_ai()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if session.is_ai_thinking() {
            if let Some(outcome) = session.wait_for_ai().await? {
                report(&outcome);
                save(&session, cli.save.as_ref())?;
            }
            continue;
        }

        render(&session);
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        let result = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Moves(square) => {
                let targets: Vec<String> = session
                    .legal_moves_from(square)
                    .iter()
                    .map(|m| m.to.to_string())
                    .collect();
                println!("{square}: {}", targets.join(" "));
                Ok(())
            }
            Command::Move {
                from,
                to,
                promotion,
            } => session.submit_move(from, to, promotion).map(|o| report(&o)),
            Command::Promote(piece) => session.choose_promotion(piece).map(|o| report(&o)),
            Command::NextRound => session.next_round().map(|result| match result {
                RoundResult::Advanced { round } => println!("round cleared, on to round {round}"),
                RoundResult::Retry { round } => println!("replaying round {round}"),
                RoundResult::Completed => println!("all {MAX_ROUND} rounds cleared, starting over"),
            }),
            Command::Reset => session.reset(),
            Command::Mode(mode) => session.set_mode(mode),
            Command::Difficulty(difficulty) => {
                session.set_difficulty(difficulty);
                Ok(())
            }
        };
        match result {
            Ok(()) => save(&session, cli.save.as_ref())?,
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}
