use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use services::{
    Clock, DEFAULT_ROUNDS, GoogleTranslateClient, MAX_ROUNDS, MIN_ROUNDS, QuestionBuilder,
    QuizLoopService, QuizOutcome, RandomWordClient,
};

const ROUNDS_ENV: &str = "KOTOBA_ROUNDS";
const LOG_ENV: &str = "KOTOBA_LOG";

/// How long the verdict stays on screen before the next round.
const FEEDBACK_PAUSE: Duration = Duration::from_secs(1);

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRounds { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRounds { raw } => write!(
                f,
                "invalid --rounds value: {raw} (expected {MIN_ROUNDS}..={MAX_ROUNDS})"
            ),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    rounds: u32,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        // Env default, overridable by the flag. Out-of-range env values fall
        // back silently; out-of-range flags are an error.
        let mut rounds = std::env::var(ROUNDS_ENV)
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|value| (MIN_ROUNDS..=MAX_ROUNDS).contains(value))
            .unwrap_or(DEFAULT_ROUNDS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rounds" | "-n" => {
                    let value = require_value(args, "--rounds")?;
                    rounds = value
                        .parse::<u32>()
                        .ok()
                        .filter(|parsed| (MIN_ROUNDS..=MAX_ROUNDS).contains(parsed))
                        .ok_or(ArgsError::InvalidRounds { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { rounds })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--rounds <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --rounds {DEFAULT_ROUNDS}   (valid range {MIN_ROUNDS}..={MAX_ROUNDS})");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  KOTOBA_ROUNDS             round count when --rounds is absent");
    eprintln!("  KOTOBA_WORD_API_URL       word endpoint override");
    eprintln!("  KOTOBA_TRANSLATE_API_URL  translation endpoint override");
    eprintln!("  KOTOBA_LOG                tracing filter (default: warn)");
}

fn init_tracing() {
    // Diagnostics go to stderr so stdout stays a clean quiz transcript.
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print `text` and read one trimmed line from stdin; `None` on EOF.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Play every round of a started run. Returns false when stdin closed
/// before the run could finish.
async fn run_quiz(quiz: &mut QuizLoopService) -> Result<bool, Box<dyn std::error::Error>> {
    loop {
        let question = quiz.ensure_question().await?;
        let progress = quiz.progress();

        println!();
        println!(
            "Question {}/{}",
            progress.display_round(),
            progress.total_rounds
        );
        println!("  {}", question.english());
        match question.kana_hint() {
            Some(hint) => println!("  {}  ({hint})", question.japanese()),
            None => println!("  {}", question.japanese()),
        }

        let Some(answer) = prompt("romaji> ")? else {
            return Ok(false);
        };
        let feedback = quiz.submit_answer(&answer)?;
        println!("{feedback}");
        tokio::time::sleep(FEEDBACK_PAUSE).await;

        if quiz.advance()? == QuizOutcome::Finished {
            return Ok(true);
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let parsed = Args::parse(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    tracing::debug!(rounds = parsed.rounds, "configuration loaded");

    let words = RandomWordClient::from_env()?;
    let translations = GoogleTranslateClient::from_env()?;
    let builder = QuestionBuilder::new(Arc::new(words), Arc::new(translations));
    let mut quiz = QuizLoopService::new(Clock::default_clock(), builder);

    loop {
        quiz.start(parsed.rounds)?;
        if !run_quiz(&mut quiz).await? {
            return Ok(());
        }

        if let Some(summary) = quiz.summary() {
            println!();
            println!("{summary}");
        }

        let Some(answer) = prompt("Play again? [y/N] ")? else {
            return Ok(());
        };
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(());
        }
        quiz.restart();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
