//! Tamago CLI
//!
//! Usage:
//!   tamago --steps 10000                    # Single evaluation
//!   tamago --steps 10000 --date 2024-03-02  # Single evaluation at a date
//!   tamago --interactive                    # Interactive session
//!   tamago --serve                          # HTTP API server
//!   tamago --steps 10000 --json             # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};

use chrono::Utc;
use tamago::core::{feed, EvolutionEngine, FeedCommand, StepFeed};
use tamago::types::{EggState, EvolutionOutput};
use tamago::{STEP_GOAL, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "tamago",
    version = VERSION,
    about = "Tamago - a step-powered virtual pet",
    long_about = "Tamago hatches, grows, and dies by your daily step count.\n\n\
                  Feed it step reports and it walks the evolution ladder:\n  \
                  EGG     - waiting for the first 10k-step day\n  \
                  CHICK   - keep the goal through day 7, day 8 evolves\n  \
                  CHICKEN - keep the goal through day 13, day 14 lays an egg\n  \
                  DEAD    - a missed goal inside a stage window; 'restart' to try again\n\n\
                  Modes:\n  \
                  --steps N      Single evaluation\n  \
                  --interactive  Feed reports line by line (default)\n  \
                  --serve        HTTP API server mode"
)]
struct Args {
    /// Step count to evaluate (single mode)
    #[arg(short, long)]
    steps: Option<u64>,

    /// Evaluation date YYYY-MM-DD (single mode, default: now)
    #[arg(short, long)]
    date: Option<String>,

    /// Interactive mode - read step reports from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if let Some(steps) = args.steps {
        run_single(steps, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Run single evaluation from a fresh egg
fn run_single(steps: u64, args: &Args) {
    let mut engine = EvolutionEngine::new();

    let now = match args.date.as_deref() {
        Some(d) => match feed::parse_date(d) {
            Ok(at) => at,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Utc::now(),
    };

    let output = engine.on_step_update(steps, now);
    print_output(&output, args);
}

/// Run interactive mode - one engine, step reports from stdin
fn run_interactive(args: &Args) {
    let parser = StepFeed::new();
    let mut engine = EvolutionEngine::new();

    print_header(args.no_color);
    println!("Enter a step count per line ('10000', or '10000 @ 2024-03-02').");
    println!(
        "Goal: {} steps a day. Type 'restart' after death, 'quit' to exit.",
        STEP_GOAL
    );
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&engine, args.no_color);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Updates: {}", engine.update_count());
            break;
        }
        if line.is_empty() {
            continue;
        }

        match parser.parse(line) {
            Ok(FeedCommand::Restart) => {
                if engine.state() == EggState::Dead {
                    engine.restart();
                    println!("{}", engine.message());
                } else {
                    print_warning("pet is still alive, restart only works after death", args);
                }
            }
            Ok(FeedCommand::Steps { steps, at }) => {
                let now = at.unwrap_or_else(Utc::now);
                let output = engine.on_step_update(steps, now);

                if args.json {
                    match serde_json::to_string(&output) {
                        Ok(json) => println!("{}", json),
                        Err(e) => eprintln!("json error: {}", e),
                    }
                } else {
                    print_output(&output, args);
                    print_state_message(&output);
                }
            }
            Err(e) => print_warning(&e.to_string(), args),
        }
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Tamago v{}", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  🥚 Tamago v{}\x1b[0m", VERSION);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Format interactive prompt
fn format_prompt(engine: &EvolutionEngine, no_color: bool) -> String {
    let state = engine.state();
    if no_color {
        format!("[{}] > ", state)
    } else {
        format!(
            "{}{} [{}]{} > ",
            state.color_code(),
            state.emoji(),
            state,
            EggState::color_reset()
        )
    }
}

/// Print one evaluation output
fn print_output(output: &EvolutionOutput, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("json error: {}", e),
        }
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Print follow-up messages on notable outputs
fn print_state_message(output: &EvolutionOutput) {
    use tamago::types::ReasonCode;
    match output.reason {
        ReasonCode::R005_TRANSITION_HATCHED
        | ReasonCode::R005_TRANSITION_EVOLVED
        | ReasonCode::R005_TRANSITION_CYCLED => {
            println!("\x1b[32m  ✓ {}\x1b[0m", output.message);
        }
        ReasonCode::R005_TRANSITION_DIED => {
            println!("\x1b[31m  ⚠ {} Type 'restart' to try again.\x1b[0m", output.message);
        }
        _ => {}
    }
}

/// Print warning line
fn print_warning(msg: &str, args: &Args) {
    if args.no_color {
        println!("⚠ {}", msg);
    } else {
        println!("\x1b[33m⚠ {}\x1b[0m", msg);
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    println!("========================================");
    println!("  🥚 Tamago API Server");
    println!("  Version: {}", VERSION);
    println!("========================================");
    println!();

    if let Err(e) = tamago::core::run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
