use crate::config::GeneratorConfig;
use crate::date::TravelDate;
use crate::fares::view::{ClassFilter, SortKey};
use crate::search::{Reservation, Searcher, ViewState};
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing_subscriber::EnvFilter;

mod city;
mod config;
mod date;
mod error;
mod fare_class;
mod fares;
mod render;
mod search;
mod ticket;
mod time;

const PAGER_THRESHOLD: usize = 20;

#[derive(Parser)]
#[command(version, about = "Compare synthetic train fares from the terminal")]
struct Args {
    /// Path to a JSON generator configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the fare generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Departure city
    #[arg(long, default_value = "Paris")]
    from: String,

    /// Arrival city
    #[arg(long, default_value = "Lyon")]
    to: String,

    /// Departure date as DD/MM/YYYY; tomorrow when omitted
    #[arg(long)]
    date: Option<String>,

    /// Print long result tables directly instead of through a pager
    #[arg(long)]
    no_pager: bool,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let Some((cmd, arg)) = line.split_once(' ') else {
            let candidates = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                })
                .collect();
            return Ok((0, candidates));
        };

        let arg = arg.trim_start();
        let options: Vec<&str> = match cmd {
            "from" | "to" | "cities" => city::suggest(arg),
            "sort" => SortKey::NAMES.into_iter().filter(|k| k.starts_with(arg)).collect(),
            "class" => ClassFilter::NAMES.into_iter().filter(|k| k.starts_with(arg)).collect(),
            _ => vec![],
        };
        let candidates = options
            .into_iter()
            .map(|option| Pair {
                display: option.to_string(),
                replacement: option.to_string(),
            })
            .collect();
        Ok((pos - arg.len(), candidates))
    }
}

fn paginate(content: &str) -> io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait()?;
    Ok(())
}

fn show(state: &ViewState, use_pager: bool) {
    let (text, rows) = render::results(state);
    if use_pager && rows > PAGER_THRESHOLD {
        if let Err(e) = paginate(&text) {
            tracing::warn!(error = %e, "pager unavailable");
            println!("{}", text);
        }
    } else {
        println!("{}", text);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

fn print_help() {
    println!("\nAvailable Commands:");
    println!("  from <city>          - Set the departure city");
    println!("  to <city>            - Set the arrival city");
    println!("  swap                 - Exchange departure and arrival cities");
    println!("  date <DD/MM/YYYY>    - Set the departure date");
    println!("  next / prev          - Move the departure date by one day");
    println!("  search               - Look up fares for the current route and date");
    println!("  sort <key>           - Order results by price, departure or duration");
    println!("  class <class>        - Show all, standard, comfort or first class fares");
    println!("  ls                   - Show the current results");
    println!("  book <id>            - Reserve a ticket from the results");
    println!("  cities [prefix]      - List known cities");
    println!("  status               - Show the current route, date and selections");
    println!("  help / ?             - Show this help menu");
    println!("  exit / quit          - Leave the comparator\n");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => {
            let config = GeneratorConfig::load_from_file(path)?;
            tracing::info!(path = %path.display(), "loaded generator configuration");
            config
        }
        None => GeneratorConfig::default(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let mut searcher = Searcher::new(config, args.seed);

    let date = args.date.map(TravelDate::new).unwrap_or_else(TravelDate::tomorrow);
    let mut state = ViewState::new(args.from, args.to, date);
    let use_pager = !args.no_pager;

    println!("Train fare comparator. Type 'help' for commands.");
    println!("{}", render::header(&state));

    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: [
            "from", "to", "swap", "date", "next", "prev", "search", "sort", "class", "ls", "book",
            "cities", "status", "help", "exit",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    };

    let mut rl = Editor::with_config(rl_config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let (cmd, arg) = trimmed
                    .split_once(char::is_whitespace)
                    .map(|(cmd, arg)| (cmd, arg.trim()))
                    .unwrap_or((trimmed, ""));
                match cmd {
                    "from" | "to" if arg.is_empty() => println!("Usage: {} <city>", cmd),
                    "from" => state = state.with_origin(arg),
                    "to" => state = state.with_destination(arg),
                    "swap" => {
                        state = state.swap_cities();
                        println!("{} → {}", state.origin, state.destination);
                    },
                    "date" => {
                        if arg.is_empty() {
                            println!("Usage: date <DD/MM/YYYY>");
                        } else {
                            state = state.with_date(TravelDate::new(arg));
                        }
                    },
                    "next" | "prev" => {
                        state = state.shift_date(if cmd == "next" { 1 } else { -1 });
                        println!("Date: {}", state.date);
                    },
                    "search" => {
                        let (next, request) = state.begin_search();
                        state = next;
                        println!("Searching for the best fares...");
                        let batch = runtime.block_on(async {
                            searcher.start(request);
                            searcher.finish().await
                        });
                        state = match batch {
                            Some(batch) => state.complete_search(batch),
                            None => state.abandon_search(),
                        };
                        show(&state, use_pager);
                    },
                    "sort" => match arg.parse::<SortKey>() {
                        Ok(sort) => {
                            state = state.with_sort(sort);
                            show(&state, use_pager);
                        },
                        Err(e) => println!("{}", e),
                    },
                    "class" => match arg.parse::<ClassFilter>() {
                        Ok(filter) => {
                            state = state.with_filter(filter);
                            show(&state, use_pager);
                        },
                        Err(e) => println!("{}", e),
                    },
                    "ls" => show(&state, use_pager),
                    "book" => match state.reserve(arg) {
                        Reservation::Confirmed(ticket) => println!(
                            "Reserved {}: {} → {}, {} class, {} €",
                            ticket.id, ticket.departure, ticket.arrival, ticket.class, ticket.price
                        ),
                        Reservation::SoldOut(ticket) => println!("Ticket {} is sold out.", ticket.id),
                        Reservation::NotFound => println!("Usage: book <id> (an id from the results shown)"),
                    },
                    "cities" => println!("{}", city::suggest(arg).join(", ")),
                    "status" => println!("{}", render::status(&state)),
                    "help" | "?" => print_help(),
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", cmd),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
