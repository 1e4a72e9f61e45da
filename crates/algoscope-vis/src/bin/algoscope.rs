//! Algoscope terminal host
//!
//! Replays sorting and pathfinding runs frame by frame in the terminal, or
//! drives the structure lab from stdin.
//!
//! ```text
//! algoscope sort <algorithm> [seed] [--json]
//! algoscope path <algorithm> [--json]
//! algoscope structures [--json]
//! ```

use std::env;
use std::time::Duration;

use algoscope_grid::{Grid, SearchAlgorithm};
use algoscope_sort::{generate_array, SortAlgorithm, SortStep};
use algoscope_structures::{StructureCommand, StructureLab, StructureView};
use algoscope_vis::{
    path_timeline, BarFrame, GridFrame, Phase, PathStep, ReplayConfig, ReplayOutcome, Replayer,
    SortConfig, Surface, VisEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: algoscope sort <algorithm> [seed] [--json]
       algoscope path <algorithm> [--json]
       algoscope structures [--json]";

const COMMANDS: &str = "commands: push|enqueue|insert_head|insert_tail|bst_insert <value>
          pop, peek, dequeue, delete_head, delete_tail, bst_reset";

/// Bar width in columns for text output.
const BAR_WIDTH: usize = 60;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoscope=info,algoscope_vis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = take_flag(&mut args, "--json");

    match args.first().map(String::as_str) {
        Some("sort") => {
            let algorithm: SortAlgorithm = args.get(1).ok_or(USAGE)?.parse()?;
            let seed = args.get(2).and_then(|s| s.parse().ok());
            sort(algorithm, seed, json).await
        }
        Some("path") => {
            let algorithm: SearchAlgorithm = args.get(1).ok_or(USAGE)?.parse()?;
            path(algorithm, json).await
        }
        Some("structures") => structures(json).await,
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

async fn sort(
    algorithm: SortAlgorithm,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SortConfig::from_env();
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values = generate_array(config.size, config.min, config.max, &mut rng)?;
    let run = algoscope_sort::run(&values, algorithm);
    let complexity = algorithm.complexity();
    info!(
        algorithm = algorithm.label(),
        time = complexity.time,
        space = complexity.space,
        steps = run.steps.len(),
        "sort recorded"
    );

    let max = config.max;
    let printer = Printer::new(BarFrame::new(&values), json, move |frame: &BarFrame| {
        frame.render_text(max, BAR_WIDTH)
    });
    let delay = config.step_delay();
    let outcome = replay_until_interrupted(printer, run.steps, move |_: &SortStep| delay).await;
    report(outcome);
    Ok(())
}

async fn path(algorithm: SearchAlgorithm, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ReplayConfig::from_env();
    let grid = Grid::new();
    let outcome = algoscope_grid::run(&grid, algorithm);
    info!(
        algorithm = algorithm.label(),
        visited = outcome.visited.len(),
        path = outcome.path_len(),
        found = outcome.found,
        "search recorded"
    );

    let printer = Printer::new(GridFrame::new(&grid), json, GridFrame::render_text);
    let pace = move |step: &PathStep| match step.phase {
        Phase::Visited => config.visit_delay,
        Phase::Path | Phase::Unreachable => config.path_delay,
    };
    let replayed = replay_until_interrupted(printer, path_timeline(&outcome), pace).await;
    report(replayed);
    if !outcome.found {
        println!("finish is unreachable");
    }
    Ok(())
}

/// Run one replay to completion, cancelling it on Ctrl-C.
async fn replay_until_interrupted<S, F, D>(
    surface: F,
    steps: Vec<S>,
    delay: D,
) -> Option<ReplayOutcome>
where
    S: algoscope_vis::Step,
    F: Surface<S>,
    D: Fn(&S) -> Duration + Send + 'static,
{
    let mut replayer = Replayer::new(surface);
    let mut events = replayer.subscribe();
    replayer.start(steps, delay).await;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
            replayer.cancel();
        }
        _ = replay_finished(&mut events) => {}
    }
    replayer.wait().await
}

async fn replay_finished(events: &mut broadcast::Receiver<VisEvent>) {
    loop {
        match events.recv().await {
            Ok(VisEvent::ReplayCompleted { .. } | VisEvent::ReplayCancelled { .. }) => return,
            Ok(VisEvent::ReplayStarted { .. }) | Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => return,
        }
    }
}

fn report(outcome: Option<ReplayOutcome>) {
    match outcome {
        Some(ReplayOutcome::Completed { applied }) => println!("done: {} steps", applied),
        Some(ReplayOutcome::Cancelled { applied }) => println!("stopped after {} steps", applied),
        None => warn!("replay task ended without an outcome"),
    }
}

/// Surface that prints its frame after every change.
struct Printer<F, R> {
    frame: F,
    json: bool,
    render: R,
}

impl<F, R> Printer<F, R>
where
    F: Serialize,
    R: Fn(&F) -> String,
{
    fn new(frame: F, json: bool, render: R) -> Self {
        Self { frame, json, render }
    }

    fn print(&self) {
        if self.json {
            match serde_json::to_string(&self.frame) {
                Ok(line) => println!("{}", line),
                Err(e) => warn!("failed to serialize frame: {}", e),
            }
        } else {
            // Clear screen, cursor home
            print!("\x1b[2J\x1b[H{}", (self.render)(&self.frame));
        }
    }
}

impl<S, F, R> Surface<S> for Printer<F, R>
where
    F: Surface<S> + Serialize,
    R: Fn(&F) -> String + Send + 'static,
{
    fn apply(&mut self, step: &S) {
        self.frame.apply(step);
        self.print();
    }

    fn finish(&mut self) {
        self.frame.finish();
        self.print();
    }
}

async fn structures(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut lab = StructureLab::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    if !json {
        println!("{}", COMMANDS);
    }

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let command = if json {
            match serde_json::from_str::<StructureCommand>(line) {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("invalid command: {}", e);
                    continue;
                }
            }
        } else {
            match parse_command(line) {
                Some(command) => command,
                None => {
                    eprintln!("unknown command: {}", line);
                    continue;
                }
            }
        };

        match lab.apply(command) {
            Ok(applied) if json => println!("{}", serde_json::to_string(&applied)?),
            Ok(applied) => print!("{}", render_view(&applied.view)),
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

fn parse_command(line: &str) -> Option<StructureCommand> {
    let (op, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let value = rest.trim().to_string();
    let command = match op.to_ascii_lowercase().as_str() {
        "push" => StructureCommand::Push { value },
        "pop" => StructureCommand::Pop,
        "peek" => StructureCommand::Peek,
        "enqueue" => StructureCommand::Enqueue { value },
        "dequeue" => StructureCommand::Dequeue,
        "insert_head" => StructureCommand::InsertHead { value },
        "insert_tail" => StructureCommand::InsertTail { value },
        "delete_head" => StructureCommand::DeleteHead,
        "delete_tail" => StructureCommand::DeleteTail,
        "bst_insert" | "insert" => StructureCommand::BstInsert { value },
        "bst_reset" | "reset" => StructureCommand::BstReset,
        _ => return None,
    };
    Some(command)
}

fn render_view(view: &StructureView) -> String {
    let list: Vec<&str> = view.list.iter().map(|node| node.value.as_str()).collect();
    let bst: Vec<String> = view
        .bst
        .as_ref()
        .map(|root| root.in_order().iter().map(|v| v.to_string()).collect())
        .unwrap_or_default();
    format!(
        "stack (top last): [{}]\nqueue (front first): [{}]\nlist: {}\nbst (in order): [{}]\n",
        view.stack.join(", "),
        view.queue.join(", "),
        if list.is_empty() { "null".to_string() } else { format!("{} -> null", list.join(" -> ")) },
        bst.join(", "),
    )
}
