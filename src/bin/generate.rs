use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use tictacpress::plan;
use tictacpress::plan_writer::{PlainJsonlWriter, BUF_WRITER_CAP_BYTES};
use tictacpress::solver::graph::{build_graph, BuildOptions};
use tictacpress::Player;

#[derive(Debug, Clone, ValueEnum)]
enum FirstPlayerOpt {
    X,
    O,
}

#[derive(Debug, Parser)]
#[command(
    name = "generate",
    about = "Enumerate the full tic-tac-toe state graph and export a paginated, hyperlinked render plan"
)]
struct Args {
    /// Which mark moves first
    #[arg(long, value_enum, default_value_t = FirstPlayerOpt::X)]
    first_player: FirstPlayerOpt,

    /// Single-player mode: O's turns are collapsed to the minimax-optimal reply
    #[arg(long)]
    ai: bool,

    /// Print mode: the renderer prints destination page numbers instead of hyperlinks
    #[arg(long)]
    print_mode: bool,

    /// Output path for the render-plan JSONL
    #[arg(long, default_value = "plan.jsonl")]
    out: PathBuf,

    /// Skip the SHA-256 digest of the exported lines
    #[arg(long)]
    no_hash: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let options = BuildOptions {
        first_player: match args.first_player {
            FirstPlayerOpt::X => Player::X,
            FirstPlayerOpt::O => Player::O,
        },
        ai_opponent: args.ai,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("[{elapsed_precise}] enumerate {spinner} {msg}")?);
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb.set_message(format!(
        "starting (first={:?}, ai={})",
        options.first_player, options.ai_opponent
    ));

    let t_build = Instant::now();
    let graph = build_graph(options).map_err(|e| format!("Graph build error: {e}"))?;
    let build_elapsed = t_build.elapsed();
    pb.finish_and_clear();

    let totals = graph.totals_by_depth();
    for (d, n) in totals.iter().enumerate() {
        eprintln!("[graph] depth {d}: {n}");
    }
    eprintln!(
        "[graph] enumeration done: states={} elapsed_ms={}",
        graph.len(),
        build_elapsed.as_millis()
    );

    let plan = plan::assemble(&graph, args.print_mode)
        .map_err(|e| format!("Plan assembly error: {e}"))?;
    eprintln!(
        "[plan] pages={} entry_page={}",
        plan.header.pages, plan.header.entry_page
    );

    let file = File::create(&args.out)?;
    let mut sink = PlainJsonlWriter::new(file, BUF_WRITER_CAP_BYTES, !args.no_hash);
    let stats = tictacpress::plan_writer::write_plan(&plan, &mut sink)?;

    eprintln!(
        "[plan] export lines written: {} sha256={}",
        stats.total_lines,
        stats.plan_sha256_hex.as_deref().unwrap_or("-")
    );
    println!(
        "[generate] wrote {} ({} pages)",
        args.out.display(),
        plan.header.pages
    );

    Ok(())
}
