use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use depthflex::FlexNode as _;

#[derive(Parser, Debug)]
#[command(name = "depthflex", version)]
struct Cli {
    /// Log engine activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a pipeline description and write motion and effects as JSON.
    Run(RunArgs),
    /// Print the normalized RGBA of a color literal.
    Color(ColorArgs),
    /// List nodes and their modifiable parameters.
    Nodes,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input pipeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Emit effects grouped by renderer state object.
    #[arg(long, default_value_t = false)]
    grouped: bool,
}

#[derive(Parser, Debug)]
struct ColorArgs {
    /// `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` or `r,g,b[,a]`.
    literal: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Color(args) => cmd_color(args),
        Command::Nodes => cmd_nodes(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_pipeline_json(path: &Path) -> anyhow::Result<depthflex::PipelineSpec> {
    let f = File::open(path).with_context(|| format!("open pipeline '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: depthflex::PipelineSpec =
        serde_json::from_reader(r).with_context(|| "parse pipeline JSON")?;
    Ok(spec)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let spec = read_pipeline_json(&args.in_path)?;

    let mut produced = 0usize;
    let output = spec
        .run(&mut || produced += 1)
        .with_context(|| format!("run pipeline '{}'", args.in_path.display()))?;
    tracing::info!(frames = produced, "pipeline complete");

    let json = if args.grouped {
        serde_json::json!({
            "motion": &output.motion,
            "effects": output.grouped_effects(),
            "targets": &output.targets,
        })
    } else {
        serde_json::to_value(&output)?
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f =
                File::create(&out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &json)
                .with_context(|| format!("write '{}'", out.display()))?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&json)?),
    }
    Ok(())
}

fn cmd_color(args: ColorArgs) -> anyhow::Result<()> {
    let rgba = depthflex::parse_color(&args.literal)?;
    println!("{}", serde_json::to_string(&rgba)?);
    Ok(())
}

fn cmd_nodes() -> anyhow::Result<()> {
    for node in depthflex::MotionNode::ALL {
        println!("motion  {:<14} {}", node.name(), node.modifiable_params().join(", "));
    }
    for node in depthflex::EffectNode::ALL {
        println!("effect  {:<14} {}", node.name(), node.modifiable_params().join(", "));
    }
    Ok(())
}
