use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use betaturn::annotate::{Mkdssp, PrecomputedDssp, SecondaryStructureSource, DEFAULT_MKDSSP};
use betaturn::options::{DEFAULT_DISTANCE_CUTOFF, DEFAULT_MAX_CA_DISTANCE};
use betaturn::{identify_turns, report, ScanOptions, TurnLibrary};
use clap::{Parser, ValueEnum};
use pretty_env_logger::env_logger::DEFAULT_FILTER_ENV;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Fixed-width columns, one line per turn
    Text,
    /// A JSON object with the source name and all turns
    Json,
}

/// Identify beta turns in a protein structure and classify them into the
/// 18 turn types of Shapovalov, Vucetic and Dunbrack (2019).
#[derive(Parser)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Structure file (.cif, .mmcif, .pdb or .ent, optionally .gz/.zst)
    #[clap(required_unless_present = "list_types")]
    pub structure: Option<PathBuf>,
    /// mkdssp executable
    #[clap(long, env = "BETATURN_MKDSSP", default_value = DEFAULT_MKDSSP)]
    pub mkdssp: PathBuf,
    /// Read secondary structure from an existing mkdssp mmCIF file instead of running mkdssp
    #[clap(long, conflicts_with = "keep_dssp")]
    pub dssp: Option<PathBuf>,
    /// Keep the mkdssp output at this path
    #[clap(long)]
    pub keep_dssp: Option<PathBuf>,
    /// Output format
    #[clap(long, short = 'f', value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Output file (standard output if absent)
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// Largest mean angular distance to a medoid that is accepted
    #[clap(long, default_value_t = DEFAULT_DISTANCE_CUTOFF)]
    pub cutoff: f64,
    /// Largest CA1-CA4 distance of a candidate turn, in Angstroms
    #[clap(long, default_value_t = DEFAULT_MAX_CA_DISTANCE)]
    pub max_ca_distance: f64,
    /// Print the turn types and exit
    #[clap(long, action)]
    pub list_types: bool,
    /// Verbose output. See more with e.g. RUST_LOG=Trace
    #[clap(long, short = 'v', action)]
    pub verbose: bool,
}

fn main() {
    if let Err(err) = do_main() {
        eprintln!("Error: {:#}", &err);
        std::process::exit(1);
    }
}

fn do_main() -> Result<()> {
    let args = Args::parse();
    if args.verbose && std::env::var(DEFAULT_FILTER_ENV).is_err() {
        std::env::set_var(DEFAULT_FILTER_ENV, "Debug");
    }
    pretty_env_logger::init();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if args.list_types {
        report::write_library(&mut out, &TurnLibrary::standard())?;
        out.flush()?;
        return Ok(());
    }
    let structure = args
        .structure
        .as_deref()
        .context("no structure file given")?;

    let annotator: Box<dyn SecondaryStructureSource> = match &args.dssp {
        Some(path) => Box::new(PrecomputedDssp::new(path)),
        None => {
            let mut mkdssp = Mkdssp::new(&args.mkdssp);
            if let Some(path) = &args.keep_dssp {
                mkdssp = mkdssp.keep_output(path);
            }
            Box::new(mkdssp)
        }
    };

    let options = ScanOptions {
        distance_cutoff: args.cutoff,
        max_ca_distance: args.max_ca_distance,
    };
    let turns = identify_turns(structure, annotator.as_ref(), &options)
        .with_context(|| format!("failed to scan {}", structure.display()))?;

    let source = report::source_tag(structure);
    match args.format {
        Format::Text => report::write_text(&mut out, &turns, &source)?,
        Format::Json => report::write_json(&mut out, &turns, &source)?,
    }
    out.flush()?;
    Ok(())
}
