use anyhow::Context;
use cabinetkit::settings::{default_factory_path, load_factory, load_modules};
use cabinetkit::{init_logging, Plan, Planner, QuoteReport, BUILD_DATE, VERSION};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "cabinetkit")]
#[command(about = "Cut lists, CNC drilling files and quotes for cabinet modules", long_about = None)]
struct Cli {
    /// Factory catalog (.json or .toml); defaults to the user config directory
    #[arg(long, global = true)]
    factory: Option<PathBuf>,

    /// Module specification file (.json or .toml)
    #[arg(long, global = true)]
    modules: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the optimizer cut list CSV
    Cutlist {
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write one DXF per drilled piece
    Dxf {
        #[arg(long)]
        out_dir: PathBuf,
    },

    /// Print the cost breakdown as JSON
    Quote {
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write every artifact: cut list, BOM, machining report, DXFs and quote
    Plan {
        #[arg(long)]
        out_dir: PathBuf,
    },
}

fn write_dxfs(planner: &Planner<'_>, plan: &Plan, dir: &Path) -> anyhow::Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let documents = planner.dxf_documents(plan)?;
    for doc in &documents {
        let path = dir.join(&doc.file_name);
        fs::write(&path, &doc.content).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(documents.len())
}

fn write_output(out: Option<&Path>, content: &[u8]) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.json)?;
    info!(version = VERSION, built = BUILD_DATE, "CabinetKit starting");

    let factory_path = match cli.factory {
        Some(path) => path,
        None => default_factory_path()?,
    };
    let factory = load_factory(&factory_path)
        .with_context(|| format!("loading factory {}", factory_path.display()))?;
    let modules_path = cli
        .modules
        .context("--modules is required")?;
    let modules = load_modules(&modules_path)
        .with_context(|| format!("loading modules {}", modules_path.display()))?;

    let planner = Planner::new(&factory)?;
    let plan = planner.plan(&modules)?;

    match cli.command {
        Commands::Cutlist { out } => {
            let mut buffer = Vec::new();
            let rows = planner.write_cutlist(&plan, &mut buffer)?;
            write_output(out.as_deref(), &buffer)?;
            info!(rows, "Cut list written");
        }
        Commands::Dxf { out_dir } => {
            let count = write_dxfs(&planner, &plan, &out_dir)?;
            info!(files = count, dir = %out_dir.display(), "DXF files written");
        }
        Commands::Quote { out } => {
            let report = QuoteReport::new(planner.quote(&plan, &modules)?, modules.len());
            write_output(out.as_deref(), report.to_json()?.as_bytes())?;
        }
        Commands::Plan { out_dir } => {
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating {}", out_dir.display()))?;

            let mut cutlist = Vec::new();
            let rows = planner.write_cutlist(&plan, &mut cutlist)?;
            fs::write(out_dir.join("cutlist.csv"), cutlist)?;

            let bom = planner.bom(&plan);
            fs::write(out_dir.join("bom.json"), serde_json::to_string_pretty(&bom)?)?;
            fs::write(out_dir.join("plan.json"), serde_json::to_string_pretty(&plan)?)?;

            let report = QuoteReport::new(planner.quote(&plan, &modules)?, modules.len());
            fs::write(out_dir.join("quote.json"), report.to_json()?)?;

            let dxfs = write_dxfs(&planner, &plan, &out_dir.join("dxf"))?;
            info!(
                rows,
                dxfs,
                warnings = plan.warnings().count(),
                dir = %out_dir.display(),
                "Plan written"
            );
        }
    }

    Ok(())
}
