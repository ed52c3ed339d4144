mod report;
mod site;

use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tierlist_core::{RouteParams, TierListData, enumerate_routes};
use tierlist_web::shell::ShellConfig;

use report::{generate_console_report, generate_json_report};
use site::{NOT_FOUND_FILE, SiteBuilder};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary on stdout
    Console,
    /// Machine-readable build report
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "tierlist-builder", version)]
#[command(about = "Pre-render every tier list version into a static site")]
struct Args {
    /// Directory the site is written to
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,

    /// Global stylesheet linked from every page, relative to the site root
    #[arg(long, default_value = "static/tailwind.css")]
    stylesheet: String,

    /// ES module that hydrates pages in the browser, relative to the site root
    #[arg(long)]
    client_script: Option<String>,

    /// Print the routes that would be generated and exit
    #[arg(long)]
    list_routes: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the route list or JSON report instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let data = TierListData::bundled().context("failed to load the bundled tier list data")?;
    warn_unrecognized_tiers(data);
    let routes = enumerate_routes(data);

    if args.list_routes {
        let mut output_target = OutputTarget::new(args.output.clone())?;
        write_route_list(&mut output_target, &routes)?;
        output_target.flush()?;
        return Ok(());
    }

    announce_banner();

    let shell = ShellConfig {
        stylesheet: args.stylesheet.clone(),
        client_script: args.client_script.clone(),
        ..ShellConfig::default()
    };
    let builder = SiteBuilder::new(Rc::new(data.clone()), shell, &args.out_dir);
    let build_report = builder.build(&routes).await?;

    match args.report {
        ReportFormat::Console => generate_console_report(&build_report),
        ReportFormat::Json => {
            let mut output_target = OutputTarget::new(args.output.clone())?;
            generate_json_report(&build_report, &mut output_target)?;
            output_target.flush()?;
        }
    }

    if !build_report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn warn_unrecognized_tiers(data: &TierListData) {
    for (version, tier) in data.unrecognized_tiers() {
        log::warn!("version {version} uses tier {tier:?} which has no color; using the fallback");
    }
}

fn announce_banner() {
    println!("{}", "🏆 Tier List Static Builder".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}

fn write_route_list(out: &mut dyn Write, routes: &[RouteParams]) -> Result<()> {
    writeln!(out, "Available routes:")?;
    for route in routes {
        let label = route.version.as_deref().unwrap_or("latest");
        writeln!(out, "  {:20} {:12} -> {}", route.path(), label, route.output_path())?;
    }
    writeln!(out, "  {:20} {:12} -> {NOT_FOUND_FILE}", "(unmatched)", "not found")?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}
