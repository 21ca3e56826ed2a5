// ABOUTME: Main entry point for the termconf program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use termconf::{BuildConfig, Layout};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site from config.yml and content.md
    Build(BuildArgs),

    /// Build the site, then serve it locally
    Serve(ServeArgs),
}

#[derive(Args, Clone)]
struct BuildArgs {
    /// Site root containing config.yml and content.md
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Asset layout: 'flat' or 'template'
    #[arg(long, default_value = "flat")]
    layout: Layout,

    /// Skip PDF generation
    #[arg(long)]
    no_pdf: bool,

    /// Path to the pandoc executable
    #[arg(long)]
    pandoc: Option<String>,

    /// LaTeX engine used for the PDF
    #[arg(long)]
    pdf_engine: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct ServeArgs {
    #[command(flatten)]
    build: BuildArgs,

    /// Port for the local web server
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Serve the existing output without rebuilding
    #[arg(long)]
    no_build: bool,
}

impl BuildArgs {
    fn to_build_config(&self) -> BuildConfig {
        let mut config = BuildConfig::from_env();
        config.root = self.root.clone();
        config.layout = self.layout;
        if self.no_pdf {
            config.generate_pdf = false;
        }
        if let Some(pandoc) = &self.pandoc {
            config.pandoc_path = pandoc.clone();
        }
        if let Some(engine) = &self.pdf_engine {
            config.pdf_engine = engine.clone();
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn build(args: &BuildArgs) -> anyhow::Result<()> {
    let report = termconf::run_build(&args.to_build_config())?;

    println!(
        "Built site for {} ({} sections)",
        report.title, report.section_count
    );
    for artifact in &report.artifacts {
        println!("  {}", artifact.display());
    }
    match &report.pdf {
        Some(pdf) => println!("  {}", pdf.display()),
        None => println!("  (no PDF)"),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Build(args)) => {
            init_logging(args.verbose);
            build(args)
        }
        Some(Commands::Serve(args)) => {
            init_logging(args.build.verbose);
            let built = if args.no_build {
                Ok(())
            } else {
                build(&args.build)
            };
            built.and_then(|()| {
                termconf::serve_site(&args.build.root, args.port).map_err(anyhow::Error::from)
            })
        }
        None => {
            init_logging(cli.build.verbose);
            build(&cli.build)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
