use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tutor_landing::logging::{self, LogFormat};
use tutor_landing::sections::RenderContext;
use tutor_landing::source::FileSource;
use tutor_landing::{config, generate, output};

#[derive(Parser)]
#[command(name = "tutor-landing")]
#[command(about = "Static generator for a language tutor's landing page")]
#[command(long_about = "\
Static generator for a language tutor's landing page

One JSON document describes the whole page. The generator renders it into
index.html with a stylesheet and a small behaviour script (photo carousel,
scroll-aware navbar, mobile menu).

Site layout:

  site/
  ├── data.json        # Page content: hero, tutor, courses, testimonials,
  │                    #   contact, social, footer
  ├── config.toml      # Site config (optional)
  └── assets/          # Copied verbatim to the output root (photos, favicon)

If data.json cannot be read or does not match the expected shape, the page
is still written, showing an apology instead of the sections, and the
command exits non-zero.

Run 'tutor-landing gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content document
    #[arg(long, default_value = "data.json", global = true)]
    content: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Config file (default: config.toml next to the content document)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and write the site
    Build,
    /// Load and render in memory, without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.verbose);

    let success = match cli.command {
        Command::Build => {
            let site_config = generate::resolve_site_config(&cli.content, cli.config.as_deref())?;
            println!("==> Building {} → {}", cli.content.display(), cli.output.display());
            let report = generate::generate(
                &cli.content,
                &cli.output,
                &site_config,
                &RenderContext::now(),
            )?;
            output::print_build_output(&report);
            report.outcome.is_success()
        }
        Command::Check => {
            let site_config = generate::resolve_site_config(&cli.content, cli.config.as_deref())?;
            println!("==> Checking {}", cli.content.display());
            let source = FileSource::new(&cli.content);
            let (result, _) = generate::render_site(&source, &site_config, &RenderContext::now());
            output::print_check_output(&result);
            result.outcome.is_success()
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            true
        }
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
