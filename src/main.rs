use clap::Parser;
use fsweb::config::{self, IndexMode, RenderConfig, Theme};
use fsweb::{output, walk};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fsweb")]
#[command(version)]
#[command(about = "Generate navigable index pages for a directory of HTML files")]
#[command(long_about = "\
Generate navigable index pages for a directory of HTML files

The source tree is copied to the output directory, then every directory in
the copy gets an index.html linking its subdirectories and .html files.
The source tree itself is never modified.

  site/                      fsweb_generated/
  ├── fsweb.ini              ├── index.html        (root: fsweb_generated)
  ├── intro.html     ──▶     ├── intro.html
  └── guide/                 └── guide/
      └── setup.html             ├── index.html    (guide)
                                 └── setup.html

Place an fsweb.ini in any directory to hide entries from its index.
Run 'fsweb --ini-help' to see the format.")]
struct Cli {
    /// Directory of HTML files to index
    #[arg(required_unless_present = "ini_help")]
    source: Option<PathBuf>,

    /// Output directory (deleted and recreated on every run)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Page color scheme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Center page content in a 70%-wide block
    #[arg(long)]
    wrapper: bool,

    /// Add a search widget (Shift+Space) to every page
    #[arg(long)]
    search: bool,

    /// Add a middle-click autoscroller to every page
    #[arg(long)]
    autoscroll: bool,

    /// Add breadcrumb navigation to non-root index pages
    #[arg(long)]
    breadcrumb: bool,

    /// What to do with an index.html that already exists
    #[arg(short = 'm', long, value_enum, required_unless_present = "ini_help")]
    index_mode: Option<IndexMode>,

    /// Print the fsweb.ini layout and exit
    #[arg(long)]
    ini_help: bool,

    /// Don't print the per-directory summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.ini_help {
        print!("{}", config::sidecar_layout());
        return Ok(());
    }

    let (Some(source), Some(index_mode)) = (cli.source, cli.index_mode) else {
        return Err("a source directory and --index-mode are required".into());
    };

    let render_config = RenderConfig {
        theme: cli.theme,
        wrapper: cli.wrapper,
        search: cli.search,
        autoscroll: cli.autoscroll,
        breadcrumb: cli.breadcrumb,
        index_mode,
    };
    log::debug!("{:?}", render_config);

    let report = walk::generate(&source, &cli.output, &render_config)?;

    if !cli.quiet {
        output::print_generate_output(&report, index_mode);
    }
    Ok(())
}
