use clap::{ArgGroup, Parser};
use color_eyre::eyre::{Context, Result};
use mugshot_lib::{HtmlOptions, SiteConfig, about_page, as_html};
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line interface for the mugshot about-page renderer.
#[derive(Parser)]
#[command(name = "mug", about = "Personal about-page renderer", version)]
#[command(group = ArgGroup::new("output-mode")
    .args(["out", "show", "model"])
    .multiple(false))]
struct Cli {
    /// Write the rendered document to a file instead of stdout
    #[arg(long, value_name = "FILE", group = "output-mode")]
    out: Option<PathBuf>,

    /// Render to a temporary file and open it in the default browser
    #[arg(long, group = "output-mode")]
    show: bool,

    /// Print the page model as JSON instead of rendering HTML
    #[arg(long, group = "output-mode")]
    model: bool,

    /// Omit the embedded stylesheet
    #[arg(long)]
    no_styles: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "info,mug=info,mugshot_lib=info".to_string(),
            2 => "info,mug=debug,mugshot_lib=debug".to_string(),
            _ => "debug,mug=trace,mugshot_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configuration snapshot, taken once at startup.
    let config = SiteConfig::from_env();
    let page = about_page(&config);

    if cli.model {
        println!("{}", page.to_json()?);
        return Ok(());
    }

    let mut options = HtmlOptions::default();
    options.include_styles = !cli.no_styles;
    let html = as_html(&page, options);

    if let Some(ref path) = cli.out {
        std::fs::write(path, &html).wrap_err_with(|| format!("Failed to write to {path:?}"))?;
        eprintln!("Wrote {path:?}");
        return Ok(());
    }

    if cli.show {
        let path = std::env::temp_dir().join("mugshot-about.html");
        std::fs::write(&path, &html).wrap_err_with(|| format!("Failed to write to {path:?}"))?;
        open::that(&path).wrap_err("Failed to open browser")?;
        eprintln!("Opened {path:?}");
        return Ok(());
    }

    print!("{html}");
    Ok(())
}
