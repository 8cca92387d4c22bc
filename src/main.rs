use anyhow::{Context, Result};
use cli::{Cli, Commands, RenderArgs};
use pdf_quickref::canvas::PdfCanvas;
use pdf_quickref::layout::LayoutEngine;
use pdf_quickref::sheet::Sheet;
use pdf_quickref::SheetConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        Commands::Config => {
            let config = toml::to_string(&SheetConfig::default())
                .with_context(|| "Failed to serialize the default configuration")?;
            print!("{config}");
            Ok(())
        }
        Commands::Render(args) => {
            init_logging(args.verbose);
            render(args)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render(args: &RenderArgs) -> Result<()> {
    let sheet = Sheet::load(&args.content)
        .with_context(|| format!("Failed to load sheet from {}", args.content.display()))?;

    let config = match &args.config {
        Some(path) => SheetConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SheetConfig::default(),
    };
    let grid = config
        .grid()
        .with_context(|| "The configured page geometry leaves no room for content")?;

    let outfile = args
        .out
        .clone()
        .or_else(|| config.outfile.clone())
        .unwrap_or_else(|| default_outfile(&args.content));

    tracing::info!(
        paper = %config.paper,
        landscape = config.landscape,
        columns = grid.columns(),
        pages = sheet.pages.len(),
        "laying out sheet"
    );
    let mut canvas = PdfCanvas::new(config.page_size());
    canvas.set_info(sheet.info());
    let mut engine = LayoutEngine::new(canvas, grid, config.layout_options());
    sheet.render(&mut engine);

    engine
        .finish()
        .save(&outfile)
        .with_context(|| format!("Failed to write PDF to {}", outfile.display()))?;

    println!("Generated: {}", outfile.display());
    Ok(())
}

/// `notes/rust.toml` becomes `notes/rust_QuickRef.pdf`
fn default_outfile(content: &Path) -> PathBuf {
    let stem = content
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet".to_string());
    content.with_file_name(format!("{stem}_QuickRef.pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_next_to_the_content() {
        assert_eq!(
            default_outfile(Path::new("notes/rust.toml")),
            PathBuf::from("notes/rust_QuickRef.pdf")
        );
        assert_eq!(
            default_outfile(Path::new("SystemDesign.toml")),
            PathBuf::from("SystemDesign_QuickRef.pdf")
        );
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
