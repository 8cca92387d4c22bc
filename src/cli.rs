use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// The sheet content to render, a TOML file of pages and blocks
    pub content: PathBuf,

    /// Layout and colour settings; defaults are used for anything not given
    #[clap(short, long, env = "PDF_QUICKREF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write the PDF [default: <CONTENT>_QuickRef.pdf next to the content]
    #[clap(short, long)]
    pub out: Option<PathBuf>,

    /// Log more about what the layout is doing (-v for info, -vv for debug)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the default configuration as TOML
    Config,
    /// Renders a sheet into a PDF
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
