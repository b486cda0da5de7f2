use std::path::PathBuf;

use clap::Parser;

/// Drag-and-drop tree editor demo.
#[derive(Parser, Debug)]
#[command(name = "dndtree")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// JSON file holding a flat array of records
    pub(crate) items: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/dndtree/settings.json)
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,

    /// Expand to, select and scroll to this node on launch
    #[arg(long)]
    pub(crate) node: Option<String>,
}
