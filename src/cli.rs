use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_value_name = "SUBCOMMAND")]
#[command(subcommand_help_heading = "Subcommands")]
pub struct Cli {
    /// Path to config file (default: the built-in café catalog).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Sub,
}

#[derive(Subcommand)]
pub enum Sub {
    /// Compute the gallery layout for a viewport.
    Layout {
        /// Viewport width in logical pixels, used to pick the column count.
        #[arg(long)]
        viewport_width: f64,
        /// Gallery container width (default: the viewport width).
        #[arg(long)]
        container_width: Option<f64>,
        /// Print the layout as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Validate the config file.
    Validate,
    /// Resize the gallery through a sequence of widths and print every re-flow.
    Simulate {
        /// Comma-separated viewport widths; the container follows the viewport.
        #[arg(long, value_delimiter = ',', required = true)]
        widths: Vec<f64>,
    },
    /// Open the lightbox on an item and print what it shows.
    Show {
        /// Viewport width in logical pixels.
        #[arg(long, default_value_t = 1280.)]
        viewport_width: f64,
        /// Index of the item in the catalog.
        #[arg(long)]
        index: usize,
    },
}
