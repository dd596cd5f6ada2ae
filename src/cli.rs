use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::DEFAULT_SWITCH_DRINK;
use crate::menu::SortMode;
use crate::planner::constants::{
    DEFAULT_ADOPTION_PERCENT, DEFAULT_BUDGET_CUPS, DEFAULT_BUDGET_WEEKS, DEFAULT_MAX_PRICE,
    DEFAULT_SUSTAIN_CUPS, DEFAULT_SUSTAIN_WEEKS,
};

/// Byte-Sized Café — browse the menu, build a drink, plan your coffee habit.
#[derive(Parser, Debug)]
#[command(name = "cafe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a catalog JSON file (defaults to the house menu).
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show menu headline figures.
    #[default]
    Summary,

    /// Filter and sort the drink menu.
    Menu {
        /// Case-insensitive part of the drink name.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Maximum price (inclusive).
        #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
        max_price: f64,

        /// Only show lighter options (150 kcal or less).
        #[arg(long)]
        lighter: bool,

        #[arg(long, value_enum, default_value_t = SortMode::Recommended)]
        sort: SortMode,

        /// Also write the view to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the add-ins.
    AddIns,

    /// Total up a base drink with add-ins. Prompts when no base is given.
    Build {
        #[arg(short, long)]
        base: Option<String>,

        /// Add-in name; repeat for several.
        #[arg(short, long = "add")]
        add: Vec<String>,
    },

    /// Project coffee spend and what-if savings.
    Budget {
        #[arg(long, default_value_t = DEFAULT_BUDGET_CUPS)]
        cups: u32,

        /// Average price per cup (defaults to the menu average).
        #[arg(long)]
        avg_price: Option<f64>,

        #[arg(long, default_value_t = DEFAULT_BUDGET_WEEKS)]
        weeks: u32,

        /// Drink to switch two cups a week to.
        #[arg(long, default_value = DEFAULT_SWITCH_DRINK)]
        switch_to: String,
    },

    /// Project disposable cups avoided with a reusable cup.
    Sustainability {
        #[arg(long, default_value_t = DEFAULT_SUSTAIN_CUPS)]
        cups: u32,

        /// Reusable cup adoption, in percent.
        #[arg(long, default_value_t = DEFAULT_ADOPTION_PERCENT)]
        adoption: u8,

        #[arg(long, default_value_t = DEFAULT_SUSTAIN_WEEKS)]
        weeks: u32,
    },

    /// Catalog file operations.
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Write the active catalog as JSON.
    Export { path: PathBuf },
}
