use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use byte_sized_cafe::catalog::{load_catalog, save_catalog, Catalog};
use byte_sized_cafe::cli::{CatalogCommand, Cli, Command};
use byte_sized_cafe::error::{CafeError, Result};
use byte_sized_cafe::interface::{
    display_add_ins, display_budget, display_menu, display_summary, display_sustainability,
    display_totals, prompt_add_ins, prompt_base_drink, suggest_names, write_menu_csv,
};
use byte_sized_cafe::menu::{filter_and_sort, FilterCriteria};
use byte_sized_cafe::order::compose_order;
use byte_sized_cafe::planner::{plan_budget_switching_to, plan_sustainability};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin()?,
    };
    info!(drinks = catalog.drinks().len(), "Catalog ready");

    match cli.command.unwrap_or_default() {
        Command::Summary => {
            display_summary(&catalog.summary());
            Ok(())
        }
        Command::Menu {
            search,
            max_price,
            lighter,
            sort,
            csv,
        } => {
            let criteria = FilterCriteria {
                search,
                max_price,
                lighter_only: lighter,
                sort_mode: sort,
            };
            cmd_menu(&catalog, &criteria, csv.as_deref())
        }
        Command::AddIns => {
            display_add_ins(catalog.add_ins());
            Ok(())
        }
        Command::Build { base, add } => cmd_build(&catalog, base, add),
        Command::Budget {
            cups,
            avg_price,
            weeks,
            switch_to,
        } => {
            let avg_price = avg_price.unwrap_or_else(|| catalog.avg_price());
            let plan = plan_budget_switching_to(&catalog, cups, avg_price, weeks, &switch_to)?;
            display_budget(&plan, weeks, Some(switch_to.as_str()));
            Ok(())
        }
        Command::Sustainability {
            cups,
            adoption,
            weeks,
        } => {
            let plan = plan_sustainability(cups, adoption as f64 / 100.0, weeks)?;
            display_sustainability(&plan);
            Ok(())
        }
        Command::Catalog(CatalogCommand::Export { path }) => {
            save_catalog(&path, &catalog)?;
            println!("Catalog written to {}", path.display());
            Ok(())
        }
    }
}

fn cmd_menu(catalog: &Catalog, criteria: &FilterCriteria, csv: Option<&Path>) -> Result<()> {
    let view = filter_and_sort(catalog, criteria);
    display_menu(&view, criteria.sort_mode.label());

    if let Some(path) = csv {
        write_menu_csv(&view, path)?;
        println!("Wrote {} drinks to {}", view.len(), path.display());
    }

    Ok(())
}

fn cmd_build(catalog: &Catalog, base: Option<String>, add: Vec<String>) -> Result<()> {
    let (base, add) = match base {
        Some(base) => (base, add),
        None => {
            println!("Customize your drink");
            (prompt_base_drink(catalog)?, prompt_add_ins(catalog)?)
        }
    };

    let totals = compose_order(catalog, &base, add.as_slice()).inspect_err(|e| {
        if let CafeError::NotFound { kind, name } = e {
            let suggestions = suggest_names(catalog, *kind, name);
            if !suggestions.is_empty() {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
        }
    })?;

    display_totals(&catalog.drink(&base)?.name, &add, &totals);
    println!("Tip: screenshot this card for your order.");
    Ok(())
}
