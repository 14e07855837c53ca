//! Game Planner
//!
//! Browse game catalogs and assemble build orders from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gameplanner::script::{self, ApplyReport, PlanOp};
use gameplanner::summary::{self, BuildOrderReport, BuildOrderSummary};
use gameplanner::{BuildOrder, Game, PlannerError, db, samples};

#[derive(Parser)]
#[command(name = "gameplanner")]
#[command(about = "Build order planner for strategy game catalogs")]
struct Cli {
    /// Path to the SQLite catalog database
    #[arg(short, long, env = "GAMEPLANNER_DB", default_value = "gameplanner.db")]
    database: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize empty database with schema
    Init,

    /// Load the bundled sample catalogs (StarCraft 2, Hearts of Iron IV, Chess)
    LoadSample {
        /// Keep catalogs that are already stored
        #[arg(long)]
        keep: bool,
    },

    /// List all games in the database
    ListGames,

    /// List every item of a game, grouped by category
    ListItems {
        /// Game ID (e.g., "sc2")
        game: String,
    },

    /// Show details for a specific item
    Item {
        /// Game ID
        game: String,
        /// Item ID
        id: String,
    },

    /// Show the demo build orders for a sample game
    Sample {
        /// Game ID
        game: String,

        /// Print the build orders as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assemble a build order from a list of operations
    ///
    /// Operations run in order: add:ID, note:IDX:TEXT, remove:IDX,
    /// move:FROM:TO, clear, name:TEXT. Indices are 0-based.
    Plan {
        /// Game ID
        game: String,

        /// Build order name
        #[arg(short, long, default_value = "New Build Order")]
        name: String,

        /// Fail on unknown item ids instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Print the build order as JSON
        #[arg(long)]
        json: bool,

        /// Operations to apply
        #[arg(required = true)]
        ops: Vec<PlanOp>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut conn = Connection::open(&cli.database)
        .with_context(|| format!("Failed to open database {}", cli.database.display()))?;
    db::init_schema(&conn)?;

    match cli.command {
        Commands::Init => {
            println!("Database initialized at: {}", cli.database.display());
        }

        Commands::LoadSample { keep } => {
            if !keep {
                db::clear_catalog(&conn)?;
            }
            let games = samples::all_games();
            for game in &games {
                db::upsert_game(&mut conn, game)?;
                tracing::info!("Loaded {} ({} items)", game.name, game.len());
            }
            println!("Loaded {} sample games", games.len());
        }

        Commands::ListGames => {
            let games = db::list_games(&conn)?;
            if games.is_empty() {
                println!("No games in database. Run 'load-sample' first.");
            } else {
                println!("{:<10} {:<24} {:>6}", "ID", "Game", "Items");
                println!("{}", "-".repeat(42));
                for g in games {
                    println!("{:<10} {:<24} {:>6}", g.id, g.name, g.item_count);
                }
            }
        }

        Commands::ListItems { game } => {
            let game = require_game(&conn, &game)?;
            print!("{}", summary::format_game(&game));
        }

        Commands::Item { game, id } => {
            let game = require_game(&conn, &game)?;
            let item = game.find_item(&id).ok_or_else(|| PlannerError::ItemNotFound {
                game: game.id.clone(),
                id: id.clone(),
            })?;
            println!("Item: {}", item.name);
            println!("  ID: {}", item.id);
            if let Some(category) = &item.category {
                println!("  Category: {}", category);
            }
            println!("  Build time: {}s", item.build_time_s);
            if !item.costs.is_empty() {
                println!("  Cost: {}", item.cost_label());
            }
            if let Some(description) = &item.description {
                println!("  {}", description);
            }
        }

        Commands::Sample { game, json } => {
            let game = require_game(&conn, &game)?;
            let openings = samples::sample_openings(&game.id);
            if openings.is_empty() {
                tracing::warn!("No sample build orders for {}", game.name);
            }

            let mut orders = Vec::with_capacity(openings.len());
            for opening in openings {
                let mut order = BuildOrder::new(opening.name);
                for id in opening.item_ids {
                    match game.find_item(id) {
                        Some(item) => order.add_step(item),
                        None => tracing::warn!("Sample item '{}' not in {} catalog, skipping", id, game.name),
                    }
                }
                orders.push(order);
            }

            if json {
                let reports: Vec<_> = orders.iter().map(|order| BuildOrderReport::new(&game, order)).collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for (i, order) in orders.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print_build_order(&game, order);
                }
            }
        }

        Commands::Plan {
            game,
            name,
            strict,
            json,
            ops,
        } => {
            let game = require_game(&conn, &game)?;
            let mut order = BuildOrder::new(name);
            let report = script::apply_ops(&mut order, &game, &ops, strict)?;

            if json {
                let output = PlanOutput {
                    report: BuildOrderReport::new(&game, &order),
                    operations: &report,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            print_build_order(&game, &order);
            if !report.missing_items.is_empty() {
                println!("\nSkipped unknown items: {}", report.missing_items.join(", "));
            }
            if report.ignored > 0 {
                println!("{} operation(s) had no effect", report.ignored);
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct PlanOutput<'a, 'g> {
    #[serde(flatten)]
    report: BuildOrderReport<'a, 'g>,
    operations: &'a ApplyReport,
}

fn require_game(conn: &Connection, id: &str) -> Result<Game> {
    let game = db::load_game(conn, id)?.ok_or_else(|| PlannerError::GameNotFound { id: id.to_string() })?;
    Ok(game)
}

fn print_build_order(game: &Game, order: &BuildOrder<'_>) {
    println!("{} - {}\n", game.name, order.name());
    print!("{}", summary::format_build_order(order));
    println!();
    print!("{}", BuildOrderSummary::from_build_order(order));
}
