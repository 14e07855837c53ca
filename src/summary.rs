//! Text rendering and aggregation for catalogs and build orders

use std::fmt;

use serde::Serialize;

use crate::build_order::BuildOrder;
use crate::catalog::Game;
use crate::models::GameItem;

/// Aggregated totals for a build order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildOrderSummary {
    pub name: String,
    pub step_count: usize,
    pub total_build_time_s: f64,
    /// (resource name, total amount), in order of first appearance
    pub cost_totals: Vec<(String, f64)>,
    /// (item name, times queued), in order of first appearance
    pub item_counts: Vec<(String, usize)>,
}

impl BuildOrderSummary {
    pub fn from_build_order(order: &BuildOrder<'_>) -> Self {
        let mut cost_totals: Vec<(String, f64)> = Vec::new();
        let mut item_counts: Vec<(String, usize)> = Vec::new();
        let mut seen_items: Vec<&str> = Vec::new();

        for step in order.steps() {
            let item = step.item();

            match seen_items.iter().position(|id| *id == item.id) {
                Some(i) => item_counts[i].1 += 1,
                None => {
                    seen_items.push(&item.id);
                    item_counts.push((item.name.clone(), 1));
                }
            }

            for cost in &item.costs {
                match cost_totals.iter_mut().find(|(name, _)| *name == cost.name) {
                    Some((_, total)) => *total += cost.amount,
                    None => cost_totals.push((cost.name.clone(), cost.amount)),
                }
            }
        }

        Self {
            name: order.name().to_string(),
            step_count: order.len(),
            total_build_time_s: order.total_build_time(),
            cost_totals,
            item_counts,
        }
    }
}

impl fmt::Display for BuildOrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Build Order Summary ===")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Steps: {}", self.step_count)?;
        writeln!(f, "Total build time: {:.1}s", self.total_build_time_s)?;
        writeln!(f)?;

        writeln!(f, "Items queued:")?;
        for (name, count) in &self.item_counts {
            writeln!(f, "  {}x {}", count, name)?;
        }

        if !self.cost_totals.is_empty() {
            writeln!(f)?;
            writeln!(f, "Total cost:")?;
            for (name, amount) in &self.cost_totals {
                writeln!(f, "  {} {}", amount, name)?;
            }
        }

        Ok(())
    }
}

/// A build order together with its totals, as written by `--json`
#[derive(Debug, Serialize)]
pub struct BuildOrderReport<'a, 'g> {
    pub game: &'a str,
    pub build_order: &'a BuildOrder<'g>,
    pub summary: BuildOrderSummary,
}

impl<'a, 'g> BuildOrderReport<'a, 'g> {
    pub fn new(game: &'a Game, order: &'a BuildOrder<'g>) -> Self {
        Self {
            game: &game.id,
            build_order: order,
            summary: BuildOrderSummary::from_build_order(order),
        }
    }
}

/// Format the steps of a build order, one per line
pub fn format_build_order(order: &BuildOrder<'_>) -> String {
    if order.is_empty() {
        return "  (empty)\n".to_string();
    }

    let mut output = String::new();
    for step in order.steps() {
        output.push_str(&format!("  {}. {}", step.step_number(), step.item().name));
        if let Some(notes) = step.notes() {
            output.push_str(&format!(" - {}", notes));
        }
        output.push('\n');
    }
    output
}

/// Format a whole catalog grouped by category
pub fn format_game(game: &Game) -> String {
    let mut output = String::new();
    output.push_str(&format!("=== {} ===\n", game.name));
    if !game.description.is_empty() {
        output.push_str(&format!("{}\n", game.description));
    }
    output.push_str(&format!("\nAvailable items ({} total):\n", game.len()));

    for category in game.categories() {
        output.push_str(&format!("\n  [{}]\n", category));
        for item in game
            .items()
            .iter()
            .filter(|i| i.category.as_deref() == Some(category))
        {
            output.push_str(&format_item(item, 4));
        }
    }

    let uncategorized: Vec<&GameItem> = game.items().iter().filter(|i| i.category.is_none()).collect();
    if !uncategorized.is_empty() {
        output.push_str("\n  [Uncategorized]\n");
        for item in uncategorized {
            output.push_str(&format_item(item, 4));
        }
    }

    output
}

/// Format a single item with its details
pub fn format_item(item: &GameItem, indent: usize) -> String {
    let prefix = " ".repeat(indent);
    let mut output = format!("{}{} ({})\n", prefix, item.name, item.id);

    if let Some(description) = &item.description {
        output.push_str(&format!("{}  {}\n", prefix, description));
    }
    if item.build_time_s > 0.0 {
        output.push_str(&format!("{}  Build time: {}s\n", prefix, item.build_time_s));
    }
    if !item.costs.is_empty() {
        output.push_str(&format!("{}  Cost: {}\n", prefix, item.cost_label()));
    }
    output
}
