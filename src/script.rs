//! Textual plan operations applied to a build order
//!
//! The CLI drives a build order with a list of operations such as
//! `add:scv move:0:2 remove:1`. Indices are 0-based, the same as
//! [`BuildOrder`]'s own methods.

use std::str::FromStr;

use serde::Serialize;

use crate::build_order::BuildOrder;
use crate::catalog::Game;
use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum PlanOp {
    /// `add:ID`
    Add(String),
    /// `note:IDX:TEXT`
    Note(usize, String),
    /// `remove:IDX`
    Remove(usize),
    /// `move:FROM:TO`
    Move(usize, usize),
    /// `clear`
    Clear,
    /// `name:TEXT`
    Rename(String),
}

fn parse_index(op: &str, raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| PlannerError::InvalidOperation {
        op: op.to_string(),
        reason: format!("'{}' is not a step index", raw),
    })
}

impl FromStr for PlanOp {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| PlannerError::InvalidOperation {
            op: s.to_string(),
            reason: reason.to_string(),
        };

        let (verb, rest) = match s.split_once(':') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (s, None),
        };

        match (verb.trim().to_ascii_lowercase().as_str(), rest) {
            ("add", Some(id)) if !id.trim().is_empty() => Ok(PlanOp::Add(id.trim().to_string())),
            ("add", _) => Err(invalid("expected add:ID")),
            ("remove", Some(index)) => Ok(PlanOp::Remove(parse_index(s, index)?)),
            ("remove", None) => Err(invalid("expected remove:IDX")),
            ("move", Some(args)) => {
                let (from, to) = args.split_once(':').ok_or_else(|| invalid("expected move:FROM:TO"))?;
                Ok(PlanOp::Move(parse_index(s, from)?, parse_index(s, to)?))
            }
            ("move", None) => Err(invalid("expected move:FROM:TO")),
            ("note", Some(args)) => {
                let (index, text) = args.split_once(':').ok_or_else(|| invalid("expected note:IDX:TEXT"))?;
                Ok(PlanOp::Note(parse_index(s, index)?, text.to_string()))
            }
            ("note", None) => Err(invalid("expected note:IDX:TEXT")),
            ("name", Some(name)) => Ok(PlanOp::Rename(name.to_string())),
            ("name", None) => Err(invalid("expected name:TEXT")),
            ("clear", None) => Ok(PlanOp::Clear),
            ("clear", Some(_)) => Err(invalid("clear takes no arguments")),
            _ => Err(invalid("unknown operation (add, note, remove, move, clear, name)")),
        }
    }
}

/// What happened while applying a batch of operations
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ApplyReport {
    pub applied: usize,
    /// Index operations that pointed outside the build order
    pub ignored: usize,
    /// Item ids that were not in the catalog
    pub missing_items: Vec<String>,
}

/// Apply `ops` to `order` in sequence, resolving item ids against `game`.
///
/// Unknown item ids are skipped with a warning. When `strict` is set every
/// `add` id is resolved first, and an unknown one fails the call before
/// `order` is touched. Out-of-range indices never fail; they are counted in
/// [`ApplyReport::ignored`].
pub fn apply_ops<'g>(
    order: &mut BuildOrder<'g>,
    game: &'g Game,
    ops: &[PlanOp],
    strict: bool,
) -> Result<ApplyReport> {
    if strict {
        let missing = ops.iter().find_map(|op| match op {
            PlanOp::Add(id) if game.find_item(id).is_none() => Some(id),
            _ => None,
        });
        if let Some(id) = missing {
            return Err(PlannerError::ItemNotFound {
                game: game.id.clone(),
                id: id.clone(),
            });
        }
    }

    let mut report = ApplyReport::default();

    for op in ops {
        let applied = match op {
            PlanOp::Add(id) => match game.find_item(id) {
                Some(item) => {
                    order.add_step(item);
                    true
                }
                None => {
                    tracing::warn!("Item '{}' not found in {}, skipping", id, game.name);
                    report.missing_items.push(id.clone());
                    continue;
                }
            },
            PlanOp::Note(index, text) => order.set_notes(*index, text.as_str()),
            PlanOp::Remove(index) => order.remove_step(*index),
            PlanOp::Move(from, to) => order.move_step(*from, *to),
            PlanOp::Clear => {
                order.clear();
                true
            }
            PlanOp::Rename(name) => {
                order.set_name(name.as_str());
                true
            }
        };

        if applied {
            tracing::debug!(?op, steps = order.len(), "applied");
            report.applied += 1;
        } else {
            tracing::info!(?op, steps = order.len(), "operation had no effect");
            report.ignored += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameItem;

    fn game() -> Game {
        let mut game = Game::new("t", "Test");
        for id in ["a", "b", "c"] {
            game.add_item(GameItem::new(id, id.to_uppercase()));
        }
        game
    }

    fn parse_all(ops: &[&str]) -> Vec<PlanOp> {
        ops.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!("add:scv".parse::<PlanOp>().unwrap(), PlanOp::Add("scv".into()));
        assert_eq!("remove:3".parse::<PlanOp>().unwrap(), PlanOp::Remove(3));
        assert_eq!("move:0:2".parse::<PlanOp>().unwrap(), PlanOp::Move(0, 2));
        assert_eq!("MOVE: 1 : 0".parse::<PlanOp>().unwrap(), PlanOp::Move(1, 0));
        assert_eq!("clear".parse::<PlanOp>().unwrap(), PlanOp::Clear);
        assert_eq!(
            "note:1:wall off: ramp".parse::<PlanOp>().unwrap(),
            PlanOp::Note(1, "wall off: ramp".into())
        );
        assert_eq!("name:".parse::<PlanOp>().unwrap(), PlanOp::Rename(String::new()));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["add", "add:", "remove:x", "remove:-1", "move:1", "move:a:b", "clear:1", "jump:2", ""] {
            let err = bad.parse::<PlanOp>().unwrap_err();
            assert!(
                matches!(err, PlannerError::InvalidOperation { .. }),
                "expected InvalidOperation for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_apply_ops_sequence() {
        let game = game();
        let mut order = BuildOrder::new("plan");
        let ops = parse_all(&["add:a", "add:b", "add:c", "add:a", "move:0:2", "remove:3", "name:Rush"]);

        let report = apply_ops(&mut order, &game, &ops, false).unwrap();

        let ids: Vec<&str> = order.steps().iter().map(|s| s.item().id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
        assert_eq!(order.name(), "Rush");
        assert_eq!(report.applied, 7);
        assert_eq!(report.ignored, 0);
    }

    #[test]
    fn test_apply_ops_counts_ignored_and_missing() {
        let game = game();
        let mut order = BuildOrder::new("plan");
        let ops = parse_all(&["add:a", "add:zzz", "remove:9", "move:0:0", "note:4:x"]);

        let report = apply_ops(&mut order, &game, &ops, false).unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(report.applied, 1);
        assert_eq!(report.ignored, 3);
        assert_eq!(report.missing_items, vec!["zzz".to_string()]);
    }

    #[test]
    fn test_apply_ops_strict_fails_on_missing_item() {
        let game = game();
        let mut order = BuildOrder::new("plan");
        let ops = parse_all(&["add:a", "add:zzz"]);

        let err = apply_ops(&mut order, &game, &ops, true).unwrap_err();
        assert!(matches!(err, PlannerError::ItemNotFound { ref id, .. } if id == "zzz"));
    }

    #[test]
    fn test_apply_ops_strict_leaves_order_untouched_on_failure() {
        let game = game();
        let mut order = BuildOrder::new("plan");
        order.add_step(game.find_item("c").unwrap());

        let ops = parse_all(&["add:a", "remove:0", "name:Changed", "clear", "add:zzz", "add:b"]);
        assert!(apply_ops(&mut order, &game, &ops, true).is_err());

        assert_eq!(order.name(), "plan");
        assert_eq!(order.len(), 1);
        assert_eq!(order.steps()[0].item().id, "c");
        assert_eq!(order.steps()[0].step_number(), 1);
    }
}
