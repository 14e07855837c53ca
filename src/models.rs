//! Data models for game items and their costs

use serde::{Deserialize, Serialize};

/// A named amount of something an item costs (minerals, gas, production...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub amount: f64,
}

impl Resource {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// A single buildable unit, structure, research or move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub build_time_s: f64,
    #[serde(default)]
    pub costs: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GameItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            build_time_s: 0.0,
            costs: Vec::new(),
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Negative times are clamped to zero.
    pub fn with_build_time(mut self, seconds: f64) -> Self {
        self.build_time_s = seconds.max(0.0);
        self
    }

    /// Appends a cost; call repeatedly for multi-resource items.
    pub fn with_cost(mut self, resource: Resource) -> Self {
        self.costs.push(resource);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Costs rendered as "100 Minerals, 25 Gas"
    pub fn cost_label(&self) -> String {
        self.costs
            .iter()
            .map(|c| format!("{} {}", c.amount, c.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_equality_is_by_value() {
        assert_eq!(Resource::new("Minerals", 50.0), Resource::new("Minerals", 50.0));
        assert_ne!(Resource::new("Minerals", 50.0), Resource::new("Gas", 50.0));
    }

    #[test]
    fn test_game_item_defaults() {
        let item = GameItem::new("scv", "SCV");
        assert_eq!(item.id, "scv");
        assert_eq!(item.name, "SCV");
        assert!(item.category.is_none());
        assert!(item.description.is_none());
        assert_eq!(item.build_time_s, 0.0);
        assert!(item.costs.is_empty());
    }

    #[test]
    fn test_game_item_builder_accumulates_costs() {
        let item = GameItem::new("marauder", "Marauder")
            .with_category("Infantry")
            .with_build_time(21.0)
            .with_cost(Resource::new("Minerals", 100.0))
            .with_cost(Resource::new("Gas", 25.0))
            .with_description("Armored Terran infantry unit");

        assert_eq!(item.category.as_deref(), Some("Infantry"));
        assert_eq!(item.build_time_s, 21.0);
        assert_eq!(item.costs.len(), 2);
        assert_eq!(item.costs[1].name, "Gas");
        assert_eq!(item.cost_label(), "100 Minerals, 25 Gas");
    }

    #[test]
    fn test_game_item_json() {
        let item = GameItem::new("marauder", "Marauder")
            .with_build_time(21.0)
            .with_cost(Resource::new("Gas", 25.0));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "marauder");
        assert_eq!(json["costs"][0]["name"], "Gas");
        assert!(json.get("category").is_none());

        let parsed: GameItem = serde_json::from_str(r#"{"id": "scv", "name": "SCV"}"#).unwrap();
        assert_eq!(parsed, GameItem::new("scv", "SCV"));
        assert_eq!(serde_json::from_value::<GameItem>(json).unwrap(), item);
    }

    #[test]
    fn test_negative_build_time_clamped() {
        let item = GameItem::new("x", "X").with_build_time(-3.0);
        assert_eq!(item.build_time_s, 0.0);
    }
}
