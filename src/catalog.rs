//! Game catalogs: the fixed set of items a build order can draw from

use crate::models::GameItem;

/// A named, append-only collection of game items
#[derive(Debug, Clone)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub description: String,
    items: Vec<GameItem>,
}

impl Game {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            items: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an item. Ids are not checked for uniqueness; lookups return
    /// the first match.
    pub fn add_item(&mut self, item: GameItem) {
        self.items.push(item);
    }

    /// Find an item by id, scanning in insertion order
    pub fn find_item(&self, id: &str) -> Option<&GameItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[GameItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct item categories, sorted. Uncategorized items are not listed.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .items
            .iter()
            .filter_map(|item| item.category.as_deref())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(ids: &[&str]) -> Game {
        let mut game = Game::new("test", "Test Game");
        for id in ids {
            game.add_item(GameItem::new(*id, id.to_uppercase()));
        }
        game
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new("sc2", "StarCraft 2").with_description("RTS");
        assert_eq!(game.id, "sc2");
        assert_eq!(game.description, "RTS");
        assert!(game.is_empty());
    }

    #[test]
    fn test_find_item() {
        let game = game_with(&["x", "y"]);
        assert_eq!(game.find_item("x").map(|i| i.name.as_str()), Some("X"));
        assert!(game.find_item("z").is_none());
    }

    #[test]
    fn test_find_item_returns_same_reference() {
        let game = game_with(&["x"]);
        let a = game.find_item("x").unwrap();
        let b = game.find_item("x").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let mut game = Game::new("dup", "Dup");
        game.add_item(GameItem::new("a", "First"));
        game.add_item(GameItem::new("a", "Second"));
        assert_eq!(game.len(), 2);
        assert_eq!(game.find_item("a").unwrap().name, "First");
    }

    #[test]
    fn test_categories_sorted_and_deduped() {
        let mut game = Game::new("g", "G");
        game.add_item(GameItem::new("a", "A").with_category("Worker"));
        game.add_item(GameItem::new("b", "B").with_category("Structure"));
        game.add_item(GameItem::new("c", "C").with_category("Worker"));
        game.add_item(GameItem::new("d", "D"));
        assert_eq!(game.categories(), vec!["Structure", "Worker"]);
    }
}
