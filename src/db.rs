//! SQLite storage for game catalogs
//!
//! Only reference data lives here. Build orders are assembled in memory and
//! never written back.

use rusqlite::{Connection, OptionalExtension, params};

use crate::catalog::Game;
use crate::error::Result;
use crate::models::{GameItem, Resource};

/// A row from the games table, without its items
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub item_count: usize,
}

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        -- position keeps catalog insertion order
        CREATE TABLE IF NOT EXISTS items (
            game_id TEXT NOT NULL,
            position INTEGER NOT NULL,
            id TEXT NOT NULL,
            name TEXT NOT NULL,
            category TEXT,
            build_time_s REAL NOT NULL DEFAULT 0,
            description TEXT,
            PRIMARY KEY (game_id, position)
        );

        CREATE TABLE IF NOT EXISTS item_costs (
            game_id TEXT NOT NULL,
            item_position INTEGER NOT NULL,
            position INTEGER NOT NULL,
            resource TEXT NOT NULL,
            amount REAL NOT NULL,
            PRIMARY KEY (game_id, item_position, position)
        );

        CREATE INDEX IF NOT EXISTS idx_items_game_id ON items(game_id, id);
        "#,
    )?;
    Ok(())
}

/// Insert or replace a game together with all of its items and costs
pub fn upsert_game(conn: &mut Connection, game: &Game) -> Result<()> {
    let tx = conn.transaction()?;

    delete_game_rows(&tx, &game.id)?;
    tx.execute(
        "INSERT INTO games (id, name, description) VALUES (?1, ?2, ?3)",
        (&game.id, &game.name, &game.description),
    )?;

    for (position, item) in game.items().iter().enumerate() {
        tx.execute(
            "INSERT INTO items (game_id, position, id, name, category, build_time_s, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &game.id,
                position as i64,
                &item.id,
                &item.name,
                &item.category,
                item.build_time_s,
                &item.description,
            ],
        )?;

        for (cost_position, cost) in item.costs.iter().enumerate() {
            tx.execute(
                "INSERT INTO item_costs (game_id, item_position, position, resource, amount)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (&game.id, position as i64, cost_position as i64, &cost.name, cost.amount),
            )?;
        }
    }

    tx.commit()?;
    tracing::debug!(game = %game.id, items = game.len(), "stored catalog");
    Ok(())
}

fn delete_game_rows(conn: &Connection, game_id: &str) -> Result<()> {
    conn.execute("DELETE FROM item_costs WHERE game_id = ?1", [game_id])?;
    conn.execute("DELETE FROM items WHERE game_id = ?1", [game_id])?;
    conn.execute("DELETE FROM games WHERE id = ?1", [game_id])?;
    Ok(())
}

/// Remove every stored catalog
pub fn clear_catalog(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DELETE FROM item_costs;
        DELETE FROM items;
        DELETE FROM games;
        "#,
    )?;
    Ok(())
}

/// List stored games ordered by name
pub fn list_games(conn: &Connection) -> Result<Vec<GameRecord>> {
    let mut stmt = conn.prepare(
        "SELECT g.id, g.name, g.description,
                (SELECT COUNT(*) FROM items i WHERE i.game_id = g.id)
         FROM games g
         ORDER BY g.name",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(GameRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            item_count: row.get::<_, i64>(3)? as usize,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// Load a full catalog, items in their original order. `None` if the id is unknown.
pub fn load_game(conn: &Connection, game_id: &str) -> Result<Option<Game>> {
    let header = conn
        .query_row(
            "SELECT name, description FROM games WHERE id = ?1",
            [game_id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()?;

    let Some((name, description)) = header else {
        return Ok(None);
    };

    let mut game = Game::new(game_id, name).with_description(description);

    let mut cost_stmt = conn.prepare(
        "SELECT resource, amount FROM item_costs
         WHERE game_id = ?1 AND item_position = ?2
         ORDER BY position",
    )?;

    let mut item_stmt = conn.prepare(
        "SELECT position, id, name, category, build_time_s, description
         FROM items
         WHERE game_id = ?1
         ORDER BY position",
    )?;

    let rows = item_stmt.query_map([game_id], |row| {
        let position: i64 = row.get(0)?;
        let item = GameItem {
            id: row.get(1)?,
            name: row.get(2)?,
            category: row.get(3)?,
            build_time_s: row.get(4)?,
            costs: Vec::new(),
            description: row.get(5)?,
        };
        Ok((position, item))
    })?;

    for row in rows {
        let (position, mut item) = row?;
        let costs = cost_stmt.query_map(params![game_id, position], |row| {
            Ok(Resource::new(row.get::<_, String>(0)?, row.get(1)?))
        })?;
        for cost in costs {
            item.costs.push(cost?);
        }
        game.add_item(item);
    }

    Ok(Some(game))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_round_trip_preserves_order_and_costs() {
        let mut conn = memory_db();
        let original = samples::starcraft2();
        upsert_game(&mut conn, &original).unwrap();

        let loaded = load_game(&conn, "sc2").unwrap().unwrap();
        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.description, original.description);
        assert_eq!(loaded.items(), original.items());
    }

    #[test]
    fn test_optional_fields_survive() {
        let mut conn = memory_db();
        let mut game = Game::new("g", "G");
        game.add_item(GameItem::new("bare", "Bare"));
        upsert_game(&mut conn, &game).unwrap();

        let loaded = load_game(&conn, "g").unwrap().unwrap();
        let item = loaded.find_item("bare").unwrap();
        assert!(item.category.is_none());
        assert!(item.description.is_none());
        assert!(item.costs.is_empty());
    }

    #[test]
    fn test_load_unknown_game() {
        let conn = memory_db();
        assert!(load_game(&conn, "missing").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_previous_items() {
        let mut conn = memory_db();
        let mut game = Game::new("g", "G");
        game.add_item(GameItem::new("a", "A"));
        game.add_item(GameItem::new("b", "B"));
        upsert_game(&mut conn, &game).unwrap();

        let mut smaller = Game::new("g", "G v2");
        smaller.add_item(GameItem::new("c", "C"));
        upsert_game(&mut conn, &smaller).unwrap();

        let loaded = load_game(&conn, "g").unwrap().unwrap();
        assert_eq!(loaded.name, "G v2");
        assert_eq!(loaded.len(), 1);
        assert!(loaded.find_item("a").is_none());
    }

    #[test]
    fn test_list_games_and_clear() {
        let mut conn = memory_db();
        for game in samples::all_games() {
            upsert_game(&mut conn, &game).unwrap();
        }

        let games = list_games(&conn).unwrap();
        let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Chess", "Hearts of Iron IV", "StarCraft 2"]);
        assert_eq!(games[2].item_count, samples::starcraft2().len());

        clear_catalog(&conn).unwrap();
        assert!(list_games(&conn).unwrap().is_empty());
    }
}
