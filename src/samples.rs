//! Sample game catalogs and demo build orders

use crate::catalog::Game;
use crate::models::{GameItem, Resource};

/// All bundled sample catalogs
pub fn all_games() -> Vec<Game> {
    vec![starcraft2(), hearts_of_iron(), chess()]
}

/// A named demo build order, as item ids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOpening {
    pub name: &'static str,
    pub item_ids: &'static [&'static str],
}

const SC2_OPENINGS: &[SampleOpening] = &[SampleOpening {
    name: "Opening Build",
    item_ids: &[
        "scv",
        "scv",
        "supply_depot",
        "scv",
        "barracks",
        "marine",
        "marine",
    ],
}];

const HOI4_OPENINGS: &[SampleOpening] = &[SampleOpening {
    name: "Opening Build",
    item_ids: &["civ_factory", "mil_factory", "infantry_div", "infantry_div"],
}];

// d6 is not in the chess catalog; resolving the Sicilian skips it.
const CHESS_OPENINGS: &[SampleOpening] = &[
    SampleOpening {
        name: "Italian Game",
        item_ids: &["e4", "e5", "nf3", "nc6", "bc4", "bc5"],
    },
    SampleOpening {
        name: "Ruy Lopez",
        item_ids: &["e4", "e5", "nf3", "nc6", "bb5"],
    },
    SampleOpening {
        name: "Sicilian Defense",
        item_ids: &["e4", "c5", "nf3", "d6", "d4"],
    },
];

/// Every demo opening for a sample game. Empty for unknown games.
pub fn sample_openings(game_id: &str) -> &'static [SampleOpening] {
    match game_id {
        "sc2" => SC2_OPENINGS,
        "hoi4" => HOI4_OPENINGS,
        "chess" => CHESS_OPENINGS,
        _ => &[],
    }
}

/// Item ids of the first demo opening for a sample game. Empty for unknown games.
pub fn sample_build_order(game_id: &str) -> &'static [&'static str] {
    sample_openings(game_id)
        .first()
        .map(|opening| opening.item_ids)
        .unwrap_or_default()
}

fn terran(id: &str, name: &str, category: &str, build_time: f64, minerals: f64, gas: f64) -> GameItem {
    let mut item = GameItem::new(id, name)
        .with_category(category)
        .with_build_time(build_time)
        .with_cost(Resource::new("Minerals", minerals));
    if gas > 0.0 {
        item = item.with_cost(Resource::new("Gas", gas));
    }
    item
}

pub fn starcraft2() -> Game {
    let mut game =
        Game::new("sc2", "StarCraft 2").with_description("Real-time strategy game by Blizzard Entertainment");

    game.add_item(
        terran("scv", "SCV", "Worker", 12.0, 50.0, 0.0)
            .with_description("Space Construction Vehicle - Terran worker unit"),
    );
    game.add_item(
        terran("marine", "Marine", "Infantry", 18.0, 50.0, 0.0).with_description("Basic Terran infantry unit"),
    );
    game.add_item(
        terran("marauder", "Marauder", "Infantry", 21.0, 100.0, 25.0)
            .with_description("Armored Terran infantry unit"),
    );
    game.add_item(
        terran("command_center", "Command Center", "Structure", 71.0, 400.0, 0.0)
            .with_description("Main Terran base structure"),
    );
    game.add_item(
        terran("supply_depot", "Supply Depot", "Structure", 21.0, 100.0, 0.0)
            .with_description("Provides supply for Terran units"),
    );
    game.add_item(
        terran("barracks", "Barracks", "Structure", 46.0, 150.0, 0.0)
            .with_description("Produces Terran infantry units"),
    );
    game.add_item(
        terran("refinery", "Refinery", "Structure", 21.0, 75.0, 0.0).with_description("Harvests vespene gas"),
    );
    game.add_item(
        terran("factory", "Factory", "Structure", 43.0, 150.0, 100.0).with_description("Produces Terran vehicles"),
    );
    game.add_item(
        terran("starport", "Starport", "Structure", 36.0, 150.0, 100.0)
            .with_description("Produces Terran air units"),
    );

    game
}

pub fn hearts_of_iron() -> Game {
    let mut game =
        Game::new("hoi4", "Hearts of Iron IV").with_description("Grand strategy game by Paradox Interactive");

    game.add_item(
        GameItem::new("infantry_div", "Infantry Division")
            .with_category("Division")
            .with_build_time(90.0)
            .with_cost(Resource::new("Infantry Equipment", 1000.0))
            .with_cost(Resource::new("Support Equipment", 200.0))
            .with_description("Basic infantry division"),
    );
    game.add_item(
        GameItem::new("armored_div", "Armored Division")
            .with_category("Division")
            .with_build_time(120.0)
            .with_cost(Resource::new("Light Tanks", 500.0))
            .with_cost(Resource::new("Motorized", 500.0))
            .with_description("Armored division with tanks"),
    );
    game.add_item(
        GameItem::new("civ_factory", "Civilian Factory")
            .with_category("Production")
            .with_build_time(360.0)
            .with_cost(Resource::new("Industrial Capacity", 10800.0))
            .with_description("Builds infrastructure and converts to military factories"),
    );
    game.add_item(
        GameItem::new("mil_factory", "Military Factory")
            .with_category("Production")
            .with_build_time(360.0)
            .with_cost(Resource::new("Industrial Capacity", 7200.0))
            .with_description("Produces military equipment"),
    );
    game.add_item(
        GameItem::new("infantry_weapons_1", "Infantry Weapons I")
            .with_category("Research")
            .with_build_time(365.0)
            .with_description("Research improved infantry equipment"),
    );
    game.add_item(
        GameItem::new("armor_1", "Great War Tank")
            .with_category("Research")
            .with_build_time(365.0)
            .with_description("Research basic tank technology"),
    );

    game
}

pub fn chess() -> Game {
    let mut game = Game::new("chess", "Chess")
        .with_description("Classic chess game - plan your move sequences and opening strategies");

    // (id, notation, category, description)
    let moves = [
        ("e4", "e4", "Pawn Opening", "King's pawn opening - advance pawn to e4"),
        ("d4", "d4", "Pawn Opening", "Queen's pawn opening - advance pawn to d4"),
        ("c4", "c4", "Pawn Opening", "English Opening - advance pawn to c4"),
        ("e5", "e5", "Pawn Response", "Symmetrical response - advance pawn to e5"),
        ("d5", "d5", "Pawn Response", "Advance pawn to d5"),
        ("c5", "c5", "Pawn Response", "Sicilian Defense - advance pawn to c5"),
        ("nf3", "Nf3", "Knight Development", "Develop knight to f3"),
        ("nc3", "Nc3", "Knight Development", "Develop knight to c3"),
        ("nf6", "Nf6", "Knight Development", "Develop knight to f6"),
        ("nc6", "Nc6", "Knight Development", "Develop knight to c6"),
        ("bc4", "Bc4", "Bishop Development", "Italian Game - develop bishop to c4"),
        ("bb5", "Bb5", "Bishop Development", "Ruy Lopez - develop bishop to b5"),
        ("bc5", "Bc5", "Bishop Development", "Develop bishop to c5"),
        ("be7", "Be7", "Bishop Development", "Develop bishop to e7"),
        ("re1", "Re1", "Rook Activation", "Move rook to e1"),
        ("rd1", "Rd1", "Rook Activation", "Move rook to d1"),
        ("qe2", "Qe2", "Queen Development", "Move queen to e2"),
        ("qd2", "Qd2", "Queen Development", "Move queen to d2"),
        ("ke2", "Ke2", "King Move", "Move king to e2 (unusual)"),
        ("o-o", "O-O", "Castling", "Castle kingside"),
        ("o-o-o", "O-O-O", "Castling", "Castle queenside"),
    ];

    for (id, notation, category, description) in moves {
        game.add_item(
            GameItem::new(id, notation)
                .with_category(category)
                .with_build_time(1.0)
                .with_cost(Resource::new("Move Number", 1.0))
                .with_description(description),
        );
    }

    game
}
