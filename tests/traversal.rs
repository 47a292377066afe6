//! Integration tests that walk the player through real floors
//!
//! A breadth-first search over the floor picks each move, so these runs
//! exercise the same `step` path as the terminal front end.

use std::collections::{HashMap, HashSet, VecDeque};

use djeneric::game::{Game, GameState, StepOutcome};
use djeneric::world::{Direction, Position, TileType};
use djeneric::GameConfig;

fn seeded(seed: u64) -> Game {
    Game::new(GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    })
    .expect("game should build from embedded floor plans")
}

fn opposite(direction: Direction) -> Direction {
    match direction {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
    }
}

/// First move on a shortest path to the nearest tile of `target`.
/// Stairs are only walked onto when they are the target.
fn next_move_towards(game: &Game, target: TileType) -> Option<Direction> {
    let floor = game.current_floor().ok()?;
    let start = game.player().position();
    let tile_type = |pos: Position| floor.tile_at(pos).map(|tile| tile.tile_type());

    let mut came_from: HashMap<Position, (Position, Direction)> = HashMap::new();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        if pos != start && tile_type(pos) == Some(target) {
            let mut current = pos;
            loop {
                let (previous, direction) = came_from[&current];
                if previous == start {
                    return Some(direction);
                }
                current = previous;
            }
        }

        for direction in Direction::ALL {
            let next = pos.step(direction);
            if !floor.is_valid_player_location(next) || !seen.insert(next) {
                continue;
            }
            if tile_type(next) == Some(TileType::Stairs) && target != TileType::Stairs {
                continue;
            }
            came_from.insert(next, (pos, direction));
            queue.push_back(next);
        }
    }
    None
}

/// Walk until standing on a tile of `target`
fn walk_to(game: &mut Game, target: TileType) {
    for _ in 0..200 {
        if game.current_tile().map(|tile| tile.tile_type()).ok() == Some(target) {
            return;
        }
        let direction = next_move_towards(game, target).expect("target should be reachable");
        assert_eq!(game.step(direction).unwrap(), StepOutcome::Moved);
    }
    panic!("never reached {:?}", target);
}

/// A direction leading onto a plain floor tile
fn quiet_neighbour(game: &Game) -> Direction {
    let floor = game.current_floor().unwrap();
    let here = game.player().position();
    Direction::ALL
        .into_iter()
        .find(|direction| {
            floor
                .tile_at(here.step(*direction))
                .map(|tile| matches!(tile.tile_type(), TileType::Empty | TileType::Start))
                .unwrap_or(false)
        })
        .expect("every plan tile should border open floor")
}

#[test]
fn test_full_run_reaches_victory() {
    for seed in [1, 2, 3] {
        let mut game = seeded(seed);
        let mut steps = 0;

        while matches!(game.state(), GameState::Playing(_)) {
            let direction =
                next_move_towards(&game, TileType::Stairs).expect("stairs should be reachable");
            assert_eq!(game.step(direction).unwrap(), StepOutcome::Moved);
            steps += 1;
            assert!(steps < 1000, "run with seed {} did not finish", seed);
        }

        let gold = game.player().gold();
        assert_eq!(game.state(), &GameState::Victory { gold });
        assert!(game.player().is_victorious());
        assert_eq!(game.stats().floors_descended, 9);
        assert_eq!(game.stats().steps as u64, game.turn());
        assert!(game
            .messages()
            .iter()
            .any(|m| m.text.starts_with("Congratulations!")));
        assert_eq!(game.step(Direction::Up).unwrap(), StepOutcome::Ignored);
    }
}

#[test]
fn test_defeated_enemy_leaves_a_corpse() {
    let mut game = seeded(11);
    walk_to(&mut game, TileType::Enemy);
    assert!(game
        .messages()
        .iter()
        .any(|m| m.text.starts_with("You were victorious!")));
    let xp = game.player().xp();
    let defeated = game.stats().enemies_defeated;

    let away = quiet_neighbour(&game);
    game.step(away).unwrap();
    game.step(opposite(away)).unwrap();

    let last = &game.messages().last().unwrap().text;
    assert!(last.starts_with("Here lies the corpse of "), "got {:?}", last);
    assert_eq!(game.player().xp(), xp);
    assert_eq!(game.stats().enemies_defeated, defeated);
}

#[test]
fn test_gold_can_be_collected_twice() {
    let mut game = seeded(5);
    walk_to(&mut game, TileType::Gold);
    let gold = game.player().gold();
    assert!(gold >= 1);

    let away = quiet_neighbour(&game);
    game.step(away).unwrap();
    game.step(opposite(away)).unwrap();

    // First dungeon gold piles are worth 1
    assert_eq!(game.player().gold(), gold + 1);
    assert_eq!(
        game.messages().last().unwrap().text,
        "There was 1 gold scattered here."
    );
}

#[test]
fn test_same_seed_builds_same_world() {
    let a = seeded(42);
    let b = seeded(42);
    for dungeon in 0..a.world().dungeon_count() {
        let floors = a.world().dungeon(dungeon).unwrap().floor_count();
        for floor in 0..floors {
            let fa = a.world().floor(dungeon, floor).unwrap();
            let fb = b.world().floor(dungeon, floor).unwrap();
            let origin = Position::new(0, 0);
            assert_eq!(fa.printable_map(origin), fb.printable_map(origin));
        }
    }
}

#[test]
fn test_restart_after_victory() {
    let mut game = seeded(9);
    while matches!(game.state(), GameState::Playing(_)) {
        let direction = next_move_towards(&game, TileType::Stairs).unwrap();
        game.step(direction).unwrap();
    }

    game.restart().unwrap();
    assert!(matches!(game.state(), GameState::Playing(_)));
    assert_eq!((game.dungeon_number(), game.floor_number()), (1, 1));
    assert_eq!(game.player().gold(), 0);
    assert_eq!(game.turn(), 0);
}
