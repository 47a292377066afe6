//! Game state machine
//!
//! Owns the world and the player, turns each move into a tile effect
//! and decides when a run is over.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::message::{GameMessage, MessageCategory, MessageLog};
use crate::combat::{Battle, BattleOutcome, BattleReport};
use crate::config::GameConfig;
use crate::entities::Player;
use crate::error::{GameError, GameResult};
use crate::world::{Direction, Dungeon, Floor, FloorPlanLibrary, Tile, WorldMap, DUNGEON_COUNT};

const WELCOME: &str = "Welcome to the most fantastic *Djeneric Dungeon Crawler!*";
const BLOCKED: &str = "You can't move here! Try again.";
const NEXT_FLOOR: &str = "You take the stairs, going down another floor...";
const NEXT_DUNGEON: &str =
    "You take the stairs. They lead to another dungeon. Your HP has been reset. Weird.";
const DIVIDER: &str = "**************";

/// The main game struct that holds all game data
pub struct Game {
    state: GameState,
    config: GameConfig,
    /// Where floor plans come from, kept for restarts
    library: FloorPlanLibrary,
    world: WorldMap,
    player: Player,
    rng: StdRng,
    messages: MessageLog,
    /// Successful moves so far in this run
    turn: u64,
    stats: RunStats,
    /// Name of the last enemy that killed the player
    killed_by: Option<String>,
}

/// All possible game states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Actively playing
    Playing(PlayingState),
    /// Player cleared the last dungeon
    Victory { gold: u32 },
    /// Player died. Dungeon and floor are 1-based.
    GameOver {
        dungeon_reached: usize,
        floor_reached: usize,
        killed_by: String,
    },
    /// Exit the game
    Quit,
}

/// Sub-states while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayingState {
    Exploring,
    /// Help overlay is open; moving closes it
    Help,
}

/// Result of a single move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The player moved and the tile was played
    Moved,
    /// The target was a wall or off the floor
    Blocked,
    /// The run is not in a state that accepts moves
    Ignored,
}

/// Counters for the end-of-run screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub steps: u32,
    pub battles: u32,
    pub enemies_defeated: u32,
    pub gold_found: u32,
    pub floors_descended: u32,
}

impl Game {
    /// Build the world and place a fresh player at the first floor's start
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let config = config.sanitized();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let library = match &config.floorplan_dir {
            Some(dir) => FloorPlanLibrary::with_dir(dir.clone()),
            None => FloorPlanLibrary::embedded(),
        };

        let world = WorldMap::new(&library, &mut rng)?;
        let player = Player::new(config.starting_level, world.start_of(0, 0)?);
        let messages = MessageLog::new(config.message_history);

        log::info!(
            "New run: starting level {}, seed {:?}",
            config.starting_level,
            config.seed
        );

        let mut game = Self {
            state: GameState::Playing(PlayingState::Exploring),
            config,
            library,
            world,
            player,
            rng,
            messages,
            turn: 0,
            stats: RunStats::default(),
            killed_by: None,
        };
        game.announce_start()?;
        Ok(game)
    }

    /// Throw away the current run and start again from the first dungeon
    pub fn restart(&mut self) -> GameResult<()> {
        log::info!("Restarting run");
        self.world = WorldMap::new(&self.library, &mut self.rng)?;
        self.player = Player::new(self.config.starting_level, self.world.start_of(0, 0)?);
        self.turn = 0;
        self.stats = RunStats::default();
        self.killed_by = None;
        self.set_state(GameState::Playing(PlayingState::Exploring));
        self.announce_start()
    }

    fn announce_start(&mut self) -> GameResult<()> {
        self.add_message(WELCOME, MessageCategory::System);
        let intro = self.current_dungeon()?.intro();
        self.add_message(intro, MessageCategory::Lore);
        Ok(())
    }

    /// Take one turn: move, play the tile moved onto, check for the end
    pub fn step(&mut self, direction: Direction) -> GameResult<StepOutcome> {
        match self.state {
            GameState::Playing(PlayingState::Exploring) => {}
            GameState::Playing(PlayingState::Help) => {
                self.set_state(GameState::Playing(PlayingState::Exploring));
            }
            _ => return Ok(StepOutcome::Ignored),
        }

        let target = self.player.position().step(direction);
        if !self.current_floor()?.is_valid_player_location(target) {
            log::debug!("Blocked moving {} into {:?}", direction, target);
            self.add_message(BLOCKED, MessageCategory::Warning);
            return Ok(StepOutcome::Blocked);
        }

        // Roll the move back if the tile cannot be played
        let before = (self.player.clone(), self.stats);
        self.player.set_position(target);
        let (category, text) = match self.play_arrival() {
            Ok(played) => played,
            Err(e) => {
                log::warn!("Move {} undone: {}", direction, e);
                (self.player, self.stats) = before;
                return Err(e);
            }
        };

        self.turn += 1;
        self.stats.steps += 1;
        self.add_lines(&text, category);
        self.check_finished();

        Ok(StepOutcome::Moved)
    }

    fn play_arrival(&mut self) -> GameResult<(MessageCategory, String)> {
        let category = message_category(self.current_tile()?);
        Ok((category, self.play_current_tile()?))
    }

    /// Play the tile under the player. Enemies fight in place so their
    /// death sticks; every other tile is played from a copy.
    fn play_current_tile(&mut self) -> GameResult<String> {
        let location = self.player.location();
        let tile = self
            .world
            .floor_mut(location.dungeon, location.floor)?
            .tile_at_mut(location.pos)
            .ok_or(GameError::NoTile(location.pos))?;

        if let Tile::Enemy(enemy) = tile {
            let report = Battle::new(&mut self.player, enemy).resolve()?;
            let name = enemy.name().to_string();
            self.record_battle(&report, name);
            return Ok(report.to_string());
        }

        let mut detached = tile.clone();
        self.play_tile(&mut detached)
    }

    /// Apply a tile's effect to the player and describe what happened
    pub fn play_tile(&mut self, tile: &mut Tile) -> GameResult<String> {
        match tile {
            Tile::Enemy(enemy) => {
                let report = Battle::new(&mut self.player, enemy).resolve()?;
                let name = enemy.name().to_string();
                self.record_battle(&report, name);
                Ok(report.to_string())
            }
            Tile::Gold { value } => {
                let value = *value;
                self.player.add_gold(value);
                self.stats.gold_found += value;
                Ok(format!("There was {} gold scattered here.", value))
            }
            Tile::Stairs => self.take_stairs(),
            Tile::Start => Ok(self.current_dungeon()?.intro().to_string()),
            other => Ok(other.description().to_string()),
        }
    }

    fn record_battle(&mut self, report: &BattleReport, enemy_name: String) {
        match report.outcome {
            BattleOutcome::Victory { .. } => {
                self.stats.battles += 1;
                self.stats.enemies_defeated += 1;
            }
            BattleOutcome::Defeat => {
                self.stats.battles += 1;
                self.killed_by = Some(enemy_name);
            }
            BattleOutcome::AlreadyDefeated => {}
        }
    }

    /// Next floor, else next dungeon, else victory
    fn take_stairs(&mut self) -> GameResult<String> {
        let location = self.player.location();
        let (floor_count, is_last) = {
            let dungeon = self.current_dungeon()?;
            (dungeon.floor_count(), dungeon.is_last())
        };

        if location.floor + 1 < floor_count {
            let next = self.world.start_of(location.dungeon, location.floor + 1)?;
            self.player.set_location(next);
            self.stats.floors_descended += 1;
            return Ok(NEXT_FLOOR.to_string());
        }

        if is_last {
            log::info!("Final stairs reached with {} gold", self.player.gold());
            self.player.set_victorious();
            return Ok(String::new());
        }

        let next = self.world.start_of(location.dungeon + 1, 0)?;
        self.player.set_location(next);
        self.player.reset_hp();
        self.stats.floors_descended += 1;
        let intro = self.current_dungeon()?.intro();
        Ok(format!("{}\n{}\n{}", DIVIDER, NEXT_DUNGEON, intro))
    }

    /// Move to `Victory` or `GameOver` once the player is no longer alive
    pub fn check_finished(&mut self) {
        if self.player.is_alive() || !matches!(self.state, GameState::Playing(_)) {
            return;
        }

        if self.player.is_victorious() {
            let gold = self.player.gold();
            self.add_message(DIVIDER, MessageCategory::System);
            self.add_message(
                format!(
                    "Congratulations! You battled through every dungeon and took home {} gold, too. Don't spend it all at once now.",
                    gold
                ),
                MessageCategory::System,
            );
            self.set_state(GameState::Victory { gold });
        } else {
            let location = self.player.location();
            let killed_by = self
                .killed_by
                .clone()
                .unwrap_or_else(|| "unknown causes".to_string());
            self.add_message("You died! Tough luck.", MessageCategory::Warning);
            self.set_state(GameState::GameOver {
                dungeon_reached: location.dungeon + 1,
                floor_reached: location.floor + 1,
                killed_by,
            });
        }
    }

    /// Log the help text and open the help overlay
    pub fn help(&mut self) {
        self.add_message(help_text(), MessageCategory::System);
        if matches!(self.state, GameState::Playing(_)) {
            self.set_state(GameState::Playing(PlayingState::Help));
        }
    }

    pub fn quit(&mut self) {
        self.set_state(GameState::Quit);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn set_state(&mut self, state: GameState) {
        log::debug!("State change: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn messages(&self) -> &[GameMessage] {
        self.messages.as_slice()
    }

    /// Add a message to the log
    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        let text = text.into();
        log::info!(target: "gamelog", "{}", text);
        self.messages.push(GameMessage {
            text,
            turn: self.turn,
            category,
        });
    }

    /// Add multi-line text one line at a time, skipping blank lines
    fn add_lines(&mut self, text: &str, category: MessageCategory) {
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            self.add_message(line, category);
        }
    }

    pub fn current_dungeon(&self) -> GameResult<&Dungeon> {
        self.world.dungeon(self.player.location().dungeon)
    }

    pub fn current_floor(&self) -> GameResult<&Floor> {
        let location = self.player.location();
        self.world.floor(location.dungeon, location.floor)
    }

    pub fn current_tile(&self) -> GameResult<&Tile> {
        let pos = self.player.position();
        self.current_floor()?
            .tile_at(pos)
            .ok_or(GameError::NoTile(pos))
    }

    /// Current dungeon, counted from 1
    pub fn dungeon_number(&self) -> usize {
        self.player.location().dungeon + 1
    }

    /// Current floor within the dungeon, counted from 1
    pub fn floor_number(&self) -> usize {
        self.player.location().floor + 1
    }

    /// The current floor as text with `P` marking the player
    pub fn printable_map(&self) -> GameResult<String> {
        Ok(self.current_floor()?.printable_map(self.player.position()))
    }
}

pub fn help_text() -> String {
    format!(
        "Press the movement buttons to move around the current dungeon. There are {} dungeons to fight through.",
        DUNGEON_COUNT
    )
}

fn message_category(tile: &Tile) -> MessageCategory {
    match tile {
        Tile::Enemy(_) => MessageCategory::Combat,
        Tile::Gold { .. } => MessageCategory::Item,
        Tile::Stairs | Tile::Start => MessageCategory::Lore,
        Tile::Empty | Tile::Wall => MessageCategory::System,
    }
}
