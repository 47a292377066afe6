//! Main UI Application
//!
//! Turns key presses into game actions and draws the current state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::game::{help_text, Game, GameState, MessageCategory, PlayingState};
use crate::progression::level_up_threshold;
use crate::world::{self, Position, TileType, DUNGEON_COUNT};

/// Main UI application
pub struct App {
    /// Draw the raw floor plan text instead of the coloured map
    plan_view: bool,
}

impl App {
    pub fn new() -> Self {
        Self { plan_view: false }
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        log::info!(target: "gamelog", "pressed {:?}", key.code);

        // Global quit shortcut
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            game.quit();
            return Ok(true);
        }

        match game.state().clone() {
            GameState::Playing(PlayingState::Exploring) => self.handle_exploring_input(key, game),
            GameState::Playing(PlayingState::Help) => self.handle_help_input(key, game),
            GameState::GameOver { .. } | GameState::Victory { .. } => {
                self.handle_finished_input(key, game)
            }
            GameState::Quit => Ok(true),
        }
    }

    fn handle_exploring_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        if let Some(direction) = movement(key.code) {
            game.step(direction)?;
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('?') => game.help(),
            KeyCode::Char('m') => {
                self.plan_view = !self.plan_view;
                log::debug!("Plan view: {}", self.plan_view);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                game.quit();
                return Ok(true);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_help_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        if let Some(direction) = movement(key.code) {
            game.step(direction)?;
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => {
                game.set_state(GameState::Playing(PlayingState::Exploring));
            }
            KeyCode::Char('q') => {
                game.quit();
                return Ok(true);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_finished_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter => game.restart()?,
            KeyCode::Char('q') | KeyCode::Esc => {
                game.quit();
                return Ok(true);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Render the current game state
    pub fn render(&self, frame: &mut Frame, game: &Game) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        match game.state() {
            GameState::Playing(state) => self.render_playing(frame, game, *state),
            GameState::GameOver {
                dungeon_reached,
                floor_reached,
                killed_by,
            } => self.render_game_over(frame, game, *dungeon_reached, *floor_reached, killed_by),
            GameState::Victory { gold } => self.render_victory(frame, game, *gold),
            GameState::Quit => {}
        }
    }

    fn render_playing(&self, frame: &mut Frame, game: &Game, state: PlayingState) {
        let area = frame.area();

        // Main layout: sidebar on right
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(25)])
            .split(area);

        // Map area with message log at bottom
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(chunks[0]);

        if self.plan_view {
            self.render_plan(frame, game, left_chunks[0]);
        } else {
            self.render_map(frame, game, left_chunks[0]);
        }
        self.render_messages(frame, game, left_chunks[1]);
        self.render_sidebar(frame, game, chunks[1]);

        if state == PlayingState::Help {
            self.render_help_overlay(frame);
        }
    }

    fn render_map(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let floor = match game.current_floor() {
            Ok(floor) => floor,
            Err(e) => {
                log::error!("Cannot draw map: {}", e);
                return;
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Dungeon {} - Floor {} ",
                game.dungeon_number(),
                game.floor_number()
            ))
            .border_style(Style::default().fg(dungeon_color(game.dungeon_number())));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Center the floor in the panel; clip if the terminal is too small
        let offset_x = inner.x + inner.width.saturating_sub(floor.width() as u16) / 2;
        let offset_y = inner.y + inner.height.saturating_sub(floor.height() as u16) / 2;
        let player = game.player().position();
        let buf = frame.buffer_mut();

        for y in 0..floor.height() {
            for x in 0..floor.width() {
                let cell_x = offset_x + x as u16;
                let cell_y = offset_y + y as u16;
                if cell_x >= inner.x + inner.width || cell_y >= inner.y + inner.height {
                    continue;
                }

                let pos = Position::new(x, y);
                let (ch, fg) = if pos == player {
                    ('@', Color::Rgb(255, 255, 200))
                } else if let Some(tile) = floor.tile_at(pos) {
                    let (r, g, b) = tile.fg_color();
                    (tile.glyph(), Color::Rgb(r, g, b))
                } else {
                    (' ', Color::Reset)
                };

                buf[(cell_x, cell_y)].set_char(ch);
                buf[(cell_x, cell_y)].set_fg(fg);
                if pos == player {
                    buf[(cell_x, cell_y)].set_style(Style::default().add_modifier(Modifier::BOLD));
                }
            }
        }
    }

    /// The floor plan as text, `P` marking the player
    fn render_plan(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let text = match game.printable_map() {
            Ok(text) => text,
            Err(e) => {
                log::error!("Cannot draw plan: {}", e);
                return;
            }
        };

        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Floor plan ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(para, area);
    }

    fn render_messages(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Messages ")
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);

        let messages: Vec<Line> = game
            .messages()
            .iter()
            .rev()
            .take(inner.height as usize)
            .rev()
            .map(|msg| {
                let color = match msg.category {
                    MessageCategory::Combat => Color::Red,
                    MessageCategory::Item => Color::Yellow,
                    MessageCategory::System => Color::Cyan,
                    MessageCategory::Lore => Color::Magenta,
                    MessageCategory::Warning => Color::LightRed,
                };
                Line::from(Span::styled(msg.text.as_str(), Style::default().fg(color)))
            })
            .collect();

        let para = Paragraph::new(messages).block(block);
        frame.render_widget(para, area);
    }

    fn render_sidebar(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let player = game.player();
        let floor_count = game
            .current_dungeon()
            .map(|dungeon| dungeon.floor_count())
            .unwrap_or(0);

        // HP colour against the full health this level resets to
        let full_hp = player.level() as i32 * 70;
        let hp_pct = player.hp() as f32 / full_hp.max(1) as f32;
        let hp_color = if hp_pct > 0.6 {
            Color::Green
        } else if hp_pct > 0.3 {
            Color::Yellow
        } else {
            Color::Red
        };

        let label = Style::default().fg(Color::Gray);
        let mut lines = vec![
            Line::from(Span::styled(
                "Djeneric",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Dungeon: ", label),
                Span::raw(format!("{}/{}", game.dungeon_number(), DUNGEON_COUNT)),
            ]),
            Line::from(vec![
                Span::styled("Floor:   ", label),
                Span::raw(format!("{}/{}", game.floor_number(), floor_count)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Level:   ", label),
                Span::raw(player.level().to_string()),
            ]),
            Line::from(vec![
                Span::styled("HP:      ", label),
                Span::styled(player.hp().to_string(), Style::default().fg(hp_color)),
            ]),
            Line::from(vec![
                Span::styled("XP:      ", label),
                Span::raw(player.xp().to_string()),
            ]),
            Line::from(vec![
                Span::styled("Gold:    ", label),
                Span::styled(player.gold().to_string(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("Level up: a kill worth >{} xp", level_up_threshold(player.level())),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("Turn {}", game.turn()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        for tile_type in [TileType::Start, TileType::Stairs, TileType::Gold, TileType::Enemy] {
            let (r, g, b) = tile_type.fg_color();
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", tile_type.glyph()),
                    Style::default().fg(Color::Rgb(r, g, b)),
                ),
                Span::styled(tile_type.name(), label),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[?] help  [m] plan  [q] quit",
            Style::default().fg(Color::DarkGray),
        )));

        let para = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(para, inner);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ? Help ? ")
            .border_style(Style::default().fg(Color::Cyan));

        let key = Style::default().fg(Color::White);
        let what = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(Span::styled(help_text(), what)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Arrows / WASD / HJKL ", key),
                Span::styled("Move", what),
            ]),
            Line::from(vec![Span::styled("  M                    ", key), Span::styled("Toggle floor plan", what)]),
            Line::from(vec![Span::styled("  ? / Esc              ", key), Span::styled("Close help", what)]),
            Line::from(vec![Span::styled("  Q                    ", key), Span::styled("Quit", what)]),
            Line::from(""),
            Line::from(Span::styled(
                "Walk into monsters to fight them. Find the stairs to go deeper.",
                what,
            )),
        ];

        let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(para, area);
    }

    fn render_game_over(
        &self,
        frame: &mut Frame,
        game: &Game,
        dungeon: usize,
        floor: usize,
        killed_by: &str,
    ) {
        let area = frame.area();
        let stats = game.stats();

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "YOU DIED",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Reached Dungeon {}, Floor {}", dungeon, floor)),
            Line::from(Span::styled(
                format!("Killed by {}", killed_by),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(format!(
                "Level {}  |  {} gold  |  {} enemies defeated in {} steps",
                game.player().level(),
                game.player().gold(),
                stats.enemies_defeated,
                stats.steps
            )),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Press [Enter] to try again or [q] to quit",
                Style::default().fg(Color::Gray),
            )),
        ];

        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(para, area);
    }

    fn render_victory(&self, frame: &mut Frame, game: &Game, gold: u32) {
        let area = frame.area();
        let stats = game.stats();

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "VICTORY",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("You battled through every dungeon!"),
            Line::from(format!("You took home {} gold. Don't spend it all at once now.", gold)),
            Line::from(""),
            Line::from(format!(
                "Level {}  |  {} enemies defeated in {} steps",
                game.player().level(),
                stats.enemies_defeated,
                stats.steps
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press [Enter] to play again or [q] to quit",
                Style::default().fg(Color::Gray),
            )),
        ];

        let para = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(para, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Movement keys: arrows, vi keys and WASD
fn movement(code: KeyCode) -> Option<world::Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(world::Direction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(world::Direction::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(world::Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(world::Direction::Right),
        _ => None,
    }
}

/// Border colour per dungeon, getting angrier as you go down
fn dungeon_color(number: usize) -> Color {
    match number {
        1 => Color::Rgb(120, 140, 120),
        2 => Color::Rgb(140, 120, 150),
        3 => Color::Rgb(160, 120, 90),
        _ => Color::Rgb(170, 70, 70),
    }
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn game() -> Game {
        Game::new(GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        })
        .unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(app: &App, game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| app.render(frame, game)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        let mut game = game();
        assert!(app.handle_input(press(KeyCode::Char('q')), &mut game).unwrap());
        assert_eq!(game.state(), &GameState::Quit);

        let mut game = self::game();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_input(ctrl_c, &mut game).unwrap());
    }

    #[test]
    fn test_help_toggles() {
        let mut app = App::new();
        let mut game = game();
        assert!(!app.handle_input(press(KeyCode::Char('?')), &mut game).unwrap());
        assert_eq!(game.state(), &GameState::Playing(PlayingState::Help));
        app.handle_input(press(KeyCode::Esc), &mut game).unwrap();
        assert_eq!(game.state(), &GameState::Playing(PlayingState::Exploring));
    }

    #[test]
    fn test_movement_keys_map_to_directions() {
        assert_eq!(movement(KeyCode::Char('w')), Some(world::Direction::Up));
        assert_eq!(movement(KeyCode::Char('j')), Some(world::Direction::Down));
        assert_eq!(movement(KeyCode::Left), Some(world::Direction::Left));
        assert_eq!(movement(KeyCode::Char('d')), Some(world::Direction::Right));
        assert_eq!(movement(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_enter_restarts_finished_run() {
        let mut app = App::new();
        let mut game = game();
        game.set_state(GameState::GameOver {
            dungeon_reached: 1,
            floor_reached: 1,
            killed_by: "Blerp".to_string(),
        });
        assert!(draw(&app, &game).contains("YOU DIED"));

        app.handle_input(press(KeyCode::Enter), &mut game).unwrap();
        assert_eq!(game.state(), &GameState::Playing(PlayingState::Exploring));
    }

    #[test]
    fn test_playing_screen_shows_status() {
        let mut app = App::new();
        let mut game = game();
        let screen = draw(&app, &game);
        assert!(screen.contains("Dungeon 1 - Floor 1"));
        assert!(screen.contains("Status"));
        assert!(screen.contains('@'));

        app.handle_input(press(KeyCode::Char('m')), &mut game).unwrap();
        assert!(draw(&app, &game).contains("Floor plan"));
    }
}
