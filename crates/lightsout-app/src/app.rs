//! Lights Out desktop application UI.
//!
//! # Design Notes
//! - Desktop-focused MVP: a grid of lamp buttons plus a sidebar with the
//!   game status, the board seed, and settings for the next game.
//! - Mouse clicks toggle cells; arrows move the selection, Space/Enter
//!   toggles it, Ctrl+N starts a new game.
//! - Once the board is cleared the grid is replaced by a win banner, as in
//!   the classic game.
//!
//! All game logic lives in the library crates; this layer only requests
//! new boards, forwards toggles, and renders the resulting state.

use std::sync::Arc;

use eframe::{
    App, CreationContext, Frame,
    egui::{
        Button, CentralPanel, Color32, Context, Grid, InputState, Key, RichText, Slider, Stroke,
        StrokeKind, Ui, Vec2,
    },
};
use egui_extras::{Size, StripBuilder};
use lightsout_core::Position;
use lightsout_game::Game;
use lightsout_generator::{BoardGenerator, BoardSeed};

const LIT_COLOR: Color32 = Color32::from_rgb(0xff, 0xa4, 0x00);
const BANNER_ORANGE: Color32 = Color32::from_rgb(0xff, 0xa4, 0x00);
const BANNER_BLUE: Color32 = Color32::from_rgb(0x4f, 0xc3, 0xf7);

#[derive(Debug)]
pub struct LightsOutApp {
    game: Game,
    seed: BoardSeed,
    settings: BoardSettings,
    selected_cell: Option<Position>,
}

/// Board parameters for the next game. Changing them never disturbs the
/// game in progress.
#[derive(Debug, Clone)]
struct BoardSettings {
    rows: usize,
    cols: usize,
    chance_lit: f64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: BoardGenerator::DEFAULT_ROWS,
            cols: BoardGenerator::DEFAULT_COLS,
            chance_lit: BoardGenerator::DEFAULT_CHANCE_LIT,
        }
    }
}

impl BoardSettings {
    fn generator(&self) -> BoardGenerator {
        // The sliders keep the values in range, but fall back rather than
        // crash if they ever disagree with the core validation.
        BoardGenerator::new(self.rows, self.cols, self.chance_lit).unwrap_or_else(|err| {
            log::warn!("invalid board settings ({err}), falling back to defaults");
            BoardGenerator::default()
        })
    }
}

impl LightsOutApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let settings = BoardSettings::default();
        let board = settings.generator().generate();
        log::info!(
            "starting {}x{} game, seed {}",
            board.grid.rows(),
            board.grid.cols(),
            board.seed
        );
        let seed = board.seed;
        Self {
            game: Game::new(board),
            seed,
            settings,
            selected_cell: None,
        }
    }

    fn new_game(&mut self) {
        let board = self.settings.generator().generate();
        log::info!(
            "starting {}x{} game, seed {}",
            board.grid.rows(),
            board.grid.cols(),
            board.seed
        );
        self.seed = board.seed;
        self.game = Game::new(board);
        self.selected_cell = None;
    }

    fn toggle_cell(&mut self, pos: Position) {
        let status = self.game.toggle(pos);
        log::debug!(
            "toggled cell {pos}, {} lights on",
            self.game.grid().lit_count()
        );
        if status.is_won() {
            log::info!("board cleared, seed {}", self.seed);
        }
    }

    fn move_selection(&mut self, step: impl Fn(Position) -> Position) {
        let pos = self.selected_cell.get_or_insert(Position::new(0, 0));
        let next = step(*pos);
        if self.game.grid().contains(next) {
            *pos = next;
        }
    }

    fn handle_input(&mut self, i: &InputState) {
        if (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(Key::N) {
            self.new_game();
            return;
        }
        if self.game.is_won() {
            return;
        }
        if i.key_pressed(Key::ArrowUp) {
            self.move_selection(Position::up);
        }
        if i.key_pressed(Key::ArrowDown) {
            self.move_selection(Position::down);
        }
        if i.key_pressed(Key::ArrowLeft) {
            self.move_selection(Position::left);
        }
        if i.key_pressed(Key::ArrowRight) {
            self.move_selection(Position::right);
        }
        if i.key_pressed(Key::Escape) {
            self.selected_cell = None;
        }
        if i.key_pressed(Key::Space) || i.key_pressed(Key::Enter) {
            if let Some(pos) = self.selected_cell {
                self.toggle_cell(pos);
            }
        }
    }
}

impl App for LightsOutApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.input(|i| self.handle_input(i));

        CentralPanel::default().show(ctx, |ui| {
            if self.game.is_won() {
                self.draw_win_banner(ui);
                return;
            }
            StripBuilder::new(ui)
                .size(Size::relative(0.75))
                .size(Size::relative(0.25))
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        self.draw_grid(ui);
                    });
                    strip.cell(|ui| {
                        self.draw_sidebar(ui);
                    });
                });
        });
    }
}

impl LightsOutApp {
    #[expect(clippy::cast_precision_loss)]
    fn draw_grid(&mut self, ui: &mut Ui) {
        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let unlit_color = visuals.extreme_bg_color;
        let thin_border = Stroke::new(1.0, visuals.widgets.inactive.fg_stroke.color);
        let selected_border = Stroke::new(3.0, visuals.selection.stroke.color);

        let rows = self.game.grid().rows();
        let cols = self.game.grid().cols();
        let spacing = 4.0;
        let avail = ui.available_size();
        let cell_size = f32::min(
            (avail.x - spacing * (cols as f32 - 1.0)) / cols as f32,
            (avail.y - spacing * (rows as f32 - 1.0)) / rows as f32,
        );

        Grid::new(ui.id().with("board"))
            .spacing((spacing, spacing))
            .min_col_width(cell_size)
            .min_row_height(cell_size)
            .show(ui, |ui| {
                for row in 0..rows {
                    for col in 0..cols {
                        let pos = cell_position(row, col);
                        let lit = self.game.grid()[pos];
                        let fill = if lit { LIT_COLOR } else { unlit_color };
                        let button = Button::new("").min_size(Vec2::splat(cell_size)).fill(fill);
                        let button = ui.add(button);
                        let border = if self.selected_cell == Some(pos) {
                            selected_border
                        } else {
                            thin_border
                        };
                        ui.painter()
                            .rect_stroke(button.rect, 3.0, border, StrokeKind::Inside);
                        if button.clicked() {
                            self.selected_cell = Some(pos);
                            self.toggle_cell(pos);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn draw_sidebar(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Lights")
                    .size(28.0)
                    .strong()
                    .color(BANNER_ORANGE),
            );
            ui.label(RichText::new("Out").size(28.0).strong().color(BANNER_BLUE));
            ui.add_space(8.0);

            ui.label(
                RichText::new(format!("{} lights on", self.game.grid().lit_count())).size(20.0),
            );
            ui.label(RichText::new(format!("Seed: {}", self.seed)).monospace());
            ui.add_space(8.0);

            if ui.button(RichText::new("New Game").size(20.0)).clicked() {
                self.new_game();
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label("Next game");
            ui.add(Slider::new(&mut self.settings.rows, 1..=15).text("rows"));
            ui.add(Slider::new(&mut self.settings.cols, 1..=15).text("cols"));
            ui.add(Slider::new(&mut self.settings.chance_lit, 0.0..=1.0).text("chance lit"));
        });
    }

    fn draw_win_banner(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.label(
                RichText::new("Congratulations,")
                    .size(40.0)
                    .color(BANNER_ORANGE),
            );
            ui.label(RichText::new("You WON!!").size(40.0).color(BANNER_BLUE));
            ui.add_space(16.0);
            if ui.button(RichText::new("New Game").size(20.0)).clicked() {
                self.new_game();
            }
        });
    }
}

// Board sides are validated to fit in i32 by the core crate.
#[expect(clippy::cast_possible_truncation)]
fn cell_position(row: usize, col: usize) -> Position {
    Position::new(row as i32, col as i32)
}
