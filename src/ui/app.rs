//! Main application for the Caro GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::{info, warn};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{Dialog, EndReason, GameMode, GameResult, GameSettings, GameState, MENU_SIZES};
use super::theme::*;
use crate::{Difficulty, Mark, Pos};

const RULES: &str = "Players take turns placing X and O on the grid, X first. \
Five or more of your marks in an unbroken row, column or diagonal wins. \
A full board without a line of five is a draw.";

/// Which screen is on display
enum Screen {
    Menu,
    Playing(Box<GameState>),
}

/// Something the player asked for during this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Place(Pos),
    NewGame,
    Undo,
    Hint,
    Surrender,
    OfferDraw,
    Answer(bool),
    ToggleDebug,
    BackToMenu,
}

/// Main Caro application
pub struct CaroApp {
    /// Settings edited in the menu and used for the next game
    settings: GameSettings,
    screen: Screen,
    board_view: BoardView,
    show_debug: bool,
    menu_error: Option<String>,
}

impl CaroApp {
    /// Create the app on the menu screen with the given starting settings
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: GameSettings) -> Self {
        Self {
            settings,
            screen: Screen::Menu,
            board_view: BoardView::default(),
            show_debug: true,
            menu_error: None,
        }
    }

    fn start_game(&mut self) {
        match GameState::new(self.settings.clone()) {
            Ok(state) => {
                self.menu_error = None;
                self.screen = Screen::Playing(Box::new(state));
            }
            Err(e) => {
                warn!(%e, "could not start game");
                self.menu_error = Some(e.to_string());
            }
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn section_label(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(10.0).color(TEXT_MUTED));
    }

    /// Clickable label inside a rounded button frame
    fn action_button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    /// Render the menu screen
    fn render_menu(&mut self, ctx: &Context) {
        let mut start = false;

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 40.0);
                        ui.label(RichText::new("X").size(36.0).strong().color(X_MARK));
                        ui.label(RichText::new("O").size(36.0).strong().color(O_MARK));
                    });
                    ui.label(RichText::new("CARO").size(28.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("five in a row").size(12.0).color(TEXT_MUTED));
                    ui.add_space(20.0);

                    ui.set_max_width(440.0);
                    Self::card_frame().show(ui, |ui| {
                        Self::section_label(ui, "BOARD SIZE");
                        ui.horizontal(|ui| {
                            for size in MENU_SIZES {
                                ui.selectable_value(&mut self.settings.board_size, size, format!("{0}x{0}", size));
                            }
                        });
                        ui.add_space(10.0);

                        Self::section_label(ui, "MODE");
                        ui.horizontal(|ui| {
                            let human_mark = self.settings.human_mark().unwrap_or(Mark::X);
                            ui.selectable_value(&mut self.settings.mode, GameMode::PvE { human_mark }, "Player vs AI");
                            ui.selectable_value(&mut self.settings.mode, GameMode::PvP, "Player vs Player");
                        });

                        if let GameMode::PvE { human_mark } = &mut self.settings.mode {
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new("Play as").size(12.0).color(TEXT_SECONDARY));
                                ui.selectable_value(human_mark, Mark::X, "X (first)");
                                ui.selectable_value(human_mark, Mark::O, "O (second)");
                            });
                            ui.add_space(10.0);

                            Self::section_label(ui, "DIFFICULTY");
                            ui.horizontal(|ui| {
                                for difficulty in Difficulty::ALL {
                                    ui.selectable_value(&mut self.settings.difficulty, difficulty, difficulty.label());
                                }
                            });
                        }
                    });

                    ui.add_space(12.0);
                    Self::card_frame().show(ui, |ui| {
                        Self::section_label(ui, "RULES");
                        ui.add_space(4.0);
                        ui.label(RichText::new(RULES).size(12.0).color(TEXT_SECONDARY));
                    });

                    ui.add_space(16.0);
                    let button = egui::Button::new(RichText::new("Start game").size(16.0).strong())
                        .min_size(Vec2::new(160.0, 36.0));
                    if ui.add(button).clicked() {
                        start = true;
                    }

                    if let Some(err) = &self.menu_error {
                        ui.add_space(8.0);
                        ui.label(RichText::new(err).size(12.0).color(TIMER_CRITICAL));
                    }
                });
            });

        if start || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.start_game();
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&self, ctx: &Context, state: &GameState, actions: &mut Vec<Action>) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        actions.push(Action::NewGame);
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        actions.push(Action::Undo);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Back to Menu (Esc)").clicked() {
                        actions.push(Action::BackToMenu);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut show_debug = self.show_debug;
                    if ui.checkbox(&mut show_debug, "Debug Panel (D)").changed() {
                        actions.push(Action::ToggleDebug);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = state.board.size();
                    let mode_text = match state.settings.mode {
                        GameMode::PvE { human_mark } => format!(
                            "{0}x{0} - PvE {1} - You: {2}",
                            size,
                            state.settings.difficulty,
                            human_mark.symbol()
                        ),
                        GameMode::PvP => format!("{0}x{0} - PvP", size),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&self, ctx: &Context, state: &GameState, actions: &mut Vec<Action>) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("CARO").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                Self::render_turn_card(ui, state);
                ui.add_space(10.0);

                Self::render_timer_card(ui, state);
                ui.add_space(10.0);

                Self::render_actions_card(ui, state, actions);

                if self.show_debug {
                    ui.add_space(10.0);
                    Self::render_debug_card(ui, state);
                }

                if let Some(result) = &state.game_over {
                    ui.add_space(10.0);
                    Self::render_game_over_card(ui, result, actions);
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            let mark = state.current_turn;

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, BUTTON_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    mark.symbol(),
                    egui::FontId::proportional(28.0),
                    mark_color(mark),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{} to move", mark.symbol())).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if state.is_ai_turn() {
                        ("AI to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(RichText::new(format!("Move #{}", state.move_count())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render timer card
    fn render_timer_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            Self::section_label(ui, "TIMER");
            ui.add_space(6.0);

            if let Some(elapsed) = state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 1.5 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(ui: &mut egui::Ui, state: &GameState, actions: &mut Vec<Action>) {
        let pvp = state.settings.mode == GameMode::PvP;
        let playing = state.game_over.is_none();

        Self::card_frame().show(ui, |ui| {
            Self::section_label(ui, "ACTIONS");
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                if Self::action_button(ui, "New game") {
                    actions.push(Action::NewGame);
                }
                if Self::action_button(ui, "Undo") {
                    actions.push(Action::Undo);
                }
                if pvp && playing && Self::action_button(ui, "Hint") {
                    actions.push(Action::Hint);
                }
                if playing && Self::action_button(ui, "Surrender") {
                    actions.push(Action::Surrender);
                }
                if pvp && playing && Self::action_button(ui, "Offer draw") {
                    actions.push(Action::OfferDraw);
                }
                if Self::action_button(ui, "Menu") {
                    actions.push(Action::BackToMenu);
                }
            });
        });
    }

    /// Render debug card
    fn render_debug_card(ui: &mut egui::Ui, state: &GameState) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                Self::section_label(ui, "AI DEBUG");
                ui.add_space(6.0);

                let Some(result) = &state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(result.search_type.label()).size(11.0).strong().color(TIMER_NORMAL));
                        ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(ui: &mut egui::Ui, result: &GameResult, actions: &mut Vec<Action>) {
        let headline = match result.winner {
            Some(mark) => format!("{} WINS!", mark.symbol()),
            None => "DRAW".to_string(),
        };
        let reason = match result.reason {
            EndReason::FiveInRow => "by five in a row",
            EndReason::BoardFull => "board is full",
            EndReason::Surrender => "by surrender",
            EndReason::AgreedDraw => "by agreement",
        };
        let accent = result.winner.map_or(TEXT_PRIMARY, mark_color);

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(22.0).strong().color(accent));
                    ui.add_space(4.0);
                    ui.label(RichText::new(reason).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if Self::action_button(ui, "New Game") {
                        actions.push(Action::NewGame);
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Modal for the open yes/no question
    fn render_dialog(ctx: &Context, dialog: Dialog, actions: &mut Vec<Action>) {
        let (title, text, yes, no) = match dialog {
            Dialog::ConfirmSurrender { player } => (
                "Surrender",
                format!("{} gives up the game?", player.symbol()),
                "Surrender",
                "Keep playing",
            ),
            Dialog::DrawOffer { from } => (
                "Draw offer",
                format!("{} offers a draw. {}, do you accept?", from.symbol(), from.opponent().symbol()),
                "Accept",
                "Reject",
            ),
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(text).size(14.0));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button(yes).clicked() {
                        actions.push(Action::Answer(true));
                    }
                    if ui.button(no).clicked() {
                        actions.push(Action::Answer(false));
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context, state: &GameState, actions: &mut Vec<Action>) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let overlay = BoardOverlay {
                    current_turn: state.current_turn,
                    last_move: state.last_move,
                    suggested_move: state.suggested_move,
                    winning_line: state.game_over.as_ref().and_then(|r| r.winning_line.as_ref()),
                    locked: state.game_over.is_some()
                        || state.dialog.is_some()
                        || state.is_ai_thinking()
                        || !state.is_human_turn(),
                };

                ui.centered_and_justified(|ui| {
                    if let Some(pos) = self.board_view.show(ui, &state.board, &overlay) {
                        actions.push(Action::Place(pos));
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(ctx: &Context, state: &GameState, actions: &mut Vec<Action>) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                actions.push(Action::ToggleDebug);
            }
            if i.key_pressed(egui::Key::H) && state.settings.mode == GameMode::PvP {
                actions.push(Action::Hint);
            }
            if i.key_pressed(egui::Key::U) {
                actions.push(Action::Undo);
            }
            if i.key_pressed(egui::Key::N) {
                actions.push(Action::NewGame);
            }
            if i.key_pressed(egui::Key::Escape) {
                actions.push(Action::BackToMenu);
            }
        });
    }

    /// Apply this frame's actions; returns false when the game should close
    fn apply(&mut self, state: &mut GameState, actions: Vec<Action>) -> bool {
        for action in actions {
            match action {
                Action::Place(pos) => {
                    if let Err(msg) = state.try_place_mark(pos) {
                        state.message = Some(msg);
                    }
                }
                Action::NewGame => state.reset(),
                Action::Undo => state.undo(),
                Action::Hint => state.request_suggestion(),
                Action::Surrender => state.request_surrender(),
                Action::OfferDraw => state.offer_draw(),
                Action::Answer(accept) => state.answer_dialog(accept),
                Action::ToggleDebug => self.show_debug = !self.show_debug,
                Action::BackToMenu => {
                    info!("back to menu");
                    return false;
                }
            }
        }
        true
    }

    fn update_game(&mut self, ctx: &Context, mut state: Box<GameState>) {
        let mut actions = Vec::new();

        Self::handle_input(ctx, &state, &mut actions);

        state.check_ai_result();
        if state.is_ai_turn() && !state.is_ai_thinking() && state.game_over.is_none() {
            state.start_ai_thinking();
        }

        self.render_menu_bar(ctx, &state, &mut actions);
        self.render_side_panel(ctx, &state, &mut actions);
        self.render_board(ctx, &state, &mut actions);
        if let Some(dialog) = state.dialog {
            Self::render_dialog(ctx, dialog, &mut actions);
        }

        // Timers and the AI reply need fresh frames
        if state.is_ai_thinking() || state.game_over.is_none() {
            ctx.request_repaint();
        }

        if self.apply(&mut state, actions) {
            self.screen = Screen::Playing(state);
        }
    }
}

impl eframe::App for CaroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match std::mem::replace(&mut self.screen, Screen::Menu) {
            Screen::Menu => self.render_menu(ctx),
            Screen::Playing(state) => self.update_game(ctx, state),
        }
    }
}
