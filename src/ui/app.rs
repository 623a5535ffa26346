//! Main application for the Connect-N GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::{GameConfig, GameMode, MAX_SEARCH_DEPTH};
use crate::error::PlayError;
use crate::game::{AutomatedMove, Game, GameStatus};
use crate::player::Participant;

use super::board_view::BoardView;
use super::theme::*;

/// What the central panel shows
enum Screen {
    /// Mode selection before a game exists
    Start,
    Playing(Game),
}

/// Computer search running on a worker thread
struct Thinking {
    receiver: Receiver<AutomatedMove>,
    start_time: Instant,
}

/// Main Connect-N application
pub struct ConnectApp {
    config: GameConfig,
    screen: Screen,
    board_view: BoardView,
    thinking: Option<Thinking>,
    message: Option<String>,
}

impl ConnectApp {
    /// Create the app on its start screen
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            config,
            screen: Screen::Start,
            board_view: BoardView::default(),
            thinking: None,
            message: None,
        }
    }

    /// Start a game in `mode`; a computer that moves first starts on the next frame
    fn start_game(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.screen = Screen::Playing(Game::from_config(&self.config));
        self.thinking = None;
        self.message = None;
    }

    fn reset_game(&mut self) {
        if let Screen::Playing(game) = &mut self.screen {
            game.reset();
        }
        self.thinking = None;
        self.message = None;
    }

    fn back_to_start(&mut self) {
        self.screen = Screen::Start;
        self.thinking = None;
        self.message = None;
    }

    /// Hand the computer's turn to a worker thread
    fn start_thinking(&mut self) {
        if self.thinking.is_some() {
            return;
        }
        let Screen::Playing(game) = &self.screen else {
            return;
        };
        let Some(turn) = game.automated_turn() else {
            return;
        };

        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(turn.search());
        });

        self.thinking = Some(Thinking {
            receiver: rx,
            start_time: Instant::now(),
        });
    }

    /// Apply the computer's move once its search is done
    fn check_thinking(&mut self) {
        let received = match &self.thinking {
            Some(thinking) => match thinking.receiver.try_recv() {
                Ok(automated_move) => Some(automated_move),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => None,
            },
            None => return,
        };
        self.thinking = None;

        let Some(automated_move) = received else {
            self.message = Some("computer search stopped unexpectedly".to_string());
            return;
        };
        if let Screen::Playing(game) = &mut self.screen {
            match game.apply_automated(automated_move) {
                Ok(_) | Err(PlayError::StaleSearch) => {}
                Err(e) => self.message = Some(e.to_string()),
            }
        }
    }

    fn thinking_elapsed(&self) -> Option<Duration> {
        self.thinking.as_ref().map(|t| t.start_time.elapsed())
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer)").clicked() {
                        self.start_game(GameMode::VsComputer);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two Players)").clicked() {
                        self.start_game(GameMode::TwoPlayers);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Reset (N)").clicked() {
                        self.reset_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.config.mode {
                        GameMode::VsComputer => format!("vs Computer - depth {}", self.config.search_depth),
                        GameMode::TwoPlayers => "Two Players".to_string(),
                    };
                    ui.label(format!(
                        "{} - {}x{}, connect {}",
                        mode_text, self.config.rows, self.config.columns, self.config.line_length
                    ));
                });
            });
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Clickable label in a button frame
    fn action_button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                let elapsed = self.thinking_elapsed();
                if let Screen::Playing(game) = &self.screen {
                    Self::render_turn_card(ui, game, elapsed);
                    ui.add_space(10.0);
                    Self::render_search_card(ui, game);
                    ui.add_space(10.0);
                    if game.status().is_over() {
                        Self::render_game_over_card(ui, game);
                        ui.add_space(10.0);
                    }
                }

                self.render_actions_card(ui);

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_TOKEN));
            ui.label(RichText::new("●").size(20.0).color(BLUE_TOKEN));
            ui.add_space(4.0);
            ui.label(RichText::new(format!("CONNECT {}", self.config.line_length)).size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(ui: &mut egui::Ui, game: &Game, thinking: Option<Duration>) {
        Self::card_frame().show(ui, |ui| {
            let current = game.current_player();
            let (fill, _) = token_colors(current.token()).unwrap_or((OTHER_TOKEN, OTHER_TOKEN));

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(2.0);
                    ui.label(RichText::new(current.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = match (game.status(), thinking) {
                        (GameStatus::AwaitingMove, Some(elapsed)) => {
                            (format!("Computer thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_WARNING)
                        }
                        (GameStatus::AwaitingMove, None) if current.is_automated() => {
                            ("Computer to move".to_string(), STATUS_WARNING)
                        }
                        (GameStatus::AwaitingMove, None) => ("Your turn".to_string(), STATUS_OK),
                        _ => ("Game Over".to_string(), WIN_HIGHLIGHT),
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last search of each automated player
    fn render_search_card(ui: &mut egui::Ui, game: &Game) {
        if !game.players().iter().any(Participant::is_automated) {
            return;
        }

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for participant in game.players() {
                let Some((result, stats)) = participant.last_search() else {
                    continue;
                };
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        let choice = match result.column {
                            Some(column) => format!("{} -> column {}", participant.name(), column + 1),
                            None => format!("{}: no move", participant.name()),
                        };
                        ui.label(RichText::new(choice).size(11.0).strong().color(STATUS_OK));
                        ui.label(RichText::new(format!("Score: {}", result.value)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", stats.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", stats.nodes)).size(10.0).color(TEXT_MUTED));
                            ui.label(RichText::new(format!("{} cutoffs", stats.cutoffs)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });
            }
        });
    }

    fn render_game_over_card(ui: &mut egui::Ui, game: &Game) {
        let (headline, color) = match game.winner() {
            Some(winner) => (
                format!("{} WINS!", winner.name().to_uppercase()),
                token_colors(winner.token()).map_or(WIN_HIGHLIGHT, |(fill, _)| fill),
            ),
            None => ("DRAW".to_string(), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(color));
                });
            });
    }

    /// Reset and New Game on the game screen; mode buttons on the start screen
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let playing = matches!(self.screen, Screen::Playing(_));
            ui.horizontal(|ui| {
                if !playing {
                    ui.label(RichText::new("Pick a mode to start").size(11.0).color(TEXT_SECONDARY));
                    return;
                }
                if Self::action_button(ui, "Reset") {
                    self.reset_game();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "New Game") {
                    self.back_to_start();
                }
            });
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Mode selection and computer settings
    fn render_start_screen(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 4.0);
                ui.label(RichText::new("New Game").size(28.0).strong().color(TEXT_PRIMARY));
                ui.add_space(16.0);

                Self::card_frame().show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.add(egui::Slider::new(&mut self.config.search_depth, 0..=MAX_SEARCH_DEPTH).text("search depth"));
                    ui.checkbox(&mut self.config.alpha_beta, "alpha-beta pruning");
                    ui.checkbox(&mut self.config.computer_first, "computer moves first");
                });

                ui.add_space(16.0);
                if ui.button(RichText::new("Play vs Computer").size(16.0)).clicked() {
                    self.start_game(GameMode::VsComputer);
                }
                ui.add_space(8.0);
                if ui.button(RichText::new("Two Players").size(16.0)).clicked() {
                    self.start_game(GameMode::TwoPlayers);
                }
            });
        });
    }

    /// Render the grid and forward clicks to the game
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let Screen::Playing(game) = &mut self.screen else {
                return;
            };

            let winning_line = game.winning_line();
            let accepts_input = self.thinking.is_none()
                && game.status() == GameStatus::AwaitingMove
                && !game.current_player().is_automated();

            let clicked = ui
                .vertical_centered(|ui| {
                    self.board_view.show(
                        ui,
                        game.grid(),
                        game.current_player().token(),
                        game.last_placement().map(|p| p.coord),
                        winning_line.as_deref(),
                        accepts_input,
                    )
                })
                .inner;

            if let Some(column) = clicked {
                self.message = game.place(column).err().map(|e| e.to_string());
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let reset = ctx.input(|i| i.key_pressed(egui::Key::N));
        if reset {
            self.reset_game();
        }
    }
}

impl eframe::App for ConnectApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.check_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        if matches!(self.screen, Screen::Start) {
            self.render_start_screen(ctx);
        } else {
            self.render_board(ctx);
        }

        // Covers moves and new games made during this frame
        self.start_thinking();

        // Keep polling the worker while it searches
        if self.thinking.is_some() {
            ctx.request_repaint();
        }
    }
}
