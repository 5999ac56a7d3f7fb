//! Game state management for the Caro GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::{check_winner, AIEngine, Board, BoardError, Difficulty, Mark, MoveResult, Pos, WinLine};

/// Board sizes offered in the menu
pub const MENU_SIZES: [usize; 4] = [7, 10, 15, 20];

/// Hints always come from the same tier, whatever the menu says
const HINT_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_mark: Mark },
    /// Player vs Player on one device
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_mark: Mark::X }
    }
}

/// Everything chosen before a game starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub board_size: usize,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Pause before the AI answers, so its move is visible as a reply
    pub ai_delay: Duration,
    /// Fixed engine seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: crate::board::DEFAULT_BOARD_SIZE,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_delay: Duration::from_millis(300),
            seed: None,
        }
    }
}

impl GameSettings {
    /// Human's mark in PvE, `None` in PvP
    pub fn human_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::PvE { human_mark } => Some(human_mark),
            GameMode::PvP => None,
        }
    }

    fn engine(&self) -> AIEngine {
        self.seed.map_or_else(AIEngine::new, AIEngine::with_seed)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    FiveInRow,
    BoardFull,
    Surrender,
    AgreedDraw,
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw
    pub winner: Option<Mark>,
    pub reason: EndReason,
    pub winning_line: Option<WinLine>,
}

/// Question waiting for a player's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// `player` asked to resign and must confirm
    ConfirmSurrender { player: Mark },
    /// `from` offered a draw; the other player accepts or rejects
    DrawOffer { from: Mark },
}

/// Engine reply from the worker thread; the engine travels back with it so
/// its random state carries over between moves.
struct AiReply {
    engine: AIEngine,
    result: MoveResult,
}

/// AI computation state
enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub settings: GameSettings,
    pub board: Board,
    pub current_turn: Mark,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    pub dialog: Option<Dialog>,

    /// `None` while the worker thread owns it
    engine: Option<AIEngine>,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Result<Self, BoardError> {
        let board = Board::new(settings.board_size)?;
        info!(
            size = settings.board_size,
            mode = ?settings.mode,
            difficulty = %settings.difficulty,
            "new game"
        );
        Ok(Self {
            engine: Some(settings.engine()),
            settings,
            board,
            current_turn: Mark::X,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            dialog: None,
        })
    }

    /// Start over with the same settings
    pub fn reset(&mut self) {
        for (pos, _) in self.move_history.drain(..) {
            self.board.clear(pos);
        }
        // A pending AI reply is for the old position; dropping the receiver discards it
        if matches!(self.ai_state, AiState::Thinking { .. }) {
            self.engine = Some(self.settings.engine());
        }
        self.ai_state = AiState::Idle;
        self.current_turn = Mark::X;
        self.game_over = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        self.dialog = None;
        info!(size = self.board.size(), "game restarted");
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.settings.mode {
            GameMode::PvE { human_mark } => self.current_turn == human_mark,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.settings.mode {
            GameMode::PvE { human_mark } => self.current_turn != human_mark,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Attempt to place the current player's mark at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.dialog.is_some() {
            return Err("Answer the open question first".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| {
            warn!(%e, "move rejected");
            e.to_string()
        })
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), BoardError> {
        let mark = self.current_turn;
        self.board.try_place(pos, mark)?;

        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if let Some(line) = check_winner(&self.board, pos, mark) {
            info!(winner = mark.symbol(), moves = self.move_count(), "five in a row");
            self.game_over = Some(GameResult {
                winner: Some(mark),
                reason: EndReason::FiveInRow,
                winning_line: Some(line),
            });
            return Ok(());
        }

        if self.board.is_full() {
            info!(moves = self.move_count(), "board full, draw");
            self.game_over = Some(GameResult {
                winner: None,
                reason: EndReason::BoardFull,
                winning_line: None,
            });
            return Ok(());
        }

        self.current_turn = mark.opponent();
        self.move_timer.start();
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        let Some(mut engine) = self.engine.take() else {
            return;
        };

        let board = self.board.clone();
        let mark = self.current_turn;
        let difficulty = self.settings.difficulty;
        let move_count = self.move_count();
        let delay = self.settings.ai_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(delay);
            let result = engine.get_move_with_stats(&board, mark, difficulty, move_count);
            let _ = tx.send(AiReply { engine, result });
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let reply = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(reply) => Some((reply, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a reply");
                    self.ai_state = AiState::Idle;
                    self.engine = Some(self.settings.engine());
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((AiReply { engine, result }, elapsed)) = reply else {
            return;
        };

        self.ai_state = AiState::Idle;
        self.engine = Some(engine);

        // The game ended while the worker was busy, e.g. by surrender
        if self.game_over.is_some() {
            info!(reply = ?result.best_move, "discarding AI reply for a finished game");
            return;
        }

        self.move_timer.set_ai_time(elapsed);
        self.last_ai_result = Some(result.clone());

        match result.best_move {
            Some(pos) => {
                if let Err(e) = self.execute_move(pos) {
                    warn!(%e, "AI produced an illegal move");
                    self.message = Some(format!("AI move rejected: {}", e));
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine for a move on behalf of the side to move (PvP only)
    pub fn request_suggestion(&mut self) {
        if self.settings.mode != GameMode::PvP || self.game_over.is_some() || self.dialog.is_some() {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        let result =
            engine.get_move_with_stats(&self.board, self.current_turn, HINT_DIFFICULTY, self.move_history.len());
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move; in PvE also the AI reply before it, so the human
    /// is to move again
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() || self.dialog.is_some() {
            return;
        }
        // Resignations and agreed draws are final
        if self
            .game_over
            .as_ref()
            .is_some_and(|r| matches!(r.reason, EndReason::Surrender | EndReason::AgreedDraw))
        {
            return;
        }

        let human = self.settings.human_mark();
        while let Some((pos, mark)) = self.move_history.pop() {
            self.board.clear(pos);
            self.current_turn = mark;
            if human.map_or(true, |h| h == mark) {
                break;
            }
        }

        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }

    /// Player to be asked about resigning: the human in PvE, the side to
    /// move in PvP
    pub fn request_surrender(&mut self) {
        if self.game_over.is_some() || self.dialog.is_some() {
            return;
        }
        let player = self.settings.human_mark().unwrap_or(self.current_turn);
        self.dialog = Some(Dialog::ConfirmSurrender { player });
    }

    /// The side to move offers a draw to the other player (PvP only)
    pub fn offer_draw(&mut self) {
        if self.settings.mode != GameMode::PvP || self.game_over.is_some() || self.dialog.is_some() {
            return;
        }
        self.dialog = Some(Dialog::DrawOffer {
            from: self.current_turn,
        });
    }

    /// Resolve the open dialog with a yes/no answer
    pub fn answer_dialog(&mut self, accept: bool) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };

        match (dialog, accept) {
            (Dialog::ConfirmSurrender { player }, true) => {
                info!(loser = player.symbol(), "surrender");
                self.finish_without_line(Some(player.opponent()), EndReason::Surrender);
            }
            (Dialog::DrawOffer { from }, true) => {
                info!(from = from.symbol(), "draw agreed");
                self.finish_without_line(None, EndReason::AgreedDraw);
            }
            (Dialog::DrawOffer { from }, false) => {
                self.message = Some(format!("{} declined the draw", from.opponent().symbol()));
            }
            (Dialog::ConfirmSurrender { .. }, false) => {}
        }
    }

    fn finish_without_line(&mut self, winner: Option<Mark>, reason: EndReason) {
        self.move_timer.stop();
        self.game_over = Some(GameResult {
            winner,
            reason,
            winning_line: None,
        });
    }
}
