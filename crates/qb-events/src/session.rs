//! Board session: owns everything the events share and dispatches triggers.
//!
//! The host calls [`BoardSession::trigger`] when a player lands on, passes,
//! or finishes a turn near an event space. One event runs to completion per
//! call; nothing else touches the session meanwhile.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use qb_core::{PlayerRecord, QuestionBank};

use crate::board_ram::BoardRam;
use crate::coins::{CoinOutcome, run_coin_gamble, run_coin_reward};
use crate::config::EventConfig;
use crate::context::EventContext;
use crate::error::{EventError, EventResult};
use crate::hidden_block::run_hidden_block_toggle;
use crate::host::EventHost;
use crate::swap::{SwapOutcome, run_control_swap, run_turn_order_swap};
use crate::trivia::{QuizOutcome, run_trivia_quiz};

/// The point in a turn at which the host invokes an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// A player stopped on the event space.
    LandOn,
    /// A player moved over the event space without stopping.
    Pass,
    /// A player's turn ended.
    AfterTurn,
}

/// The scripted events a board can place on its spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Ask the player a trivia question.
    TriviaQuiz,
    /// Give the player coins.
    CoinReward,
    /// Let the player wager coins.
    CoinGamble,
    /// Swap controllers with another player.
    ControlSwap,
    /// Swap turn-order positions with another player.
    TurnOrderSwap,
    /// Toggle hidden blocks.
    HiddenBlockToggle,
}

impl BoardEvent {
    /// Every event, in a stable order.
    pub fn all() -> &'static [Self] {
        &[
            Self::TriviaQuiz,
            Self::CoinReward,
            Self::CoinGamble,
            Self::ControlSwap,
            Self::TurnOrderSwap,
            Self::HiddenBlockToggle,
        ]
    }

    /// Whether the event runs on this trigger.
    pub fn fires_on(self, trigger: Trigger) -> bool {
        match self {
            Self::TriviaQuiz | Self::CoinGamble | Self::ControlSwap => trigger == Trigger::LandOn,
            Self::CoinReward => matches!(trigger, Trigger::LandOn | Trigger::Pass),
            Self::TurnOrderSwap | Self::HiddenBlockToggle => trigger == Trigger::AfterTurn,
        }
    }
}

impl std::fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TriviaQuiz => write!(f, "Trivia Quiz"),
            Self::CoinReward => write!(f, "Coin Reward"),
            Self::CoinGamble => write!(f, "Coin Gamble"),
            Self::ControlSwap => write!(f, "Control Swap"),
            Self::TurnOrderSwap => write!(f, "Turn Order Swap"),
            Self::HiddenBlockToggle => write!(f, "Hidden Block Toggle"),
        }
    }
}

/// What an event did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// A trivia quiz was asked.
    Quiz(QuizOutcome),
    /// Coins changed hands.
    Coins(CoinOutcome),
    /// Two players swapped fields.
    Swap(SwapOutcome),
    /// Hidden blocks were toggled.
    HiddenBlocks {
        /// Whether hidden blocks are now disabled.
        disabled: bool,
    },
}

/// A game session on one board.
///
/// Cloning snapshots the whole session, RNG included, so a host can roll back
/// an event that was interrupted.
#[derive(Clone)]
pub struct BoardSession {
    config: EventConfig,
    bank: QuestionBank,
    players: Vec<PlayerRecord>,
    board_ram: BoardRam,
    rng: StdRng,
}

impl BoardSession {
    /// Start a session. Applies `config.active_questions` to the bank.
    pub fn new(
        config: EventConfig,
        bank: QuestionBank,
        players: Vec<PlayerRecord>,
    ) -> EventResult<Self> {
        config.validate()?;
        bank.validate()?;
        if players.is_empty() {
            return Err(EventError::NotEnoughPlayers);
        }
        let bank = match config.active_questions {
            Some(count) => bank.with_active_count(count)?,
            None => bank,
        };
        let rng = StdRng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            bank,
            players,
            board_ram: BoardRam::new(),
            rng,
        })
    }

    /// Resume with board RAM saved from an earlier part of the session.
    pub fn with_board_ram(mut self, board_ram: BoardRam) -> Self {
        self.board_ram = board_ram;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    /// Get the question bank.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Get the player records.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Get the board RAM cells.
    pub fn board_ram(&self) -> &BoardRam {
        &self.board_ram
    }

    /// Clear board RAM for a new game. Players and RNG are kept.
    pub fn new_game(&mut self) {
        self.board_ram.reset();
    }

    /// Run `event` for `trigger`. Returns `None` if the event ignores that trigger.
    pub fn trigger(
        &mut self,
        event: BoardEvent,
        trigger: Trigger,
        player_index: usize,
        host: &mut dyn EventHost,
    ) -> EventResult<Option<EventOutcome>> {
        if !event.fires_on(trigger) {
            return Ok(None);
        }
        self.run(event, player_index, host).map(Some)
    }

    /// Run `event` for the player at `player_index`, regardless of trigger.
    pub fn run(
        &mut self,
        event: BoardEvent,
        player_index: usize,
        host: &mut dyn EventHost,
    ) -> EventResult<EventOutcome> {
        tracing::debug!(%event, player_index, "running event");
        let mut ctx = EventContext {
            config: &self.config,
            bank: &self.bank,
            players: &mut self.players,
            board_ram: &mut self.board_ram,
            rng: &mut self.rng,
            host,
        };

        let outcome = match event {
            BoardEvent::TriviaQuiz => EventOutcome::Quiz(run_trivia_quiz(&mut ctx, player_index)?),
            BoardEvent::CoinReward => EventOutcome::Coins(run_coin_reward(&mut ctx, player_index)?),
            BoardEvent::CoinGamble => EventOutcome::Coins(run_coin_gamble(&mut ctx, player_index)?),
            BoardEvent::ControlSwap => {
                EventOutcome::Swap(run_control_swap(&mut ctx, player_index)?)
            }
            BoardEvent::TurnOrderSwap => {
                EventOutcome::Swap(run_turn_order_swap(&mut ctx, player_index)?)
            }
            BoardEvent::HiddenBlockToggle => EventOutcome::HiddenBlocks {
                disabled: run_hidden_block_toggle(&mut ctx),
            },
        };
        Ok(outcome)
    }
}
