//! Shared fixture for event tests.

use qb_core::{Difficulty, PlayerRecord, QuestionBank};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board_ram::BoardRam;
use crate::config::EventConfig;
use crate::context::EventContext;
use crate::host::ScriptedHost;
use crate::trivia::sample_bank;

pub(crate) struct Fixture {
    pub config: EventConfig,
    pub bank: QuestionBank,
    pub players: Vec<PlayerRecord>,
    pub ram: BoardRam,
    pub rng: StdRng,
}

impl Fixture {
    pub fn new(config: EventConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            bank: sample_bank().unwrap(),
            players: vec![
                PlayerRecord::human("Ana", "Mario", 0),
                PlayerRecord::cpu("Bot", "Luigi", 1, Difficulty::Hard),
                PlayerRecord::cpu("Cid", "Peach", 2, Difficulty::Easy),
                PlayerRecord::cpu("Dee", "Yoshi", 3, Difficulty::Normal),
            ],
            ram: BoardRam::new(),
        }
    }

    pub fn ctx<'a>(&'a mut self, host: &'a mut ScriptedHost) -> EventContext<'a> {
        EventContext {
            config: &self.config,
            bank: &self.bank,
            players: &mut self.players,
            board_ram: &mut self.ram,
            rng: &mut self.rng,
            host,
        }
    }
}
