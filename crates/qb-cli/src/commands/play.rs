use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use qb_core::{Difficulty, PlayerRecord};
use qb_events::{BoardEvent, BoardRam, BoardSession, EventHost, EventOutcome, Trigger};

pub struct PlayArgs {
    pub bank: Option<PathBuf>,
    pub state: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub rounds: usize,
    pub cpu: bool,
    pub difficulty: String,
    pub no_board_ram: bool,
    pub name: String,
}

/// Terminal host: prints messages and reads answers 1-4 from a reader.
///
/// Once input ends or fails the host goes quiet; the caller discards the
/// interrupted round.
struct TerminalHost<R> {
    reader: R,
    line: String,
    eof: bool,
    error: Option<io::Error>,
}

impl<R: BufRead> TerminalHost<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            eof: false,
            error: None,
        }
    }

    fn interrupted(&self) -> bool {
        self.eof || self.error.is_some()
    }

    /// Read the next valid answer. `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<usize>> {
        loop {
            print!("> ");
            io::stdout().flush()?;

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            match self.line.trim().parse::<usize>() {
                Ok(n @ 1..=4) => return Ok(Some(n - 1)),
                _ => println!("{}", "Answer with a number from 1 to 4.".yellow()),
            }
        }
    }
}

impl<R: BufRead> EventHost for TerminalHost<R> {
    fn show_message(&mut self, text: &str) {
        if !self.interrupted() {
            println!("  {text}\n");
        }
    }

    fn present_choice(
        &mut self,
        player: &PlayerRecord,
        prompt: &str,
        _options: &[String; 4],
        cpu_choice: Option<usize>,
    ) -> usize {
        let mut lines = prompt.lines();
        if let Some(header) = lines.next() {
            println!("  {}", header.bold());
        }
        for line in lines {
            println!("  {line}");
        }
        match cpu_choice {
            Some(choice) => {
                println!("  {} picks {}.", player.name, choice + 1);
                choice
            }
            None => match self.read_answer() {
                Ok(Some(choice)) => choice,
                Ok(None) => {
                    self.eof = true;
                    0
                }
                Err(e) => {
                    self.error = Some(e);
                    0
                }
            },
        }
    }
}

pub fn run(args: PlayArgs) -> Result<(), String> {
    let bank = super::load_bank(args.bank.as_deref())?;
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.no_board_ram {
        config = config.with_board_ram(false);
    }

    let player = if args.cpu {
        let difficulty = Difficulty::parse(&args.difficulty).ok_or_else(|| {
            format!(
                "unknown difficulty '{}' (expected easy, normal, hard)",
                args.difficulty
            )
        })?;
        PlayerRecord::cpu(args.name.as_str(), "Mario", 0, difficulty)
    } else {
        PlayerRecord::human(args.name.as_str(), "Mario", 0)
    };

    let board_ram = match &args.state {
        Some(path) => BoardRam::load_or_default(path)
            .map_err(|e| format!("cannot load board RAM from '{}': {e}", path.display()))?,
        None => BoardRam::new(),
    };

    let mut session = BoardSession::new(config, bank, vec![player])
        .map_err(|e| format!("failed to start session: {e}"))?
        .with_board_ram(board_ram);

    println!(
        "  {} {}",
        "Trivia Quiz".bold(),
        format!(
            "({} questions, policy {}, seed {})",
            session.bank().active_count(),
            session.config().policy(),
            session.config().seed
        )
        .dimmed()
    );
    println!();

    let stdin = io::stdin();
    let mut host = TerminalHost::new(stdin.lock());
    let mut asked = 0;
    let mut correct = 0;

    for _ in 0..args.rounds {
        let before = session.clone();
        let outcome = session
            .trigger(BoardEvent::TriviaQuiz, Trigger::LandOn, 0, &mut host)
            .map_err(|e| e.to_string())?;
        if let Some(e) = host.error.take() {
            return Err(e.to_string());
        }
        if host.eof {
            // unanswered: no question used up, no coins paid
            session = before;
            println!();
            break;
        }
        if let Some(EventOutcome::Quiz(quiz)) = outcome {
            asked += 1;
            if quiz.correct {
                correct += 1;
            }
        }
    }

    if let Some(path) = &args.state {
        session
            .board_ram()
            .save(path)
            .map_err(|e| format!("cannot save board RAM to '{}': {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "board RAM saved");
    }

    let player = &session.players()[0];
    let score = format!("{correct}/{asked}");
    println!(
        "  {} finished with {} coins ({} correct)",
        player.name,
        player.coins,
        if asked > 0 && correct == asked {
            score.green()
        } else {
            score.normal()
        }
    );

    Ok(())
}
