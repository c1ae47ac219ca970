#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use anyhow::bail;

use crate::{
    config::{VariantConfig, MAX_PLAYERS, MIN_PLAYERS},
    game::{Match, MatchResult},
    score::ScoreStore,
    variant::RandomSource,
    MoveError, PlayerId,
};

/// Interactive text front end: prompts on `output`, answers from `input`,
/// wins recorded in `scores`.
pub struct CliSession<R, W, St> {
    input: R,
    output: W,
    scores: St,
    players: Vec<String>,
}

fn parse_number(line: &str) -> Option<usize> {
    let line = line.trim();
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

impl<R, W, St> CliSession<R, W, St> {
    pub fn new(input: R, output: W, scores: St) -> Self {
        Self {
            input,
            output,
            scores,
            players: Vec::new(),
        }
    }

    /// Names entered so far, in player order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn scores(&self) -> &St {
        &self.scores
    }

    pub fn into_parts(self) -> (R, W, St) {
        (self.input, self.output, self.scores)
    }
}

impl<R: BufRead, W: Write, St: ScoreStore> CliSession<R, W, St> {
    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn name_of(&self, player: PlayerId) -> String {
        self.players
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| format!("Player {}", player))
    }

    /// Ask how many players take part (2 or 3).
    pub fn ask_player_count(&mut self) -> anyhow::Result<usize> {
        loop {
            let line = self.prompt("How many players will be playing? (2 or 3) ")?;
            match parse_number(&line) {
                Some(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => return Ok(n),
                _ => self.say("Invalid input, please try again.")?,
            }
        }
    }

    /// Collect `count` player names. Only the first two ever get a turn.
    pub fn ask_names(&mut self, count: usize) -> anyhow::Result<()> {
        self.players.clear();
        for i in 0..count {
            let name = self.prompt(&format!("Player {}, please enter your name: ", i + 1))?;
            self.players.push(name.trim().to_string());
        }
        if count > 2 {
            log::warn!("only players 1 and 2 take turns; {} registered", count);
        }
        Ok(())
    }

    /// Ask for the game type: 3, 4 (with obstacle) or 5 in a row.
    pub fn ask_variant(&mut self) -> anyhow::Result<VariantConfig> {
        loop {
            let line = self.prompt("Select game type: (3, 4, or 5) ")?;
            let choice = parse_number(&line)
                .and_then(|n| u8::try_from(n).ok())
                .and_then(VariantConfig::from_selection);
            match choice {
                Some(config) => return Ok(config),
                None => self.say("Invalid input, please try again.")?,
            }
        }
    }

    pub fn print_board<S: RandomSource>(&mut self, game: &Match<S>) -> anyhow::Result<()> {
        for line in game.render() {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Drive `game` until it ends, one prompt per turn. Bad input and
    /// rejected columns reprompt the same player.
    pub fn play<S: RandomSource>(&mut self, game: &mut Match<S>) -> anyhow::Result<MatchResult> {
        let last_col = game.config().cols() - 1;
        self.print_board(game)?;
        loop {
            if game.is_stalled() {
                self.say("No playable columns remain, it is a tie!")?;
                return Ok(game.result());
            }
            let player = game.current_player();
            let name = self.name_of(player);
            let line = self.prompt(&format!(
                "{}, please select a column to drop your piece (0-{}): ",
                name, last_col
            ))?;
            let Some(col) = parse_number(&line) else {
                self.say("Invalid input, please try again.")?;
                continue;
            };
            match game.attempt_move(col) {
                Ok(_) => {}
                Err(MoveError::InvalidColumn) => {
                    self.say("Invalid input, please try again.")?;
                    continue;
                }
                Err(MoveError::ColumnFull) => {
                    self.say("That column is full, please try again.")?;
                    continue;
                }
                Err(MoveError::ColumnBlocked) => {
                    self.say("That column is blocked, please try again.")?;
                    continue;
                }
                Err(e) => bail!(e),
            }
            self.print_board(game)?;
            match game.result() {
                MatchResult::InProgress => {}
                MatchResult::Win(winner) => {
                    let name = self.name_of(winner);
                    self.say(&format!("Congratulations, {} wins!", name))?;
                    self.update_high_scores(&name)?;
                    return Ok(game.result());
                }
                MatchResult::Draw => {
                    self.say("Game over, it is a tie!")?;
                    return Ok(game.result());
                }
            }
        }
    }

    /// Record a win. A storage failure is reported but the win stands.
    pub fn update_high_scores(&mut self, name: &str) -> anyhow::Result<()> {
        match self.scores.record_win(name) {
            Ok(()) => self.say("High scores updated."),
            Err(e) => {
                log::warn!("{}", e);
                self.say(&format!("Could not update high scores: {}", e))
            }
        }
    }

    pub fn print_high_scores(&mut self) -> anyhow::Result<()> {
        let lines = self.scores.load_all()?;
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    /// Full session: greeting, player setup, game type, then one match on a
    /// `rows × cols` board.
    pub fn run<S: RandomSource>(
        &mut self,
        rows: usize,
        cols: usize,
        source: S,
    ) -> anyhow::Result<Match<S>> {
        self.say("Welcome to Connect N!")?;
        let count = self.ask_player_count()?;
        self.ask_names(count)?;
        let config = self
            .ask_variant()?
            .with_dimensions(rows, cols)
            .map_err(|e| anyhow::anyhow!(e))?;
        log::info!(
            "starting {:?} match on {}x{}, {} in a row",
            config.kind(),
            config.rows(),
            config.cols(),
            config.win_length()
        );
        let mut game = Match::new(config, source).map_err(|e| anyhow::anyhow!(e))?;
        self.play(&mut game)?;
        Ok(game)
    }
}
