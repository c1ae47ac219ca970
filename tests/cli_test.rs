#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::io::Cursor;

use connect_n::{
    CliSession, InMemoryScores, Match, MatchResult, RandomSource, ScoreError, ScoreStore,
    VariantConfig, VariantKind, PLAYER_ONE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

struct Scripted {
    rolls: VecDeque<bool>,
    cell: (usize, usize),
}

impl RandomSource for Scripted {
    fn roll(&mut self, _probability: f64) -> bool {
        self.rolls.pop_front().unwrap_or(false)
    }

    fn pick_cell(&mut self, _rows: usize, _cols: usize) -> (usize, usize) {
        self.cell
    }
}

/// Store whose writes always fail.
struct BrokenStore;

impl ScoreStore for BrokenStore {
    fn record_win(&mut self, _player: &str) -> Result<(), ScoreError> {
        Err(ScoreError::Persistence {
            path: "scores.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        })
    }

    fn load_all(&self) -> Result<Vec<String>, ScoreError> {
        Ok(Vec::new())
    }
}

fn session(input: &str) -> CliSession<Cursor<Vec<u8>>, Vec<u8>, InMemoryScores> {
    CliSession::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        InMemoryScores::new(),
    )
}

fn output_of<St>(session: CliSession<Cursor<Vec<u8>>, Vec<u8>, St>) -> String {
    let (_, out, _) = session.into_parts();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_full_session_records_winner() {
    let mut cli = session("2\nAlice\nBob\n3\n0\n0\n1\n1\n2\n");
    let game = cli.run(6, 7, SmallRng::seed_from_u64(1)).unwrap();

    assert_eq!(game.result(), MatchResult::Win(PLAYER_ONE));
    assert_eq!(game.config().win_length(), 3);
    assert_eq!(cli.players(), &["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(cli.scores().load_all().unwrap(), vec!["Alice: 1"]);

    let out = output_of(cli);
    assert!(out.starts_with("Welcome to Connect N!"));
    assert!(out.contains("Alice, please select a column to drop your piece (0-6): "));
    assert!(out.contains("Congratulations, Alice wins!"));
    assert!(out.contains("High scores updated."));
}

#[test]
fn test_bad_input_reprompts() {
    let mut cli = session("4\nx\n2\nAlice\nBob\n9\n3\nabc\n7\n-1\n0\n0\n1\n1\n2\n");
    let game = cli.run(6, 7, SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(game.result(), MatchResult::Win(PLAYER_ONE));

    let out = output_of(cli);
    // 4, x, 9, abc, 7, -1
    assert_eq!(out.matches("Invalid input, please try again.").count(), 6);
}

#[test]
fn test_full_column_reprompts_same_player() {
    let mut cli = session("2\nAlice\nBob\n3\n0\n0\n0\n0\n0\n0\n0\n1\n2\n1\n2\n1\n");
    let game = cli.run(6, 7, SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(game.result(), MatchResult::Win(PLAYER_ONE));

    let out = output_of(cli);
    assert_eq!(out.matches("That column is full, please try again.").count(), 1);
    assert!(out.contains("Congratulations, Alice wins!"));
}

#[test]
fn test_three_players_only_two_take_turns() {
    let mut cli = session("3\nAlice\nBob\nCarol\n3\n0\n0\n1\n1\n2\n");
    cli.run(6, 7, SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(cli.players().len(), 3);
    let out = output_of(cli);
    assert!(!out.contains("Carol, please select"));
}

#[test]
fn test_blocked_column_message_and_marker() {
    let source = Scripted {
        rolls: VecDeque::from(vec![true]),
        cell: (0, 3),
    };
    let mut game = Match::new(VariantConfig::connect4_plus(), source).unwrap();
    let mut cli = session("3\n0\n1\n0\n1\n0\n1\n0\n");
    let result = cli.play(&mut game).unwrap();

    assert_eq!(result, MatchResult::Win(PLAYER_ONE));
    let out = output_of(cli);
    assert!(out.contains("That column is blocked, please try again."));
    assert!(out.contains("|   |   |   | X |   |   |   |"));
    assert!(out.contains("Congratulations, Player 1 wins!"));
}

#[test]
fn test_stalled_board_ends_in_tie() {
    let source = Scripted {
        rolls: VecDeque::from(vec![true]),
        cell: (1, 1),
    };
    let config = VariantConfig::new(VariantKind::Obstacle, 2, 2, 3).unwrap();
    let mut game = Match::new(config, source).unwrap();
    let mut cli = session("0\n0\n");
    let result = cli.play(&mut game).unwrap();

    assert_eq!(result, MatchResult::InProgress);
    assert!(game.is_stalled());
    assert!(output_of(cli).contains("No playable columns remain, it is a tie!"));
}

#[test]
fn test_score_failure_does_not_undo_win() {
    let mut game = Match::with_seed(VariantConfig::connect3(), 3).unwrap();
    let mut cli = CliSession::new(
        Cursor::new(b"0\n0\n1\n1\n2\n".to_vec()),
        Vec::new(),
        BrokenStore,
    );
    let result = cli.play(&mut game).unwrap();

    assert_eq!(result, MatchResult::Win(PLAYER_ONE));
    assert_eq!(game.result(), MatchResult::Win(PLAYER_ONE));
    let out = output_of(cli);
    assert!(out.contains("Could not update high scores: failed to persist scores to scores.txt: disk full"));
    assert!(!out.contains("High scores updated."));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut cli = session("2\nAlice\n");
    assert!(cli.run(6, 7, SmallRng::seed_from_u64(1)).is_err());
}

#[test]
fn test_print_high_scores() {
    let mut scores = InMemoryScores::new();
    scores.record_win("A").unwrap();
    scores.record_win("A").unwrap();
    scores.record_win("B").unwrap();
    let mut cli = CliSession::new(Cursor::new(Vec::new()), Vec::new(), scores);
    cli.print_high_scores().unwrap();
    assert_eq!(output_of(cli), "A: 2\nB: 1\n");
}
