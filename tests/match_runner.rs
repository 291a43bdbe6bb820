use gota::referee::match_runner::{
    play_match, play_match_from_board, play_match_series, MatchConfig, MatchOutcome,
    MatchSeriesConfig,
};
use gota::referee::move_chooser::{FirstLegalChooser, MoveChooser, NotationChooser, RandomChooser};
use gota::utils::render_board::board_rows;
use gota::{Board, Player};

#[test]
fn same_seeds_replay_the_same_game() {
    let config = MatchConfig {
        board_size: 6,
        seed: 99,
        ..MatchConfig::default()
    };
    let run = || {
        let mut white = RandomChooser::new(1);
        let mut black = RandomChooser::new(2);
        play_match(&mut white, &mut black, &config).expect("match runs")
    };

    let a = run();
    let b = run();
    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.turns, b.turns);
    assert_eq!(a.last_action, b.last_action);
    assert_eq!(a.final_board, b.final_board);
}

#[test]
fn finished_game_leaves_loser_without_captures() {
    let mut white = RandomChooser::new(5);
    let mut black = FirstLegalChooser;
    let result = play_match(&mut white, &mut black, &MatchConfig::default()).expect("match runs");

    let MatchOutcome::Win { winner } = result.outcome else {
        panic!("an 8x8 game always ends before 1000 turns");
    };
    let loser = winner.opposite();
    assert!(result.final_board.has_player_lost(loser));
    assert_eq!(
        result.final_board.live_unit_count(),
        64 - result.turns as usize
    );
    assert_eq!(
        result.captures[0] + result.captures[1],
        result.turns
    );
    assert!(result.final_board.is_consistent());
}

#[test]
fn scripted_game_from_rows() {
    // White a1 is stuck behind its own unit; only b2 can fight.
    let board = Board::from_rows(&["bb.", "wb.", "ww."], 0).expect("valid rows");
    let mut white = NotationChooser::new(["a2a3", "b1b2"]);
    let mut black = NotationChooser::new(["b3a3"]);

    let result = play_match_from_board(board, &mut white, &mut black, &MatchConfig::default())
        .expect("match runs");
    assert_eq!(result.outcome, MatchOutcome::Win { winner: Player::White });
    assert_eq!(result.turns, 3);
    assert_eq!(board_rows(&result.final_board), vec!["b..", ".w.", "w.."]);
}

#[test]
fn series_alternates_colours() {
    let config = MatchSeriesConfig {
        games: 4,
        base_seed: 3,
        per_game: MatchConfig {
            board_size: 4,
            ..MatchConfig::default()
        },
        verbose: false,
    };
    let stats = play_match_series(
        |_| Box::new(FirstLegalChooser) as Box<dyn MoveChooser>,
        |_| Box::new(FirstLegalChooser) as Box<dyn MoveChooser>,
        &config,
    )
    .expect("series runs");

    // Identical deterministic choosers: the same colour wins every game, so
    // each player wins exactly the games where they held that colour.
    assert_eq!(stats.player1_wins, 2);
    assert_eq!(stats.player2_wins, 2);
    assert!(stats.white_wins == 0 || stats.white_wins == 4);
}
