//! Behavioural tests for the minimax and alpha-beta engines

mod common;

use common::{board, open_positions, x_first_positions};
use tictactoe_search::{
    cli::commands::verify::cross_check,
    search::{
        ALPHA_MIN, AlphaBeta, BETA_MAX, DRAW, EngineKind, LOSS, Minimax, SearchConfig,
        SearchEngine, TieBreak, WIN, search_alphabeta, search_minimax,
    },
    tictactoe::{Board, LineAnalyzer, Player},
};

mod optimal_values {
    use super::*;

    #[test]
    fn empty_board_is_a_draw_for_both_engines() {
        let empty = Board::new();
        assert_eq!(search_minimax(&empty, true, Player::X).score, DRAW);
        assert_eq!(
            search_alphabeta(&empty, true, Player::X, ALPHA_MIN, BETA_MAX).score,
            DRAW
        );
        // Perspective does not change a drawn game
        assert_eq!(search_minimax(&empty, false, Player::X).score, DRAW);
    }

    #[test]
    fn two_in_a_row_with_open_third_cell_is_completed() {
        let symbols = [
            Some(Player::X),
            Some(Player::X),
            None,
            Some(Player::O),
            Some(Player::O),
            None,
            None,
            None,
            None,
        ];
        let start = Board::try_from(&symbols[..]).unwrap();

        let plain = search_minimax(&start, true, Player::X);
        let pruned = search_alphabeta(&start, true, Player::X, ALPHA_MIN, BETA_MAX);

        for result in [plain, pruned] {
            assert_eq!(result.score, WIN);
            assert_eq!(result.best_move(&start), Some(2));
            assert_eq!(result.board.winner(), Some(Player::X));
        }
    }

    #[test]
    fn split_pair_is_completed_in_the_middle() {
        let start = board("X.X/OO./...");
        let result = search_minimax(&start, true, Player::X);
        assert_eq!(result.score, WIN);
        assert_eq!(result.best_move(&start), Some(1));
    }

    #[test]
    fn minimizer_completes_its_own_line() {
        let start = board("XX./OO./X..");
        for result in [
            search_minimax(&start, false, Player::O),
            search_alphabeta(&start, false, Player::O, ALPHA_MIN, BETA_MAX),
        ] {
            assert_eq!(result.score, LOSS);
            assert_eq!(result.best_move(&start), Some(5));
        }
    }

    #[test]
    fn wins_are_not_discounted_by_depth() {
        // X can win at once on 6, but the fork on 2 also wins and comes first
        let start = board(".O./.O./.XX");
        let result = search_minimax(&start, true, Player::X);
        assert_eq!(result.score, WIN);
        assert_eq!(result.best_move(&start), Some(2));
        assert!(result.board.winner().is_none());
    }

    #[test]
    fn every_immediate_win_scores_as_a_win() {
        for position in open_positions() {
            let winning = LineAnalyzer::winning_moves(&position.board.cells, position.to_move);
            if winning.is_empty() {
                continue;
            }
            let maximizing = search_minimax(&position.board, true, position.to_move);
            let minimizing = search_minimax(&position.board, false, position.to_move);
            assert_eq!(maximizing.score, WIN, "board {}", position.board.encode());
            assert_eq!(minimizing.score, LOSS, "board {}", position.board.encode());
        }
    }

    #[test]
    fn terminal_boards_are_scored_by_turn() {
        let won = board("XXX/OO./...");
        assert_eq!(search_minimax(&won, true, Player::O).score, LOSS);
        assert_eq!(search_minimax(&won, false, Player::O).score, WIN);
        assert_eq!(search_minimax(&won, true, Player::O).board, won);

        let drawn = board("XOX/XXO/OXO");
        assert_eq!(search_minimax(&drawn, true, Player::X).score, DRAW);
        assert_eq!(
            search_alphabeta(&drawn, false, Player::X, ALPHA_MIN, BETA_MAX).score,
            DRAW
        );
    }
}

mod engine_agreement {
    use super::*;

    #[test]
    fn first_best_engines_agree_on_every_reachable_position() {
        let mut minimax = Minimax::new(TieBreak::FirstBest);
        let mut alphabeta = AlphaBeta::new(TieBreak::FirstBest);

        for position in x_first_positions() {
            for maximizing in [true, false] {
                let expected = minimax.search(&position.board, maximizing, position.to_move);
                let actual = alphabeta.search(&position.board, maximizing, position.to_move);
                assert_eq!(
                    expected,
                    actual,
                    "board {} maximizing={maximizing}",
                    position.board.encode()
                );
                assert!(alphabeta.stats().nodes <= minimax.stats().nodes);
            }
        }
    }

    #[test]
    fn board_order_engines_agree_on_every_reachable_position() {
        let config = SearchConfig::default().with_tie_break(TieBreak::BoardOrder);
        let positions = x_first_positions();
        let mut visited = 0;
        let summary = cross_check(&positions, &config, |_| visited += 1);

        assert_eq!(visited, positions.len());
        assert_eq!(summary.searches, positions.len() * 2);
        assert_eq!(summary.score_mismatches, 0);
        assert_eq!(summary.board_mismatches, 0);
        assert_eq!(summary.suboptimal_moves, 0);
        assert!(summary.alphabeta_nodes < summary.minimax_nodes);
    }

    #[test]
    fn chosen_move_is_worth_the_reported_score() {
        let mut exact = Minimax::default();
        for tie_break in [TieBreak::FirstBest, TieBreak::BoardOrder] {
            let mut engine = AlphaBeta::new(tie_break);
            for position in x_first_positions() {
                for maximizing in [true, false] {
                    let result = engine.search(&position.board, maximizing, position.to_move);
                    if result.board == position.board {
                        continue;
                    }
                    let value = exact
                        .search(&result.board, !maximizing, position.to_move.opponent())
                        .score;
                    assert_eq!(
                        value,
                        result.score,
                        "{tie_break:?} board {} maximizing={maximizing} chose {}",
                        position.board.encode(),
                        result.board.encode()
                    );
                }
            }
        }
    }

    #[test]
    fn board_order_engines_choose_the_same_move() {
        let start = board("X.X/OO./...");
        let mut minimax = Minimax::new(TieBreak::BoardOrder);
        let mut alphabeta = AlphaBeta::new(TieBreak::BoardOrder);

        let plain = minimax.search(&start, true, Player::X);
        let pruned = alphabeta.search(&start, true, Player::X);
        assert_eq!(plain.score, WIN);
        assert_eq!(plain, pruned);
        assert_eq!(pruned.best_move(&start), Some(5));
        assert!(alphabeta.stats().nodes < minimax.stats().nodes);
    }

    #[test]
    fn narrowest_valid_window_keeps_exact_scores() {
        let config = SearchConfig::default().with_window(LOSS, WIN);
        let summary = cross_check(&x_first_positions(), &config, |_| {});
        assert_eq!(summary.score_mismatches, 0);
        assert_eq!(summary.board_mismatches, 0);
        assert_eq!(summary.suboptimal_moves, 0);
    }

    #[test]
    fn board_order_prefers_greatest_key_for_maximizer() {
        let start = board(".O./.O./.XX");
        let result = Minimax::new(TieBreak::BoardOrder).search(&start, true, Player::X);
        assert_eq!(result.score, WIN);
        assert_eq!(result.best_move(&start), Some(6));
    }
}

mod node_counts {
    use super::*;

    #[test]
    fn minimax_visits_the_whole_tree() {
        let mut engine = Minimax::default();
        engine.search(&Board::new(), true, Player::X);
        let stats = engine.stats();
        assert_eq!(stats.nodes, 549_946);
        assert_eq!(stats.terminals, 255_168);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn alphabeta_prunes_most_of_the_tree() {
        let mut engine = AlphaBeta::default();
        engine.search(&Board::new(), true, Player::X);
        let stats = engine.stats();
        assert_eq!(stats.nodes, 18_297);
        assert!(stats.cutoffs > 0);
    }

    #[test]
    fn board_order_searches_ties_at_the_bound() {
        let mut engine = AlphaBeta::new(TieBreak::BoardOrder);
        engine.search(&Board::new(), true, Player::X);
        let stats = engine.stats();
        assert_eq!(stats.nodes, 146_120);
        assert!(stats.nodes < 549_946);
    }

    #[test]
    fn configured_engines_report_their_names() {
        let minimax = SearchConfig::new(EngineKind::Minimax).build_engine();
        let alphabeta = SearchConfig::new(EngineKind::AlphaBeta).build_engine();
        assert_eq!(minimax.name(), "minimax");
        assert_eq!(alphabeta.name(), "alpha-beta");
    }

    #[test]
    fn boxed_engines_agree_with_free_functions() {
        let start = board("X.O/.X./...");
        for kind in [EngineKind::Minimax, EngineKind::AlphaBeta] {
            let mut engine = SearchConfig::new(kind).build_engine();
            let result = engine.search(&start, false, Player::O);
            assert_eq!(result, search_minimax(&start, false, Player::O));
        }
    }
}
