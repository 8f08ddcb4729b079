//! Turn state machine.
//!
//! A [`Game`] waits for a move from the active side, applies it, and then
//! either stays with the same side (the moved piece has another capture, a
//! chain capture) or passes the turn and computes the new side's moves.
//!
//! Win and draw detection are left to the host. A side without legal moves is
//! simply an empty [`MoveList`].

use crate::hooks::{MoveSelector, PieceObserver};
use crate::layout::{DiagramLayout, LayoutProvider, StandardLayout};
use crate::movegen::{generate_moves, refresh_moves};
use crate::{EngineError, GameConfig, MoveList, Position};
use draughts_core::{Coord, Diagram, Move, PieceId, Side};
use std::fmt;

/// A game in progress.
pub struct Game {
    config: GameConfig,
    position: Position,
    side: Side,
    /// Moves the active side may choose from right now.
    legal: MoveList,
    /// Piece that must keep capturing, during a chain.
    chain: Option<PieceId>,
    history: Vec<Move>,
    observer: Option<Box<dyn PieceObserver>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("position", &self.position)
            .field("side", &self.side)
            .field("legal", &self.legal)
            .field("chain", &self.chain)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Sets up a game from a configuration and a layout provider.
    pub fn new(config: GameConfig, layout: &dyn LayoutProvider) -> Result<Self, EngineError> {
        Self::setup(config, layout, None)
    }

    /// Sets up a game with the standard layout for `config`.
    pub fn standard(config: GameConfig) -> Result<Self, EngineError> {
        Self::new(config, &StandardLayout::new(config.rows_per_side))
    }

    /// Sets up a game and reports every created piece to `observer`.
    pub fn with_observer(
        config: GameConfig,
        layout: &dyn LayoutProvider,
        observer: Box<dyn PieceObserver>,
    ) -> Result<Self, EngineError> {
        Self::setup(config, layout, Some(observer))
    }

    /// Sets up a game from a diagram, which also fixes the board size.
    pub fn from_diagram(diagram: &Diagram, starting_side: Side) -> Result<Self, EngineError> {
        let config = GameConfig {
            width: diagram.width(),
            depth: diagram.depth(),
            starting_side,
            rows_per_side: 0,
        };
        Self::new(config, &DiagramLayout::new(diagram.clone()))
    }

    fn setup(
        config: GameConfig,
        layout: &dyn LayoutProvider,
        mut observer: Option<Box<dyn PieceObserver>>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let mut position = Position::new(config.width, config.depth)?;

        for side in Side::ALL {
            for placement in layout.layout(config.width, config.depth, side) {
                let id = position.spawn(side, placement.coord, placement.special)?;
                if let (Some(obs), Some(piece)) = (observer.as_mut(), position.piece(id)) {
                    obs.piece_created(piece);
                }
            }
        }

        let side = config.starting_side;
        let legal = refresh_moves(&mut position, side);
        tracing::debug!(
            width = config.width,
            depth = config.depth,
            white = position.pieces(Side::White).len(),
            black = position.pieces(Side::Black).len(),
            %side,
            "game set up"
        );

        Ok(Game {
            config,
            position,
            side,
            legal,
            chain: None,
            history: Vec::new(),
            observer,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board and pieces, read-only.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the side to move.
    pub fn current_side(&self) -> Side {
        self.side
    }

    /// Returns the moves the active side may choose from.
    ///
    /// During a chain capture this holds only further captures by the same
    /// piece.
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal
    }

    /// Computes the full legal move set of any side for the current board,
    /// without touching the game state or the per-piece caches.
    pub fn moves_for(&self, side: Side) -> MoveList {
        generate_moves(&self.position, side)
    }

    /// Returns the piece that must continue capturing, if a chain is active.
    pub fn chain_piece(&self) -> Option<PieceId> {
        self.chain
    }

    /// Returns every move applied so far, including chain steps.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the number of moves applied.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Finds the legal move travelling from `from` to `to`.
    pub fn find_move(&self, from: Coord, to: Coord) -> Option<Move> {
        self.legal
            .iter()
            .find(|m| m.from() == from && m.to() == to)
            .copied()
    }

    /// Applies a move from [`legal_moves`](Game::legal_moves).
    ///
    /// Returns `true` if the moved piece must keep capturing: the active side
    /// does not change and the legal set now holds only that piece's
    /// captures. Returns `false` once the turn has passed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IllegalMove`] if `m` is not in the current legal
    /// set; the game is left untouched.
    pub fn apply(&mut self, m: Move) -> Result<bool, EngineError> {
        if !self.legal.contains(&m) {
            return Err(EngineError::IllegalMove(m));
        }

        if let Some(captured) = m.captured() {
            let piece = self.position.remove(captured)?;
            tracing::debug!(%piece, "piece captured");
            if let Some(obs) = self.observer.as_mut() {
                obs.piece_destroyed(&piece);
            }
        }

        let from = self.position.relocate(m.piece(), m.to())?;
        if let (Some(obs), Some(piece)) = (self.observer.as_mut(), self.position.piece(m.piece())) {
            obs.piece_moved(piece, from);
        }
        self.history.push(m);
        tracing::debug!(side = %self.side, mv = %m, "move applied");

        let continuation = generate_moves(&self.position, self.side)
            .filtered(|c| c.is_capture() && c.piece() == m.piece());
        if !continuation.is_empty() {
            tracing::debug!(
                side = %self.side,
                piece = %m.piece(),
                captures = continuation.len(),
                "chain capture continues"
            );
            self.position.set_move_caches(&continuation);
            self.legal = continuation;
            self.chain = Some(m.piece());
            return Ok(true);
        }

        self.chain = None;
        self.side = self.side.opposite();
        self.legal = refresh_moves(&mut self.position, self.side);
        tracing::debug!(side = %self.side, moves = self.legal.len(), "turn passed");
        Ok(false)
    }

    /// Asks `selector` for a move and applies it.
    ///
    /// Returns `Ok(None)` if the selector declined to move, otherwise the
    /// result of [`apply`](Game::apply).
    pub fn play_turn(&mut self, selector: &mut dyn MoveSelector) -> Result<Option<bool>, EngineError> {
        match selector.select(self) {
            Some(m) => self.apply(m).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::FirstMove;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn game(diagram: &str, side: Side) -> Game {
        Game::from_diagram(&Diagram::parse(diagram).unwrap(), side).unwrap()
    }

    #[test]
    fn standard_game_starts_with_white() {
        let game = Game::standard(GameConfig::default()).unwrap();
        assert_eq!(game.current_side(), Side::White);
        assert_eq!(game.position().pieces(Side::White).len(), 12);
        assert_eq!(game.position().pieces(Side::Black).len(), 12);
        // Four front pieces, two forward diagonals each, minus the edge.
        assert_eq!(game.legal_moves().len(), 7);
        assert!(!game.legal_moves().has_capture());
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn starting_side_from_config() {
        let config = GameConfig {
            starting_side: Side::Black,
            ..GameConfig::default()
        };
        let game = Game::standard(config).unwrap();
        assert_eq!(game.current_side(), Side::Black);
        assert!(game
            .legal_moves()
            .iter()
            .all(|m| game.position().side_of(m.piece()) == Some(Side::Black)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            width: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::standard(config),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn plain_move_passes_turn() {
        let mut game = game(
            "......
             .w....
             ......
             ....b.",
            Side::White,
        );
        let m = game.find_move(Coord::new(1, 1), Coord::new(2, 2)).unwrap();
        let continues = game.apply(m).unwrap();
        assert!(!continues);
        assert_eq!(game.current_side(), Side::Black);
        assert_eq!(game.chain_piece(), None);
        assert_eq!(game.position().piece(m.piece()).unwrap().coord(), Coord::new(2, 2));
        assert_eq!(game.history(), &[m]);
    }

    #[test]
    fn illegal_move_rejected_without_change() {
        let mut game = game(
            "....
             .w..
             ....",
            Side::White,
        );
        let piece = game.position().pieces(Side::White)[0].id();
        let backwards = Move::plain(piece, Coord::new(1, 1), Coord::new(0, 0));
        assert!(matches!(
            game.apply(backwards),
            Err(EngineError::IllegalMove(m)) if m == backwards
        ));
        assert_eq!(game.current_side(), Side::White);
        assert_eq!(game.position().piece(piece).unwrap().coord(), Coord::new(1, 1));
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn capture_removes_piece_everywhere() {
        let mut game = game(
            "........
             ........
             ........
             ...b....
             ....w...
             ........
             ........
             ........",
            Side::Black,
        );
        let victim = game.position().piece_at(4, 4).unwrap().id();
        assert_eq!(game.legal_moves().len(), 1);
        let m = game.legal_moves()[0];
        assert_eq!(m.to(), Coord::new(5, 5));

        let continues = game.apply(m).unwrap();
        assert!(!continues);
        assert_eq!(game.position().piece(victim), None);
        assert_eq!(game.position().side_of(victim), None);
        assert!(game.position().pieces(Side::White).is_empty());
        assert!(game.position().board().is_free(4, 4));
        assert!(game.position().is_consistent());
        assert_eq!(game.current_side(), Side::White);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn chain_capture_keeps_side_and_piece() {
        // White at (0,0) jumps three Black pieces along one diagonal.
        let mut game = game(
            "w......
             .b.....
             .......
             ...b...
             .......
             .....b.
             .......",
            Side::White,
        );
        let jumper = game.position().piece_at(0, 0).unwrap().id();

        let first = game.legal_moves()[0];
        assert!(first.is_capture());
        assert!(game.apply(first).unwrap());
        assert_eq!(game.current_side(), Side::White);
        assert_eq!(game.chain_piece(), Some(jumper));
        assert!(game
            .legal_moves()
            .iter()
            .all(|m| m.piece() == jumper && m.is_capture()));

        let second = game.find_move(Coord::new(2, 2), Coord::new(4, 4)).unwrap();
        assert!(game.apply(second).unwrap());

        let third = game.find_move(Coord::new(4, 4), Coord::new(6, 6)).unwrap();
        assert!(!game.apply(third).unwrap());
        assert_eq!(game.current_side(), Side::Black);
        assert_eq!(game.chain_piece(), None);
        assert!(game.position().pieces(Side::Black).is_empty());
        assert_eq!(game.ply_count(), 3);
    }

    #[test]
    fn chain_restricts_to_moving_piece() {
        // After the first jump, another White piece could also capture, but
        // only the jumper may continue.
        let mut game = game(
            "w......
             .b.....
             .......
             ...b...
             .......
             .......
             w......
             .b.....
             .......",
            Side::White,
        );
        let jumper = game.position().piece_at(0, 0).unwrap().id();
        let first = game.find_move(Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert!(game.apply(first).unwrap());
        assert_eq!(game.legal_moves().len(), 1);
        assert_eq!(game.legal_moves()[0].piece(), jumper);

        let other = game.position().piece_at(0, 6).unwrap();
        assert!(other.moves().is_empty());
        assert_eq!(
            game.position().piece(jumper).unwrap().moves(),
            game.legal_moves().as_slice()
        );

        // The other piece's capture was legal before the chain started.
        let other_id = other.id();
        let victim = game.position().piece_at(1, 7).unwrap().id();
        let side_jump = Move::capture(other_id, Coord::new(0, 6), Coord::new(2, 8), victim);
        assert!(matches!(
            game.apply(side_jump),
            Err(EngineError::IllegalMove(m)) if m == side_jump
        ));
        assert_eq!(game.chain_piece(), Some(jumper));
        assert_eq!(game.position().piece(victim).map(|p| p.coord()), Some(Coord::new(1, 7)));
    }

    #[test]
    fn plain_move_can_start_chain() {
        let mut game = game(
            "......
             .w....
             ......
             ...b..
             ......",
            Side::White,
        );
        assert!(!game.legal_moves().has_capture());
        let step = game.find_move(Coord::new(1, 1), Coord::new(2, 2)).unwrap();
        assert_eq!(step.to_notation(), "b2-c3");

        assert!(game.apply(step).unwrap());
        assert_eq!(game.current_side(), Side::White);
        assert_eq!(game.chain_piece(), Some(step.piece()));
        let victim = game.position().piece_at(3, 3).unwrap().id();
        assert_eq!(
            game.legal_moves().as_slice(),
            &[Move::capture(step.piece(), Coord::new(2, 2), Coord::new(4, 4), victim)]
        );
        assert_eq!(game.legal_moves()[0].to_notation(), "c3xe5");
    }

    #[test]
    fn turn_flips_once_per_finished_turn() {
        let mut game = Game::standard(GameConfig::default()).unwrap();
        let mut selector = FirstMove;
        let mut expected = Side::White;
        for _ in 0..20 {
            assert_eq!(game.current_side(), expected);
            match game.play_turn(&mut selector).unwrap() {
                Some(true) => {}
                Some(false) => expected = expected.opposite(),
                None => break,
            }
            assert!(game.position().is_consistent());
        }
    }

    #[test]
    fn moves_for_does_not_touch_state() {
        let game = game(
            "....
             .w.b
             ....",
            Side::White,
        );
        let before = game.legal_moves().clone();
        let black = game.moves_for(Side::Black);
        assert!(!black.is_empty());
        assert!(black
            .iter()
            .all(|m| game.position().side_of(m.piece()) == Some(Side::Black)));
        assert_eq!(game.legal_moves(), &before);
        assert!(game.position().pieces(Side::Black)[0].moves().is_empty());
    }

    #[test]
    fn selector_declining_is_not_an_error() {
        let mut game = game("w.../..../b...", Side::White);
        let mut decline = |_: &Game| -> Option<Move> { None };
        assert_eq!(game.play_turn(&mut decline).unwrap(), None);
        assert_eq!(game.current_side(), Side::White);
    }

    #[derive(Default)]
    struct Log {
        created: usize,
        moved: Vec<(PieceId, Coord)>,
        destroyed: Vec<PieceId>,
    }

    struct Recorder(Rc<RefCell<Log>>);

    impl PieceObserver for Recorder {
        fn piece_created(&mut self, _piece: &draughts_core::Piece) {
            self.0.borrow_mut().created += 1;
        }

        fn piece_moved(&mut self, piece: &draughts_core::Piece, from: Coord) {
            self.0.borrow_mut().moved.push((piece.id(), from));
        }

        fn piece_destroyed(&mut self, piece: &draughts_core::Piece) {
            self.0.borrow_mut().destroyed.push(piece.id());
        }
    }

    #[test]
    fn observer_sees_lifecycle() {
        let log = Rc::new(RefCell::new(Log::default()));
        let diagram = Diagram::parse("...../.w.../..b../.....").unwrap();
        let config = GameConfig {
            width: 5,
            depth: 4,
            starting_side: Side::White,
            rows_per_side: 0,
        };
        let mut game = Game::with_observer(
            config,
            &DiagramLayout::new(diagram),
            Box::new(Recorder(log.clone())),
        )
        .unwrap();
        assert_eq!(log.borrow().created, 2);

        let victim = game.position().piece_at(2, 2).unwrap().id();
        let m = game.legal_moves()[0];
        game.apply(m).unwrap();

        let log = log.borrow();
        assert_eq!(log.destroyed, vec![victim]);
        assert_eq!(log.moved, vec![(m.piece(), Coord::new(1, 1))]);
    }
}
