//! Board contract and the shakmaty-backed board
//!
//! The search never looks inside a board. Everything it needs goes through the
//! [`Position`] trait: side to move, game-over status, legal moves, a few move
//! properties and a strictly LIFO `apply`/`undo` pair.
//!
//! [`Board`] implements the trait on top of [`shakmaty::Chess`]. shakmaty
//! positions are immutable-style values, so `apply` keeps the previous
//! position on a history stack and `undo` pops it back (copy-make).

use crate::error::{EngineError, EngineResult};
use crate::types::{Color, PieceKind};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Piece, PositionError, Role, Square};
use shakmaty::Position as _;
use std::fmt::Debug;

/// Halfmove clock at which the game ends without a claim (seventy-five-move rule)
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Capabilities the search requires from a board
///
/// `apply` and `undo` must nest: every `undo` reverts the most recent `apply`
/// that has not been reverted yet.
pub trait Position {
    type Move: Clone + PartialEq + Debug;

    fn turn(&self) -> Color;

    fn is_game_over(&self) -> bool;

    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Number of legal moves for the side to move, or `None` when it cannot
    /// be determined. Used by the mobility term.
    fn count_legal_moves(&self) -> Option<usize> {
        Some(self.legal_moves().len())
    }

    /// How many pieces of `kind` the given side has on the board
    fn piece_count(&self, color: Color, kind: PieceKind) -> u32;

    fn is_capture(&self, mv: &Self::Move) -> bool;

    /// Kind of the piece standing on the move's destination square
    fn piece_at_destination(&self, mv: &Self::Move) -> Option<PieceKind>;

    fn is_promotion(&self, mv: &Self::Move) -> bool;

    fn apply(&mut self, mv: &Self::Move);

    fn undo(&mut self);

    /// Compact move encoding returned to callers (UCI for chess)
    fn move_identifier(&self, mv: &Self::Move) -> String;
}

/// Standard chess board with an undo history
#[derive(Debug, Clone, Default)]
pub struct Board {
    current: Chess,
    history: Vec<Chess>,
}

/// Observable state of a [`Board`], used to check that a search left the
/// board exactly as it found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub placement: shakmaty::Board,
    pub turn: shakmaty::Color,
    pub castling_rights: shakmaty::Bitboard,
    pub ep_square: Option<Square>,
    pub halfmoves: u32,
    pub fullmoves: u32,
}

impl Board {
    /// Parse a FEN string
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPosition`] if the text is not a FEN or
    /// describes an illegal setup. Stale castling rights and an en passant
    /// square with no capture behind it are dropped instead of rejected.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let trimmed = fen.trim();
        let parsed: Fen = trimmed.parse().map_err(|e: shakmaty::fen::ParseFenError| {
            EngineError::InvalidPosition {
                fen: trimmed.to_string(),
                reason: e.to_string(),
            }
        })?;

        let current: Chess = parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .or_else(PositionError::ignore_invalid_castling_rights)
            .or_else(PositionError::ignore_invalid_ep_square)
            .map_err(|e| EngineError::InvalidPosition {
                fen: trimmed.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            current,
            history: Vec::new(),
        })
    }

    /// Standard initial arrangement, White to move
    pub fn starting_position() -> Self {
        Self::default()
    }

    /// The underlying shakmaty position
    pub fn position(&self) -> &Chess {
        &self.current
    }

    /// Number of applied moves that have not been undone yet
    pub fn pending_moves(&self) -> usize {
        self.history.len()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            placement: self.current.board().clone(),
            turn: self.current.turn(),
            castling_rights: self.current.castles().castling_rights(),
            ep_square: self.current.ep_square(EnPassantMode::Legal),
            halfmoves: self.current.halfmoves(),
            fullmoves: self.current.fullmoves().get(),
        }
    }
}

fn to_shakmaty_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

fn to_role(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn to_piece_kind(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

impl Position for Board {
    type Move = shakmaty::Move;

    fn turn(&self) -> Color {
        match self.current.turn() {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        }
    }

    fn is_game_over(&self) -> bool {
        self.current.is_game_over() || self.current.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        self.current.legal_moves().into_iter().collect()
    }

    fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        let piece = Piece {
            color: to_shakmaty_color(color),
            role: to_role(kind),
        };
        self.current.board().by_piece(piece).count() as u32
    }

    fn is_capture(&self, mv: &Self::Move) -> bool {
        mv.is_capture()
    }

    fn piece_at_destination(&self, mv: &Self::Move) -> Option<PieceKind> {
        self.current
            .board()
            .piece_at(mv.to())
            .map(|piece| to_piece_kind(piece.role))
    }

    fn is_promotion(&self, mv: &Self::Move) -> bool {
        mv.is_promotion()
    }

    fn apply(&mut self, mv: &Self::Move) {
        let previous = self.current.clone();
        self.current.play_unchecked(mv.clone());
        self.history.push(previous);
    }

    fn undo(&mut self) {
        debug_assert!(!self.history.is_empty(), "undo() without a matching apply()");
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    fn move_identifier(&self, mv: &Self::Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }
}
