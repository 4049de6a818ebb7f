//! Evaluation weights.

use scholar_core::PieceKind;

/// All tunable evaluation parameters, in centipawns.
///
/// `Default` is the tuned set. The piece values are contracts only in
/// their ordering; everything else is free to tune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWeights {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    /// Per pseudo-legal move of a knight, bishop, rook, or queen.
    pub mobility: i32,
    /// Per friendly pawn directly shielding the king.
    pub king_shield: i32,
    /// Penalty per pawnless file on or adjacent to the king's file.
    pub king_open_file: i32,
    /// Penalty per extra pawn stacked on a file.
    pub doubled_pawn: i32,
    /// Penalty per pawn with no friendly pawn on an adjacent file.
    pub isolated_pawn: i32,
    /// Bonus per pawn with no enemy pawn ahead on its or adjacent files.
    pub passed_pawn: i32,
}

impl EvalWeights {
    /// Material value of a piece kind. Kings carry no material value.
    pub fn piece_value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => 0,
        }
    }
}

impl Default for EvalWeights {
    fn default() -> EvalWeights {
        EvalWeights {
            pawn: 100,
            knight: 300,
            bishop: 300,
            rook: 500,
            queen: 900,
            mobility: 2,
            king_shield: 10,
            king_open_file: 25,
            doubled_pawn: 20,
            isolated_pawn: 15,
            passed_pawn: 25,
        }
    }
}
