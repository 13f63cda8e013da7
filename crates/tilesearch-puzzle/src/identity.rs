use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tilesearch_core::StateId;

use crate::{Board, PuzzleError, PuzzleState};

const ARRANGEMENT_SPAN: u64 = 1_000_000_000;

/// How a puzzle state is turned into the key used by the open and closed sets.
///
/// `WithPathCost` folds `g` into the key, so the same arrangement reached at two
/// different depths counts as two states. Decrease-key and reopening then only
/// fire on exact `(arrangement, g)` collisions. `ArrangementOnly` keys on the
/// tiles alone, which is the textbook duplicate detection and gives different
/// node counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityScheme {
    #[default]
    WithPathCost,
    ArrangementOnly,
}

impl IdentityScheme {
    pub const ALL: [IdentityScheme; 2] = [IdentityScheme::WithPathCost, IdentityScheme::ArrangementOnly];

    pub fn name(self) -> &'static str {
        match self {
            IdentityScheme::WithPathCost => "with_path_cost",
            IdentityScheme::ArrangementOnly => "arrangement_only",
        }
    }

    pub fn state_id(self, state: &PuzzleState) -> StateId {
        let arrangement = arrangement_code(&state.board);
        match self {
            IdentityScheme::WithPathCost => {
                StateId::from(u64::from(state.g) * ARRANGEMENT_SPAN + arrangement)
            }
            IdentityScheme::ArrangementOnly => StateId::from(arrangement),
        }
    }
}

/// Read the tiles as the digits of a base-10 number, first cell most significant.
pub fn arrangement_code(board: &Board) -> u64 {
    board
        .tiles()
        .iter()
        .fold(0u64, |code, &tile| code * 10 + u64::from(tile))
}

impl fmt::Display for IdentityScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdentityScheme {
    type Err = PuzzleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        IdentityScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == name.replace('-', "_"))
            .ok_or_else(|| PuzzleError::UnknownIdentityScheme {
                name: name.to_string(),
            })
    }
}
