use thiserror::Error;

use crate::action::Action;
use crate::player::PlayerId;

/// Everything that can go wrong while a game is running.
///
/// `IllegalAction` is recoverable: the engine rejects the attempt and asks the
/// player to choose again. The other two variants are invariant violations and
/// abort the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoupError {
    #[error("drew from an empty deck, which is unreachable in a correctly driven game of six or fewer players")]
    EmptyDeck,

    #[error("player {player} cannot {action} with {balance} coins")]
    IllegalAction {
        player: PlayerId,
        action: Action,
        balance: i32,
    },

    #[error("role position {pos} is out of range for a hand of {len}")]
    InvalidPosition { pos: usize, len: usize },
}
