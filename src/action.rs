use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::role::Role::{Ambassador, Assassin, Captain, Contessa, Duke};

/// The ten declarable actions. The three `Deny*` variants are block-actions:
/// they are never offered on the main menu and arise only inside the block
/// phase of a turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Income,
    ForeignAid,
    Tax,
    Steal,
    Exchange,
    Assassinate,
    Coup,
    DenyAid,
    DenyTheft,
    DenyAssassination,
}

impl Action {
    pub fn requires_target(self) -> bool {
        matches!(self, Action::Assassinate | Action::Coup | Action::Steal)
    }

    /// Actions that claim no role, so no challenge phase runs for them.
    pub fn unchallengeable(self) -> bool {
        matches!(self, Action::Income | Action::ForeignAid | Action::Coup)
    }

    pub fn blockable(self) -> bool {
        matches!(self, Action::ForeignAid | Action::Assassinate | Action::Steal)
    }

    /// The roles whose claim justifies this action. Primary actions map to at
    /// most one role; a theft block may be claimed as Captain or Ambassador,
    /// and the blocker picks which.
    pub fn claims(self) -> &'static [Role] {
        match self {
            Action::Tax => &[Duke],
            Action::Steal => &[Captain],
            Action::Exchange => &[Ambassador],
            Action::Assassinate => &[Assassin],
            Action::DenyAid => &[Duke],
            Action::DenyTheft => &[Captain, Ambassador],
            Action::DenyAssassination => &[Contessa],
            Action::Income | Action::ForeignAid | Action::Coup => &[],
        }
    }

    /// The block-action that counters this action, if it is blockable.
    pub fn block_action(self) -> Option<Action> {
        match self {
            Action::ForeignAid => Some(Action::DenyAid),
            Action::Assassinate => Some(Action::DenyAssassination),
            Action::Steal => Some(Action::DenyTheft),
            _ => None,
        }
    }

    pub fn cost(self) -> i32 {
        match self {
            Action::Assassinate => 3,
            Action::Coup => 7,
            _ => 0,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Income => "take income",
            Action::ForeignAid => "take foreign aid",
            Action::Tax => "collect taxes",
            Action::Steal => "steal money",
            Action::Exchange => "exchange roles",
            Action::Assassinate => "assassinate an opponent",
            Action::Coup => "launch a coup",
            Action::DenyAid => "block the claim to foreign aid",
            Action::DenyTheft => "block the steal",
            Action::DenyAssassination => "block the assassination",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targeted_actions() {
        let targeted: Vec<Action> = [
            Action::Income,
            Action::ForeignAid,
            Action::Tax,
            Action::Steal,
            Action::Exchange,
            Action::Assassinate,
            Action::Coup,
        ]
        .into_iter()
        .filter(|a| a.requires_target())
        .collect();

        assert_eq!(targeted, vec![Action::Steal, Action::Assassinate, Action::Coup]);
    }

    #[test]
    fn unchallengeable_actions_claim_nothing() {
        for action in [Action::Income, Action::ForeignAid, Action::Coup] {
            assert!(action.unchallengeable());
            assert!(action.claims().is_empty());
        }
    }

    #[test]
    fn challengeable_actions_claim_exactly_one_role() {
        for action in [Action::Tax, Action::Steal, Action::Exchange, Action::Assassinate] {
            assert!(!action.unchallengeable());
            assert_eq!(action.claims().len(), 1);
        }
    }

    #[test]
    fn block_relations() {
        assert_eq!(Action::ForeignAid.block_action(), Some(Action::DenyAid));
        assert_eq!(Action::Assassinate.block_action(), Some(Action::DenyAssassination));
        assert_eq!(Action::Steal.block_action(), Some(Action::DenyTheft));
        assert_eq!(Action::Tax.block_action(), None);
        assert_eq!(Action::Coup.block_action(), None);
    }

    #[test]
    fn theft_block_offers_two_claims() {
        assert_eq!(Action::DenyTheft.claims(), &[Captain, Ambassador]);
        assert_eq!(Action::DenyAid.claims(), &[Duke]);
        assert_eq!(Action::DenyAssassination.claims(), &[Contessa]);
    }
}
