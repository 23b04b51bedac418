use crate::player::Player;
use crate::role::Role;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChallengeOutcome {
    DefendantLoses,
    ChallengerLoses,
}

/// Adjudicates a challenge: the defendant loses exactly when the claimed role
/// is not among their concealed roles. Pure decision; revealing the loser's
/// influence and swapping a proven role back into the deck are the engine's
/// job.
pub fn resolve_challenge(defendant: &Player, claimed: Role) -> ChallengeOutcome {
    match defendant.find_claim(claimed) {
        Some(_) => ChallengeOutcome::ChallengerLoses,
        None => ChallengeOutcome::DefendantLoses,
    }
}

#[cfg(test)]
mod tests {
    use crate::role::ROLES;

    use super::*;

    #[test]
    fn holding_the_claimed_role_defeats_the_challenger() {
        for role in ROLES {
            let other = ROLES.into_iter().find(|&r| r != role).unwrap();

            let first_slot = Player::new(1, role, other);
            assert_eq!(resolve_challenge(&first_slot, role), ChallengeOutcome::ChallengerLoses);

            let second_slot = Player::new(1, other, role);
            assert_eq!(resolve_challenge(&second_slot, role), ChallengeOutcome::ChallengerLoses);
        }
    }

    #[test]
    fn bluffing_loses_the_challenge() {
        for role in ROLES {
            let others: Vec<Role> = ROLES.into_iter().filter(|&r| r != role).collect();

            let defendant = Player::new(1, others[0], others[1]);
            assert_eq!(resolve_challenge(&defendant, role), ChallengeOutcome::DefendantLoses);
        }
    }

    #[test]
    fn a_revealed_copy_does_not_defend() {
        let mut defendant = Player::new(1, Role::Duke, Role::Captain);
        defendant.reveal_role(0).unwrap();

        assert_eq!(
            resolve_challenge(&defendant, Role::Duke),
            ChallengeOutcome::DefendantLoses
        );
    }
}
