use crate::action::Action;
use crate::error::CoupError;
use crate::interact::Interaction;
use crate::role::Role;

/// Stable 1-based seat number, fixed for the whole game.
pub type PlayerId = usize;

/// Per-seat state. A player always owns exactly two cards, split between the
/// concealed hand and the face-up revealed pile; the player is alive exactly
/// while the concealed hand is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub(crate) balance: i32,
    pub(crate) concealed: Vec<Role>,
    pub(crate) revealed: Vec<Role>,
}

impl Player {
    pub(crate) fn new(id: PlayerId, first: Role, second: Role) -> Self {
        Player {
            id,
            balance: 2,
            concealed: vec![first, second],
            revealed: vec![],
        }
    }

    pub fn alive(&self) -> bool {
        !self.concealed.is_empty()
    }

    pub fn balance(&self) -> i32 {
        self.balance
    }

    pub fn concealed(&self) -> &[Role] {
        &self.concealed
    }

    pub fn revealed(&self) -> &[Role] {
        &self.revealed
    }

    /// Adds `delta` (possibly negative) to the balance and returns the new
    /// balance. No floor is enforced here; affordability is the caller's
    /// check, made before any coins move.
    pub fn adjust_balance(&mut self, delta: i32) -> i32 {
        self.balance += delta;
        self.balance
    }

    /// The concealed slot holding `claim`, if any. Read-only; challenge
    /// adjudication uses this without mutating the hand.
    pub fn find_claim(&self, claim: Role) -> Option<usize> {
        self.concealed.iter().position(|&role| role == claim)
    }

    /// Moves the concealed role at `pos` to the revealed pile and returns it.
    pub fn reveal_role(&mut self, pos: usize) -> Result<Role, CoupError> {
        if pos >= self.concealed.len() {
            return Err(CoupError::InvalidPosition {
                pos,
                len: self.concealed.len(),
            });
        }

        let role = self.concealed.remove(pos);
        self.revealed.push(role);
        Ok(role)
    }

    /// Overwrites the concealed slot at `pos` with `role`. Used when a proven
    /// claim is swapped for a fresh draw.
    pub fn replace_role(&mut self, pos: usize, role: Role) -> Result<(), CoupError> {
        if pos >= self.concealed.len() {
            return Err(CoupError::InvalidPosition {
                pos,
                len: self.concealed.len(),
            });
        }

        self.concealed[pos] = role;
        Ok(())
    }

    /// Gives up one influence: with a single concealed role it is
    /// auto-selected, otherwise the player chooses which of the two to flip.
    /// Returns the newly revealed role for announcement.
    pub fn lose_influence(&mut self, io: &mut dyn Interaction) -> Result<Role, CoupError> {
        let pos = if self.concealed.len() <= 1 {
            0
        } else {
            let labels: Vec<String> = self.concealed.iter().map(Role::to_string).collect();
            io.choose_one(self.id, "Choose a role to give up", &labels)
        };

        self.reveal_role(pos)
    }

    /// The main-menu actions open to this player. At 10 or more coins the
    /// coup is mandatory and nothing else is offered.
    pub fn available_actions(&self) -> Vec<Action> {
        if self.balance >= 10 {
            return vec![Action::Coup];
        }

        let mut actions = vec![
            Action::Income,
            Action::ForeignAid,
            Action::Tax,
            Action::Steal,
            Action::Exchange,
        ];
        if self.balance >= Action::Assassinate.cost() {
            actions.push(Action::Assassinate);
        }
        if self.balance >= Action::Coup.cost() {
            actions.push(Action::Coup);
        }

        actions
    }
}
