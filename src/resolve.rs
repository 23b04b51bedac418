use rand::Rng;

use crate::action::Action;
use crate::engine::Game;
use crate::error::CoupError;
use crate::interact::Interaction;
use crate::player::{Player, PlayerId};

/// Affordability gate for the costed actions. Checked before any coins move,
/// so a rejected attempt leaves no partial deduction behind.
pub fn ensure_affordable(player: &Player, action: Action) -> Result<(), CoupError> {
    if player.balance() < action.cost() {
        return Err(CoupError::IllegalAction {
            player: player.id,
            action,
            balance: player.balance(),
        });
    }
    Ok(())
}

impl Game {
    /// Applies the coin and role effects of a declared primary action once
    /// every challenge and block around it has been settled.
    pub(crate) fn resolve_action<I: Interaction, R: Rng + Sized>(
        &mut self,
        action: Action,
        origin: PlayerId,
        target: Option<PlayerId>,
        io: &mut I,
        rng: &mut R,
    ) -> Result<(), CoupError> {
        match (action, target) {
            (Action::Income, _) => {
                self.players[origin - 1].adjust_balance(1);
            }
            (Action::ForeignAid, _) => {
                self.players[origin - 1].adjust_balance(2);
            }
            (Action::Tax, _) => {
                self.players[origin - 1].adjust_balance(3);
            }
            (Action::Steal, Some(target)) => {
                let take = self.players[target - 1].balance().min(2);
                self.players[target - 1].adjust_balance(-take);
                self.players[origin - 1].adjust_balance(take);
            }
            (Action::Assassinate, Some(target)) => {
                ensure_affordable(&self.players[origin - 1], action)?;
                self.players[origin - 1].adjust_balance(-action.cost());
                // the target may already have fallen in the challenge phase
                if self.players[target - 1].alive() {
                    self.strip_influence(target, io)?;
                }
            }
            (Action::Coup, Some(target)) => {
                ensure_affordable(&self.players[origin - 1], action)?;
                self.players[origin - 1].adjust_balance(-action.cost());
                self.strip_influence(target, io)?;
            }
            (Action::Exchange, _) => {
                self.exchange_roles(origin, io, rng)?;
            }
            _ => unreachable!("block actions never reach resolution"),
        }

        Ok(())
    }

    /// Draws two cards into the hand, then has the player return one card for
    /// each draw; the deck is reshuffled afterward.
    fn exchange_roles<I: Interaction, R: Rng + Sized>(
        &mut self,
        origin: PlayerId,
        io: &mut I,
        rng: &mut R,
    ) -> Result<(), CoupError> {
        for _ in 0..2 {
            let drawn = self.deck.draw()?;
            self.players[origin - 1].concealed.push(drawn);
        }

        for _ in 0..2 {
            let labels: Vec<String> = self.players[origin - 1]
                .concealed
                .iter()
                .map(|role| role.to_string())
                .collect();
            let pos = io.choose_one(origin, "Choose a role to return to the deck", &labels);
            let returned = self.players[origin - 1].concealed.remove(pos);
            self.deck.put_back(returned);
        }

        self.deck.shuffle(rng);
        Ok(())
    }
}
