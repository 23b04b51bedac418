use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::player::PlayerId;
use crate::role::Role;

/// The engine's only window to the outside world. Decisions are elicited
/// synchronously in a fixed polling order; the engine blocks on each answer.
///
/// `choose_one` must return an index within `options` — an interactive
/// implementation re-prompts until it has one. `announce` is one-way.
pub trait Interaction {
    fn choose_one(&mut self, player: PlayerId, prompt: &str, options: &[String]) -> usize;

    fn announce(&mut self, event: &Event);
}

/// A public game event. Everything a spectator at the table would see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    TurnStart { player: PlayerId },
    ActionDeclared { player: PlayerId, action: Action, target: Option<PlayerId> },
    ActionRejected { player: PlayerId, action: Action },
    ChallengeDeclared { challenger: PlayerId, defendant: PlayerId, claim: Role },
    ClaimProven { player: PlayerId, claim: Role },
    RoleRevealed { player: PlayerId, role: Role },
    BlockDeclared { blocker: PlayerId, action: Action, claim: Role },
    BlockVoided { blocker: PlayerId },
    BlockStood { blocker: PlayerId },
    Eliminated { player: PlayerId },
    Winner { player: PlayerId },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TurnStart { player } => {
                f.write_fmt(format_args!("Player {player}'s turn"))
            }
            Event::ActionDeclared { player, action, target } => match (action, target) {
                (Action::Income, _) => {
                    f.write_fmt(format_args!("Player {player} takes income"))
                }
                (Action::ForeignAid, _) => {
                    f.write_fmt(format_args!("Player {player} takes foreign aid"))
                }
                (Action::Tax, _) => {
                    f.write_fmt(format_args!("Player {player} collects taxes"))
                }
                (Action::Steal, Some(target)) => {
                    f.write_fmt(format_args!("Player {player} steals from Player {target}"))
                }
                (Action::Exchange, _) => {
                    f.write_fmt(format_args!("Player {player} exchanges roles with the court deck"))
                }
                (Action::Assassinate, Some(target)) => {
                    f.write_fmt(format_args!("Player {player} assassinates Player {target}"))
                }
                (Action::Coup, Some(target)) => {
                    f.write_fmt(format_args!("Player {player} launches a coup against Player {target}"))
                }
                _ => f.write_fmt(format_args!("Player {player} declares {action}")),
            },
            Event::ActionRejected { player, action } => {
                f.write_fmt(format_args!("Player {player} cannot afford to {action}"))
            }
            Event::ChallengeDeclared { challenger, defendant, claim } => {
                f.write_fmt(format_args!(
                    "Player {challenger} challenges Player {defendant}'s claim to the {claim}"
                ))
            }
            Event::ClaimProven { player, claim } => {
                f.write_fmt(format_args!(
                    "Player {player} shows the {claim} and swaps it for a fresh draw"
                ))
            }
            Event::RoleRevealed { player, role } => {
                f.write_fmt(format_args!("Player {player} gives up the {role}"))
            }
            Event::BlockDeclared { blocker, action, claim } => {
                f.write_fmt(format_args!("Player {blocker} claims the {claim} to {action}"))
            }
            Event::BlockVoided { blocker } => {
                f.write_fmt(format_args!("Player {blocker}'s block is voided"))
            }
            Event::BlockStood { blocker } => {
                f.write_fmt(format_args!("Player {blocker}'s block stands"))
            }
            Event::Eliminated { player } => {
                f.write_fmt(format_args!("Player {player} is out of influence and leaves the game"))
            }
            Event::Winner { player } => {
                f.write_fmt(format_args!("Player {player} wins"))
            }
        }
    }
}

/// Uniform random answers, for simulated playouts. Benches and the
/// termination test drive whole games through this.
pub struct RandomDriver<R: Rng + Sized> {
    rng: R,
}

impl<R: Rng + Sized> RandomDriver<R> {
    pub fn new(rng: R) -> Self {
        RandomDriver { rng }
    }
}

impl<R: Rng + Sized> Interaction for RandomDriver<R> {
    fn choose_one(&mut self, _player: PlayerId, _prompt: &str, options: &[String]) -> usize {
        self.rng.gen_range(0..options.len())
    }

    fn announce(&mut self, event: &Event) {
        log::trace!("{event}");
    }
}

/// Replays a fixed list of choices and records every announcement.
#[cfg(test)]
pub(crate) struct Script {
    choices: std::collections::VecDeque<usize>,
    pub events: Vec<Event>,
}

#[cfg(test)]
impl Script {
    pub fn new(choices: &[usize]) -> Self {
        Script {
            choices: choices.iter().copied().collect(),
            events: vec![],
        }
    }
}

#[cfg(test)]
impl Interaction for Script {
    fn choose_one(&mut self, player: PlayerId, prompt: &str, _options: &[String]) -> usize {
        match self.choices.pop_front() {
            Some(choice) => choice,
            None => panic!("script ran out of choices at player {player}: {prompt}"),
        }
    }

    fn announce(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_narrate_in_plain_language() {
        let declared = Event::ActionDeclared {
            player: 1,
            action: Action::Assassinate,
            target: Some(3),
        };
        assert_eq!(declared.to_string(), "Player 1 assassinates Player 3");

        let block = Event::BlockDeclared {
            blocker: 2,
            action: Action::DenyTheft,
            claim: Role::Ambassador,
        };
        assert_eq!(
            block.to_string(),
            "Player 2 claims the Ambassador to block the steal"
        );

        let reveal = Event::RoleRevealed { player: 2, role: Role::Contessa };
        assert_eq!(reveal.to_string(), "Player 2 gives up the Contessa");
    }

    #[test]
    fn random_driver_stays_in_range() {
        let mut io = RandomDriver::new(rand::thread_rng());
        let options = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        for _ in 0..100 {
            assert!(io.choose_one(1, "pick", &options) < options.len());
        }
    }
}
