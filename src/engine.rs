use std::collections::VecDeque;

use rand::Rng;

use crate::action::Action;
use crate::challenge::{resolve_challenge, ChallengeOutcome};
use crate::deck::Deck;
use crate::error::CoupError;
use crate::interact::{Event, Interaction};
use crate::player::{Player, PlayerId};
use crate::resolve::ensure_affordable;
use crate::role::Role;

/// The states a single turn moves through, in order. Challenge, Block and
/// CounterChallenge are skipped when the declared action does not admit them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    SelectAction,
    Challenge,
    Block,
    CounterChallenge,
    Resolution,
    EndTurn,
}

/// A running game: the seats, the court deck, and the rotating turn queue.
/// The queue holds only living players; whoever is at the head is acting.
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) queue: VecDeque<PlayerId>,
    turn: usize,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("T {} | queue {:?}\n", self.turn, self.queue).as_str())?;
        for player in &self.players {
            f.write_str(
                format!(
                    "\tP {}: ${} | {:?}, {:?}\n",
                    player.id,
                    player.balance(),
                    player.concealed(),
                    player.revealed()
                )
                .as_str(),
            )?;
        }
        Ok(())
    }
}

impl Game {
    /// Seats `num_players` players (3 to 6), dealing each two concealed roles
    /// and two coins from a fresh shuffled deck.
    pub fn new<R: Rng + Sized>(num_players: usize, rng: &mut R) -> Self {
        assert!(
            (3..=6).contains(&num_players),
            "the game seats 3 to 6 players"
        );

        let mut deck = Deck::new(rng);
        let players = (1..=num_players)
            .map(|id| {
                let first = deck.draw().expect("a fresh deck covers six seats");
                let second = deck.draw().expect("a fresh deck covers six seats");
                Player::new(id, first, second)
            })
            .collect();

        Game {
            players,
            deck,
            queue: (1..=num_players).collect(),
            turn: 0,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerId> {
        if self.queue.len() == 1 {
            Some(self.queue[0])
        } else {
            None
        }
    }

    /// Plays turns until one player remains, announces them as the winner and
    /// returns their id.
    pub fn play<I: Interaction, R: Rng + Sized>(
        &mut self,
        io: &mut I,
        rng: &mut R,
    ) -> Result<PlayerId, CoupError> {
        while self.queue.len() > 1 {
            self.take_turn(io, rng)?;
        }

        let winner = self.queue[0];
        io.announce(&Event::Winner { player: winner });
        Ok(winner)
    }

    pub(crate) fn take_turn<I: Interaction, R: Rng + Sized>(
        &mut self,
        io: &mut I,
        rng: &mut R,
    ) -> Result<(), CoupError> {
        let actor = self.queue[0];
        self.turn += 1;
        io.announce(&Event::TurnStart { player: actor });

        let mut phase = Phase::SelectAction;
        let mut action = Action::Income;
        let mut target: Option<PlayerId> = None;
        let mut block: Option<(PlayerId, Role)> = None;

        loop {
            match phase {
                Phase::SelectAction => {
                    (action, target) = self.select_action(actor, io)?;
                    io.announce(&Event::ActionDeclared { player: actor, action, target });
                    log::debug!("turn {}: player {actor} declares {action:?}", self.turn);
                    phase = Phase::Challenge;
                }
                Phase::Challenge => {
                    if action.unchallengeable() {
                        phase = Phase::Block;
                        continue;
                    }
                    phase = if self.challenge_phase(actor, action, io, rng)? {
                        Phase::EndTurn
                    } else {
                        Phase::Block
                    };
                }
                Phase::Block => {
                    if !action.blockable() {
                        phase = Phase::Resolution;
                        continue;
                    }
                    block = self.block_phase(actor, action, target, io);
                    phase = if block.is_some() {
                        Phase::CounterChallenge
                    } else {
                        Phase::Resolution
                    };
                }
                Phase::CounterChallenge => {
                    let (blocker, claim) = block.expect("a block precedes its counter-challenge");
                    phase = if self.counter_challenge_phase(actor, blocker, claim, io, rng)? {
                        Phase::EndTurn
                    } else {
                        Phase::Resolution
                    };
                }
                Phase::Resolution => {
                    self.resolve_action(action, actor, target, io, rng)?;
                    phase = Phase::EndTurn;
                }
                Phase::EndTurn => {
                    if self.queue.front() == Some(&actor) {
                        self.queue.rotate_left(1);
                    }
                    return Ok(());
                }
            }
        }
    }

    fn select_action<I: Interaction>(
        &mut self,
        actor: PlayerId,
        io: &mut I,
    ) -> Result<(Action, Option<PlayerId>), CoupError> {
        loop {
            let menu = self.players[actor - 1].available_actions();
            let labels: Vec<String> = menu.iter().map(Action::to_string).collect();
            let action = menu[io.choose_one(actor, "Choose an action", &labels)];

            if let Err(err) = ensure_affordable(&self.players[actor - 1], action) {
                io.announce(&Event::ActionRejected { player: actor, action });
                log::debug!("{err}");
                continue;
            }

            let target = if action.requires_target() {
                let others = self.alive_others(actor);
                let labels: Vec<String> = others.iter().map(|id| format!("Player {id}")).collect();
                Some(others[io.choose_one(actor, "Choose a target", &labels)])
            } else {
                None
            };

            return Ok((action, target));
        }
    }

    /// Polls every other living player, in queue order, for a challenge of
    /// the actor's claim; the first acceptance resolves it and ends the
    /// phase. Returns true when the turn is over (the actor was caught
    /// bluffing).
    fn challenge_phase<I: Interaction, R: Rng + Sized>(
        &mut self,
        actor: PlayerId,
        action: Action,
        io: &mut I,
        rng: &mut R,
    ) -> Result<bool, CoupError> {
        let claim = action.claims()[0];
        let options = [String::from("Pass"), String::from("Challenge")];

        for challenger in self.alive_others(actor) {
            let prompt = format!("Challenge Player {actor}'s claim to the {claim}?");
            if io.choose_one(challenger, &prompt, &options) != 1 {
                continue;
            }

            io.announce(&Event::ChallengeDeclared { challenger, defendant: actor, claim });
            return match resolve_challenge(&self.players[actor - 1], claim) {
                ChallengeOutcome::DefendantLoses => {
                    self.strip_influence(actor, io)?;
                    Ok(true)
                }
                ChallengeOutcome::ChallengerLoses => {
                    self.replace_proven_role(actor, claim, io, rng)?;
                    self.strip_influence(challenger, io)?;
                    Ok(false)
                }
            };
        }

        Ok(false)
    }

    /// Offers the block. Foreign aid may be blocked by anyone, polled in
    /// queue order with the first acceptance winning; assassination and theft
    /// only by their target. Returns the blocker and the role they claim.
    fn block_phase<I: Interaction>(
        &mut self,
        actor: PlayerId,
        action: Action,
        target: Option<PlayerId>,
        io: &mut I,
    ) -> Option<(PlayerId, Role)> {
        let block_action = action.block_action()?;
        let options = [String::from("Allow"), String::from("Block")];

        let candidates: Vec<PlayerId> = match action {
            Action::ForeignAid => self.alive_others(actor),
            _ => target
                .into_iter()
                .filter(|&id| self.players[id - 1].alive())
                .collect(),
        };

        for blocker in candidates {
            let prompt = format!("Block Player {actor}'s attempt to {action}?");
            if io.choose_one(blocker, &prompt, &options) != 1 {
                continue;
            }

            let claims = block_action.claims();
            let claim = if claims.len() == 1 {
                claims[0]
            } else {
                let labels: Vec<String> = claims.iter().map(Role::to_string).collect();
                claims[io.choose_one(blocker, "Claim which role for the block?", &labels)]
            };

            io.announce(&Event::BlockDeclared { blocker, action: block_action, claim });
            log::debug!("turn {}: player {blocker} blocks with {claim:?}", self.turn);
            return Some((blocker, claim));
        }

        None
    }

    /// Polls the origin first, then the remaining living players except the
    /// blocker, for a challenge of the block's claim. Returns true when the
    /// block stands and the declared action must be skipped.
    fn counter_challenge_phase<I: Interaction, R: Rng + Sized>(
        &mut self,
        actor: PlayerId,
        blocker: PlayerId,
        claim: Role,
        io: &mut I,
        rng: &mut R,
    ) -> Result<bool, CoupError> {
        let options = [String::from("Pass"), String::from("Challenge")];

        let mut candidates = vec![actor];
        candidates.extend(self.alive_others(actor).into_iter().filter(|&id| id != blocker));

        for challenger in candidates {
            let prompt = format!("Challenge Player {blocker}'s claim to the {claim}?");
            if io.choose_one(challenger, &prompt, &options) != 1 {
                continue;
            }

            io.announce(&Event::ChallengeDeclared { challenger, defendant: blocker, claim });
            return match resolve_challenge(&self.players[blocker - 1], claim) {
                ChallengeOutcome::DefendantLoses => {
                    self.strip_influence(blocker, io)?;
                    io.announce(&Event::BlockVoided { blocker });
                    Ok(false)
                }
                ChallengeOutcome::ChallengerLoses => {
                    self.replace_proven_role(blocker, claim, io, rng)?;
                    self.strip_influence(challenger, io)?;
                    io.announce(&Event::BlockStood { blocker });
                    Ok(true)
                }
            };
        }

        io.announce(&Event::BlockStood { blocker });
        Ok(true)
    }

    /// Takes one influence from `id`, announcing the reveal, and drops the
    /// player from the turn queue if that was their last.
    pub(crate) fn strip_influence<I: Interaction>(
        &mut self,
        id: PlayerId,
        io: &mut I,
    ) -> Result<(), CoupError> {
        let role = self.players[id - 1].lose_influence(io)?;
        io.announce(&Event::RoleRevealed { player: id, role });

        if !self.players[id - 1].alive() {
            io.announce(&Event::Eliminated { player: id });
            self.queue.retain(|&q| q != id);
        }

        Ok(())
    }

    /// A proven claim must not stay exposed: the shown role goes back into
    /// the deck and a fresh replacement is drawn into the same slot.
    fn replace_proven_role<I: Interaction, R: Rng + Sized>(
        &mut self,
        id: PlayerId,
        claim: Role,
        io: &mut I,
        rng: &mut R,
    ) -> Result<(), CoupError> {
        let pos = self.players[id - 1]
            .find_claim(claim)
            .expect("a successful defense holds the claimed role");

        io.announce(&Event::ClaimProven { player: id, claim });

        self.deck.put_back(claim);
        self.deck.shuffle(rng);
        let fresh = self.deck.draw()?;
        self.players[id - 1].replace_role(pos, fresh)
    }

    /// The other living players, in turn-queue polling order.
    fn alive_others(&self, exclude: PlayerId) -> Vec<PlayerId> {
        self.queue.iter().copied().filter(|&id| id != exclude).collect()
    }
}

#[cfg(test)]
impl Game {
    /// A deterministic table for tests: fixed hands, fixed deck order, two
    /// coins per seat.
    pub(crate) fn fixed(hands: &[(Role, Role)], deck: &[Role]) -> Game {
        Game {
            players: hands
                .iter()
                .enumerate()
                .map(|(idx, &(first, second))| Player::new(idx + 1, first, second))
                .collect(),
            deck: Deck { cards: deck.to_vec() },
            queue: (1..=hands.len()).collect(),
            turn: 0,
        }
    }

    pub(crate) fn card_count(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|p| p.concealed().len() + p.revealed().len())
            .sum();
        held + self.deck.len()
    }
}
