use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CoupError;
use crate::role::{Role, ROLES};

/// The court deck: three copies of each of the five roles, shuffled on
/// construction. The top of the deck is the last index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub(crate) cards: Vec<Role>,
}

impl Deck {
    pub fn new<R: Rng + Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Role> = ROLES
            .iter()
            .flat_map(|&role| std::iter::repeat(role).take(3))
            .collect();

        cards.shuffle(rng);

        Deck { cards }
    }

    /// Removes and returns the top card. A correctly driven game of six or
    /// fewer players never exhausts the deck, so `EmptyDeck` signals a bug.
    pub fn draw(&mut self) -> Result<Role, CoupError> {
        self.cards.pop().ok_or(CoupError::EmptyDeck)
    }

    /// Appends a card back into the deck. Used by exchanges and by the
    /// replacement that follows a successfully defended challenge.
    pub fn put_back(&mut self, role: Role) {
        self.cards.push(role);
    }

    pub fn shuffle<R: Rng + Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;

    #[test]
    fn fresh_deck_holds_three_of_each_role() {
        let deck = Deck::new(&mut thread_rng());

        assert_eq!(deck.len(), 15);
        for role in ROLES {
            assert_eq!(deck.cards.iter().filter(|&&r| r == role).count(), 3);
        }
    }

    #[test]
    fn draw_removes_the_top_card() {
        let mut deck = Deck::new(&mut thread_rng());
        let top = *deck.cards.last().unwrap();

        assert_eq!(deck.draw(), Ok(top));
        assert_eq!(deck.len(), 14);
    }

    #[test]
    fn drawing_from_an_empty_deck_fails() {
        let mut deck = Deck { cards: vec![] };

        assert_eq!(deck.draw(), Err(CoupError::EmptyDeck));
    }

    #[test]
    fn shuffling_an_empty_deck_is_a_noop() {
        let mut deck = Deck { cards: vec![] };
        deck.shuffle(&mut thread_rng());

        assert!(deck.is_empty());
    }

    #[test]
    fn put_back_then_draw_round_trips() {
        let mut deck = Deck { cards: vec![] };
        deck.put_back(Role::Contessa);

        assert_eq!(deck.len(), 1);
        assert_eq!(deck.draw(), Ok(Role::Contessa));
    }
}
