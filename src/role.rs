use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role::{Ambassador, Assassin, Captain, Contessa, Duke};

/// The five court roles. Pure value type, no per-card state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Ambassador,
    Assassin,
    Captain,
    Contessa,
    Duke,
}

pub static ROLES: [Role; 5] = [
    Ambassador,
    Assassin,
    Captain,
    Contessa,
    Duke,
];

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
