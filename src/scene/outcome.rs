use std::fmt::{Display, Formatter};

/// Terminal result of a completed match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// the other outcome
    pub fn flipped(&self) -> Self {
        match self {
            Outcome::Won => Outcome::Lost,
            Outcome::Lost => Outcome::Won,
        }
    }
}

/// `player_won` flag as reported by the match logic
impl From<bool> for Outcome {
    fn from(player_won: bool) -> Self {
        if player_won {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }
}

impl Display for Outcome {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Outcome::Won => f.write_str("won"),
            Outcome::Lost => f.write_str("lost"),
        }
    }
}
