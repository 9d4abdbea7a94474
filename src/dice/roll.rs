use std::fmt;

use rand::Rng;

use super::DieKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollResult {
    pub kind: DieKind,
    pub outcome: u32,
}

impl RollResult {
    pub fn roll_with<R: Rng>(kind: DieKind, rng: &mut R) -> Self {
        Self {
            kind,
            outcome: kind.roll_with(rng),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You rolled a {} on a {}-sided dice.",
            self.outcome,
            self.kind.sides()
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn message_names_outcome_and_die() {
        let r = RollResult {
            kind: DieKind::D20,
            outcome: 17,
        };
        assert_eq!(r.message(), "You rolled a 17 on a 20-sided dice.");
    }

    #[test]
    fn roll_with_keeps_kind() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = RollResult::roll_with(DieKind::D12, &mut rng);
        assert_eq!(r.kind, DieKind::D12);
        assert!((1..=12).contains(&r.outcome));
    }
}
