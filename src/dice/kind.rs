use std::fmt;

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieKind {
    /// Every die in display order.
    pub const ALL: [DieKind; 7] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
        DieKind::D100,
    ];

    pub const fn sides(self) -> u32 {
        match self {
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
            DieKind::D100 => 100,
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Button caption, e.g. `20-sided`.
    pub fn label(self) -> String {
        format!("{}-sided", self.sides())
    }

    pub fn roll_with<R: Rng>(self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.sides())
    }

    #[allow(dead_code)]
    pub fn roll(self) -> u32 {
        self.roll_with(&mut rand::thread_rng())
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn catalog_is_ordered_by_sides() {
        let sides: Vec<u32> = DieKind::ALL.iter().map(|k| k.sides()).collect();
        assert_eq!(sides, vec![4, 6, 8, 10, 12, 20, 100]);
        assert!(DieKind::ALL.windows(2).all(|w| w[0] < w[1]));
        for (i, kind) in DieKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0xD1CE);
        for kind in DieKind::ALL {
            for _ in 0..1000 {
                let n = kind.roll_with(&mut rng);
                assert!((1..=kind.sides()).contains(&n), "{kind} rolled {n}");
            }
        }
    }

    #[test]
    fn thread_rng_rolls_stay_in_range() {
        for kind in DieKind::ALL {
            for _ in 0..1000 {
                let n = kind.roll();
                assert!(n >= 1 && n <= kind.sides());
            }
        }
    }

    #[test]
    fn d4_eventually_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: Vec<u32> = (0..500).map(|_| DieKind::D4.roll_with(&mut rng)).collect();
        assert!(seen.contains(&1));
        assert!(seen.contains(&4));
    }

    #[test]
    fn labels() {
        assert_eq!(DieKind::D100.label(), "100-sided");
        assert_eq!(DieKind::D8.to_string(), "d8");
    }
}
