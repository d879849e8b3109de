use rand::{SeedableRng, rngs::StdRng};

mod random_union;

pub use random_union::generate_maze;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Which wall slots are cleared on the two cells of a freshly carved passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallPolicy {
    /// Each of the two cells independently picks, uniformly at random,
    /// between the passage direction and its reverse, and clears that slot.
    /// Openings may end up on sides that do not face each other.
    Independent,
    /// Each cell clears exactly the wall facing the other. Produces
    /// geometrically symmetric openings but a different wall distribution
    /// than [`WallPolicy::Independent`].
    Facing,
}

impl std::fmt::Display for WallPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallPolicy::Independent => write!(f, "Independent random wall choice"),
            WallPolicy::Facing => write!(f, "Mirrored facing walls"),
        }
    }
}
