use super::Cell;

/// Trait for the update rule applied on every step
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Growth rule (B3456/S0123456)
/// A dead cell with at least 3 alive neighbors is born; alive cells never die,
/// so the alive set only grows.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrowthRule;

/// Births need at least this many alive neighbors
pub const BIRTH_THRESHOLD: u8 = 3;

impl Rule for GrowthRule {
    fn name(&self) -> &'static str {
        "Growth"
    }

    fn description(&self) -> &'static str {
        "B3456/S0123456 - Monotonic"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, _) => Cell::Alive,
            (Cell::Dead, n) if n >= BIRTH_THRESHOLD => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Get default rule
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(GrowthRule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alive_never_dies() {
        let rule = GrowthRule;
        for neighbors in 0..=6 {
            assert_eq!(rule.evolve(Cell::Alive, neighbors), Cell::Alive);
        }
    }

    #[test]
    fn test_birth_threshold() {
        let rule = GrowthRule;
        assert_eq!(rule.evolve(Cell::Dead, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 6), Cell::Alive);
    }

    #[test]
    fn test_default_rule_is_growth() {
        assert_eq!(default_rule().name(), "Growth");
    }
}
