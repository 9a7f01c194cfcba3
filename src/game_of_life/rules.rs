//! Conway's B3/S23 transition rule

use itertools::iproduct;

/// Life rule engine
pub struct LifeRule;

impl LifeRule {
    /// Next state of a cell given its current state and live neighbor count.
    ///
    /// Two neighbors keep the cell as it is, three make it alive, anything else kills it.
    #[inline]
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        match neighbors {
            2 => alive,
            3 => true,
            _ => false,
        }
    }

    /// The eight `(dx, dy)` offsets of the Moore neighborhood
    pub fn neighbor_offsets() -> impl Iterator<Item = (i64, i64)> {
        iproduct!(-1i64..=1, -1i64..=1).filter(|&(dx, dy)| dx != 0 || dy != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert!(LifeRule::next_state(true, 2)); // Survival with 2 neighbors
        assert!(LifeRule::next_state(true, 3)); // Survival with 3 neighbors
        assert!(LifeRule::next_state(false, 3)); // Birth with 3 neighbors
        assert!(!LifeRule::next_state(false, 2)); // Stays dead with 2 neighbors
        assert!(!LifeRule::next_state(true, 1)); // Underpopulation
        assert!(!LifeRule::next_state(true, 4)); // Overpopulation
        assert!(!LifeRule::next_state(false, 0));
        assert!(!LifeRule::next_state(true, 8));
    }

    #[test]
    fn test_neighbor_offsets() {
        let offsets: Vec<_> = LifeRule::neighbor_offsets().collect();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(1, 1)));
    }
}
