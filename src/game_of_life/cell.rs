//! A single automaton cell with two-phase state

/// One cell of the grid.
///
/// `pending` holds the next-generation state while a step is being computed.
/// It only becomes visible through [`Cell::is_alive`] after [`Cell::commit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    pending: bool,
}

impl Cell {
    /// Create a cell whose current and pending state are both `alive`
    pub fn new(alive: bool) -> Self {
        Self {
            alive,
            pending: alive,
        }
    }

    /// Record the state for the next generation; last write wins
    #[inline]
    pub fn set_pending(&mut self, state: bool) {
        self.pending = state;
    }

    /// Apply the pending state
    #[inline]
    pub fn commit(&mut self) {
        self.alive = self.pending;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::new(false));
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn test_pending_hidden_until_commit() {
        let mut cell = Cell::new(false);
        cell.set_pending(true);
        assert!(!cell.is_alive());

        cell.commit();
        assert!(cell.is_alive());
    }

    #[test]
    fn test_last_pending_write_wins() {
        let mut cell = Cell::new(true);
        cell.set_pending(false);
        cell.set_pending(true);
        cell.set_pending(false);
        cell.commit();
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut cell = Cell::new(true);
        cell.commit();
        assert!(cell.is_alive());

        cell.set_pending(false);
        cell.commit();
        cell.commit();
        assert!(!cell.is_alive());
    }
}
