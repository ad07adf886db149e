use thiserror::Error;

/// Rejected playing XI edits. Shown to the user; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("You can select a maximum of {max} players!")]
    LimitExceeded { max: usize },
}

/// A user-composed playing XI, stored as table indices in pick order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayingXi {
    max: usize,
    picks: Vec<usize>,
}

impl PlayingXi {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            picks: Vec::with_capacity(max),
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.picks.contains(&index)
    }

    /// Add or remove a player. Adding beyond `max` leaves the selection
    /// unchanged and returns an error.
    pub fn set(&mut self, index: usize, selected: bool) -> Result<(), SelectionError> {
        match (selected, self.contains(index)) {
            (true, false) => {
                if self.picks.len() >= self.max {
                    return Err(SelectionError::LimitExceeded { max: self.max });
                }
                self.picks.push(index);
            }
            (false, true) => self.picks.retain(|&i| i != index),
            _ => {}
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
