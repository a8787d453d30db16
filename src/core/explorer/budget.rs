/// Iteration cap that grows with zoom depth and never drops below its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    current: u32,
    initial: u32,
}

impl IterationBudget {
    #[must_use]
    pub fn new(initial: u32) -> Self {
        Self {
            current: initial,
            initial,
        }
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Returns whether the value changed.
    pub fn increase(&mut self, step: u32) -> bool {
        let previous = self.current;
        self.current = self.current.saturating_add(step);
        self.current != previous
    }

    /// Returns whether the value changed.
    pub fn decrease(&mut self, step: u32) -> bool {
        let previous = self.current;
        self.current = self.current.saturating_sub(step).max(self.initial);
        self.current != previous
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}
