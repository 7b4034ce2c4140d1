/// Cyclic focus cursor over a fixed list of focusable slots.
///
/// Models wrap-around Tab order inside an open panel: advancing past the
/// last slot returns to the first and backing up from the first returns to
/// the last. An empty ring never reports a focused slot.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    len: usize,
    cursor: Option<usize>,
}

impl FocusRing {
    /// Create a ring over `len` focusable slots, none focused.
    pub fn new(len: usize) -> Self {
        Self { len, cursor: None }
    }

    /// Number of slots in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return whether the ring has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently focused slot, if any.
    pub fn focused(&self) -> Option<usize> {
        self.cursor
    }

    /// Move focus one slot forward or backward, wrapping at the ends.
    ///
    /// Entering the ring without prior focus lands on the first slot when
    /// moving forward and on the last when moving backward. Returns the new
    /// focused slot, or `None` for an empty ring.
    pub fn advance(&mut self, backward: bool) -> Option<usize> {
        if self.len == 0 {
            return None;
        }

        let next = match self.cursor {
            None if backward => self.len - 1,
            None => 0,
            Some(current) if backward => (current + self.len - 1) % self.len,
            Some(current) => (current + 1) % self.len,
        };
        self.cursor = Some(next);
        self.cursor
    }

    /// Set focus to a specific slot. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) {
        if index < self.len {
            self.cursor = Some(index);
        }
    }

    /// Drop focus entirely.
    pub fn clear(&mut self) {
        self.cursor = None;
    }
}
