use std::collections::VecDeque;

/// Announcements kept before the oldest entries are dropped.
const HISTORY_LIMIT: usize = 16;

/// How urgently an announcement should interrupt the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    /// Read when the reader is idle.
    Polite,
    /// Read immediately, interrupting other output.
    Assertive,
}

/// A single user-facing status announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    text: String,
    politeness: Politeness,
}

impl Announcement {
    /// Create a polite announcement.
    pub fn polite(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Polite,
        }
    }

    /// Create an assertive announcement.
    pub fn assertive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Assertive,
        }
    }

    /// Announcement text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Announcement urgency.
    pub fn politeness(&self) -> Politeness {
        self.politeness
    }
}

/// Bounded queue of announcements backing a status display.
///
/// The newest entry is what a live status line renders; older entries are
/// retained for history views and dropped past [`HISTORY_LIMIT`].
#[derive(Debug, Default)]
pub struct Announcer {
    history: VecDeque<Announcement>,
}

impl Announcer {
    /// Create an announcer with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an announcement, trimming history past the retention limit.
    pub fn announce(&mut self, announcement: Announcement) {
        log::debug!("announce: {}", announcement.text());
        self.history.push_back(announcement);
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }

    /// Most recent announcement, if any.
    pub fn latest(&self) -> Option<&Announcement> {
        self.history.back()
    }

    /// Retained announcements, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Announcement> {
        self.history.iter()
    }

    /// Drop all retained announcements.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Announcement, Announcer, HISTORY_LIMIT, Politeness};

    #[test]
    fn given_announcements_when_recorded_then_latest_returns_most_recent() {
        let mut announcer = Announcer::new();
        announcer.announce(Announcement::polite("first"));
        announcer.announce(Announcement::assertive("second"));

        let latest = announcer.latest().expect("latest announcement");
        assert_eq!(latest.text(), "second");
        assert_eq!(latest.politeness(), Politeness::Assertive);
    }

    #[test]
    fn given_history_over_limit_when_recorded_then_oldest_entries_drop() {
        let mut announcer = Announcer::new();
        for index in 0..HISTORY_LIMIT + 3 {
            announcer.announce(Announcement::polite(format!("entry {index}")));
        }

        assert_eq!(announcer.history().count(), HISTORY_LIMIT);
        let oldest = announcer.history().next().expect("oldest announcement");
        assert_eq!(oldest.text(), "entry 3");
    }

    #[test]
    fn given_recorded_announcements_when_cleared_then_history_is_empty() {
        let mut announcer = Announcer::new();
        announcer.announce(Announcement::polite("entry"));
        announcer.clear();
        assert_eq!(announcer.latest(), None);
        assert_eq!(announcer.history().count(), 0);
    }
}
