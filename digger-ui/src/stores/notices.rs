//! Session notices
//!
//! Dismissible banners accumulated over a session: crawl outcomes, fetch
//! failures. Appends always go through `&mut self` against the latest list,
//! never a captured snapshot, and the list is bounded with oldest-first
//! eviction.

use tracing::debug;

/// Most notices the list holds before old ones are evicted.
const MAX_NOTICES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Error,
}

/// One dismissible notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub severity: NoticeSeverity,
    pub message: String,
}

/// The session's notice list.
#[derive(Debug, Default)]
pub struct NoticeState {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Append a notice, evicting the oldest when the list is full. Returns
    /// the id usable for dismissal.
    pub fn push(&mut self, severity: NoticeSeverity, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            severity,
            message: message.into(),
        });
        if self.notices.len() > MAX_NOTICES {
            let evicted = self.notices.remove(0);
            debug!("notice list full, evicting notice {}", evicted.id);
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeSeverity::Info, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeSeverity::Error, message)
    }

    /// Dismiss by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_keep_prior_notices() {
        let mut state = NoticeState::new();
        state.info("Crawl ok");
        state.error("invalid start_id");
        let messages: Vec<_> = state.notices().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["Crawl ok", "invalid start_id"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut state = NoticeState::new();
        let first = state.info("one");
        let second = state.error("two");
        state.dismiss(first);
        assert_eq!(state.notices().len(), 1);
        assert_eq!(state.notices()[0].id, second);
        // Dismissing again is harmless.
        state.dismiss(first);
        assert_eq!(state.notices().len(), 1);
    }

    #[test]
    fn list_is_bounded_with_oldest_evicted() {
        let mut state = NoticeState::new();
        for i in 0..(MAX_NOTICES + 3) {
            state.error(format!("notice {i}"));
        }
        assert_eq!(state.notices().len(), MAX_NOTICES);
        assert_eq!(state.notices()[0].message, "notice 3");
    }

    #[test]
    fn ids_stay_unique_after_eviction() {
        let mut state = NoticeState::new();
        for _ in 0..MAX_NOTICES {
            state.info("x");
        }
        let id = state.error("target");
        state.dismiss(id);
        assert!(state.notices().iter().all(|n| n.id != id));
    }
}
