use crate::dedup::dedupe;
use crate::error::Result;
use crate::source::RulesSource;
use crate::types::{DayContext, IssueSet};

/// Issue state behind one fridge view.
///
/// Holds the current day context and the deduplicated issues of the most
/// recently completed fetch. Updates are last-write-wins: a response that
/// arrives late still replaces whatever is there. Failed fetches leave the
/// previous state in place.
#[derive(Debug, Clone, Default)]
pub struct IssueBoard {
    day: DayContext,
    issues: IssueSet,
    count: usize,
}

impl IssueBoard {
    pub fn new(day: DayContext) -> Self {
        Self {
            day,
            issues: IssueSet::default(),
            count: 0,
        }
    }

    pub fn day(&self) -> DayContext {
        self.day
    }

    pub fn issues(&self) -> &IssueSet {
        &self.issues
    }

    /// Number shown on the issues badge.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Apply the outcome of a rules fetch. Returns true if the board changed.
    pub fn apply(&mut self, fetched: Result<IssueSet>) -> bool {
        match fetched {
            Ok(raw) => {
                self.issues = dedupe(raw);
                self.recount();
                log::debug!("{} issues for {}", self.count, self.day);
                true
            }
            Err(e) => {
                log::warn!("Error fetching rules for {}: {}", self.day, e);
                false
            }
        }
    }

    /// Switch to another day context. Issues stay until the next refresh.
    pub fn switch_day(&mut self, day: DayContext) {
        self.day = day;
        self.recount();
    }

    pub fn toggle_day(&mut self) -> DayContext {
        self.switch_day(self.day.toggle());
        self.day
    }

    /// Fetch rules for the current day and apply them.
    pub async fn refresh<S: RulesSource + ?Sized>(&mut self, source: &S) -> bool {
        let fetched = source.fetch_rules(self.day).await;
        if fetched.is_err() {
            log::debug!("rules source '{}' failed", source.name());
        }
        self.apply(fetched)
    }

    fn recount(&mut self) {
        self.count = self.issues.issue_count();
    }
}
