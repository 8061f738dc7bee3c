use crate::tags::TagGlossary;
use crate::types::{DayContext, IssueSet};
use crate::Result;
use async_trait::async_trait;

/// Where raw rules payloads and the tag glossary come from.
///
/// The HTTP client is the production implementation; tests plug in
/// in-memory sources.
#[async_trait]
pub trait RulesSource: Send + Sync {
    /// Source name (used in log lines).
    fn name(&self) -> &str;

    /// Raw, not yet deduplicated, rules for one day context.
    async fn fetch_rules(&self, day: DayContext) -> Result<IssueSet>;

    async fn fetch_glossary(&self) -> Result<TagGlossary>;
}
