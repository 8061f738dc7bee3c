//! Conflict rule deduplication.
//!
//! The rules API reports an avoid-conflict once per direction: product A
//! against B, and again B against A, each with its own trailing effect word.
//! Deduplication collapses every unordered pair to one entry and gathers the
//! effect words into `rule.additional_tags`.

use crate::types::{AvoidIssue, IssueSet, ProductRef, Rule};
use std::collections::HashMap;

/// Order-independent identity of an avoid-conflict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(ProductRef, ProductRef);

impl PairKey {
    pub fn new(a: &ProductRef, b: &ProductRef) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }

    pub fn of(issue: &AvoidIssue) -> Self {
        Self::new(&issue.comp, &issue.source)
    }

    pub fn products(&self) -> (&ProductRef, &ProductRef) {
        (&self.0, &self.1)
    }
}

/// Last whitespace-separated word of a rule message.
///
/// `None` for an empty or whitespace-only message.
pub fn trailing_word(message: &str) -> Option<&str> {
    message.split_whitespace().next_back()
}

/// Whether `word` is the rule's own tag (or contains it) and so adds nothing.
/// Every word contains the empty tag.
fn overlaps_tag(tag: &str, word: &str) -> bool {
    word.contains(tag)
}

fn add_tag(rule: &mut Rule, word: &str) {
    if overlaps_tag(&rule.tag, word) || rule.additional_tags.iter().any(|t| t == word) {
        return;
    }
    rule.additional_tags.push(word.to_string());
}

/// First sighting of a pair: the entry itself becomes the survivor.
fn seed(item: &AvoidIssue) -> AvoidIssue {
    let mut survivor = item.clone();
    let carried = std::mem::take(&mut survivor.rule.additional_tags);
    for tag in &carried {
        add_tag(&mut survivor.rule, tag);
    }
    if let Some(word) = trailing_word(&item.rule.message) {
        add_tag(&mut survivor.rule, word);
    }
    survivor
}

/// Later sighting: only the effect words are kept.
fn absorb(survivor: &mut AvoidIssue, item: &AvoidIssue) {
    for tag in &item.rule.additional_tags {
        add_tag(&mut survivor.rule, tag);
    }
    if let Some(word) = trailing_word(&item.rule.message) {
        log::trace!(
            "merging '{}' into {} / {}",
            word,
            survivor.comp,
            survivor.source
        );
        add_tag(&mut survivor.rule, word);
    }
}

/// Collapse avoid issues so each unordered product pair appears once.
///
/// The first entry seen for a pair keeps its `comp`, `source`, `tag` and
/// `message`. Every entry for the pair contributes its trailing word to the
/// survivor's additional tags, unless the word overlaps the survivor's tag.
/// Output order is the order in which pairs were first seen.
pub fn dedup_avoid(items: &[AvoidIssue]) -> Vec<AvoidIssue> {
    let (_, merged) = items.iter().fold(
        (HashMap::<PairKey, usize>::new(), Vec::<AvoidIssue>::new()),
        |(mut slots, mut merged), item| {
            let key = PairKey::of(item);
            match slots.get(&key) {
                Some(&slot) => absorb(&mut merged[slot], item),
                None => {
                    slots.insert(key, merged.len());
                    merged.push(seed(item));
                }
            }
            (slots, merged)
        },
    );

    if merged.len() < items.len() {
        log::debug!(
            "collapsed {} avoid issues into {} pairs",
            items.len(),
            merged.len()
        );
    }
    merged
}

/// Deduplicate a whole rules payload. Advisory lists pass through untouched.
pub fn dedupe(raw: IssueSet) -> IssueSet {
    IssueSet {
        avoid: dedup_avoid(&raw.avoid),
        usewith: raw.usewith,
        usewhen: raw.usewhen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdvisoryIssue, ProductRef};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn avoid(comp: &str, source: &str, tag: &str, message: &str) -> AvoidIssue {
        AvoidIssue::new(comp, source, Rule::new(tag, message))
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = ProductRef::from("Serum");
        let b = ProductRef::from("Toner");
        assert_eq!(PairKey::new(&a, &b), PairKey::new(&b, &a));
        assert_ne!(PairKey::new(&a, &a), PairKey::new(&a, &b));
    }

    #[test]
    fn test_pair_key_does_not_rely_on_formatting() {
        // "a-b" + "c" and "a" + "b-c" concatenate to the same string.
        let k1 = PairKey::new(&"a-b".into(), &"c".into());
        let k2 = PairKey::new(&"a".into(), &"b-c".into());
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_trailing_word() {
        assert_eq!(trailing_word("avoid combining, causes irritation"), Some("irritation"));
        assert_eq!(trailing_word("  dryness  "), Some("dryness"));
        assert_eq!(trailing_word(""), None);
        assert_eq!(trailing_word("   "), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_avoid(&[]).is_empty());
    }

    #[test]
    fn test_single_entry_gets_own_word() {
        let out = dedup_avoid(&[avoid("P1", "P2", "AHA", "may cause redness")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule.additional_tags, vec!["redness"]);
    }

    #[test]
    fn test_single_entry_word_equal_to_tag_is_excluded() {
        let out = dedup_avoid(&[avoid("P1", "P2", "retinol", "do not layer with retinol")]);
        assert_eq!(out.len(), 1);
        assert!(out[0].rule.additional_tags.is_empty());
    }

    #[test]
    fn test_word_containing_tag_is_excluded() {
        let out = dedup_avoid(&[
            avoid("P1", "P2", "AHA", "too much AHA"),
            avoid("P2", "P1", "AHA", "stacked AHAs"),
        ]);
        assert!(out[0].rule.additional_tags.is_empty());
    }

    #[test]
    fn test_symmetric_pair_merges_words() {
        let out = dedup_avoid(&[
            avoid("A", "B", "t1", "can lead to breakouts"),
            avoid("B", "A", "t1", "can lead to dryness"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule.additional_tags, vec!["breakouts", "dryness"]);
    }

    #[test]
    fn test_scenario_aha_pair() {
        let out = dedup_avoid(&[
            avoid("P1", "P2", "AHA", "P1 contains AHA, avoid combining, causes irritation"),
            avoid("P2", "P1", "AHA", "P2 contains AHA, avoid combining, causes sensitivity"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule.additional_tags, vec!["irritation", "sensitivity"]);
    }

    #[test]
    fn test_first_seen_wins_base_fields() {
        let out = dedup_avoid(&[
            avoid("B", "A", "BHA", "first message dryness"),
            avoid("A", "B", "retinol", "second message peeling"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].comp, ProductRef::from("B"));
        assert_eq!(out[0].source, ProductRef::from("A"));
        assert_eq!(out[0].rule.tag, "BHA");
        assert_eq!(out[0].rule.message, "first message dryness");
        assert_eq!(out[0].rule.additional_tags, vec!["dryness", "peeling"]);
    }

    #[test]
    fn test_identical_duplicates_do_not_repeat_tags() {
        let entry = avoid("A", "B", "AHA", "causes irritation");
        let out = dedup_avoid(&[entry.clone(), entry.clone(), entry]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule.additional_tags, vec!["irritation"]);
    }

    #[test]
    fn test_distinct_pairs_keep_insertion_order() {
        let out = dedup_avoid(&[
            avoid("C", "D", "x", "m1 one"),
            avoid("A", "B", "x", "m2 two"),
            avoid("D", "C", "x", "m3 three"),
            avoid("A", "C", "x", "m4 four"),
        ]);
        let keys: Vec<_> = out.iter().map(|i| (i.comp.to_string(), i.source.to_string())).collect();
        assert_eq!(
            keys,
            vec![
                ("C".to_string(), "D".to_string()),
                ("A".to_string(), "B".to_string()),
                ("A".to_string(), "C".to_string()),
            ]
        );
        assert_eq!(out[0].rule.additional_tags, vec!["one", "three"]);
    }

    #[test]
    fn test_empty_message_contributes_nothing() {
        let out = dedup_avoid(&[avoid("A", "B", "AHA", ""), avoid("B", "A", "AHA", "   ")]);
        assert_eq!(out.len(), 1);
        assert!(out[0].rule.additional_tags.is_empty());
    }

    #[test]
    fn test_empty_tag_excludes_every_word() {
        let out = dedup_avoid(&[
            avoid("A", "B", "", "causes irritation"),
            avoid("B", "A", "", "causes dryness"),
        ]);
        assert_eq!(out.len(), 1);
        assert!(out[0].rule.additional_tags.is_empty());
    }

    #[test]
    fn test_mixed_id_kinds_are_distinct_products() {
        let out = dedup_avoid(&[
            AvoidIssue::new(1, "1", Rule::new("x", "a one")),
            AvoidIssue::new("1", 1, Rule::new("x", "b two")),
            AvoidIssue::new(1, 2, Rule::new("x", "c three")),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].rule.additional_tags, vec!["one", "two"]);
    }

    #[test]
    fn test_dedupe_passes_advisories_through() {
        let raw = IssueSet {
            avoid: vec![
                avoid("A", "B", "AHA", "irritation"),
                avoid("B", "A", "AHA", "sensitivity"),
            ],
            usewith: vec![
                AdvisoryIssue::new("A", Rule::new("SPF", "use with sunscreen")),
                AdvisoryIssue::new("A", Rule::new("SPF", "use with sunscreen")),
            ],
            usewhen: vec![AdvisoryIssue::new("B", Rule::new("night", "use at night"))],
        };
        let out = dedupe(raw.clone());
        assert_eq!(out.avoid.len(), 1);
        assert_eq!(out.usewith, raw.usewith);
        assert_eq!(out.usewhen, raw.usewhen);
        assert_eq!(out.issue_count(), 1 + 2 + 1);
    }

    fn arb_avoid() -> impl Strategy<Value = AvoidIssue> {
        let product = prop::sample::select(vec!["P1", "P2", "P3", "P4"]);
        let tag = prop::sample::select(vec!["AHA", "BHA", "retinol"]);
        let words = prop::collection::vec(
            prop::sample::select(vec!["avoid", "irritation", "dryness", "AHA", "retinol", "peeling"]),
            0..4,
        );
        (product.clone(), product, tag, words).prop_map(|(comp, source, tag, words)| {
            avoid(comp, source, tag, &words.join(" "))
        })
    }

    proptest! {
        #[test]
        fn prop_dedup_is_idempotent(items in prop::collection::vec(arb_avoid(), 0..16)) {
            let once = dedup_avoid(&items);
            let twice = dedup_avoid(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_each_pair_appears_once(items in prop::collection::vec(arb_avoid(), 0..16)) {
            let out = dedup_avoid(&items);
            let keys: HashSet<_> = out.iter().map(PairKey::of).collect();
            prop_assert_eq!(keys.len(), out.len());

            let input_keys: HashSet<_> = items.iter().map(PairKey::of).collect();
            prop_assert_eq!(input_keys, keys);
        }

        #[test]
        fn prop_tags_are_distinct_and_never_overlap_tag(items in prop::collection::vec(arb_avoid(), 0..16)) {
            for issue in dedup_avoid(&items) {
                let tags = &issue.rule.additional_tags;
                let distinct: HashSet<_> = tags.iter().collect();
                prop_assert_eq!(distinct.len(), tags.len());
                prop_assert!(tags.iter().all(|t| !t.contains(issue.rule.tag.as_str())));
            }
        }

        #[test]
        fn prop_count_invariant(
            items in prop::collection::vec(arb_avoid(), 0..16),
            advisories in 0usize..5
        ) {
            let raw = IssueSet {
                avoid: items,
                usewith: (0..advisories)
                    .map(|_| AdvisoryIssue::new("P1", Rule::new("SPF", "use sunscreen")))
                    .collect(),
                usewhen: Vec::new(),
            };
            let expected = dedup_avoid(&raw.avoid).len() + advisories;
            prop_assert_eq!(dedupe(raw).issue_count(), expected);
        }
    }
}
