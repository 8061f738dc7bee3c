use fridge_core::*;

// ── Rules payload -> board -> report ─────────────────────────────────────────

const RULES: &str = r#"{
    "avoid": [
        { "comp": "Glow Toner", "source": "Night Cream",
          "rule": { "message": "Glow Toner contains AHA, avoid combining, causes irritation", "tag": "AHA" } },
        { "comp": "Night Cream", "source": "Glow Toner",
          "rule": { "message": "Night Cream contains AHA, avoid combining, causes sensitivity", "tag": "AHA" } },
        { "comp": "Night Cream", "source": "Spot Gel",
          "rule": { "message": "avoid layering with retinol", "tag": "retinol" } }
    ],
    "usewith": [
        { "source": "Glow Toner", "rule": { "message": "use with sunscreen", "tag": "SPF" } }
    ]
}"#;

#[test]
fn test_payload_to_report() {
    let raw = IssueSet::from_json(RULES).unwrap();
    assert_eq!(raw.issue_count(), 4);
    assert!(raw.usewhen.is_empty());

    let mut board = IssueBoard::new(DayContext::AM);
    board.apply(Ok(raw));
    assert_eq!(board.count(), 3);

    let avoid = &board.issues().avoid;
    assert_eq!(avoid[0].rule.additional_tags, vec!["irritation", "sensitivity"]);
    assert!(avoid[1].rule.additional_tags.is_empty());

    let report = render_issue_report(board.issues());
    assert!(report.contains(
        "Glow Toner contains AHA, so please Glow Toner contains AHA, avoid combining, causes [ irritation, sensitivity ] like Night Cream."
    ));
    assert!(report.contains("Glow Toner: use with sunscreen"));
}

#[test]
fn test_output_round_trips_through_json() {
    let deduped = dedupe(IssueSet::from_json(RULES).unwrap());
    let json = serde_json::to_string(&deduped).unwrap();
    assert!(json.contains("\"additionalTags\":[\"irritation\",\"sensitivity\"]"));

    let reparsed = IssueSet::from_json(&json).unwrap();
    assert_eq!(dedupe(reparsed), deduped);
}

#[test]
fn test_glossary_lookup_for_rendered_tags() {
    let deduped = dedupe(IssueSet::from_json(RULES).unwrap());
    let glossary = TagGlossary::new()
        .with_entry("AHA", "Alpha hydroxy acids.")
        .with_entry("irritation", "Redness or stinging.");

    let found: Vec<_> = clickable_tags(&deduped.avoid[0])
        .into_iter()
        .filter_map(|t| glossary.lookup(t))
        .collect();
    assert_eq!(found, vec!["Alpha hydroxy acids.", "Redness or stinging."]);
    assert!(matches!(
        glossary.describe("sensitivity"),
        Err(FridgeError::TagNotFound(_))
    ));
}
