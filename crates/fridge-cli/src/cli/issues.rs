use super::{DedupArgs, IssuesArgs, OutputFormat};
use anyhow::Result;
use fridge_client::FridgeClient;
use fridge_core::{
    clickable_tags, dedupe, render_issue_report, DayContext, IssueBoard, IssueSet, RulesSource,
    TagGlossary,
};
use std::collections::BTreeSet;
use std::path::Path;

pub async fn run(args: IssuesArgs, client: &FridgeClient, day: DayContext) -> Result<()> {
    let mut board = IssueBoard::new(day);

    // Rules and glossary are independent; fetch both at once.
    let (refreshed, glossary) = if args.explain {
        let (refreshed, glossary) =
            futures::join!(board.refresh(client), client.fetch_glossary());
        (refreshed, Some(glossary))
    } else {
        (board.refresh(client).await, None)
    };

    if !refreshed {
        eprintln!("⚠️  Could not fetch {} rules; showing no issues.", day);
    }

    print_issues(board.issues(), args.format)?;

    if let Some(glossary) = glossary {
        match glossary {
            Ok(glossary) => print_glossary(board.issues(), &glossary),
            Err(e) => tracing::warn!("Error fetching the tag data: {}", e),
        }
    }
    Ok(())
}

pub fn dedup_file(args: DedupArgs) -> Result<()> {
    let issues = load_and_dedupe(&args.file)?;
    print_issues(&issues, args.format)
}

fn load_and_dedupe(path: &Path) -> Result<IssueSet> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(dedupe(IssueSet::from_json(&text)?))
}

fn print_issues(issues: &IssueSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(issues)?),
        OutputFormat::Text => print!("{}", render_issue_report(issues)),
    }
    Ok(())
}

fn print_glossary(issues: &IssueSet, glossary: &TagGlossary) {
    let tags: BTreeSet<&str> = issues.avoid.iter().flat_map(clickable_tags).collect();
    if tags.is_empty() {
        return;
    }
    println!();
    println!("Tag descriptions:");
    for tag in tags {
        match glossary.lookup(tag) {
            Some(description) => println!("  {}: {}", tag, description),
            None => tracing::debug!("Tag not found in the data: {}", tag),
        }
    }
}
