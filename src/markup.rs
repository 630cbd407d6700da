//! Turns the free-text comparison reply into renderable sections.
//!
//! The LLM is asked for a pipe-separated attribute table followed by a few
//! titled prose blocks. Nothing guarantees it complies, so the parser is
//! deliberately forgiving: blank-line separated blocks, a `|` in the first
//! line marks a table, everything else becomes a titled notes block.

use serde::Serialize;
use tracing::trace;

/// One rendered block of a comparison reply.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Notes {
        title: String,
        tone: Tone,
        lines: Vec<Line>,
    },
}

/// Display hint derived from a notes-block title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Verdict,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub text: String,
    pub bullet: bool,
}

/// Strip the markdown emphasis markers the model sprinkles in anyway.
pub fn clean_markdown(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// Split a reply into blank-line separated sections.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let text = text.replace("\r\n", "\n");
    text.split("\n\n").filter_map(parse_section).collect()
}

fn parse_section(block: &str) -> Option<Section> {
    let block = block.trim();
    if block.is_empty() {
        trace!("Skipping empty section");
        return None;
    }

    let mut lines = block.lines();
    let first = lines.next()?.trim();

    if first.contains('|') {
        let headers = split_row(first);
        let rows: Vec<Vec<String>> = lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(split_row)
            .filter(|cells| !is_separator_row(cells))
            .collect();
        trace!(columns = headers.len(), rows = rows.len(), "Parsed table section");
        return Some(Section::Table { headers, rows });
    }

    let tone = classify_title(first);
    let lines = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix('-') {
            Some(rest) => Line {
                text: rest.trim().to_string(),
                bullet: true,
            },
            None => Line {
                text: line.to_string(),
                bullet: false,
            },
        })
        .collect();

    Some(Section::Notes {
        title: first.to_string(),
        tone,
        lines,
    })
}

/// Split a table line on `|`, trimming cells. A single empty cell produced by
/// a markdown-style edge pipe is dropped from each end; interior empty cells
/// are kept so rows stay aligned with their headers.
fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}

/// Markdown header separators like `---|:---:|---` are layout noise, not data.
fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

fn classify_title(title: &str) -> Tone {
    let lowered = title.to_lowercase();
    if ["winner", "recommendation", "verdict"]
        .iter()
        .any(|kw| lowered.contains(kw))
    {
        Tone::Verdict
    } else if ["weakness", "cons"].iter().any(|kw| lowered.contains(kw)) {
        Tone::Negative
    } else if ["strength", "pros"].iter().any(|kw| lowered.contains(kw)) {
        Tone::Positive
    } else {
        Tone::Neutral
    }
}
