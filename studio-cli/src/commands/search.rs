//! `studio search` - global search across clients, galleries and bookings

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use studio_core::{dispatch, search, SearchResult, StudioData, View};

use super::Session;

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive substring)
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A result plus the view it opens
#[derive(Debug, Serialize)]
struct Hit<'a> {
    #[serde(flatten)]
    result: &'a SearchResult,
    view: View,
}

pub fn run_search(session: &Session, args: &SearchArgs, out: &mut impl Write) -> Result<()> {
    let results = query(&session.data, &args.query);

    if args.json {
        let hits: Vec<Hit> = results
            .iter()
            .map(|result| Hit {
                result,
                view: dispatch(result),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &hits)?;
        writeln!(out)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "No results found for \"{}\"", args.query)?;
        return Ok(());
    }

    for result in &results {
        writeln!(
            out,
            "{:<8} {}  {}  -> {}",
            result.kind.label(),
            result.title,
            result.subtitle,
            dispatch(result).label()
        )?;
    }
    Ok(())
}

fn query(data: &StudioData, text: &str) -> Vec<SearchResult> {
    search(text, &data.clients, &data.galleries, &data.bookings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(query: &str, json: bool) -> String {
        let session = Session::builtin();
        let args = SearchArgs {
            query: query.to_string(),
            json,
        };
        let mut out = Vec::new();
        run_search(&session, &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output_names_target_view() {
        let out = run("sarah", false);
        assert!(out.lines().next().unwrap().starts_with("Client"));
        assert!(out.contains("Sarah Mitchell"));
        assert!(out.contains("-> Clients"));
    }

    #[test]
    fn test_no_results_message() {
        assert_eq!(run("xyzzy", false).trim(), "No results found for \"xyzzy\"");
    }

    #[test]
    fn test_json_output_carries_view() {
        let value: serde_json::Value = serde_json::from_str(&run("golden gate", true)).unwrap();
        let hits = value.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["kind"], "booking");
        assert_eq!(hits[0]["view"], "bookings");
    }

    #[test]
    fn test_blank_query_json_is_empty_array() {
        assert_eq!(run("   ", true).trim(), "[]");
    }
}
