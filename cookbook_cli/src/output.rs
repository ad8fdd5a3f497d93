use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::AppResult,
    script::{Operation, Outcome},
};

/// Output format for operation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    op: &'static str,
    result: &'a Outcome,
}

/// Renders one operation result as a single line.
pub fn render(operation: &Operation, outcome: &Outcome, format: OutputFormat) -> AppResult<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(&Report {
            op: operation.name(),
            result: outcome,
        })?,
        OutputFormat::Text => format!("{}: {}", operation.name(), render_text(outcome)),
    })
}

fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Author(author) => single(author.as_ref()),
        Outcome::Book(book) => single(book.as_ref()),
        Outcome::Authors(authors) => list(authors.as_deref()),
        Outcome::Books(books) => list(books.as_deref()),
    }
}

fn single<T: Display>(item: Option<&T>) -> String {
    item.map_or_else(|| "none".to_string(), ToString::to_string)
}

fn list<T: Display>(items: Option<&[T]>) -> String {
    items.map_or_else(|| "none".to_string(), |items| items.iter().join("; "))
}
