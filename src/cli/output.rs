//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SchemaLensArgs};
use crate::error::Result;
use crate::relevance::RelevantTables;
use crate::spelling::Suggestion;
use crate::variation::QueryVariation;
use crate::vocabulary::Vocabulary;

/// Result structure for query processing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessOutput {
    pub query: String,
    pub corrected_query: String,
    pub threshold: f64,
    pub relevant_tables: RelevantTables,
}

/// Result structure for word suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsOutput {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for query variations.
#[derive(Debug, Serialize, Deserialize)]
pub struct VariationsOutput {
    pub query: String,
    pub variations: Vec<QueryVariation>,
}

/// Result structure for table selection.
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionOutput {
    pub query: String,
    pub threshold: f64,
    pub relevant_tables: RelevantTables,
}

/// Plain-text rendering for the `human` output format.
pub trait HumanReadable {
    /// Write this value for a person to read.
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanReadable for ProcessOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Query: {}", self.query)?;
        writeln!(out, "Corrected query: {}", self.corrected_query)?;
        writeln!(out)?;
        write_tables(out, &self.relevant_tables)
    }
}

impl HumanReadable for SuggestionsOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.suggestions.is_empty() {
            return writeln!(out, "No suggestions for '{}'", self.word);
        }

        writeln!(out, "Suggestions for '{}':", self.word)?;
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            writeln!(
                out,
                "{}. {} (confidence: {:.2}, source: {})",
                i + 1,
                suggestion.word,
                suggestion.confidence,
                suggestion.source
            )?;
        }
        Ok(())
    }
}

impl HumanReadable for VariationsOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Variations of '{}':", self.query)?;
        for (i, variation) in self.variations.iter().enumerate() {
            writeln!(
                out,
                "{}. {} (confidence: {:.2}, {})",
                i + 1,
                variation.query,
                variation.confidence,
                variation.label
            )?;
        }
        Ok(())
    }
}

impl HumanReadable for SelectionOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        write_tables(out, &self.relevant_tables)
    }
}

impl HumanReadable for Vocabulary {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Schema terms ({}):", self.schema_vocabulary.len())?;
        write_word_list(out, self.schema_vocabulary.iter())?;
        writeln!(out)?;
        writeln!(out, "Context words ({}):", self.context_words.len())?;
        write_word_list(out, self.context_words.iter())
    }
}

/// Write relevant tables with their scores and columns.
pub fn write_tables(out: &mut dyn Write, tables: &RelevantTables) -> io::Result<()> {
    if tables.is_empty() {
        return writeln!(out, "No relevant tables found.");
    }

    writeln!(out, "Relevant tables:")?;
    for (name, table) in tables {
        writeln!(out)?;
        writeln!(out, "- {name} (relevance: {:.2})", table.relevance_score)?;
        writeln!(out, "  Columns:")?;
        for column in &table.table.columns {
            match &column.column_type {
                Some(column_type) => writeln!(out, "    - {}: {column_type}", column.name)?,
                None => writeln!(out, "    - {}", column.name)?,
            }
            if let Some(description) = &column.description {
                writeln!(out, "      {description}")?;
            }
        }
    }
    Ok(())
}

fn write_word_list<'a, I: Iterator<Item = &'a String>>(
    out: &mut dyn Write,
    words: I,
) -> io::Result<()> {
    let words: Vec<&str> = words.map(String::as_str).collect();
    if words.is_empty() {
        return writeln!(out, "  (none)");
    }
    for line in words.chunks(8) {
        writeln!(out, "  {}", line.join(", "))?;
    }
    Ok(())
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &SchemaLensArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(
        message,
        result,
        args.output_format,
        args.pretty,
        args.verbosity(),
        &mut out,
    )
}

/// Render a result to any writer.
pub fn render<T, W>(
    message: &str,
    result: &T,
    format: OutputFormat,
    pretty: bool,
    verbosity: u8,
    out: &mut W,
) -> Result<()>
where
    T: Serialize + HumanReadable,
    W: Write,
{
    match format {
        OutputFormat::Human => {
            if verbosity > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(result)?;
            write!(out, "{yaml}")?;
        }
    }
    Ok(())
}
