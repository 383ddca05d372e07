//! Command implementations for the schemalens CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SystemConfig;
use crate::error::Result;
use crate::schema::Schema;
use crate::system::SchemaSystem;

/// Execute a CLI command.
pub fn execute_command(args: SchemaLensArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let system = SchemaSystem::with_config(config)?;

    match &args.command {
        Command::Process(process_args) => process_query(process_args, &system, &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args, &system, &args),
        Command::Variations(variations_args) => {
            list_variations(variations_args, &system, &args)
        }
        Command::Select(select_args) => select_tables(select_args, &system, &args),
        Command::Vocabulary(vocabulary_args) => {
            show_vocabulary(vocabulary_args, &system, &args)
        }
        Command::Interactive(interactive_args) => {
            let schema = load_schema(&interactive_args.schema)?;
            let threshold = interactive_args
                .threshold
                .unwrap_or(system.config().relevance_threshold);

            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(&system, &schema, threshold, stdin.lock(), stdout.lock())
        }
    }
}

/// Load the configuration file, or the defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<SystemConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            SystemConfig::load(path)
        }
        None => Ok(SystemConfig::default()),
    }
}

fn load_schema(path: &Path) -> Result<Schema> {
    info!("Loading schema from: {}", path.display());
    let schema = Schema::load(path)?;
    if schema.is_empty() {
        warn!("Schema {} has no tables", path.display());
    }
    Ok(schema)
}

/// Correct a query and select tables.
fn process_query(args: &ProcessArgs, system: &SchemaSystem, cli_args: &SchemaLensArgs) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let threshold = args.threshold.unwrap_or(system.config().relevance_threshold);
    let result = system.process_with_threshold(&args.query, &schema, threshold)?;

    output_result(
        "Query processed",
        &ProcessOutput {
            query: args.query.clone(),
            corrected_query: result.corrected_query,
            threshold,
            relevant_tables: result.relevant_tables,
        },
        cli_args,
    )
}

/// Suggest corrections for one word.
fn suggest_word(args: &SuggestArgs, system: &SchemaSystem, cli_args: &SchemaLensArgs) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let suggestions = system.suggest(&args.word, &schema);

    output_result(
        "Word suggestions",
        &SuggestionsOutput {
            word: args.word.clone(),
            suggestions,
        },
        cli_args,
    )
}

/// List query variations.
fn list_variations(
    args: &VariationsArgs,
    system: &SchemaSystem,
    cli_args: &SchemaLensArgs,
) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let variations = system.suggest_query_corrections(&args.query, &schema);

    output_result(
        "Query variations",
        &VariationsOutput {
            query: args.query.clone(),
            variations,
        },
        cli_args,
    )
}

/// Select tables for an uncorrected query.
fn select_tables(args: &SelectArgs, system: &SchemaSystem, cli_args: &SchemaLensArgs) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let threshold = args.threshold.unwrap_or(system.config().relevance_threshold);
    let relevant_tables = system.select_relevant_tables(&args.query, &schema, threshold)?;

    output_result(
        "Relevant tables",
        &SelectionOutput {
            query: args.query.clone(),
            threshold,
            relevant_tables,
        },
        cli_args,
    )
}

/// Show the vocabulary of a schema.
fn show_vocabulary(
    args: &VocabularyArgs,
    system: &SchemaSystem,
    cli_args: &SchemaLensArgs,
) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let vocabulary = system.vocabulary(&schema);

    output_result("Schema vocabulary", vocabulary.as_ref(), cli_args)
}

/// Read queries line by line, offer corrections, and list relevant tables
/// for the query the user settles on. Ends on `quit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    system: &SchemaSystem,
    schema: &Schema,
    threshold: f64,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "schemalens interactive session")?;
    writeln!(output, "Enter queries to get corrections and relevant tables")?;
    writeln!(output, "Type 'quit' to exit")?;
    writeln!(output)?;

    loop {
        let Some(query) = prompt(&mut input, &mut output, "Query: ")? else {
            break;
        };

        if query.is_empty() {
            writeln!(output, "Please enter a query")?;
            continue;
        }
        if query.eq_ignore_ascii_case("quit") {
            break;
        }

        let corrections = system.suggest_query_corrections(&query, schema);

        writeln!(output)?;
        writeln!(output, "Possible corrections:")?;
        for (i, variation) in corrections.iter().enumerate() {
            if variation.query != query {
                writeln!(output, "{}. {}", i + 1, variation.query)?;
                writeln!(output, "   Confidence: {:.2}", variation.confidence)?;
                writeln!(output, "   Source: {}", variation.label)?;
            }
        }

        let selected = if corrections.len() > 1 {
            let message = format!(
                "\nSelect correction (1-{}) or press Enter to keep original: ",
                corrections.len()
            );
            loop {
                let Some(choice) = prompt(&mut input, &mut output, &message)? else {
                    return Ok(());
                };
                if choice.is_empty() {
                    break query.clone();
                }
                match choice.parse::<usize>() {
                    Ok(n) if (1..=corrections.len()).contains(&n) => {
                        break corrections[n - 1].query.clone();
                    }
                    _ => writeln!(output, "Invalid choice. Please try again.")?,
                }
            }
        } else {
            query.clone()
        };

        writeln!(output)?;
        writeln!(output, "Using query: {selected}")?;
        writeln!(output)?;
        match system.select_relevant_tables(&selected, schema, threshold) {
            Ok(tables) => write_tables(&mut output, &tables)?,
            Err(e) => writeln!(output, "Error: {e}")?,
        }
        writeln!(output)?;
    }

    Ok(())
}

/// Print `message`, read one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnSchema, TableSchema};

    fn shop() -> Schema {
        Schema::new()
            .with_table(
                "orders",
                TableSchema::new(vec![
                    ColumnSchema::new("order_id", "integer"),
                    ColumnSchema::new("order_date", "date"),
                ]),
            )
            .with_table(
                "users",
                TableSchema::new(vec![
                    ColumnSchema::new("user_id", "integer"),
                    ColumnSchema::new("email", "string").with_description("User's email address"),
                ]),
            )
    }

    fn session(input: &str) -> String {
        let system = SchemaSystem::new().unwrap();
        let mut output = Vec::new();
        run_interactive(&system, &shop(), 0.1, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit_and_empty_input() {
        let text = session("\nquit\nemail\n");
        assert!(text.contains("Please enter a query"));
        assert!(!text.contains("Using query"));
    }

    #[test]
    fn test_pick_a_correction() {
        // "emal" is close to the schema term "email"; the best match leads
        let text = session("emal\n1\n");
        assert!(text.contains("1. email"));
        assert!(text.contains("Source: best_match"));
        assert!(text.contains("Using query: email"));
        assert!(text.contains("- users (relevance:"));
    }

    #[test]
    fn test_keep_original_after_invalid_choice() {
        let text = session("emal\n9\nx\n\nquit\n");
        assert_eq!(text.matches("Invalid choice. Please try again.").count(), 2);
        assert!(text.contains("Using query: emal"));
        assert!(text.contains("No relevant tables found."));
    }

    #[test]
    fn test_single_variation_needs_no_choice() {
        let text = session("12345\n");
        assert!(!text.contains("Select correction"));
        assert!(text.contains("Using query: 12345"));
    }

    #[test]
    fn test_load_config_defaults() {
        assert_eq!(load_config(None).unwrap(), SystemConfig::default());
    }
}
