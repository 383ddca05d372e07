//! Properties of TF-IDF table scoring.

use schemalens::error::Result;
use schemalens::prelude::*;
use schemalens::relevance::RelevanceScorer;

const SAMPLE_SCHEMA: &str = include_str!("../demos/sample_schema.json");

const QUERIES: &[&str] = &[
    "customer orders",
    "product price",
    "user email address",
    "when was the order placed",
    "unique identifier",
    "zebra",
];

#[test]
fn test_scores_are_bounded_and_deterministic() -> Result<()> {
    let schema = Schema::from_json_str(SAMPLE_SCHEMA)?;
    let scorer = RelevanceScorer::new()?;

    for query in QUERIES {
        let first = scorer.score(query, &schema, 0.0)?;
        let second = scorer.score(query, &schema, 0.0)?;
        assert_eq!(first, second, "scores differ for {query:?}");

        for (name, table) in &first {
            assert!(
                (0.0..=1.0).contains(&table.relevance_score),
                "{name} scored {} for {query:?}",
                table.relevance_score
            );
        }
    }

    Ok(())
}

#[test]
fn test_threshold_only_removes_tables() -> Result<()> {
    let schema = Schema::from_json_str(SAMPLE_SCHEMA)?;
    let scorer = RelevanceScorer::new()?;

    for query in QUERIES {
        let all = scorer.score(query, &schema, 0.0)?;
        assert_eq!(all.len(), schema.len());

        for threshold in [0.05, 0.1, 0.3, 1.0] {
            let kept = scorer.score(query, &schema, threshold)?;
            for (name, table) in &all {
                assert_eq!(
                    kept.contains_key(name),
                    table.relevance_score >= threshold,
                    "{name} at threshold {threshold} for {query:?}"
                );
            }
        }
    }

    Ok(())
}

#[test]
fn test_results_follow_schema_order() -> Result<()> {
    let schema = Schema::from_json_str(SAMPLE_SCHEMA)?;
    let scorer = RelevanceScorer::new()?;

    let tables = scorer.score("unique identifier", &schema, 0.0)?;
    let names: Vec<&String> = tables.keys().collect();
    assert_eq!(names, vec!["orders", "users", "products"]);

    Ok(())
}

#[test]
fn test_empty_schema_yields_no_tables() -> Result<()> {
    let system = SchemaSystem::new()?;
    let schema = Schema::from_json_str("{}")?;

    assert!(system.select_relevant_tables("orders", &schema, 0.1)?.is_empty());

    let result = system.process("orders", &schema)?;
    assert_eq!(result.corrected_query, "orders");
    assert!(result.relevant_tables.is_empty());

    Ok(())
}

#[test]
fn test_stop_word_query_yields_no_scores() -> Result<()> {
    let schema = Schema::from_json_str(SAMPLE_SCHEMA)?;
    let system = SchemaSystem::new()?;

    let tables = system.select_relevant_tables("the of and", &schema, 0.0)?;
    assert!(tables.values().all(|t| t.relevance_score == 0.0));

    Ok(())
}

#[test]
fn test_non_finite_threshold_is_an_error() -> Result<()> {
    let schema = Schema::from_json_str(SAMPLE_SCHEMA)?;
    let system = SchemaSystem::new()?;

    for threshold in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(system.select_relevant_tables("orders", &schema, threshold).is_err());
    }

    Ok(())
}
