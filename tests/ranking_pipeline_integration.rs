//! Integration tests for the ranking pipeline.
//!
//! These tests verify the end-to-end flow:
//! 1. Alternatives are read from a repository or JSON file
//! 2. ComputeRankingHandler ranks them and swaps the result into the store
//! 3. A `ranking.computed.v1` event is published
//! 4. GetRankingHandler reads the stored ranking back
//!
//! Property tests at the bottom check the flow invariants on random inputs.

use std::io::Write;
use std::sync::Arc;

use proptest::prelude::*;

use outrank::adapters::{
    ConfiguredCriteriaReader, InMemoryAlternativeRepository, InMemoryEventBus,
    InMemoryRankingStore, JsonFileAlternativeReader,
};
use outrank::application::{
    ComputeRankingCommand, ComputeRankingError, ComputeRankingHandler, GetRankingHandler,
    GetRankingQuery,
};
use outrank::domain::foundation::{AlternativeId, ErrorCode};
use outrank::domain::ranking::{
    round2, Alternative, Criterion, CriterionDirection, PrometheeRanker, RankedEntry,
    RankingComputed, RankingError,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    repository: Arc<InMemoryAlternativeRepository>,
    store: Arc<InMemoryRankingStore>,
    events: Arc<InMemoryEventBus>,
    compute: ComputeRankingHandler,
    query: GetRankingHandler,
}

impl Harness {
    fn new(alternatives: Vec<Alternative>, criteria: Vec<Criterion>) -> Self {
        let repository = Arc::new(InMemoryAlternativeRepository::with_alternatives(alternatives));
        let store = Arc::new(InMemoryRankingStore::new());
        let events = Arc::new(InMemoryEventBus::new());
        let compute = ComputeRankingHandler::new(
            repository.clone(),
            Arc::new(ConfiguredCriteriaReader::new(criteria)),
            store.clone(),
            events.clone(),
        );
        let query = GetRankingHandler::new(store.clone());
        Self {
            repository,
            store,
            events,
            compute,
            query,
        }
    }
}

fn alt(id: u64, label: &str, values: Vec<f64>) -> Alternative {
    Alternative::new(AlternativeId::from(id), label, values)
}

fn two_benefits() -> Vec<Criterion> {
    vec![
        Criterion::benefit("reach", "Reach"),
        Criterion::benefit("engagement", "Engagement"),
    ]
}

fn labels(entries: &[RankedEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.label.as_str()).collect()
}

// =============================================================================
// End-to-end flow
// =============================================================================

#[tokio::test]
async fn computes_stores_and_announces_ranking() {
    let harness = Harness::new(
        vec![
            alt(1, "A", vec![10.0, 5.0]),
            alt(2, "B", vec![5.0, 10.0]),
            alt(3, "C", vec![1.0, 1.0]),
        ],
        two_benefits(),
    );

    let result = harness
        .compute
        .handle(ComputeRankingCommand {
            correlation_id: Some("integration".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(labels(result.ranking.entries()), vec!["A", "B", "C"]);

    let stored = harness.query.handle(GetRankingQuery).await.unwrap();
    assert_eq!(stored, result.ranking);

    let events = harness.events.events_of_type("ranking.computed.v1").await;
    assert_eq!(events.len(), 1);
    let payload: RankingComputed = events[0].payload_as().unwrap();
    assert_eq!(payload.top_alternative_id, Some(AlternativeId::from(1)));
    assert_eq!(payload.alternative_count, 3);
    assert!(result.published);
}

#[tokio::test]
async fn query_before_first_run_is_not_found() {
    let harness = Harness::new(vec![], two_benefits());

    let err = harness.query.handle(GetRankingQuery).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RankingNotFound);
}

#[tokio::test]
async fn failed_run_keeps_previous_ranking() {
    let harness = Harness::new(
        vec![alt(1, "A", vec![10.0, 5.0]), alt(2, "B", vec![5.0, 10.0])],
        two_benefits(),
    );
    let first = harness.compute.handle(ComputeRankingCommand::default()).await.unwrap();

    harness.repository.remove(&AlternativeId::from(2)).await;
    let err = harness
        .compute
        .handle(ComputeRankingCommand::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ComputeRankingError::Ranking(RankingError::InsufficientData { found: 1 })
    ));
    let snapshot = harness.store.snapshot().await.unwrap();
    assert_eq!(snapshot.run_id(), first.ranking.run_id());
    assert_eq!(harness.events.event_count().await, 1);
    assert!(harness.events.has_event("ranking.computed.v1").await);
}

#[tokio::test]
async fn rerun_replaces_ranking_wholesale() {
    let harness = Harness::new(
        vec![alt(1, "A", vec![10.0, 5.0]), alt(2, "B", vec![5.0, 10.0])],
        two_benefits(),
    );
    harness.compute.handle(ComputeRankingCommand::default()).await.unwrap();

    harness.repository.upsert(alt(3, "C", vec![20.0, 20.0])).await;
    let second = harness.compute.handle(ComputeRankingCommand::default()).await.unwrap();

    let stored = harness.query.handle(GetRankingQuery).await.unwrap();
    assert_eq!(stored.run_id(), second.ranking.run_id());
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.top().unwrap().label, "C");
}

#[tokio::test]
async fn ranks_alternatives_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"alternatives": [
            {{"id": "1", "label": "@pricey", "criterion_values": [100, 900], "note": "fashion"}},
            {{"id": "2", "label": "@cheap", "criterion_values": [100, 300]}}
        ]}}"#
    )
    .unwrap();

    let store = Arc::new(InMemoryRankingStore::new());
    let handler = ComputeRankingHandler::new(
        Arc::new(JsonFileAlternativeReader::new(file.path())),
        Arc::new(ConfiguredCriteriaReader::new(vec![
            Criterion::benefit("reach", "Reach"),
            Criterion::cost("price", "Price"),
        ])),
        store,
        Arc::new(InMemoryEventBus::new()),
    );

    let result = handler.handle(ComputeRankingCommand::default()).await.unwrap();

    assert_eq!(labels(result.ranking.entries()), vec!["@cheap", "@pricey"]);
    assert_eq!(result.ranking.entries()[1].note.as_deref(), Some("fashion"));
}

#[tokio::test]
async fn missing_json_file_is_storage_error() {
    let handler = ComputeRankingHandler::new(
        Arc::new(JsonFileAlternativeReader::new("/nonexistent/alternatives.json")),
        Arc::new(ConfiguredCriteriaReader::default()),
        Arc::new(InMemoryRankingStore::new()),
        Arc::new(InMemoryEventBus::new()),
    );

    let err = handler.handle(ComputeRankingCommand::default()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::StorageError);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn single_criterion_is_degenerate() {
    let alternatives = vec![alt(1, "low", vec![10.0]), alt(2, "high", vec![20.0])];

    let err = PrometheeRanker::rank(&alternatives, 1, &[CriterionDirection::Benefit]).unwrap_err();
    assert_eq!(err, RankingError::DegenerateCriteriaSet { found: 1 });
}

#[test]
fn symmetric_alternatives_keep_input_order() {
    let alternatives = vec![
        alt(1, "A", vec![10.0, 5.0]),
        alt(2, "B", vec![5.0, 10.0]),
        alt(3, "C", vec![1.0, 1.0]),
    ];

    let entries = PrometheeRanker::rank_with_criteria(&alternatives, &two_benefits()).unwrap();

    assert_eq!(labels(&entries), vec!["A", "B", "C"]);
    assert_eq!(entries[0].net_flow, entries[1].net_flow);
    assert!(entries[2].net_flow < entries[1].net_flow);
}

#[test]
fn short_vector_against_default_criteria_is_malformed() {
    let alternatives = vec![alt(1, "full", vec![1.0; 9]), alt(2, "short", vec![1.0; 8])];

    let err = PrometheeRanker::rank_with_criteria(&alternatives, &Criterion::default_set())
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MalformedRecord);
    assert!(matches!(
        err,
        RankingError::MalformedRecord { ref alternative_id, .. } if alternative_id.as_str() == "2"
    ));
}

// =============================================================================
// Properties
// =============================================================================

fn ranking_input() -> impl Strategy<Value = (Vec<Alternative>, Vec<CriterionDirection>)> {
    (2usize..8, 2usize..6).prop_flat_map(|(n, k)| {
        let direction = prop_oneof![
            Just(CriterionDirection::Benefit),
            Just(CriterionDirection::Cost)
        ];
        // Small integer range so ties are common
        let row = proptest::collection::vec((0i32..5).prop_map(f64::from), k);
        (
            proptest::collection::vec(row, n),
            proptest::collection::vec(direction, k),
        )
            .prop_map(|(rows, directions)| {
                let alternatives = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, values)| alt(i as u64, &format!("alt{}", i), values))
                    .collect();
                (alternatives, directions)
            })
    })
}

fn run(alternatives: &[Alternative], directions: &[CriterionDirection]) -> Vec<RankedEntry> {
    PrometheeRanker::rank(alternatives, directions.len(), directions).unwrap()
}

proptest! {
    #[test]
    fn leaving_and_entering_sums_balance((alternatives, directions) in ranking_input()) {
        let entries = run(&alternatives, &directions);
        let leaving: f64 = entries.iter().map(|e| e.leaving_flow).sum();
        let entering: f64 = entries.iter().map(|e| e.entering_flow).sum();
        // Each value is rounded to 2 decimals independently
        let tolerance = 0.01 * entries.len() as f64 + 1e-9;
        prop_assert!((leaving - entering).abs() <= tolerance);
    }

    #[test]
    fn net_flow_is_leaving_minus_entering((alternatives, directions) in ranking_input()) {
        for entry in run(&alternatives, &directions) {
            let expected = round2(entry.leaving_flow - entry.entering_flow);
            prop_assert!((entry.net_flow - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn ranks_are_contiguous_from_one((alternatives, directions) in ranking_input()) {
        let entries = run(&alternatives, &directions);
        let ranks: Vec<usize> = entries.iter().map(|e| e.rank).collect();
        let expected: Vec<usize> = (1..=alternatives.len()).collect();
        prop_assert_eq!(ranks, expected);
    }

    #[test]
    fn ordered_by_net_flow_with_stable_ties((alternatives, directions) in ranking_input()) {
        let entries = run(&alternatives, &directions);
        let position = |entry: &RankedEntry| {
            alternatives.iter().position(|a| a.id == entry.alternative_id).unwrap()
        };
        for pair in entries.windows(2) {
            prop_assert!(pair[0].net_flow >= pair[1].net_flow);
            if pair[0].net_flow == pair[1].net_flow {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    #[test]
    fn identical_input_gives_identical_output((alternatives, directions) in ranking_input()) {
        let first = run(&alternatives, &directions);
        let second = run(&alternatives, &directions);
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(&a.alternative_id, &b.alternative_id);
            prop_assert_eq!(a.leaving_flow.to_bits(), b.leaving_flow.to_bits());
            prop_assert_eq!(a.entering_flow.to_bits(), b.entering_flow.to_bits());
            prop_assert_eq!(a.net_flow.to_bits(), b.net_flow.to_bits());
        }
    }
}
