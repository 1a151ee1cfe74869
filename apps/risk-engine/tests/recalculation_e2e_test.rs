//! E2E Integration Tests for Snapshot Recalculation
//!
//! Tests the full flow from fixture JSON → file repository → use cases → domain.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tempfile::TempDir;

use grc_risk_engine::application::dto::RecalculateRequestDto;
use grc_risk_engine::application::use_cases::{DetectStaleScoresUseCase, RecalculateAllUseCase};
use grc_risk_engine::domain::inventory::Criticality;
use grc_risk_engine::domain::risk_aggregation::{
    InventorySnapshot, Parallelism, RiskAggregationService, recalculate_all,
};
use grc_risk_engine::infrastructure::persistence::JsonFileInventoryRepository;
use grc_risk_engine::{ErrorCode, InventoryRepositoryPort, RiskScore};

// =============================================================================
// Helpers
// =============================================================================

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn stage_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::copy(fixture(name), &path).unwrap();
    (dir, path)
}

fn score_of(value: &Value, pool: &str, id: &str) -> Option<String> {
    value[pool]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["id"] == id)
        .and_then(|entry| entry["riskScore"].as_str().map(str::to_string))
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn values(scores: impl Iterator<Item = Option<RiskScore>>) -> Vec<Decimal> {
    scores.map(|score| score.unwrap().value()).collect()
}

fn scores(snapshot: &InventorySnapshot) -> (Vec<Decimal>, Vec<Decimal>, Vec<Decimal>) {
    (
        values(snapshot.assets.iter().map(|a| a.risk_score)),
        values(snapshot.services.iter().map(|s| s.risk_score)),
        values(snapshot.risks.iter().map(|r| r.risk_score)),
    )
}

fn file_repository(input: &Path, output: &Path) -> Arc<JsonFileInventoryRepository> {
    Arc::new(JsonFileInventoryRepository::new(input).with_output(output))
}

// =============================================================================
// Recalculation
// =============================================================================

#[tokio::test]
async fn recalculates_fixture_in_stage_order() {
    let (dir, input) = stage_fixture("inventory.json");
    let output = dir.path().join("scored.json");
    let repo = file_repository(&input, &output);

    let report = RecalculateAllUseCase::new(repo, RiskAggregationService::default())
        .with_top_risks(2)
        .execute(RecalculateRequestDto::default())
        .await
        .unwrap();

    assert_eq!(report.counts.assets, 4);
    assert_eq!(report.counts.services, 4);
    assert_eq!(report.counts.risks, 4);
    assert_eq!(report.dangling_references, 3);
    assert_eq!(report.duplicate_ids, 0);
    // asset-laptop already carried its current score
    assert_eq!(report.changed_scores, 11);

    let ranked: Vec<_> = report
        .top_risks
        .iter()
        .map(|r| (r.id.as_str(), r.risk_score.as_str()))
        .collect();
    assert_eq!(
        ranked,
        vec![("risk-breach", "31.20"), ("risk-outage", "8.00")]
    );

    let scored = read_json(&output);
    let expected = [
        ("assets", "asset-crm-db", "11.47"),
        ("assets", "asset-web", "5.60"),
        ("assets", "asset-legacy", "1.00"),
        ("services", "svc-crm", "14.08"),
        ("services", "svc-auth", "6.72"),
        ("services", "svc-dev", "1.00"),
        ("services", "svc-empty", "1.00"),
        ("risks", "risk-breach", "31.20"),
        ("risks", "risk-unrated", "1.00"),
        ("risks", "risk-dev", "1.50"),
    ];
    for (pool, id, score) in expected {
        assert_eq!(score_of(&scored, pool, id).as_deref(), Some(score), "{id}");
    }

    // Input untouched
    let original = read_json(&input);
    assert_eq!(score_of(&original, "assets", "asset-crm-db"), None);
}

#[tokio::test]
async fn descriptive_fields_survive_round_trip() {
    let (_dir, input) = stage_fixture("inventory.json");
    let repo = Arc::new(JsonFileInventoryRepository::new(&input));

    RecalculateAllUseCase::new(Arc::clone(&repo), RiskAggregationService::default())
        .execute(RecalculateRequestDto::default())
        .await
        .unwrap();

    let scored = read_json(&input);
    let crm = &scored["assets"][0];
    assert_eq!(crm["name"], "CRM database");
    assert_eq!(crm["owner"], "sales-ops");
    assert_eq!(crm["location"], "eu-west-1");
    assert_eq!(crm["confidentialityImpact"], "high");
    assert_eq!(scored["risks"][0]["treatment"], "mitigate");
    assert_eq!(scored["risks"][0]["title"], "Customer data breach");

    // Ratings outside the tables keep their spelling
    let legacy = &scored["assets"][3];
    assert_eq!(legacy["assetType"], "mainframe");
    assert_eq!(legacy["confidentialityImpact"], "extreme");
    assert_eq!(legacy["criticality"], "severe");

    // A null sequence is written back as absent, not as []
    let empty = &scored["services"][3];
    assert_eq!(empty["id"], "svc-empty");
    assert!(empty.get("dependentAssets").is_none());
    assert!(empty.get("dependencies").is_none());
}

#[tokio::test]
async fn mistyped_ratings_score_with_fallbacks_and_keep_their_values() {
    let (dir, input) = stage_fixture("mistyped_ratings.json");
    let output = dir.path().join("scored.json");
    let repo = file_repository(&input, &output);

    let report = RecalculateAllUseCase::new(repo, RiskAggregationService::default())
        .execute(RecalculateRequestDto::default())
        .await
        .unwrap();
    assert_eq!(report.counts.assets, 1);
    assert_eq!(report.counts.services, 2);

    let scored = read_json(&output);
    // max 3, mean 5/3 (unrecognized weighs 1), criticality fallback 1
    let expected = [
        ("assets", "asset-imported", "2.47"),
        ("services", "svc-imported", "2.47"),
        ("services", "svc-flagged", "1.00"),
        ("risks", "risk-imported", "4.94"),
    ];
    for (pool, id, score) in expected {
        assert_eq!(score_of(&scored, pool, id).as_deref(), Some(score), "{id}");
    }

    let asset = &scored["assets"][0];
    assert_eq!(asset["assetType"], "Mainframe");
    assert_eq!(asset["confidentialityImpact"], "High");
    assert_eq!(asset["integrityImpact"], 2);
    assert_eq!(asset["availabilityImpact"], "high");
    assert_eq!(asset["criticality"], 4);
    assert_eq!(scored["services"][0]["serviceType"], "Business_Critical");
    assert_eq!(scored["services"][1]["serviceType"], true);

    // A second pass sees the preserved values and changes nothing
    let rerun = JsonFileInventoryRepository::new(&output);
    let stored = rerun.load_snapshot().await.unwrap();
    assert_eq!(recalculate_all(&stored), stored);
}

#[tokio::test]
async fn dry_run_does_not_write() {
    let (dir, input) = stage_fixture("inventory.json");
    let output = dir.path().join("never.json");
    let repo = file_repository(&input, &output);

    let report = RecalculateAllUseCase::new(repo, RiskAggregationService::default())
        .execute(RecalculateRequestDto { dry_run: true })
        .await
        .unwrap();

    assert!(report.dry_run);
    assert!(!output.exists());
}

#[tokio::test]
async fn parallel_stages_match_sequential() {
    let repo = JsonFileInventoryRepository::new(fixture("inventory.json"));
    let snapshot = repo.load_snapshot().await.unwrap();
    let engine = RiskAggregationService::default();

    let parallel = engine.recalculate(&snapshot, Parallelism::new(1));
    let sequential = engine.recalculate(&snapshot, Parallelism::sequential());

    assert_eq!(parallel, sequential);
    assert_eq!(parallel, recalculate_all(&snapshot));
}

#[tokio::test]
async fn recalculation_is_idempotent() {
    let repo = JsonFileInventoryRepository::new(fixture("inventory.json"));
    let snapshot = repo.load_snapshot().await.unwrap();

    let once = recalculate_all(&snapshot);
    let twice = recalculate_all(&once);

    assert_eq!(scores(&once), scores(&twice));
    assert_eq!(
        scores(&once).2,
        vec![dec!(31.20), dec!(8.00), dec!(1.00), dec!(1.50)]
    );
}

// =============================================================================
// Stale score detection
// =============================================================================

#[tokio::test]
async fn check_reports_drift_until_recalculated() {
    let (_dir, input) = stage_fixture("inventory.json");
    let repo = Arc::new(JsonFileInventoryRepository::new(&input));
    let engine = RiskAggregationService::default();

    let before = DetectStaleScoresUseCase::new(Arc::clone(&repo), engine.clone())
        .execute()
        .await
        .unwrap();
    assert_eq!(before.stale.len(), 11);

    RecalculateAllUseCase::new(Arc::clone(&repo), engine.clone())
        .execute(RecalculateRequestDto::default())
        .await
        .unwrap();

    let after = DetectStaleScoresUseCase::new(Arc::clone(&repo), engine.clone())
        .execute()
        .await
        .unwrap();
    assert!(!after.has_drift());

    // Rating change upstream makes the asset, its services and their risks stale
    let mut snapshot = repo.load_snapshot().await.unwrap();
    snapshot.assets[1].criticality = Some(Criticality::Low);
    repo.save_snapshot(&snapshot).await.unwrap();

    let changed = DetectStaleScoresUseCase::new(repo, engine)
        .execute()
        .await
        .unwrap();
    let ids: Vec<_> = changed.stale.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["asset-web", "svc-crm", "svc-auth", "risk-breach"]);
}

// =============================================================================
// Malformed input
// =============================================================================

#[tokio::test]
async fn malformed_container_fails_loudly() {
    let path = fixture("malformed_inventory.json");
    let repo = Arc::new(JsonFileInventoryRepository::new(path));

    let err = RecalculateAllUseCase::new(repo, RiskAggregationService::default())
        .execute(RecalculateRequestDto { dry_run: true })
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::MalformedSnapshot);
    assert_eq!(err.exit_code(), 4);
    assert!(err.message().contains("malformed_inventory.json"));
}

#[tokio::test]
async fn missing_snapshot_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let repo = Arc::new(JsonFileInventoryRepository::new(path));

    let err = DetectStaleScoresUseCase::new(repo, RiskAggregationService::default())
        .execute()
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::SnapshotIo);
}
