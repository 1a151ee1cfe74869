//! In-memory inventory snapshot.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::EntityKind;
use crate::domain::inventory::{Asset, Service};
use crate::domain::risk_register::Risk;
use crate::domain::shared::serde_helpers::null_as_default;

/// Everything one recalculation run reads.
///
/// Serialized as `{"assets": [...], "services": [...], "risks": [...]}`;
/// each key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Asset pool.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
    /// Service pool.
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    /// Risk register.
    #[serde(default, deserialize_with = "null_as_default")]
    pub risks: Vec<Risk>,
}

/// A reference that resolves to nothing in the target pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingReference {
    /// Kind of the referencing entity.
    pub from_kind: EntityKind,
    /// Id of the referencing entity.
    pub from_id: String,
    /// Pool the reference points into.
    pub to_kind: EntityKind,
    /// Unresolved id.
    pub to_id: String,
}

/// An id present more than once in one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateId {
    /// Pool holding the duplicates.
    pub kind: EntityKind,
    /// Repeated id.
    pub id: String,
    /// Number of occurrences.
    pub occurrences: usize,
}

impl InventorySnapshot {
    /// Create a snapshot from its three pools.
    #[must_use]
    pub const fn new(assets: Vec<Asset>, services: Vec<Service>, risks: Vec<Risk>) -> Self {
        Self {
            assets,
            services,
            risks,
        }
    }

    /// Total number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len() + self.services.len() + self.risks.len()
    }

    /// Returns true if every pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// References that resolve to nothing, in input order.
    ///
    /// Covers service `dependentAssets`, service `dependencies` and risk
    /// `affectedServices`. Scoring skips these silently.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let asset_ids: HashSet<&str> = self.assets.iter().map(|a| a.id.as_str()).collect();
        let service_ids: HashSet<&str> = self.services.iter().map(|s| s.id.as_str()).collect();

        let mut dangling = Vec::new();
        for service in &self.services {
            for asset_id in &service.dependent_assets {
                if !asset_ids.contains(asset_id.as_str()) {
                    dangling.push(DanglingReference {
                        from_kind: EntityKind::Service,
                        from_id: service.id.to_string(),
                        to_kind: EntityKind::Asset,
                        to_id: asset_id.to_string(),
                    });
                }
            }
            for dependency in &service.dependencies {
                if !service_ids.contains(dependency.as_str()) {
                    dangling.push(DanglingReference {
                        from_kind: EntityKind::Service,
                        from_id: service.id.to_string(),
                        to_kind: EntityKind::Service,
                        to_id: dependency.to_string(),
                    });
                }
            }
        }
        for risk in &self.risks {
            for service_id in &risk.affected_services {
                if !service_ids.contains(service_id.as_str()) {
                    dangling.push(DanglingReference {
                        from_kind: EntityKind::Risk,
                        from_id: risk.id.to_string(),
                        to_kind: EntityKind::Service,
                        to_id: service_id.to_string(),
                    });
                }
            }
        }
        dangling
    }

    /// Ids occurring more than once within a pool, in first-seen order.
    ///
    /// Lookups resolve a duplicated id to its first occurrence.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<DuplicateId> {
        let mut duplicates = collect_duplicates(
            EntityKind::Asset,
            self.assets.iter().map(|a| a.id.as_str()),
        );
        duplicates.extend(collect_duplicates(
            EntityKind::Service,
            self.services.iter().map(|s| s.id.as_str()),
        ));
        duplicates.extend(collect_duplicates(
            EntityKind::Risk,
            self.risks.iter().map(|r| r.id.as_str()),
        ));
        duplicates
    }
}

fn collect_duplicates<'a>(
    kind: EntityKind,
    ids: impl Iterator<Item = &'a str>,
) -> Vec<DuplicateId> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in ids {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|id| {
            let occurrences = counts.get(id).copied().unwrap_or(0);
            (occurrences > 1).then(|| DuplicateId {
                kind,
                id: id.to_string(),
                occurrences,
            })
        })
        .collect()
}
