//! First-occurrence id index over an entity pool.

use std::collections::HashMap;

use crate::domain::inventory::{Asset, Service};
use crate::domain::risk_register::Risk;

/// An entity addressable by id.
pub trait Identified {
    /// The entity's id as text.
    fn id_str(&self) -> &str;
}

impl Identified for Asset {
    fn id_str(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for Service {
    fn id_str(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for Risk {
    fn id_str(&self) -> &str {
        self.id.as_str()
    }
}

/// Borrowed id lookup over a pool. When an id repeats, the first entry wins.
#[derive(Debug)]
pub struct IdIndex<'a, T> {
    by_id: HashMap<&'a str, &'a T>,
}

impl<'a, T: Identified> IdIndex<'a, T> {
    /// Index `pool`.
    #[must_use]
    pub fn new(pool: &'a [T]) -> Self {
        let mut by_id = HashMap::with_capacity(pool.len());
        for item in pool {
            by_id.entry(item.id_str()).or_insert(item);
        }
        Self { by_id }
    }

    /// Entry for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.by_id.get(id).copied()
    }

    /// Number of distinct ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the pool was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
