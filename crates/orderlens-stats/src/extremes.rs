//! Ranked extremes: lowest and highest entity averages
//!
//! Groups rows by an entity column (e.g. restaurant name), keeps entities
//! with strictly more rows than a threshold, averages a numeric feature per
//! entity and reports the `half` lowest followed by the `half` highest
//! averages.
//!
//! # Short rankings
//!
//! With `k` qualifying entities and `k <= 2 * half` the two halves overlap.
//! Entities are then reported once each, in rank order, and the halves are
//! exposed as overlapping row ranges: the lowest half is `0..min(k, half)`
//! and the highest half is `k - min(k, half)..k`. Seven entities with a half
//! of five give seven rows, halves `0..5` and `2..7`, overlapping by three.
//!
//! The boundary marker (`RankedExtremes::boundary`) is the row index right
//! after the lowest half. Styling layers draw their separator there rather
//! than after a fixed row count.

use orderlens_table::{group_rows, sort_groups, Dataset, ResultTable, Value};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::config::ExtremesConfig;
use crate::error::StatsResult;
use crate::summary::{mean, round2};

/// Default minimum row count an entity must exceed
pub const DEFAULT_THRESHOLD: usize = 10;
/// Default number of entities per half
pub const DEFAULT_HALF: usize = 5;

/// Average of the feature for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAverage {
    pub entity: Value,
    /// Rows belonging to the entity
    pub count: usize,
    /// Rounded to 2 decimals
    pub average: f64,
}

/// Lowest and highest entity averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedExtremes {
    pub entity_column: String,
    pub feature: String,
    /// Entities that passed the threshold
    pub qualifying: usize,
    /// Reported rows, ascending by average
    pub rows: Vec<EntityAverage>,
    /// Row range of the lowest half
    pub lowest: Range<usize>,
    /// Row range of the highest half
    pub highest: Range<usize>,
}

impl RankedExtremes {
    /// Row index right after the lowest half
    pub fn boundary(&self) -> usize {
        self.lowest.end
    }

    /// Entities in the lowest half
    pub fn lowest_rows(&self) -> &[EntityAverage] {
        &self.rows[self.lowest.clone()]
    }

    /// Entities in the highest half
    pub fn highest_rows(&self) -> &[EntityAverage] {
        &self.rows[self.highest.clone()]
    }

    /// Number of rows shared by both halves
    pub fn overlap(&self) -> usize {
        self.lowest.end.saturating_sub(self.highest.start)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Name of the average column, e.g. `average_delivery_time`
    pub fn value_column(&self) -> String {
        format!("average_{}", self.feature)
    }

    /// Render as `[<entity_column>, average_<feature>]`
    pub fn to_table(&self) -> ResultTable {
        let rows = self
            .rows
            .iter()
            .map(|row| vec![row.entity.clone(), Value::Float(row.average)])
            .collect();
        ResultTable::from_parts([self.entity_column.clone(), self.value_column()], rows)
    }
}

/// A ranked extremes request
#[derive(Debug, Clone)]
pub struct RankedExtremesRequest {
    entity_column: String,
    feature: String,
    threshold: usize,
    half: usize,
}

impl RankedExtremesRequest {
    /// Rank entities of `entity_column` by their average `feature`
    pub fn new(entity_column: impl Into<String>, feature: impl Into<String>) -> Self {
        Self {
            entity_column: entity_column.into(),
            feature: feature.into(),
            threshold: DEFAULT_THRESHOLD,
            half: DEFAULT_HALF,
        }
    }

    /// Take threshold and half size from configuration
    pub fn with_config(self, config: &ExtremesConfig) -> Self {
        self.with_threshold(config.threshold).with_half(config.half)
    }

    /// Entities need strictly more rows than this
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Entities per half
    pub fn with_half(mut self, half: usize) -> Self {
        self.half = half;
        self
    }

    /// Run the request against a dataset
    pub fn run(&self, data: &Dataset) -> StatsResult<RankedExtremes> {
        data.column(&self.entity_column)?;
        let feature = data.numeric_column(&self.feature)?;

        let mut groups = group_rows(data, &[self.entity_column.as_str()], 0..data.num_rows())?;
        let entities = groups.len();
        sort_groups(&mut groups);

        let mut averages: Vec<(Value, usize, f64)> = Vec::new();
        for group in groups.into_iter().filter(|g| g.len() > self.threshold) {
            let values: Vec<f64> = group.rows.iter().filter_map(|&i| feature.numeric(i)).collect();
            match mean(&values) {
                Some(avg) => {
                    let entity = group.key.first().cloned().unwrap_or_default();
                    averages.push((entity, group.len(), avg));
                }
                None => {
                    tracing::debug!(key = ?group.key, "entity has no values for feature, skipped")
                }
            }
        }
        // Stable: equal averages keep ascending entity order
        averages.sort_by(|a, b| a.2.total_cmp(&b.2));

        let qualifying = averages.len();
        let (rows, lowest, highest) = split_extremes(averages, self.half);

        if qualifying == 0 {
            tracing::warn!(
                entity_column = %self.entity_column,
                threshold = self.threshold,
                entities,
                "no entity exceeds the row threshold"
            );
        }
        tracing::debug!(
            entity_column = %self.entity_column,
            feature = %self.feature,
            entities,
            qualifying,
            reported = rows.len(),
            "ranked extremes"
        );

        Ok(RankedExtremes {
            entity_column: self.entity_column.clone(),
            feature: self.feature.clone(),
            qualifying,
            rows,
            lowest,
            highest,
        })
    }
}

/// Pick the lowest and highest `half` of ranked averages
fn split_extremes(
    ranked: Vec<(Value, usize, f64)>,
    half: usize,
) -> (Vec<EntityAverage>, Range<usize>, Range<usize>) {
    let k = ranked.len();
    let to_row = |(entity, count, avg): (Value, usize, f64)| EntityAverage {
        entity,
        count,
        average: round2(avg),
    };

    if k > 2 * half {
        let rows: Vec<EntityAverage> = ranked
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i < half || *i >= k - half)
            .map(|(_, r)| to_row(r))
            .collect();
        (rows, 0..half, half..2 * half)
    } else {
        let low = k.min(half);
        let rows: Vec<EntityAverage> = ranked.into_iter().map(to_row).collect();
        (rows, 0..low, k - low..k)
    }
}

/// The `DEFAULT_HALF` lowest and highest averages of `feature` per entity,
/// over entities with more than `threshold` rows.
pub fn top_and_bottom(
    data: &Dataset,
    entity_column: &str,
    feature: &str,
    threshold: usize,
) -> StatsResult<RankedExtremes> {
    RankedExtremesRequest::new(entity_column, feature)
        .with_threshold(threshold)
        .run(data)
}
