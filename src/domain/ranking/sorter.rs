//! Ranking Sorter - orders alternatives by net flow.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::AlternativeId;

use super::{Alternative, FlowResult};

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position; unique even across ties.
    pub rank: usize,
    pub alternative_id: AlternativeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub leaving_flow: f64,
    pub entering_flow: f64,
    pub net_flow: f64,
}

pub struct RankingSorter;

impl RankingSorter {
    /// Returns input positions ordered by net flow, largest first.
    ///
    /// Stable: equal net flows keep their input order.
    pub fn order(flows: &[FlowResult]) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..flows.len()).collect();
        positions.sort_by(|&a, &b| {
            flows[b]
                .net_flow
                .partial_cmp(&flows[a].net_flow)
                .unwrap_or(Ordering::Equal)
        });
        positions
    }

    /// Builds ranked entries from flows and the alternatives they belong to.
    ///
    /// `flows[i]` must describe `alternatives[i]`; labels and notes are
    /// taken from the matching alternative.
    pub fn rank(flows: Vec<FlowResult>, alternatives: &[Alternative]) -> Vec<RankedEntry> {
        Self::order(&flows)
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let flow = &flows[index];
                let alternative = alternatives.get(index);
                RankedEntry {
                    rank: position + 1,
                    alternative_id: flow.alternative_id.clone(),
                    label: alternative
                        .map(|a| a.label.clone())
                        .unwrap_or_else(|| flow.alternative_id.to_string()),
                    note: alternative.and_then(|a| a.note.clone()),
                    leaving_flow: flow.leaving_flow,
                    entering_flow: flow.entering_flow,
                    net_flow: flow.net_flow,
                }
            })
            .collect()
    }
}
