use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized flight row: endpoints, intermediate stops and the totals
/// the upstream normalizer already parsed. Produced once per source row and
/// never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    pub source: String,
    pub destination: String,
    /// Intermediate stop codes in travel order, endpoints excluded.
    pub stops: Vec<String>,
    pub dep_time: String,
    pub date: NaiveDate,
    pub duration_mins: u32,
    pub price: f64,
    pub total_stops: u32,
    /// Route text of the source row, kept verbatim for display and for
    /// itinerary dedup keys.
    pub route_text: String,
}

impl FlightRecord {
    /// Full node sequence of the record: source, intermediate stops,
    /// destination. Stops that repeat an endpoint code are dropped.
    pub fn node_sequence(&self) -> Vec<String> {
        let mut nodes = Vec::with_capacity(self.stops.len() + 2);
        nodes.push(self.source.clone());
        for stop in &self.stops {
            if stop != &self.source && stop != &self.destination {
                nodes.push(stop.clone());
            }
        }
        nodes.push(self.destination.clone());
        nodes
    }

    /// Number of segments the record's totals are split across, never zero.
    pub fn segment_count(&self) -> usize {
        self.node_sequence().len().saturating_sub(1).max(1)
    }

    /// Per-segment share of the total duration (floor division).
    pub fn duration_share(&self) -> u32 {
        self.duration_mins / self.segment_count() as u32
    }

    /// Per-segment share of the total price (floor division).
    pub fn price_share(&self) -> f64 {
        (self.price / self.segment_count() as f64).floor()
    }
}

/// Splits raw route text ("DEL ? BLR ? BOM") into airport codes, dropping
/// separator characters and empty fragments. Offered for normalizers and
/// test fixtures that start from source rows.
pub fn parse_route_text(route: &str) -> Vec<String> {
    route
        .replace('?', "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
