use crate::criterion::Criterion;
use crate::record::FlightRecord;

/// Weighting for one graph build. Captured from the full candidate record
/// set up front so the blended criterion normalizes against that set and
/// not some global constant; build once per graph, then apply per record.
#[derive(Debug, Clone)]
pub struct WeightPolicy {
    criterion: Criterion,
    duration_range: (f64, f64),
    price_range: (f64, f64),
}

impl WeightPolicy {
    /// Scans the candidate set once and captures the duration and price
    /// min/max ranges the blended criterion scales against.
    pub fn from_records(criterion: Criterion, records: &[FlightRecord]) -> Self {
        let mut duration_range = (f64::INFINITY, f64::NEG_INFINITY);
        let mut price_range = (f64::INFINITY, f64::NEG_INFINITY);

        for record in records {
            let duration = f64::from(record.duration_mins);
            duration_range.0 = duration_range.0.min(duration);
            duration_range.1 = duration_range.1.max(duration);
            price_range.0 = price_range.0.min(record.price);
            price_range.1 = price_range.1.max(record.price);
        }

        Self {
            criterion,
            duration_range,
            price_range,
        }
    }

    /// Weight of one segment of `record` under the captured criterion.
    /// Duration and price weigh the record's per-segment share; blended
    /// weighs the sum of the min-max-scaled totals, carried unchanged by
    /// every segment of the record.
    pub fn segment_weight(&self, record: &FlightRecord) -> f64 {
        let weight = match self.criterion {
            Criterion::Duration => f64::from(record.duration_share()),
            Criterion::Price => record.price_share(),
            Criterion::Blended => {
                normalize(f64::from(record.duration_mins), self.duration_range)
                    + normalize(record.price, self.price_range)
            }
        };
        debug_assert!(weight >= 0.0, "segment weight must be non-negative");
        weight
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }
}

/// Min-max scaling to [0, 1]; a zero-range field maps every value to 0.
fn normalize(value: f64, range: (f64, f64)) -> f64 {
    let (min, max) = range;
    let span = max - min;
    if span > 0.0 { (value - min) / span } else { 0.0 }
}
