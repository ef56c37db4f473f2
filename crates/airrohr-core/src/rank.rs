use crate::aggregate::{SensorAggregate, SensorInfo};

#[derive(Debug, Clone, PartialEq)]
pub struct RankedSensor {
    pub info: SensorInfo,
    pub param_count: usize,
    /// Alphabetical; the missing-`value_type` entry, if any, comes first.
    pub params: Vec<Option<String>>,
}

impl From<SensorAggregate> for RankedSensor {
    fn from(aggregate: SensorAggregate) -> Self {
        let params: Vec<Option<String>> = aggregate.value_types.into_iter().collect();
        Self {
            info: aggregate.info,
            param_count: params.len(),
            params,
        }
    }
}

/// Orders sensors by distinct parameter count, highest first. The sort is
/// stable, so equal counts keep first-seen order.
pub fn rank(aggregates: Vec<SensorAggregate>) -> Vec<RankedSensor> {
    let mut ranked: Vec<RankedSensor> = aggregates.into_iter().map(RankedSensor::from).collect();
    ranked.sort_by(|a, b| b.param_count.cmp(&a.param_count));
    ranked
}
