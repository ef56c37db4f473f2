use std::collections::{BTreeSet, HashMap};

use airrohr_parser::{Location, SensorId, SensorRecord};
use tracing::{debug, warn};

/// Descriptive fields captured from the first record seen for a sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorInfo {
    pub id: SensorId,
    pub type_name: Option<String>,
    pub location: Option<Location>,
}

impl SensorInfo {
    fn snapshot(id: &SensorId, record: &SensorRecord) -> Self {
        Self {
            id: id.clone(),
            type_name: record.type_name().map(str::to_string),
            location: record.location().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorAggregate {
    pub info: SensorInfo,
    /// Distinct value types. A record entry without `value_type` is kept as a
    /// single `None`.
    pub value_types: BTreeSet<Option<String>>,
}

/// Groups records by sensor id, preserving the order in which sensors first
/// appear.
#[derive(Debug, Default)]
pub struct SensorAggregator {
    sensors: Vec<SensorAggregate>,
    index: HashMap<SensorId, usize>,
    skipped: usize,
}

impl SensorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, record: &SensorRecord) {
        let id = match record.sensor_id() {
            Some(id) if !id.is_falsy() => id,
            Some(id) => {
                warn!(sensor_id = %id, "skipping record with falsy sensor id");
                self.skipped += 1;
                return;
            }
            None => {
                self.skipped += 1;
                return;
            }
        };

        let slot = match self.index.get(id) {
            Some(&slot) => slot,
            None => {
                let slot = self.sensors.len();
                self.sensors.push(SensorAggregate {
                    info: SensorInfo::snapshot(id, record),
                    value_types: BTreeSet::new(),
                });
                self.index.insert(id.clone(), slot);
                slot
            }
        };

        let aggregate = &mut self.sensors[slot];
        for value_type in record.value_types() {
            aggregate.value_types.insert(value_type.map(str::to_string));
        }
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Records that contributed to no sensor (missing or falsy id).
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, id: &SensorId) -> Option<&SensorAggregate> {
        self.index.get(id).map(|&slot| &self.sensors[slot])
    }

    pub fn into_aggregates(self) -> Vec<SensorAggregate> {
        debug!(
            sensors = self.sensors.len(),
            skipped = self.skipped,
            "aggregation finished"
        );
        self.sensors
    }
}

pub fn aggregate<'a>(records: impl IntoIterator<Item = &'a SensorRecord>) -> Vec<SensorAggregate> {
    let mut aggregator = SensorAggregator::new();
    for record in records {
        aggregator.ingest(record);
    }
    aggregator.into_aggregates()
}
