pub mod errors;
pub mod load;
pub mod model;

pub use errors::LoadError;
pub use load::{load_records, parse_records, DEFAULT_DATA_FILE};
pub use model::{
    Coordinate, Location, SensorDataValue, SensorId, SensorMeta, SensorRecord, SensorType,
    PLACEHOLDER,
};
