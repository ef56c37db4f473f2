use airrohr_parser::{parse_records, SensorId, SensorRecord};

use crate::aggregate::{aggregate, SensorAggregator};
use crate::rank::rank;
use crate::render::{format_location, render_ranking, render_table, render_table_report};

fn records(json: &str) -> Vec<SensorRecord> {
    parse_records(json).expect("test JSON should parse")
}

fn rendered(json: &str, limit: usize) -> String {
    let ranked = rank(aggregate(&records(json)));
    let mut buffer = Vec::new();
    render_ranking(&mut buffer, &ranked, limit).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("utf-8 output")
}

fn params(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|v| Some(v.to_string())).collect()
}

#[test]
fn counts_distinct_value_types_per_sensor() {
    let input = records(
        r#"[
            {"sensor": {"id": "A"}, "sensordatavalues": [{"value_type": "P1"}, {"value_type": "P2"}]},
            {"sensor": {"id": "B"}, "sensordatavalues": [{"value_type": "P1"}]},
            {"sensor": {"id": "A"}, "sensordatavalues": [{"value_type": "P2"}]}
        ]"#,
    );

    let ranked = rank(aggregate(&input));

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].info.id, SensorId::from("A"));
    assert_eq!(ranked[0].param_count, 2);
    assert_eq!(ranked[0].params, params(&["P1", "P2"]));
    assert_eq!(ranked[1].info.id, SensorId::from("B"));
    assert_eq!(ranked[1].param_count, 1);
    assert_eq!(ranked[1].params, params(&["P1"]));
}

#[test]
fn first_record_wins_for_info() {
    let input = records(
        r#"[
            {"sensor": {"id": 7, "sensor_type": {"name": "SDS011"}},
             "location": {"country": "PL", "city": "Kraków"}},
            {"sensor": {"id": 7, "sensor_type": {"name": "BME280"}},
             "location": {"country": "DE", "city": "Berlin"},
             "sensordatavalues": [{"value_type": "temperature"}]}
        ]"#,
    );

    let mut aggregator = SensorAggregator::new();
    for record in &input {
        aggregator.ingest(record);
    }
    let sensor = aggregator.get(&SensorId::Integer(7)).expect("sensor 7");

    assert_eq!(sensor.info.type_name.as_deref(), Some("SDS011"));
    assert_eq!(
        sensor.info.location.as_ref().and_then(|loc| loc.city.as_deref()),
        Some("Kraków")
    );
    // Values from later records still count.
    assert_eq!(sensor.value_types.len(), 1);
}

#[test]
fn missing_and_falsy_ids_contribute_nothing() {
    // A zero id is treated like a missing one. Real feeds never use 0, but the
    // skip is kept literal rather than special-cased.
    let input = records(
        r#"[
            {"sensor": {"id": 0}, "sensordatavalues": [{"value_type": "P1"}]},
            {"sensor": {"id": ""}, "sensordatavalues": [{"value_type": "P1"}]},
            {"sensor": {}, "sensordatavalues": [{"value_type": "P1"}]},
            {"sensordatavalues": [{"value_type": "P1"}]},
            {"sensor": {"id": 0.0}, "sensordatavalues": [{"value_type": "P1"}]},
            {"sensor": {"id": false}, "sensordatavalues": [{"value_type": "P1"}]},
            {"sensor": {"id": 12}, "sensordatavalues": [{"value_type": "P1"}]},
            {"sensor": {"id": 12.0}, "sensordatavalues": [{"value_type": "P2"}]}
        ]"#,
    );

    let mut aggregator = SensorAggregator::new();
    for record in &input {
        aggregator.ingest(record);
    }

    assert_eq!(aggregator.len(), 1);
    assert_eq!(aggregator.skipped(), 6);
    assert!(aggregator.get(&SensorId::Integer(0)).is_none());
    // 12 and 12.0 are the same sensor.
    let sensor = aggregator.get(&SensorId::Integer(12)).expect("sensor 12");
    assert_eq!(sensor.value_types.len(), 2);
}

#[test]
fn missing_value_type_counts_once() {
    let input = records(
        r#"[
            {"sensor": {"id": 3}, "sensordatavalues": [{}, {"value_type": null}, {"value_type": "P1"}]},
            {"sensor": {"id": 3}, "sensordatavalues": [{"id": 99}]}
        ]"#,
    );

    let ranked = rank(aggregate(&input));

    assert_eq!(ranked[0].param_count, 2);
    assert_eq!(ranked[0].params, vec![None, Some("P1".to_string())]);
}

#[test]
fn sensor_without_values_still_ranks() {
    let ranked = rank(aggregate(&records(r#"[{"sensor": {"id": 5}}]"#)));

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].param_count, 0);
    assert!(ranked[0].params.is_empty());
}

#[test]
fn ranking_is_descending_with_first_seen_ties() {
    let input = records(
        r#"[
            {"sensor": {"id": 1}, "sensordatavalues": [{"value_type": "a"}]},
            {"sensor": {"id": 2}, "sensordatavalues": [{"value_type": "a"}, {"value_type": "b"}, {"value_type": "c"}]},
            {"sensor": {"id": 3}, "sensordatavalues": [{"value_type": "x"}]},
            {"sensor": {"id": 4}, "sensordatavalues": [{"value_type": "a"}, {"value_type": "b"}]},
            {"sensor": {"id": 5}, "sensordatavalues": [{"value_type": "y"}, {"value_type": "z"}]}
        ]"#,
    );

    let ranked = rank(aggregate(&input));
    let ids: Vec<SensorId> = ranked.iter().map(|s| s.info.id.clone()).collect();

    assert_eq!(
        ids,
        vec![2, 4, 5, 1, 3]
            .into_iter()
            .map(SensorId::Integer)
            .collect::<Vec<_>>()
    );
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].param_count >= pair[1].param_count));
}

#[test]
fn renders_entry_block() {
    let output = rendered(
        r#"[{
            "sensor": {"id": 61997, "sensor_type": {"name": "SDS011"}},
            "location": {"country": "PL", "city": "Kraków", "latitude": "50.062", "longitude": "19.938"},
            "sensordatavalues": [{"value_type": "P2"}, {"value_type": "P1"}]
        }]"#,
        10,
    );

    let expected = "\n--- TOP 10 Sensors with Most Parameters ---\n\
                    ID: 61997\n\
                    Type: SDS011\n\
                    Location: PL, Kraków (Lat: 50.062, Lon: 19.938)\n\
                    Parameters (2): P1, P2\n\
                    ------------------------------\n";
    assert_eq!(output, expected);
}

#[test]
fn missing_fields_render_as_placeholder() {
    let output = rendered(
        r#"[{"sensor": {"id": "x"}, "location": {"country": "NL", "longitude": 4.9}, "sensordatavalues": [{}]}]"#,
        10,
    );

    assert!(output.contains("Type: N/A\n"));
    assert!(output.contains("Location: NL, N/A (Lat: N/A, Lon: 4.9)\n"));
    assert!(output.contains("Parameters (1): N/A\n"));
}

#[test]
fn absent_location_is_all_placeholders() {
    assert_eq!(format_location(None), "N/A, N/A (Lat: N/A, Lon: N/A)");
}

#[test]
fn fewer_sensors_than_limit_renders_all_without_padding() {
    let output = rendered(
        r#"[
            {"sensor": {"id": 1}, "sensordatavalues": [{"value_type": "a"}]},
            {"sensor": {"id": 2}, "sensordatavalues": [{"value_type": "b"}]}
        ]"#,
        10,
    );

    assert_eq!(output.matches("ID: ").count(), 2);
    assert_eq!(output.matches(&"-".repeat(30)).count(), 2);
}

#[test]
fn limit_truncates_ranking() {
    let json = format!(
        "[{}]",
        (1..=12)
            .map(|id| format!(r#"{{"sensor": {{"id": {id}}}, "sensordatavalues": [{{"value_type": "v"}}]}}"#))
            .collect::<Vec<_>>()
            .join(",")
    );

    assert_eq!(rendered(&json, 10).matches("ID: ").count(), 10);
    assert_eq!(rendered(&json, 5).matches("ID: ").count(), 5);
    assert!(rendered(&json, 5).contains("--- TOP 5 Sensors"));
}

#[test]
fn empty_input_renders_header_only() {
    assert_eq!(
        rendered("[]", 10),
        "\n--- TOP 10 Sensors with Most Parameters ---\n"
    );
}

#[test]
fn table_lists_ranked_rows() {
    let ranked = rank(aggregate(&records(
        r#"[
            {"sensor": {"id": 1, "sensor_type": {"name": "DHT22"}}, "sensordatavalues": [{"value_type": "temperature"}, {"value_type": "humidity"}]},
            {"sensor": {"id": 2}, "sensordatavalues": [{"value_type": "P1"}]}
        ]"#,
    )));

    let table = render_table(&ranked, 1);
    let text = table.to_string();

    assert_eq!(table.row_iter().count(), 1);
    assert!(text.contains("DHT22"));
    assert!(text.contains("humidity, temperature"));
    assert!(!text.contains("P1"));
}

#[test]
fn table_with_zero_limit_prints_header_only() {
    let ranked = rank(aggregate(&records(
        r#"[{"sensor": {"id": 1}, "sensordatavalues": [{"value_type": "P1"}]}]"#,
    )));
    let mut buffer = Vec::new();
    render_table_report(&mut buffer, &ranked, 0).expect("writing to a Vec cannot fail");

    assert_eq!(
        String::from_utf8(buffer).expect("utf-8 output"),
        "\n--- TOP 0 Sensors with Most Parameters ---\n"
    );
}
