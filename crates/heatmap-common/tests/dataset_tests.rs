//! Tests for dataset parsing and validation.

use heatmap_common::{Dataset, HeatmapError, TemperatureRecord};

const SAMPLE_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 1, "variance": -1.366 },
    { "year": 1753, "month": 2, "variance": -2.223 },
    { "year": 2015, "month": 11, "variance": 0.887 },
    { "year": 2015, "month": 12, "variance": 1.169 }
  ]
}"#;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_wire_format() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(dataset.base_temperature, 8.66);
    assert_eq!(dataset.record_count(), 4);
    assert_eq!(dataset.monthly_variance[0].year, 1753);
    assert_eq!(dataset.monthly_variance[0].month, 1);
    assert_eq!(dataset.monthly_variance[3].variance, 1.169);
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(Dataset::from_json("{not json").is_err());
    assert!(Dataset::from_json(r#"{"baseTemperature": 8.0}"#).is_err());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_accepts_sample() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    dataset.validate().unwrap();
}

#[test]
fn test_validate_rejects_empty_dataset() {
    let dataset = Dataset {
        base_temperature: 8.0,
        monthly_variance: Vec::new(),
    };
    assert!(matches!(
        dataset.validate(),
        Err(HeatmapError::EmptyDataset)
    ));
}

#[test]
fn test_validate_rejects_month_13() {
    let dataset = Dataset {
        base_temperature: 8.0,
        monthly_variance: vec![TemperatureRecord {
            year: 1900,
            month: 13,
            variance: 0.1,
        }],
    };
    assert!(matches!(
        dataset.validate(),
        Err(HeatmapError::MonthOutOfRange { year: 1900, month: 13 })
    ));
}

#[test]
fn test_validate_rejects_non_finite_variance() {
    let dataset = Dataset {
        base_temperature: 8.0,
        monthly_variance: vec![TemperatureRecord {
            year: 1900,
            month: 1,
            variance: f64::NAN,
        }],
    };
    assert!(matches!(
        dataset.validate(),
        Err(HeatmapError::NonFiniteVariance { .. })
    ));
}

// ============================================================================
// Derived domains
// ============================================================================

#[test]
fn test_year_domain_spans_records() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(dataset.year_domain(), (1753, 2015));
}

#[test]
fn test_temp_domain_is_base_plus_variance() {
    let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
    let (min, max) = dataset.temp_domain();
    assert!((min - (8.66 - 2.223)).abs() < 1e-9);
    assert!((max - (8.66 + 1.169)).abs() < 1e-9);

    // Every record's absolute temperature stays inside the domain.
    for record in &dataset.monthly_variance {
        let temp = record.absolute_temp(dataset.base_temperature);
        assert!(temp >= min && temp <= max);
    }
}
