#[cfg(test)]
mod tests {
    use super::super::engine::ConversionEngine;
    use super::super::error::ParseError;
    use super::super::table::FactorSet;
    use super::super::types::{ConversionRequest, Unit};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const LEGACY_TOLERANCE: f64 = 1e-5;
    const EXACT_TOLERANCE: f64 = 1e-12;

    fn any_unit() -> impl Strategy<Value = Unit> {
        prop::sample::select(Unit::ALL.to_vec())
    }

    fn engines() -> [(ConversionEngine, f64); 2] {
        [
            (ConversionEngine::new(FactorSet::Legacy), LEGACY_TOLERANCE),
            (ConversionEngine::new(FactorSet::Exact), EXACT_TOLERANCE),
        ]
    }

    // End-to-end scenarios

    #[test]
    fn test_metre_to_millimetre() {
        let engine = ConversionEngine::default();
        let record = engine
            .run(&ConversionRequest::new("1", Unit::Metre, Unit::Millimetre))
            .unwrap();

        assert_eq!(record.value, 1000.0);
        assert_eq!(record.text, "1 Metre = 1000 Millimetre");
    }

    #[test]
    fn test_mile_to_foot() {
        let engine = ConversionEngine::default();
        let record = engine
            .run(&ConversionRequest::new("1", Unit::Mile, Unit::Foot))
            .unwrap();

        assert_eq!(record.value, 5280.0);
        assert_eq!(record.factor, 5280.0);
        assert_eq!(record.text, "1 Mile = 5280 Foot");
    }

    #[test]
    fn test_invalid_input_yields_no_result() {
        let engine = ConversionEngine::default();
        for source in Unit::ALL {
            for target in Unit::ALL {
                let result = engine.run(&ConversionRequest::new("abc", source, target));
                assert_eq!(result, Err(ParseError::NotANumber("abc".to_string())));
            }
        }
    }

    #[test]
    fn test_zero_foot_to_metre() {
        let engine = ConversionEngine::default();
        let record = engine
            .run(&ConversionRequest::new("0", Unit::Foot, Unit::Metre))
            .unwrap();

        assert_eq!(record.value, 0.0);
        assert_eq!(record.text, "0 Foot = 0 Metre");
    }

    #[test]
    fn test_record_keeps_raw_input() {
        let engine = ConversionEngine::default();
        let record = engine
            .run(&ConversionRequest::new(" 2.0 ", Unit::Foot, Unit::Millimetre))
            .unwrap();

        assert_eq!(record.input, " 2.0 ");
        assert_eq!(record.amount, 2.0);
        assert_relative_eq!(record.value, 609.6);
        assert_eq!(record.text, " 2.0  Foot = 609.6 Millimetre");
    }

    #[test]
    fn test_record_serializes_lowercase_units() {
        let engine = ConversionEngine::default();
        let record = engine
            .run(&ConversionRequest::new("3", Unit::Metre, Unit::Metre))
            .unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source"], "metre");
        assert_eq!(json["target"], "metre");
        assert_eq!(json["value"], 3.0);
        assert_eq!(json["text"], "3 Metre = 3 Metre");
    }

    #[test]
    fn test_legacy_and_exact_disagree_on_mile() {
        let legacy = ConversionEngine::new(FactorSet::Legacy);
        let exact = ConversionEngine::new(FactorSet::Exact);

        assert_eq!(legacy.convert(1.0, Unit::Mile, Unit::Metre), 1609.34);
        assert_relative_eq!(exact.convert(1.0, Unit::Mile, Unit::Metre), 1609.344);
        assert_eq!(exact.factor_set(), FactorSet::Exact);
    }

    #[test]
    fn test_transitivity_within_tolerance() {
        for (engine, tolerance) in engines() {
            let table = engine.table();
            for a in Unit::ALL {
                for b in Unit::ALL {
                    for c in Unit::ALL {
                        assert_relative_eq!(
                            table.factor(a, b) * table.factor(b, c),
                            table.factor(a, c),
                            max_relative = tolerance
                        );
                    }
                }
            }
        }
    }

    // Properties

    proptest! {
        #[test]
        fn prop_same_unit_is_identity(a in -1e300..1e300f64, unit in any_unit()) {
            for (engine, _) in engines() {
                prop_assert_eq!(engine.convert(a, unit, unit), a);
            }
        }

        #[test]
        fn prop_round_trip(v in 1e-6..1e9f64, a in any_unit(), b in any_unit()) {
            for (engine, tolerance) in engines() {
                let back = engine.convert(engine.convert(v, a, b), b, a);
                prop_assert!(
                    ((back - v) / v).abs() <= tolerance,
                    "{} {} -> {} -> {} gave {}", v, a, b, a, back
                );
            }
        }

        #[test]
        fn prop_conversion_is_linear(v in -1e6..1e6f64, a in any_unit(), b in any_unit()) {
            let engine = ConversionEngine::default();
            let factor = engine.table().factor(a, b);
            prop_assert_eq!(engine.convert(v, a, b), v * factor);
        }

        #[test]
        fn prop_parsed_amount_matches_display(v in -1e12..1e12f64) {
            let engine = ConversionEngine::default();
            let text = v.to_string();
            prop_assert_eq!(engine.parse_amount(&text).unwrap(), v);
        }
    }
}
