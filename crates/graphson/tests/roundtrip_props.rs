//! Width-preserving round trips for the scalar tags.

use gremlin_graphson::{read_object, write_object, GraphValue};
use proptest::prelude::*;

fn round_trip(value: &GraphValue) -> GraphValue {
    let text = write_object(value).unwrap();
    read_object(&text).unwrap()
}

proptest! {
    #[test]
    fn int32_round_trip(v in any::<i32>()) {
        prop_assert_eq!(round_trip(&GraphValue::Int32(v)), GraphValue::Int32(v));
    }

    #[test]
    fn int64_round_trip(v in any::<i64>()) {
        prop_assert_eq!(round_trip(&GraphValue::Int64(v)), GraphValue::Int64(v));
    }

    #[test]
    fn small_int64_stays_int64(v in -1000i64..1000) {
        let back = round_trip(&GraphValue::Int64(v));
        prop_assert_eq!(back.as_i64(), Some(v));
        prop_assert_eq!(back.as_i32(), None);
    }

    #[test]
    fn float_round_trip(v in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
        prop_assert_eq!(round_trip(&GraphValue::Float(v)), GraphValue::Float(v));
    }

    #[test]
    fn double_round_trip(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        prop_assert_eq!(round_trip(&GraphValue::Double(v)), GraphValue::Double(v));
    }

    #[test]
    fn string_round_trip(s in ".*") {
        prop_assert_eq!(round_trip(&GraphValue::from(s.clone())), GraphValue::String(s));
    }
}

#[test]
fn boolean_round_trip() {
    for b in [true, false] {
        assert_eq!(round_trip(&GraphValue::Boolean(b)), GraphValue::Boolean(b));
    }
}
