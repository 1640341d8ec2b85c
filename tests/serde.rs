#![cfg(feature = "serde")]

use ezy::{feature::Comparable, StrongType};

struct Meters;

type Distance = StrongType<u32, Meters, Comparable>;

#[test]
fn serializes_as_the_underlying_value() {
    let distance = Distance::new(12);
    assert_eq!(serde_json::to_string(&distance).unwrap(), "12");

    let values: StrongType<Vec<i32>> = StrongType::new(vec![1, 2]);
    assert_eq!(serde_json::to_string(&values).unwrap(), "[1,2]");
}

#[test]
fn deserializes_from_the_underlying_value() {
    let distance: Distance = serde_json::from_str("7").unwrap();
    assert_eq!(distance, Distance::new(7));

    let values: StrongType<Vec<i32>> = serde_json::from_str("[3,4]").unwrap();
    assert_eq!(values.into_inner(), [3, 4]);

    assert!(serde_json::from_str::<Distance>("\"seven\"").is_err());
}
