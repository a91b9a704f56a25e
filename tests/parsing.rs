use weekdays::{Weekday, WeekdayError};

#[test]
fn name_roundtrip_all_seven() {
    for day in Weekday::values() {
        let back = Weekday::from_name(day.name()).unwrap();
        assert_eq!(back, day, "roundtrip failed for {}", day.name());
        assert_eq!(back.to_string(), day.name());
    }
}

#[test]
fn parse_returns_same_value_across_calls() {
    let first = Weekday::from_name("Wednesday").unwrap();
    let second = Weekday::from_name("Wednesday").unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_name_is_invalid_argument() {
    assert_eq!(Weekday::from_name("").unwrap_err(), WeekdayError::EmptyName);
}

#[test]
fn undefined_name_is_not_found() {
    assert_eq!(
        Weekday::from_name("Thor's Day").unwrap_err(),
        WeekdayError::UnknownName {
            name: "Thor's Day".to_string(),
        }
    );
}

#[test]
fn lowercase_name_is_not_found() {
    for day in Weekday::values() {
        let lower = day.name().to_lowercase();
        assert_eq!(
            Weekday::from_name(&lower).unwrap_err(),
            WeekdayError::UnknownName { name: lower.clone() },
            "case-mismatched {lower:?} must not parse"
        );
    }
}

#[test]
fn whitespace_padding_is_not_found() {
    assert_eq!(
        Weekday::from_name(" Monday").unwrap_err(),
        WeekdayError::UnknownName {
            name: " Monday".to_string(),
        }
    );
}

#[test]
fn from_str_parses_and_rejects() {
    assert_eq!("Sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
    assert_eq!(
        "SUNDAY".parse::<Weekday>().unwrap_err(),
        WeekdayError::UnknownName {
            name: "SUNDAY".to_string(),
        }
    );
}

#[test]
fn ordinal_roundtrip_all_seven() {
    for day in Weekday::values() {
        assert_eq!(Weekday::from_ordinal(day.ordinal()).unwrap(), day);
    }
}

#[test]
fn ordinal_out_of_range() {
    for ordinal in [7u8, 8, 100, 255] {
        assert_eq!(
            Weekday::from_ordinal(ordinal).unwrap_err(),
            WeekdayError::InvalidOrdinal { ordinal }
        );
    }
}
