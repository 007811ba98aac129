//! Tests for schedule parsing, formatting and records.

use super::*;

fn weekdays(interval: u32, days: &[Weekday]) -> RideSchedule {
    RideSchedule::on_weekdays(interval, days.to_vec()).unwrap()
}

fn every(interval: u32, unit: IntervalUnit) -> RideSchedule {
    RideSchedule::every(interval, unit).unwrap()
}

// ==================== Interval Form Tests ====================

#[test]
fn test_parse_every_two_days() {
    assert_eq!(parse_schedule("every 2 days"), Ok(every(2, IntervalUnit::Days)));
}

#[test]
fn test_parse_bare_unit_defaults_to_one() {
    assert_eq!(parse_schedule("day"), Ok(every(1, IntervalUnit::Days)));
    assert_eq!(parse_schedule("weeks"), Ok(every(1, IntervalUnit::Weeks)));
}

#[test]
fn test_parse_singular_and_plural_are_equal() {
    assert_eq!(parse_schedule("3 month"), parse_schedule("3 months"));
    assert_eq!(parse_schedule("every year"), Ok(every(1, IntervalUnit::Years)));
}

#[test]
fn test_parse_is_case_insensitive_and_trimmed() {
    assert_eq!(parse_schedule("  EVERY 4 Weeks "), Ok(every(4, IntervalUnit::Weeks)));
    assert_eq!(parse_schedule("every\t2\tdays"), Ok(every(2, IntervalUnit::Days)));
}

// ==================== Weekday Form Tests ====================

#[test]
fn test_parse_weekday_list() {
    assert_eq!(
        parse_schedule("monday,friday"),
        Ok(weekdays(1, &[Weekday::Monday, Weekday::Friday]))
    );
}

#[test]
fn test_parse_weekday_list_keeps_order() {
    assert_eq!(
        parse_schedule("every friday,monday,wednesday"),
        Ok(weekdays(
            1,
            &[Weekday::Friday, Weekday::Monday, Weekday::Wednesday]
        ))
    );
}

#[test]
fn test_parse_single_weekday_uppercase() {
    assert_eq!(parse_schedule("Sunday"), Ok(weekdays(1, &[Weekday::Sunday])));
}

#[test]
fn test_parse_weekdays_with_interval() {
    assert_eq!(
        parse_schedule("2 tuesday,thursday"),
        Ok(weekdays(2, &[Weekday::Tuesday, Weekday::Thursday]))
    );
}

#[test]
fn test_parse_weekday_unit_result_shape() {
    let schedule = parse_schedule("monday,friday").unwrap();
    assert_eq!(schedule.unit(), "weekdays");
    assert_eq!(schedule.interval().get(), 1);
    assert_eq!(schedule.weekdays(), &[Weekday::Monday, Weekday::Friday]);
}

// ==================== Rejection Tests ====================

#[test]
fn test_parse_duplicate_weekday_fails() {
    assert_eq!(
        parse_schedule("monday,monday"),
        Err(ScheduleError::duplicate_weekday("monday"))
    );
}

#[test]
fn test_parse_fractional_interval_fails() {
    assert_eq!(
        parse_schedule("2.5 weeks"),
        Err(ScheduleError::invalid_interval("2.5"))
    );
}

#[test]
fn test_parse_zero_interval_fails() {
    assert_eq!(
        parse_schedule("0 weeks"),
        Err(ScheduleError::invalid_interval("0"))
    );
}

#[test]
fn test_parse_padded_or_signed_interval_fails() {
    assert!(parse_schedule("02 weeks").is_err());
    assert!(parse_schedule("+2 weeks").is_err());
    assert!(parse_schedule("-1 weeks").is_err());
}

#[test]
fn test_parse_unknown_unit_fails() {
    assert_eq!(
        parse_schedule("fortnight"),
        Err(ScheduleError::unknown_unit("fortnight", None))
    );
}

#[test]
fn test_parse_unknown_unit_suggests_close_match() {
    assert_eq!(
        parse_schedule("every 2 wekks"),
        Err(ScheduleError::unknown_unit("wekks", Some("week".to_string())))
    );
    let err = parse_schedule("frida").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown schedule unit: frida (did you mean 'friday'?)"
    );
}

#[test]
fn test_parse_invalid_weekday_in_list_fails() {
    assert_eq!(
        parse_schedule("monday,funday"),
        Err(ScheduleError::invalid_weekday("funday"))
    );
    assert_eq!(
        parse_schedule("monday,"),
        Err(ScheduleError::invalid_weekday(""))
    );
}

#[test]
fn test_parse_empty_fails() {
    assert_eq!(parse_schedule(""), Err(ScheduleError::EmptyExpression));
    assert_eq!(parse_schedule("   "), Err(ScheduleError::EmptyExpression));
    assert_eq!(parse_schedule("every"), Err(ScheduleError::EmptyExpression));
}

#[test]
fn test_parse_too_many_parts_fails() {
    assert_eq!(
        parse_schedule("every 2 weeks please"),
        Err(ScheduleError::too_many_parts("2 weeks please"))
    );
}

#[test]
fn test_parse_everyday_is_not_every_day() {
    assert!(parse_schedule("everyday").is_err());
}

#[test]
fn test_parse_ordinal_only_before_weekdays() {
    assert_eq!(
        parse_schedule("every 2. monday/friday"),
        Ok(weekdays(2, &[Weekday::Monday, Weekday::Friday]))
    );
    assert_eq!(
        parse_schedule("every 2. weeks"),
        Err(ScheduleError::invalid_interval("2."))
    );
    assert!(parse_schedule("every 0. monday").is_err());
}

#[test]
fn test_from_str() {
    let schedule: RideSchedule = "every 3 weeks".parse().unwrap();
    assert_eq!(schedule, every(3, IntervalUnit::Weeks));
    assert!("nonsense here too".parse::<RideSchedule>().is_err());
}

// ==================== Formatting Tests ====================

#[test]
fn test_format_none() {
    assert_eq!(format_schedule(None), "---");
    assert_eq!(format_schedule(None), NO_SCHEDULE);
}

#[test]
fn test_format_weekdays() {
    let schedule = weekdays(1, &[Weekday::Monday, Weekday::Friday]);
    assert_eq!(format_schedule(Some(&schedule)), "every monday/friday");
}

#[test]
fn test_format_weekdays_with_interval() {
    let schedule = weekdays(4, &[Weekday::Monday, Weekday::Tuesday]);
    assert_eq!(format_schedule(Some(&schedule)), "every 4. monday/tuesday");
}

#[test]
fn test_format_interval() {
    assert_eq!(
        format_schedule(Some(&every(3, IntervalUnit::Weeks))),
        "every 3 weeks"
    );
    assert_eq!(format_schedule(Some(&every(1, IntervalUnit::Days))), "every day");
    assert_eq!(
        every(1, IntervalUnit::Months).to_string(),
        "every month"
    );
}

#[test]
fn test_format_then_parse_round_trip() {
    let schedules = vec![
        every(1, IntervalUnit::Days),
        every(2, IntervalUnit::Days),
        every(1, IntervalUnit::Weeks),
        every(6, IntervalUnit::Months),
        every(10, IntervalUnit::Years),
        weekdays(1, &[Weekday::Saturday]),
        weekdays(1, &[Weekday::Monday, Weekday::Friday]),
        weekdays(3, &[Weekday::Sunday, Weekday::Wednesday, Weekday::Tuesday]),
    ];

    for schedule in schedules {
        let text = format_schedule(Some(&schedule));
        assert_eq!(parse_schedule(&text), Ok(schedule), "round trip of {text}");
    }
}

// ==================== Record Tests ====================

#[test]
fn test_serialize_interval_schedule() {
    let json = serde_json::to_value(every(3, IntervalUnit::Weeks)).unwrap();
    assert_eq!(json, serde_json::json!({"unit": "weeks", "interval": 3}));
}

#[test]
fn test_serialize_weekday_schedule() {
    let json = serde_json::to_value(weekdays(1, &[Weekday::Monday, Weekday::Friday])).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "unit": "weekdays",
            "interval": 1,
            "weekdays": ["monday", "friday"],
        })
    );
}

#[test]
fn test_deserialize_schedule() {
    let schedule: RideSchedule =
        serde_json::from_str(r#"{"unit": "weekdays", "interval": 2, "weekdays": ["friday"]}"#)
            .unwrap();
    assert_eq!(schedule, weekdays(2, &[Weekday::Friday]));

    let schedule: RideSchedule =
        serde_json::from_str(r#"{"unit": "days", "interval": 1, "weekdays": null}"#).unwrap();
    assert_eq!(schedule, every(1, IntervalUnit::Days));
}

#[test]
fn test_deserialize_optional_schedule() {
    let schedule: Option<RideSchedule> = serde_json::from_str("null").unwrap();
    assert_eq!(format_schedule(schedule.as_ref()), "---");
}

#[test]
fn test_record_validation_errors() {
    let record = |unit: &str, interval: u32, days: Option<&[&str]>| ScheduleRecord {
        unit: unit.to_string(),
        interval,
        weekdays: days.map(|d| d.iter().map(|s| s.to_string()).collect()),
    };

    assert_eq!(
        record("days", 0, None).validate(),
        Err(ScheduleError::invalid_interval("0"))
    );
    assert_eq!(
        record("hours", 1, None).validate(),
        Err(ScheduleError::unknown_unit("hours", None))
    );
    assert_eq!(
        record("weekdays", 1, None).validate(),
        Err(ScheduleError::MissingWeekdays)
    );
    assert_eq!(
        record("weekdays", 1, Some(&[])).validate(),
        Err(ScheduleError::MissingWeekdays)
    );
    assert_eq!(
        record("weekdays", 1, Some(&["Monday"])).validate(),
        Err(ScheduleError::invalid_weekday("Monday"))
    );
    assert_eq!(
        record("weekdays", 1, Some(&["monday", "monday"])).validate(),
        Err(ScheduleError::duplicate_weekday("monday"))
    );
    assert_eq!(
        record("weeks", 1, Some(&["monday"])).validate(),
        Err(ScheduleError::UnexpectedWeekdays {
            unit: "weeks".to_string()
        })
    );
    assert_eq!(
        record("week", 1, None).validate(),
        Err(ScheduleError::unknown_unit("week", None))
    );
}

#[test]
fn test_deserialize_invalid_record_fails() {
    let result: Result<RideSchedule, _> =
        serde_json::from_str(r#"{"unit": "weekdays", "interval": 1, "weekdays": []}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("no weekdays"));
}

#[test]
fn test_record_round_trip() {
    let schedule = weekdays(2, &[Weekday::Thursday, Weekday::Tuesday]);
    let record = ScheduleRecord::from(&schedule);
    assert_eq!(record.unit, "weekdays");
    assert_eq!(RideSchedule::try_from(record), Ok(schedule));
}
