use chrono::{Datelike, NaiveDate};
use daypanel_core::{days_in_month, is_today, shift_month, CalendarError, MonthStep};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn leap_february_has_29_days_after_four_blanks() {
    let days = days_in_month(2024, 1).unwrap();

    let blanks = days.iter().take_while(|cell| cell.is_none()).count();
    assert_eq!(blanks, 4);
    assert_eq!(days.len(), 4 + 29);

    let dates = days.iter().flatten().collect::<Vec<_>>();
    assert_eq!(dates.len(), 29);
    assert_eq!(*dates[0], ymd(2024, 2, 1));
    assert_eq!(*dates[28], ymd(2024, 2, 29));
}

#[test]
fn common_february_has_28_days() {
    let days = days_in_month(2023, 1).unwrap();
    assert_eq!(days.iter().flatten().count(), 28);
    // 2023-02-01 is a Wednesday.
    assert_eq!(days.iter().take_while(|cell| cell.is_none()).count(), 3);
}

#[test]
fn month_starting_on_sunday_has_no_blanks() {
    // 2023-10-01 is a Sunday.
    let days = days_in_month(2023, 9).unwrap();
    assert_eq!(days[0], Some(ymd(2023, 10, 1)));
    assert_eq!(days.len(), 31);
}

#[test]
fn grid_days_are_consecutive() {
    let days = days_in_month(2024, 11).unwrap();
    let dates = days.into_iter().flatten().collect::<Vec<_>>();
    for (index, date) in dates.iter().enumerate() {
        assert_eq!(date.day() as usize, index + 1);
        assert_eq!(date.month(), 12);
    }
}

#[test]
fn out_of_range_month_is_rejected() {
    assert_eq!(days_in_month(2024, 12), Err(CalendarError::InvalidMonth(12)));
    assert_eq!(days_in_month(2024, 99), Err(CalendarError::InvalidMonth(99)));
}

#[test]
fn shift_month_crosses_year_boundaries() {
    assert_eq!(
        shift_month(ymd(2024, 1, 15), MonthStep::Prev).unwrap(),
        ymd(2023, 12, 15)
    );
    assert_eq!(
        shift_month(ymd(2023, 12, 15), MonthStep::Next).unwrap(),
        ymd(2024, 1, 15)
    );
}

#[test]
fn shift_month_round_trips_mid_month_dates() {
    for month in 1..=12 {
        let date = ymd(2024, month, 14);
        let there = shift_month(date, MonthStep::Next).unwrap();
        assert_eq!(shift_month(there, MonthStep::Prev).unwrap(), date);
    }
}

#[test]
fn shift_month_rolls_overflowing_days_forward() {
    assert_eq!(
        shift_month(ymd(2024, 3, 31), MonthStep::Prev).unwrap(),
        ymd(2024, 3, 2)
    );
    assert_eq!(
        shift_month(ymd(2023, 3, 31), MonthStep::Prev).unwrap(),
        ymd(2023, 3, 3)
    );
    assert_eq!(
        shift_month(ymd(2024, 1, 31), MonthStep::Next).unwrap(),
        ymd(2024, 3, 2)
    );
    assert_eq!(
        shift_month(ymd(2024, 5, 31), MonthStep::Next).unwrap(),
        ymd(2024, 7, 1)
    );
    // Jan 31 minus one month stays valid.
    assert_eq!(
        shift_month(ymd(2024, 1, 31), MonthStep::Prev).unwrap(),
        ymd(2023, 12, 31)
    );
}

#[test]
fn is_today_compares_days_only() {
    let today = ymd(2024, 1, 15);
    assert!(is_today(ymd(2024, 1, 15), today));
    assert!(!is_today(ymd(2024, 1, 16), today));
}
