use chrono::{Duration, Local, NaiveDate, Utc};
use sessiondesk::utils::datetime::{format_created, format_human_date};
use sessiondesk::utils::money::{format_amount, format_variance};

#[test]
fn test_tomorrow_and_month_boundary() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let tomorrow = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    assert_eq!(format_human_date(tomorrow, today), "tomorrow");

    let thirty = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
    assert_eq!(format_human_date(thirty, today), "30 days ago");
    let thirty_one = NaiveDate::from_ymd_opt(2025, 1, 29).unwrap();
    assert_eq!(format_human_date(thirty_one, today), "Jan 29");
}

#[test]
fn test_format_created_uses_local_today() {
    assert_eq!(format_created(Some(Utc::now())), "today");

    let local_noon = Local::now().date_naive().and_hms_opt(12, 0, 0).unwrap();
    let two_days_ago = (local_noon - Duration::days(2))
        .and_local_timezone(Local)
        .single()
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(format_created(Some(two_days_ago)), "2 days ago");
}

#[test]
fn test_amounts_round_to_cents() {
    assert_eq!(format_amount(999.999, "$"), "$1,000.00");
    assert_eq!(format_amount(1000.0, ""), "1,000.00");
    assert_eq!(format_variance(-0.004, "$"), "$0.00");
    assert_eq!(format_variance(0.006, "£"), "+£0.01");
}
