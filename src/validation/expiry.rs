use chrono::{Datelike, Local};

/// Expiry check against the wall clock, calendar-month granularity. A card
/// expiring in the current month is still valid.
pub fn validate_expiry_date(month: &str, year: &str) -> bool {
    let today = Local::now().date_naive();
    expiry_on_or_after(month, year, today.year(), today.month() as i32)
}

fn expiry_on_or_after(month: &str, year: &str, current_year: i32, current_month: i32) -> bool {
    let Ok(expiry_month) = month.parse::<i32>() else {
        return false;
    };
    let Ok(mut expiry_year) = year.parse::<i32>() else {
        return false;
    };

    // Two-digit years are shorthand for 20xx.
    if year.len() == 2 {
        expiry_year += 2000;
    }

    if !(1..=12).contains(&expiry_month) {
        return false;
    }

    if expiry_year < current_year {
        return false;
    }
    if expiry_year == current_year && expiry_month < current_month {
        return false;
    }

    true
}
