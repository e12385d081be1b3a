use crate::daykey::day_key;
use crate::models::{CalendarCell, FollowUpLog, FollowUpStatus};
use chrono::{Datelike, NaiveDate};

/// Render-ready grid for one month: leading blank cells up to the weekday
/// index of the 1st (Sunday = 0), then one cell per day of the month.
///
/// A day's status is its explicit log entry when present; otherwise it is
/// `absent` when the day falls in `[start_date, today)`, and undefined for
/// days before the program start or in the future. An invalid month/year
/// produces an empty grid.
pub fn month_grid(
    year: i32,
    month: u32,
    log: &FollowUpLog,
    start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let day_count = days_in_month(first);
    let mut cells = Vec::with_capacity(leading + day_count);

    for _ in 0..leading {
        cells.push(CalendarCell::blank());
    }

    for date in first.iter_days().take(day_count) {
        let key = day_key(date);
        let status = match log.get(&key) {
            Some(entry) => Some(entry.status),
            None => match start_date {
                Some(start) if date >= start && date < today => Some(FollowUpStatus::Absent),
                _ => None,
            },
        };
        cells.push(CalendarCell {
            date: Some(date),
            is_today: date == today,
            day_key: key,
            status,
        });
    }

    cells
}

fn days_in_month(first: NaiveDate) -> usize {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next_first| next_first.pred_opt())
        .map(|last| last.day() as usize)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FollowUpEntry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_february_grid_has_33_cells() {
        // 2024-02-01 is a Thursday, weekday index 4 from Sunday.
        let cells = month_grid(2024, 2, &FollowUpLog::new(), None, date(2024, 2, 15));
        assert_eq!(cells.len(), 33);
        assert!(cells[..4].iter().all(|cell| cell.date.is_none()));
        assert_eq!(cells[4].date, Some(date(2024, 2, 1)));
        assert_eq!(cells[32].date, Some(date(2024, 2, 29)));
    }

    #[test]
    fn grid_length_is_leading_blanks_plus_days() {
        // 2024-09-01 is a Sunday: no blanks, 30 days.
        let cells = month_grid(2024, 9, &FollowUpLog::new(), None, date(2024, 9, 1));
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0].date, Some(date(2024, 9, 1)));

        // 2024-06-01 is a Saturday: 6 blanks, 30 days.
        let cells = month_grid(2024, 6, &FollowUpLog::new(), None, date(2024, 6, 1));
        assert_eq!(cells.len(), 36);
    }

    #[test]
    fn explicit_entry_wins_over_absent_shading() {
        let mut log = FollowUpLog::new();
        log.insert(
            "2024-05-02".to_string(),
            FollowUpEntry {
                status: FollowUpStatus::Success,
                timestamp: date(2024, 5, 2),
            },
        );
        let cells = month_grid(2024, 5, &log, Some(date(2024, 5, 1)), date(2024, 5, 4));

        let by_key = |key: &str| cells.iter().find(|c| c.day_key == key).unwrap();
        assert_eq!(by_key("2024-05-01").status, Some(FollowUpStatus::Absent));
        assert_eq!(by_key("2024-05-02").status, Some(FollowUpStatus::Success));
        assert_eq!(by_key("2024-05-03").status, Some(FollowUpStatus::Absent));
        // Today and beyond have no implicit status.
        assert_eq!(by_key("2024-05-04").status, None);
        assert_eq!(by_key("2024-05-05").status, None);
    }

    #[test]
    fn days_before_program_start_are_unshaded() {
        let cells = month_grid(
            2024,
            5,
            &FollowUpLog::new(),
            Some(date(2024, 5, 10)),
            date(2024, 5, 20),
        );
        let by_key = |key: &str| cells.iter().find(|c| c.day_key == key).unwrap();
        assert_eq!(by_key("2024-05-09").status, None);
        assert_eq!(by_key("2024-05-10").status, Some(FollowUpStatus::Absent));
    }

    #[test]
    fn no_start_date_leaves_all_days_unshaded() {
        let cells = month_grid(2024, 5, &FollowUpLog::new(), None, date(2024, 5, 20));
        assert!(cells.iter().all(|cell| cell.status.is_none()));
    }

    #[test]
    fn today_is_flagged_exactly_once() {
        let today = date(2024, 5, 20);
        let cells = month_grid(2024, 5, &FollowUpLog::new(), None, today);
        let flagged: Vec<_> = cells.iter().filter(|cell| cell.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, Some(today));

        let other_month = month_grid(2024, 4, &FollowUpLog::new(), None, today);
        assert!(other_month.iter().all(|cell| !cell.is_today));
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(month_grid(2024, 0, &FollowUpLog::new(), None, date(2024, 5, 1)).is_empty());
        assert!(month_grid(2024, 13, &FollowUpLog::new(), None, date(2024, 5, 1)).is_empty());
    }

    #[test]
    fn december_grid_spans_to_new_year_boundary() {
        // 2024-12-01 is a Sunday: 31 cells, no blanks.
        let cells = month_grid(2024, 12, &FollowUpLog::new(), None, date(2024, 12, 15));
        assert_eq!(cells.len(), 31);
        assert_eq!(cells[30].date, Some(date(2024, 12, 31)));
    }
}
