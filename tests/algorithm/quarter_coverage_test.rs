#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use stroke_ready::utils::{last_day_of_month, shift_month};
    use stroke_ready::{
        CaseRecord, DatedCase, QuarterInterval, assign_quarters, generate_quarters,
    };

    fn first_of(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    /// Every month between `from` and `to`, inclusive
    fn months_between(from: (i32, u32), to: (i32, u32)) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = from;
        while current <= to {
            dates.push(first_of(current.0, current.1));
            current = shift_month(current.0, current.1, 1);
        }
        dates
    }

    fn check_contiguous(quarters: &[QuarterInterval]) {
        for pair in quarters.windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
            assert_eq!(pair[1].end.succ_opt().unwrap(), pair[0].start);
        }
    }

    #[test]
    fn test_coverage_for_many_anchor_months() {
        for end_month in 1..=12 {
            for span in 1..=30 {
                let (start_year, start_month) = shift_month(2021, end_month, -(span - 1));
                let dates = months_between((start_year, start_month), (2021, end_month));
                let quarters = generate_quarters(&dates).unwrap();

                check_contiguous(&quarters);
                assert_eq!(quarters[0].end, last_day_of_month(first_of(2021, end_month)));
                assert!(quarters.last().unwrap().start <= dates[0]);
                if quarters.len() > 1 {
                    // The second-to-last quarter alone must not already reach the minimum.
                    assert!(quarters[quarters.len() - 2].start > dates[0]);
                }
            }
        }
    }

    #[test]
    fn test_every_case_is_assigned_inside_its_quarter() {
        let dates = months_between((2018, 11), (2021, 2));
        let cases: Vec<DatedCase> = dates
            .iter()
            .enumerate()
            .map(|(i, date)| DatedCase {
                record: CaseRecord {
                    row: i + 1,
                    ..Default::default()
                },
                date: *date,
                date_key: String::new(),
            })
            .collect();

        let quarters = generate_quarters(&dates).unwrap();
        let assigned = assign_quarters(cases, &quarters).unwrap();

        assert_eq!(assigned.len(), dates.len());
        for case in &assigned {
            assert!(case.quarter.start <= case.dated.date);
            assert!(case.dated.date <= case.quarter.end);
        }
    }
}
