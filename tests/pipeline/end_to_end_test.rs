#[cfg(test)]
mod tests {
    use crate::utils::{case_row, csv_text, header_line, monthly_cases};
    use stroke_ready::{
        NeedleMetric, PipelineConfig, chart_order, process_data, process_data_with_config,
        to_json,
    };

    fn two_quarter_text() -> String {
        csv_text(&[
            case_row(2021, 6, "A1", Some(4.0), Some(18.0), Some(10.0)),
            case_row(2021, 5, "A2", Some(6.0), Some(22.0), Some(20.0)),
            case_row(2021, 4, "A3", Some(8.0), None, Some(30.0)),
            case_row(2021, 3, "B1", Some(3.0), Some(25.0), Some(5.0)),
            case_row(2021, 2, "B2", None, Some(35.0), Some(15.0)),
            case_row(2021, 1, "B3", Some(5.0), Some(30.0), None),
        ])
    }

    #[test]
    fn test_two_quarters_of_cases() {
        let summaries = process_data(&two_quarter_text()).unwrap();
        assert_eq!(summaries.len(), 2);

        let current = &summaries[0];
        assert_eq!(current.qtr_id, 0);
        assert_eq!(current.qtr_label, "Apr-Jun\n2021");
        assert_eq!(current.qtr_begin, "2021 Apr");
        assert_eq!(current.qtr_end, "2021 Jun");
        assert_eq!(current.med_d2rx, Some(20.0));
        assert_eq!(current.med_d2dr, Some(6.0));
        assert_eq!(current.med_d2ct, Some(20.0));

        let previous = &summaries[1];
        assert_eq!(previous.qtr_id, 1);
        assert_eq!(previous.qtr_label, "Jan-Mar\n2021");
        assert_eq!(previous.med_d2rx, Some(10.0));
        assert_eq!(previous.med_d2dr, Some(4.0));
        assert_eq!(previous.med_d2ct, Some(30.0));
    }

    #[test]
    fn test_rows_need_not_be_sorted() {
        let mut rows = vec![
            case_row(2021, 2, "B2", None, Some(35.0), Some(15.0)),
            case_row(2021, 6, "A1", Some(4.0), Some(18.0), Some(10.0)),
            case_row(2021, 3, "B1", Some(3.0), Some(25.0), Some(5.0)),
        ];
        rows.push(case_row(2021, 5, "A2", Some(6.0), Some(22.0), Some(20.0)));

        let summaries = process_data(&csv_text(&rows)).unwrap();
        assert_eq!(summaries[0].med_d2rx, Some(15.0));
        assert_eq!(summaries[1].med_d2rx, Some(10.0));
    }

    #[test]
    fn test_ten_quarters_yield_four_summaries() {
        let text = csv_text(&monthly_cases(2022, 12, 30));
        let summaries = process_data(&text).unwrap();

        let ids: Vec<usize> = summaries.iter().map(|s| s.qtr_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(summaries[0].qtr_label, "Oct-Dec\n2022");
        assert_eq!(summaries[3].qtr_label, "Jan-Mar\n2022");
    }

    #[test]
    fn test_year_boundary_labels() {
        let text = csv_text(&monthly_cases(2021, 1, 4));
        let summaries = process_data(&text).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].qtr_label, "Nov-Jan\n2021");
        assert_eq!(summaries[0].qtr_begin, "2020 Nov");
        assert_eq!(summaries[0].qtr_end, "2021 Jan");
        assert_eq!(summaries[1].qtr_label, "Aug-Oct\n2020");
    }

    #[test]
    fn test_default_needle_median_reads_tpa_column() {
        let header = header_line();
        let text = format!(
            "{header}\n\
2021,6,A1,4,18,12,30,28,999,10\n\
2021,5,A2,6,22,12,30,28,999,20\n\
2021,4,A3,8,,12,30,28,999,30\n\
2021,3,B1,3,25,12,30,28,999,5\n\
2021,2,B2,,35,12,30,28,999,15\n"
        );
        let summaries = process_data(&text).unwrap();

        assert_eq!(summaries[0].med_d2rx, Some(20.0));
        assert_eq!(summaries[1].med_d2rx, Some(10.0));
    }

    #[test]
    fn test_door_to_needle_column_as_needle_metric() {
        let config = PipelineConfig::default().with_needle_metric(NeedleMetric::DoorToNeedle);
        let summaries = process_data_with_config(&two_quarter_text(), &config).unwrap();

        // The fixture writes the door to needle column as the tPA value plus five.
        assert_eq!(summaries[0].med_d2rx, Some(25.0));
        assert_eq!(summaries[1].med_d2rx, Some(15.0));
    }

    #[test]
    fn test_json_output_in_chart_order() {
        let summaries = process_data(&two_quarter_text()).unwrap();
        let ordered: Vec<usize> = chart_order(&summaries)
            .iter()
            .map(|s| s.qtr_id)
            .collect();
        assert_eq!(ordered, vec![1, 0]);

        let json = to_json(&summaries).unwrap();
        let json: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(json[0]["qtr_label"], "Apr-Jun\n2021");
        assert_eq!(json[1]["med_d2rx"], 10.0);
    }
}
