#[cfg(test)]
mod tests {
    use crate::utils::{case_row, csv_text, header_line};
    use stroke_ready::{
        InvalidDatePolicy, PipelineConfig, StrokeReadyError, process_data,
        process_data_with_config,
    };

    #[test]
    fn test_missing_column_is_invalid_schema() {
        let header = header_line().replace(",CT End to Read", "");
        let text = format!("{header}\n2021,3,A1,5,20,30,28,45,40\n");

        let err = process_data(&text).unwrap_err();
        assert!(matches!(err, StrokeReadyError::InvalidSchema { .. }));
        assert!(err.to_string().contains("\"CT End to Read\""));
    }

    #[test]
    fn test_renamed_column_is_invalid_schema() {
        let header = header_line().replace("Door to CT", "door to ct");
        let text = format!("{header}\n{}\n", case_row(2021, 3, "A1", None, None, None));
        assert!(matches!(
            process_data(&text),
            Err(StrokeReadyError::InvalidSchema { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_invalid_schema() {
        assert!(matches!(
            process_data(""),
            Err(StrokeReadyError::InvalidSchema { .. })
        ));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        assert!(matches!(
            process_data(&csv_text(&[])),
            Err(StrokeReadyError::EmptyDataset)
        ));
    }

    #[test]
    fn test_invalid_month_policy() {
        let rows = vec![
            case_row(2021, 3, "A1", Some(1.0), Some(1.0), Some(8.0)),
            case_row(2021, 13, "A2", Some(1.0), Some(1.0), Some(99.0)),
        ];
        let text = csv_text(&rows);

        assert!(matches!(
            process_data(&text),
            Err(StrokeReadyError::InvalidDate { row: 2, .. })
        ));

        let config = PipelineConfig::default().with_invalid_date_policy(InvalidDatePolicy::Skip);
        let summaries = process_data_with_config(&text, &config).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].med_d2rx, Some(8.0));
    }

    #[test]
    fn test_all_missing_metric_is_none_not_error() {
        let text = csv_text(&[
            case_row(2021, 3, "A1", None, Some(20.0), Some(40.0)),
            case_row(2021, 2, "A2", None, Some(30.0), Some(50.0)),
        ]);
        let summaries = process_data(&text).unwrap();

        assert_eq!(summaries[0].med_d2dr, None);
        assert_eq!(summaries[0].med_d2ct, Some(25.0));
    }
}
