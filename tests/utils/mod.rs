use stroke_ready::EXPECTED_HEADER;

/// Header line matching the expected schema
#[must_use]
pub fn header_line() -> String {
    EXPECTED_HEADER.join(",")
}

/// One data row. `None` metrics are written as blank fields.
///
/// `d2n` goes into the tPA order to delivery column; the `Door to Needle`
/// column gets `d2n + 5` so the two columns never agree.
#[must_use]
pub fn case_row(
    year: i32,
    month: u32,
    case: &str,
    d2dr: Option<f64>,
    d2ct: Option<f64>,
    d2n: Option<f64>,
) -> String {
    let field = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
    format!(
        "{year},{month},{case},{},{},12,30,28,{},{}",
        field(d2dr),
        field(d2ct),
        field(d2n.map(|v| v + 5.0)),
        field(d2n),
    )
}

/// Build CSV text from the expected header and the given rows
#[must_use]
pub fn csv_text(rows: &[String]) -> String {
    let mut text = header_line();
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// One case per month for `months` months ending at `year`/`month`
#[must_use]
pub fn monthly_cases(year: i32, month: u32, months: i32) -> Vec<String> {
    (0..months)
        .map(|i| {
            let (y, m) = stroke_ready::utils::shift_month(year, month, -i);
            let case = format!("C{i}");
            case_row(y, m, &case, Some(f64::from(i)), Some(20.0), Some(45.0))
        })
        .collect()
}
