use nb_engine::ExpansionReport;

pub(crate) fn format_report_lines(report: &ExpansionReport) -> Vec<String> {
    let summary = &report.summary;
    let tokens = summary
        .identities
        .iter()
        .map(|identity| identity.token())
        .collect::<Vec<_>>();

    let mut lines = vec![
        "RESULT:OK".to_string(),
        format!(
            "IDENTITIES_JSON:{}",
            serde_json::to_string(&tokens).expect("identity json")
        ),
    ];
    for (identity, range) in &summary.ranges {
        lines.push(format!(
            "RANGE:{}|{}|{}",
            serde_json::to_string(identity.token()).expect("string json"),
            range.start,
            range.end
        ));
    }
    lines.push(format!("COMBINATIONS:{}", summary.combinations));
    lines.push(format!("OUTPUT:{}", report.output_path.display()));
    lines
}

pub(crate) fn emit_report(report: &ExpansionReport) -> i32 {
    for line in format_report_lines(report) {
        println!("{}", line);
    }
    0
}
