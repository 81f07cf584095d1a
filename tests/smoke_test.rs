use chrono::NaiveDate;
use finpal_core::{
    engine::{IngestService, ResolverService, SummaryService},
    init,
    session::{AmbiguousEntry, AnalysisResult, IngestBatch, Session, TransactionRecord},
};

#[test]
fn reconciliation_smoke() {
    init();

    let mut session = Session::new("SmokeTest");
    let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let batch = IngestBatch {
        rows_loaded: 2,
        categorized: vec![
            TransactionRecord::new(date, "Team dinner", -120.0, "Food").with_group(true),
            TransactionRecord::new(date, "January payroll", 2000.0, "Salary"),
        ],
    };
    IngestService::ingest(&mut session, batch).unwrap();

    session.begin_analysis();
    session.apply_analysis(AnalysisResult {
        categorized: vec![
            TransactionRecord::new(date, "Team dinner", -120.0, "Food").with_group(true),
            TransactionRecord::new(date, "January payroll", 2000.0, "Salary"),
        ],
        matched: Vec::new(),
        ambiguous: vec![AmbiguousEntry::new(
            TransactionRecord::new(date, "Venmo from Kim", 40.0, "Reimbursement")
                .with_reimbursement(true),
            vec!["Team dinner".into()],
        )],
    });

    ResolverService::resolve(&mut session, 0, "Team dinner").unwrap();
    assert!(session.stage.is_done());

    let summary = SummaryService::compute_for(&session);
    assert_eq!(summary.by_category.get("Food"), Some(&80.0));
    assert_eq!(summary.total_income, 2000.0);
    assert_eq!(summary.total_spend, 80.0);
    assert_eq!(summary.net_income, 1920.0);
    assert_eq!(summary.category_count(), 2);
}
