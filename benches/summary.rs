use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use house_ledger::core::{services::SummaryService, Session};
use house_ledger::ledger::DEFAULT_EXPENSE_CATEGORIES;
use rust_decimal::Decimal;

fn build_sample_session(weeks: usize) -> Session {
    let mut session = Session::new();
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();

    for week in 0..weeks {
        let payday = start_date + Duration::weeks(week as i64);
        session.add_income(payday, Decimal::from(1000 + (week % 50) as i64));
        for (idx, category) in DEFAULT_EXPENSE_CATEGORIES.iter().enumerate() {
            let amount = Decimal::new(1250 + (idx as i64) * 375 + (week % 7) as i64, 2);
            session.add_expense(payday, "Weekly spend", amount, *category);
        }
        if week % 4 == 0 {
            session
                .split_rent(payday, Decimal::new(329_929, 2))
                .expect("rent split");
        }
    }
    session
}

fn bench_summaries(c: &mut Criterion) {
    let session = build_sample_session(black_box(1_250));

    c.bench_function("budget_summary_10k", |b| {
        b.iter(|| {
            let summary = SummaryService::summarize(session.ledger(), session.rules());
            black_box(summary);
        })
    });

    c.bench_function("expense_breakdown_10k", |b| {
        b.iter(|| black_box(SummaryService::expense_breakdown(session.ledger())))
    });

    c.bench_function("session_snapshot_json", |b| {
        b.iter_batched(
            || session.snapshot(),
            |snapshot| black_box(serde_json::to_string(&snapshot).expect("serialize")),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_summaries);
criterion_main!(benches);
