/// time control - deterministic due dates with controlled time
use chrono::{Duration, TimeZone, Utc};
use loan_ledger_rs::{BorrowerId, Money, PaymentLedger, Rate, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    // month-end start date
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let ledger = PaymentLedger::default();
    let borrower = BorrowerId::from("ravi");
    let loan = ledger.create_loan(&borrower, Money::from_major(24_000), Rate::from_percentage(6), 6, &time)?;
    println!("created on {}, maturity {}", time.now().format("%Y-%m-%d"), loan.maturity_date);

    println!("\nschedule:");
    for installment in &ledger.get_schedule(&borrower)?.installments {
        println!(
            "  {:>2}  {}  {:>8}  balance {}",
            installment.number, installment.due_date, installment.amount, installment.balance_after
        );
    }

    // pay one emi each month
    println!();
    while ledger.get_loan(&borrower)?.is_open() {
        controller.advance(Duration::days(30));
        let current = ledger.get_loan(&borrower)?;
        let amount = current.emi_amount.min(current.remaining_amount);
        let loan = ledger.apply_payment(&borrower, amount, &time)?;
        println!(
            "{}: paid {}, remaining {}, next due {}",
            time.now().format("%Y-%m-%d"),
            amount,
            loan.remaining_amount,
            loan.next_due_date
        );
    }

    let summary = ledger.get_summary(&borrower)?;
    println!("\nclosed at: {:?}", summary.closed_at);

    Ok(())
}
