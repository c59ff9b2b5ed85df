/// json summary - wire requests in, summaries out
use chrono::{TimeZone, Utc};
use loan_ledger_rs::{
    ApplyPaymentRequest, BorrowerId, CreateLoanRequest, LedgerConfig, PaymentLedger, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json summary ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    ));

    let config = LedgerConfig::from_json(r#"{ "maxTenureMonths": 120, "currency": "INR" }"#)?;
    let ledger = PaymentLedger::new(config)?;
    let borrower = BorrowerId::from("meera");

    let create: CreateLoanRequest = serde_json::from_str(
        r#"{ "principal": "250000", "annualRatePercent": "9.5", "tenureMonths": 24 }"#,
    )?;
    let loan = ledger.create_loan_from_request(&borrower, &create, &time)?;

    println!("after creation");
    println!("--------------");
    println!("{}\n", ledger.get_summary(&borrower)?.to_json_pretty()?);

    let pay: ApplyPaymentRequest =
        serde_json::from_str(&format!(r#"{{ "loanId": "{}", "amount": "30000" }}"#, loan.loan_id))?;
    ledger.apply_payment_from_request(&borrower, &pay, &time)?;

    println!("after 30,000 payment");
    println!("--------------------");
    println!("{}\n", ledger.get_summary(&borrower)?.to_json_pretty()?);

    // rejected requests carry the offending field
    let bad: CreateLoanRequest =
        serde_json::from_str(r#"{ "principal": "1000", "annualRatePercent": "5", "tenureMonths": -3 }"#)?;
    if let Err(e) = ledger.create_loan_from_request(&BorrowerId::from("kiran"), &bad, &time) {
        println!("rejected ({:?}, field {:?}): {}", e.kind(), e.field(), e);
    }

    println!("\nevents:");
    for event in ledger.take_events(&borrower)? {
        println!("{}", serde_json::to_string(&event)?);
    }

    Ok(())
}
