/// quick start - minimal example to get started
use loan_ledger_rs::{BorrowerId, Money, PaymentLedger, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ledger = PaymentLedger::default();
    let borrower = BorrowerId::from("borrower-42");

    // 100,000 at 10% over 12 months
    let loan = ledger.create_loan_now(&borrower, Money::from_major(100_000), Rate::from_percentage(10), 12)?;
    println!("total payable: {}, emi: {}", loan.total_amount, loan.emi_amount);

    // pay one installment
    ledger.apply_payment_now(&borrower, loan.emi_amount)?;

    // print current state
    println!("{}", ledger.get_summary(&borrower)?.to_json_pretty()?);

    Ok(())
}
