/// payments - partial, multi-installment and rejected payments
use loan_ledger_rs::{BorrowerId, LedgerError, Money, PaymentLedger, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== payments example ===\n");

    let ledger = PaymentLedger::default();
    let borrower = BorrowerId::from("asha");

    let loan = ledger.create_loan_now(&borrower, Money::from_major(60_000), Rate::from_percentage(12), 12)?;
    println!("emi: {}  total: {}", loan.emi_amount, loan.total_amount);

    // less than one emi: balance moves, schedule does not
    let loan = ledger.apply_payment_now(&borrower, Money::from_major(2_000))?;
    println!("after 2,000: remaining {} over {} emis", loan.remaining_amount, loan.remaining_emis);

    // three emis at once
    let loan = ledger.apply_payment_now(&borrower, Money::from_major(16_800))?;
    println!(
        "after 16,800: remaining {} over {} emis, next due {}",
        loan.remaining_amount, loan.remaining_emis, loan.next_due_date
    );

    // more than is owed
    match ledger.apply_payment_now(&borrower, Money::from_major(1_000_000)) {
        Err(LedgerError::Overpayment { remaining, requested }) => {
            println!("rejected {}: only {} outstanding", requested, remaining)
        }
        other => println!("unexpected: {:?}", other),
    }

    // settle
    let loan = ledger.apply_payment_now(&borrower, loan.remaining_amount)?;
    println!("\nstatus: {:?}, payments: {}", loan.status, loan.payments.len());

    for payment in ledger.get_payments(&borrower)? {
        println!(
            "  #{} {} -> balance {} ({} emis)",
            payment.sequence, payment.amount, payment.balance_after, payment.installments_covered
        );
    }

    // closed loans reject further payments
    if let Err(e) = ledger.apply_payment_now(&borrower, Money::ONE) {
        println!("\nafter closure: {}", e);
    }

    Ok(())
}
