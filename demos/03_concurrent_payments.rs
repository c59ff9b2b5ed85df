/// concurrent payments - many handlers sharing one ledger
use std::sync::Arc;
use std::thread;

use loan_ledger_rs::{BorrowerId, Money, PaymentLedger, Rate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ledger = Arc::new(PaymentLedger::default());

    for i in 0..4 {
        let borrower = BorrowerId::new(format!("borrower-{}", i));
        ledger.create_loan_now(&borrower, Money::from_major(12_000), Rate::ZERO, 12)?;
    }

    // two handlers per borrower, each paying 1,000 eight times
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                let borrower = BorrowerId::new(format!("borrower-{}", n % 4));
                (0..8)
                    .filter(|_| ledger.apply_payment_now(&borrower, Money::from_major(1_000)).is_ok())
                    .count()
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        accepted += handle.join().map_err(|_| "payment thread panicked")?;
    }
    println!("\naccepted payments: {}", accepted);

    for i in 0..4 {
        let summary = ledger.get_summary(&BorrowerId::new(format!("borrower-{}", i)))?;
        println!(
            "{}: {:?} paid {} remaining {} ({} payments)",
            summary.borrower_id, summary.status, summary.paid_amount, summary.remaining_amount, summary.payment_count
        );
    }

    Ok(())
}
