//! Invoice processing pipeline: discount → payment → notification.

use serde::{Deserialize, Serialize};

use invoiceflow_core::{Amount, InvoiceId};

use crate::discount::Discount;
use crate::invoice::Invoice;
use crate::notifier::Notifier;
use crate::payment::Payment;

/// Outcome of one `process_invoice` call.
///
/// `final_amount` is the exact value that was charged and announced. Two runs
/// over the same inputs produce equal receipts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingReceipt {
    pub invoice_id: InvoiceId,
    pub base_amount: Amount,
    pub final_amount: Amount,
}

/// Orchestrates a single invoice-processing transaction.
///
/// The discount policy and notification channel are injected once and fixed
/// for the service's lifetime; the payment method is chosen per call.
///
/// ## Sequencing
///
/// 1. **Discount**: `final_amount = discount.apply_discount(invoice.amount())`, once.
/// 2. **Pay**: `payment.pay(final_amount)`.
/// 3. **Notify**: `notifier.send(..)` with the invoice id and the same `final_amount`.
///
/// No step is retried and nothing is compensated: a panic in one step
/// aborts the ones after it.
pub struct InvoiceProcessingService {
    notifier: Box<dyn Notifier>,
    discount: Box<dyn Discount>,
}

impl InvoiceProcessingService {
    pub fn new(notifier: Box<dyn Notifier>, discount: Box<dyn Discount>) -> Self {
        Self { notifier, discount }
    }

    pub fn discount(&self) -> &dyn Discount {
        self.discount.as_ref()
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn process_invoice(&self, invoice: &Invoice, payment: &dyn Payment) -> ProcessingReceipt {
        let span = tracing::info_span!("process_invoice", invoice_id = %invoice.id_typed());
        let _enter = span.enter();

        let base_amount = invoice.amount();
        let final_amount = self.discount.apply_discount(base_amount);
        tracing::debug!(
            discount = self.discount.name(),
            %base_amount,
            %final_amount,
            "discount applied"
        );

        payment.pay(final_amount);

        self.notifier.send(&processed_message(invoice.id_typed(), final_amount));

        tracing::info!(
            payment = payment.method_name(),
            channel = self.notifier.channel(),
            %final_amount,
            "invoice processed"
        );

        ProcessingReceipt {
            invoice_id: invoice.id_typed().clone(),
            base_amount,
            final_amount,
        }
    }
}

fn processed_message(id: &InvoiceId, final_amount: Amount) -> String {
    format!("Invoice {id} processed. Final Amount: {final_amount}")
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::console::InMemoryConsole;
    use crate::discount::{DiscountKind, LoyaltyDiscount, NoDiscount, SeasonalDiscount};
    use crate::notifier::SmsNotifier;
    use crate::payment::{CreditCardPayment, UpiPayment};

    /// Discount that counts calls and returns a fixed amount.
    struct CountingDiscount {
        calls: Arc<AtomicUsize>,
        result: Amount,
    }

    impl Discount for CountingDiscount {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn apply_discount(&self, _amount: Amount) -> Amount {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
        }
    }

    /// Payment that records what it was asked to charge.
    #[derive(Default)]
    struct RecordingPayment {
        charged: Mutex<Vec<Amount>>,
    }

    impl Payment for RecordingPayment {
        fn method_name(&self) -> &'static str {
            "Recording"
        }

        fn pay(&self, amount: Amount) {
            self.charged.lock().unwrap().push(amount);
        }
    }

    /// Payment whose gateway always blows up.
    struct PanickingPayment;

    impl Payment for PanickingPayment {
        fn method_name(&self) -> &'static str {
            "Panicking"
        }

        fn pay(&self, _amount: Amount) {
            panic!("payment gateway unavailable");
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl Notifier for RecordingNotifier {
        fn channel(&self) -> &'static str {
            "Recording"
        }

        fn send(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn pipeline(discount: Box<dyn Discount>) -> (InvoiceProcessingService, Arc<InMemoryConsole>) {
        let console = Arc::new(InMemoryConsole::new());
        let service = InvoiceProcessingService::new(
            Box::new(SmsNotifier::with_console(console.clone())),
            discount,
        );
        (service, console)
    }

    #[test]
    fn seasonal_credit_card_sms_scenario() {
        let (service, console) = pipeline(Box::new(SeasonalDiscount));
        let payment = CreditCardPayment::with_console(console.clone());

        let receipt = service.process_invoice(&Invoice::new("INV001", 1000u32), &payment);

        assert_eq!(receipt.final_amount, Amount::new(900.0));
        assert_eq!(receipt.base_amount, Amount::new(1000.0));
        assert_eq!(
            console.lines(),
            vec![
                "Paid 900.0 using Credit Card.",
                "SMS sent: Invoice INV001 processed. Final Amount: 900.0",
            ]
        );
    }

    #[test]
    fn loyalty_scenario() {
        let (service, console) = pipeline(Box::new(LoyaltyDiscount));
        let payment = CreditCardPayment::with_console(console.clone());

        let receipt = service.process_invoice(&Invoice::new("INV001", 1000u32), &payment);

        assert_eq!(receipt.final_amount, Amount::new(800.0));
        assert_eq!(console.lines()[0], "Paid 800.0 using Credit Card.");
    }

    #[test]
    fn zero_amount_still_pays_and_notifies() {
        let (service, console) = pipeline(Box::new(NoDiscount));
        let payment = UpiPayment::with_console(console.clone());

        let receipt = service.process_invoice(&Invoice::new("X", 0u32), &payment);

        assert_eq!(receipt.final_amount, Amount::ZERO);
        assert_eq!(
            console.lines(),
            vec![
                "Paid 0.0 using UPI.",
                "SMS sent: Invoice X processed. Final Amount: 0.0",
            ]
        );
    }

    #[test]
    fn discount_runs_once_and_its_result_flows_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let messages = Arc::new(Mutex::new(Vec::new()));
        let service = InvoiceProcessingService::new(
            Box::new(RecordingNotifier {
                messages: messages.clone(),
            }),
            Box::new(CountingDiscount {
                calls: calls.clone(),
                result: Amount::new(123.25),
            }),
        );
        let payment = RecordingPayment::default();

        let receipt = service.process_invoice(&Invoice::new("INV-42", 500u32), &payment);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*payment.charged.lock().unwrap(), vec![Amount::new(123.25)]);
        assert_eq!(receipt.final_amount, Amount::new(123.25));

        let messages = messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("INV-42"));
        assert!(messages[0].contains("123.25"));
    }

    #[test]
    fn new_discount_plugs_in_without_touching_the_service() {
        struct FlatOff(f64);

        impl Discount for FlatOff {
            fn name(&self) -> &'static str {
                "flat"
            }

            fn apply_discount(&self, amount: Amount) -> Amount {
                Amount::new((amount.value() - self.0).max(0.0))
            }
        }

        let (service, console) = pipeline(Box::new(FlatOff(250.0)));
        let payment = CreditCardPayment::with_console(console.clone());

        let receipt = service.process_invoice(&Invoice::new("INV002", 1000u32), &payment);

        assert_eq!(receipt.final_amount, Amount::new(750.0));
        assert_eq!(service.discount().name(), "flat");
    }

    #[test]
    fn payment_is_chosen_per_call() {
        let (service, console) = pipeline(DiscountKind::None.build());
        let invoice = Invoice::new("INV003", 10u32);

        service.process_invoice(&invoice, &CreditCardPayment::with_console(console.clone()));
        service.process_invoice(&invoice, &UpiPayment::with_console(console.clone()));

        let lines = console.lines();
        assert_eq!(lines[0], "Paid 10.0 using Credit Card.");
        assert_eq!(lines[2], "Paid 10.0 using UPI.");
    }

    #[test]
    fn invoice_is_left_untouched() {
        let (service, console) = pipeline(Box::new(SeasonalDiscount));
        let invoice = Invoice::new("INV004", 1000u32);
        let before = invoice.clone();

        service.process_invoice(&invoice, &CreditCardPayment::with_console(console));

        assert_eq!(invoice, before);
    }

    #[test]
    fn service_can_be_shared_across_threads() {
        let (service, console) = pipeline(Box::new(SeasonalDiscount));
        let service = Arc::new(service);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let service = service.clone();
                let console = console.clone();
                std::thread::spawn(move || {
                    let payment = CreditCardPayment::with_console(console);
                    service.process_invoice(&Invoice::new(format!("T{i}"), 100u32), &payment)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().final_amount, Amount::new(90.0));
        }
        assert_eq!(console.lines().len(), 8);
    }

    #[test]
    fn same_inputs_give_equal_receipts() {
        let (service, console) = pipeline(Box::new(SeasonalDiscount));
        let invoice = Invoice::new("INV001", 1000u32);
        let payment = CreditCardPayment::with_console(console);

        let first = service.process_invoice(&invoice, &payment);
        let second = service.process_invoice(&invoice, &payment);

        assert_eq!(first, second);
    }

    #[test]
    fn failed_payment_skips_notification() {
        let calls = Arc::new(AtomicUsize::new(0));
        let messages = Arc::new(Mutex::new(Vec::new()));
        let service = InvoiceProcessingService::new(
            Box::new(RecordingNotifier {
                messages: messages.clone(),
            }),
            Box::new(CountingDiscount {
                calls: calls.clone(),
                result: Amount::new(90.0),
            }),
        );
        let invoice = Invoice::new("INV005", 100u32);

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            service.process_invoice(&invoice, &PanickingPayment)
        }));

        assert!(outcome.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(messages.lock().unwrap().is_empty());
    }
}
