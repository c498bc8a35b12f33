//! Strategy 模式：同一個動作有多種做法時，在建構時注入其中一種，
//! 執行時無條件委派給它。
//!
//! Typical uses: payment methods, or interchangeable discount rules.

use crate::console::Console;
use crate::utils::error::Result;

pub trait PaymentStrategy: Send + Sync {
    fn pay(&self, amount: f64);
}

pub struct CreditCardPayment<C: Console> {
    console: C,
}

impl<C: Console> CreditCardPayment<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> PaymentStrategy for CreditCardPayment<C> {
    fn pay(&self, amount: f64) {
        self.console
            .write_line(&format!("Paid {} with Credit Card", amount));
    }
}

pub struct PayPalPayment<C: Console> {
    console: C,
}

impl<C: Console> PayPalPayment<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> PaymentStrategy for PayPalPayment<C> {
    fn pay(&self, amount: f64) {
        self.console
            .write_line(&format!("Paid {} with PayPal", amount));
    }
}

/// 結帳流程只認得 PaymentStrategy；換策略要重新建構一個 Checkout。
pub struct Checkout<P: PaymentStrategy> {
    strategy: P,
}

impl<P: PaymentStrategy> Checkout<P> {
    pub fn new(strategy: P) -> Self {
        Self { strategy }
    }

    pub fn process(&self, amount: f64) {
        self.strategy.pay(amount);
    }
}

pub fn run<C: Console>(console: C) -> Result<()> {
    let checkout = Checkout::new(PayPalPayment::new(console));
    checkout.process(100.0);

    Ok(())
}
