//! Hand-written doubles for the checkout collaborators.
//!
//! Stubs answer with canned values, mocks also record what they were asked
//! to do, and dummies exist only to fill a slot and count stray calls.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::collaborators::{
    ChargeOutcome, EmailSender, OrderRepository, PaymentDetails, PaymentGateway,
};
use crate::domain::{Cart, Order};
use crate::error::{EmailError, GatewayError, RepositoryError};

// =============================================================================
// Payment gateway
// =============================================================================

pub struct StubGateway {
    reply: Result<ChargeOutcome, GatewayError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<(Decimal, PaymentDetails)>>,
}

impl StubGateway {
    pub fn answering(outcome: ChargeOutcome) -> Self {
        Self::with_reply(Ok(outcome))
    }

    pub fn failing(error: GatewayError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<ChargeOutcome, GatewayError>) -> Self {
        Self {
            reply,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleeps before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(Decimal, PaymentDetails)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn charge(
        &self,
        amount: Decimal,
        details: &PaymentDetails,
    ) -> Result<ChargeOutcome, GatewayError> {
        self.calls.lock().unwrap().push((amount, details.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }
}

// =============================================================================
// Order repository
// =============================================================================

enum SaveReply {
    Fixed(Order),
    Echo(AtomicU64),
    Fail(RepositoryError),
}

pub struct StubRepository {
    reply: SaveReply,
    calls: Mutex<Vec<(Cart, Decimal)>>,
}

impl StubRepository {
    /// Always returns `order`, whatever it is asked to save.
    pub fn returning(order: Order) -> Self {
        Self::with_reply(SaveReply::Fixed(order))
    }

    /// Stores what it is given, numbering orders from `first_id`.
    pub fn echoing(first_id: u64) -> Self {
        Self::with_reply(SaveReply::Echo(AtomicU64::new(first_id)))
    }

    pub fn failing(error: RepositoryError) -> Self {
        Self::with_reply(SaveReply::Fail(error))
    }

    fn with_reply(reply: SaveReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Cart, Decimal)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OrderRepository for StubRepository {
    async fn save(&self, cart: &Cart, total_final: Decimal) -> Result<Order, RepositoryError> {
        self.calls.lock().unwrap().push((cart.clone(), total_final));
        match &self.reply {
            SaveReply::Fixed(order) => Ok(order.clone()),
            SaveReply::Echo(next_id) => {
                let id = next_id.fetch_add(1, Ordering::SeqCst);
                Ok(Order::new(id, cart.clone(), total_final))
            }
            SaveReply::Fail(error) => Err(error.clone()),
        }
    }
}

#[derive(Default)]
pub struct DummyRepository {
    calls: AtomicUsize,
}

impl DummyRepository {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderRepository for DummyRepository {
    async fn save(&self, _cart: &Cart, _total_final: Decimal) -> Result<Order, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RepositoryError::Unavailable("dummy repository was called".to_string()))
    }
}

// =============================================================================
// Email sender
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub struct MockEmailSender {
    reply: Result<bool, EmailError>,
    delay: Option<Duration>,
    sent: Mutex<Vec<SentEmail>>,
}

impl MockEmailSender {
    pub fn accepting() -> Self {
        Self::with_reply(Ok(true))
    }

    pub fn rejecting() -> Self {
        Self::with_reply(Ok(false))
    }

    pub fn failing(error: EmailError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<bool, EmailError>) -> Self {
        Self {
            reply,
            delay: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Sleeps before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn assert_sent_once(&self, to: &str, subject: &str, body: &str) {
        let expected = SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };
        assert_eq!(self.sent(), vec![expected]);
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool, EmailError> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }
}

#[derive(Default)]
pub struct DummyEmailSender {
    calls: AtomicUsize,
}

impl DummyEmailSender {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for DummyEmailSender {
    async fn send_email(&self, _to: &str, _subject: &str, _body: &str) -> Result<bool, EmailError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EmailError::Unavailable("dummy email sender was called".to_string()))
    }
}
