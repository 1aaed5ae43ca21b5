use async_trait::async_trait;

use crate::Error;

pub mod backend;
pub mod web;

/// The rendezvous store behind the offer/answer exchange.
///
/// Pushes are unconditional inserts (no upsert, no uniqueness on `ucode`);
/// gets read the named field from the first matching row in insertion order.
/// Absence is a normal `Ok(None)`, never an error. No ordering is enforced
/// across the four operations — callers poll.
#[async_trait]
pub trait SignalStore: Send + Sync {
    async fn push_offer(&self, ucode: &str, offer: &str) -> Result<(), Error>;
    async fn get_offer(&self, ucode: &str) -> Result<Option<String>, Error>;
    async fn push_answer(&self, ucode: &str, answer: &str) -> Result<(), Error>;
    async fn get_answer(&self, ucode: &str) -> Result<Option<String>, Error>;
}
