use async_trait::async_trait;
use diesel::prelude::*;

use crate::models::{NewAnswer, NewOffer, Session, Storage};
use crate::signaling::SignalStore;
use crate::{Error, schema};

// The sessions table is an insert-only log: pushing never updates an
// existing row, so two rows with the same ucode can coexist (the schema has
// no uniqueness constraint on ucode, deliberately). Reads pin "first row
// found" to ascending id, i.e. first-inserted-wins. Callers expecting
// latest-wins overwrite semantics will be surprised; switching to that would
// need a unique index on ucode plus insert-or-replace pushes.
#[async_trait]
impl SignalStore for Storage {
    async fn push_offer(&self, ucode: &str, offer: &str) -> Result<(), Error> {
        let mut conn = self.get_connection()?;
        diesel::insert_into(schema::sessions::dsl::sessions)
            .values(NewOffer {
                ucode: ucode.to_string(),
                offer: offer.to_string(),
            })
            .execute(&mut conn)?;
        Ok(())
    }

    async fn get_offer(&self, ucode: &str) -> Result<Option<String>, Error> {
        let mut conn = self.get_connection()?;
        let row = schema::sessions::dsl::sessions
            .filter(schema::sessions::dsl::ucode.eq(ucode))
            .order(schema::sessions::dsl::id.asc())
            .select(Session::as_select())
            .first(&mut conn)
            .optional()?;
        // The first row for a ucode may have been an answer push, in which
        // case its offer field is NULL and the result is absent.
        Ok(row.and_then(|session: Session| session.offer))
    }

    async fn push_answer(&self, ucode: &str, answer: &str) -> Result<(), Error> {
        let mut conn = self.get_connection()?;
        diesel::insert_into(schema::sessions::dsl::sessions)
            .values(NewAnswer {
                ucode: ucode.to_string(),
                answer: answer.to_string(),
            })
            .execute(&mut conn)?;
        Ok(())
    }

    async fn get_answer(&self, ucode: &str) -> Result<Option<String>, Error> {
        let mut conn = self.get_connection()?;
        let row = schema::sessions::dsl::sessions
            .filter(schema::sessions::dsl::ucode.eq(ucode))
            .order(schema::sessions::dsl::id.asc())
            .select(Session::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.and_then(|session: Session| session.answer))
    }
}
