use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool, PooledConnection},
};

mod session;
mod turn;

pub use session::*;
pub use turn::*;

use crate::Error;

/// Pooled Postgres handle backing the signaling exchange.
///
/// Connections are checked out per operation and returned to the pool when
/// the `PooledConnection` guard drops, including on error paths.
#[derive(Clone)]
pub struct Storage {
    pub pool: Pool<ConnectionManager<PgConnection>>,
}

impl Storage {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn get_connection(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<PgConnection>>, Error> {
        self.pool.get().map_err(|e| e.into())
    }
}
