//! Transaction Context
//!
//! Every service operation runs its repository calls inside one database
//! transaction: the use case obtains a [`sqlx::Transaction`] from the
//! repository through [`UnitOfWork`], hands `&mut *tx` to each repository
//! call, and commits at the end. An early error return drops the
//! transaction, which rolls back all work done inside it. Repositories never
//! open their own transaction.

use sqlx::{Postgres, Transaction};

/// Source of database transactions.
#[trait_variant::make(UnitOfWork: Send)]
pub trait LocalUnitOfWork {
    /// Begin a new transaction.
    async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error>;
}
