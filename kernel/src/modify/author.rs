use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Author, AuthorDraft, AuthorId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Stores the draft and returns the row as written, id included.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        author: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        author: &Author,
    ) -> error_stack::Result<Author, KernelError>;
    /// Books written by the author are removed along with it.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAuthorModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AuthorModifier: AuthorModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn author_modifier(&self) -> &Self::AuthorModifier;
}
