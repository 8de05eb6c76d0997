use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{
    Applier, AuthorDraft, AuthorFirstName, AuthorId, AuthorLastName, AuthorPatch,
};
use kernel::{ErrorDetail, KernelError};

use crate::service::explain_conflict;
use crate::transfer::{AuthorDto, CreateAuthorDto, DeleteAuthorDto, GetAuthorDto, UpdateAuthorDto};

pub const AUTHOR_EXISTS: &str = "Author with such first name and last name exists";

#[async_trait::async_trait]
pub trait GetAllAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_all_authors(&self) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let authors = self.author_query().find_all(&mut connection).await?;
        tracing::debug!(count = authors.len(), "Listed authors");

        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }
}

impl<T> GetAllAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_author(
        &self,
        dto: GetAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let author = self.author_query().find_by_id(&mut connection, &id).await?;

        Ok(author.map(AuthorDto::from))
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait CreateAuthorService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnAuthorModifier
{
    async fn create_author(
        &self,
        dto: CreateAuthorDto,
    ) -> error_stack::Result<AuthorDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let first_name = AuthorFirstName::new(dto.first_name);
        let last_name = AuthorLastName::new(dto.last_name);
        let existing = self
            .author_query()
            .find_by_name(&mut connection, &first_name, &last_name)
            .await?;
        if existing.is_some() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(ErrorDetail::new(AUTHOR_EXISTS)));
        }

        let author = self
            .author_modifier()
            .create(&mut connection, &AuthorDraft::new(first_name, last_name))
            .await
            .map_err(|report| explain_conflict(report, AUTHOR_EXISTS))?;
        connection.commit().await?;

        tracing::info!(id = author.id().as_ref(), "Created author");
        Ok(AuthorDto::from(author))
    }
}

impl<T> CreateAuthorService for T where T: DependOnAuthorQuery + DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait UpdateAuthorService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnAuthorModifier
{
    /// Returns `None` when no author has the requested id.
    async fn update_author(
        &self,
        dto: UpdateAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let Some(mut author) = self.author_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        author.apply(AuthorPatch {
            first_name: dto.first_name.map(AuthorFirstName::new),
            last_name: dto.last_name.map(AuthorLastName::new),
        });
        let author = self
            .author_modifier()
            .update(&mut connection, &author)
            .await
            .map_err(|report| explain_conflict(report, AUTHOR_EXISTS))?;
        connection.commit().await?;

        tracing::info!(id = id.as_ref(), "Updated author");
        Ok(Some(AuthorDto::from(author)))
    }
}

impl<T> UpdateAuthorService for T where T: DependOnAuthorQuery + DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait DeleteAuthorService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnAuthorModifier
{
    /// Returns `false` when no author has the requested id.
    async fn delete_author(&self, dto: DeleteAuthorDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        if self
            .author_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        self.author_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        tracing::info!(id = id.as_ref(), "Deleted author");
        Ok(true)
    }
}

impl<T> DeleteAuthorService for T where T: DependOnAuthorQuery + DependOnAuthorModifier {}
