use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;

pub mod cache;
pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock;

pub trait ClientReader {
    /// Returns every client visible to the session, newest first.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<()>;
    /// Replaces all mutable fields of the matching record. A missing `id`
    /// matches zero rows and is not an error.
    fn update_client(&self, id: i32, updates: &UpdateClient) -> RepositoryResult<()>;
    /// Removes the matching record. Repeating a delete is a no-op.
    fn delete_client(&self, id: i32) -> RepositoryResult<()>;
}
