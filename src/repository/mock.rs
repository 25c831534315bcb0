//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
        fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<()>;
        fn update_client(&self, id: i32, updates: &UpdateClient) -> RepositoryResult<()>;
        fn delete_client(&self, id: i32) -> RepositoryResult<()>;
    }
}
