use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

/// Diesel implementation of [`ClientReader`] and [`ClientWriter`].
pub struct DieselClientRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselClientRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ClientReader for DieselClientRepository<'_> {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        // id breaks ties between rows created within the same second.
        let rows = clients::table
            .order((clients::created_at.desc(), clients::id.desc()))
            .load::<DbClient>(&mut conn)?;

        rows.into_iter()
            .map(|row| Client::try_from(row).map_err(Into::into))
            .collect()
    }

    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let row = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        row.map(|row| Client::try_from(row).map_err(Into::into))
            .transpose()
    }
}

impl ClientWriter for DieselClientRepository<'_> {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<()> {
        use crate::models::client::NewClient as DbNewClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let insertable: DbNewClient = new_client.into();
        diesel::insert_into(clients::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(())
    }

    fn update_client(&self, id: i32, updates: &UpdateClient) -> RepositoryResult<()> {
        use crate::models::client::UpdateClient as DbUpdateClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let changeset: DbUpdateClient = updates.into();
        // Zero affected rows means the id no longer exists; callers treat
        // that as a successful no-op.
        diesel::update(clients::table.find(id))
            .set(&changeset)
            .execute(&mut conn)?;

        Ok(())
    }

    fn delete_client(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        diesel::delete(clients::table.find(id)).execute(&mut conn)?;

        Ok(())
    }
}
