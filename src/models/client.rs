use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, ParseStatusError,
    UpdateClient as DomainUpdateClient,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel row for [`crate::domain::client::Client`]. Status is stored as
/// text and parsed at the boundary.
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`]. `id` and `created_at` are assigned by
/// the database.
pub struct NewClient<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company: &'a str,
    pub status: &'a str,
    pub notes: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(treat_none_as_null = true)]
/// Full-record changeset used when updating a [`Client`] row.
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company: &'a str,
    pub status: &'a str,
    pub notes: Option<&'a str>,
}

impl TryFrom<Client> for DomainClient {
    type Error = ParseStatusError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: client.id,
            name: client.name,
            email: client.email,
            phone: client.phone,
            company: client.company,
            status: client.status.parse()?,
            notes: client.notes,
            created_at: client.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: &client.name,
            email: &client.email,
            phone: &client.phone,
            company: &client.company,
            status: client.status.as_str(),
            notes: client.notes.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            name: &client.name,
            email: &client.email,
            phone: &client.phone,
            company: &client.company,
            status: client.status.as_str(),
            notes: client.notes.as_deref(),
        }
    }
}
