use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{ParseStatusError, UpdateClient};

#[derive(Deserialize, Validate)]
/// Form data for updating an existing client. Every mutable field is
/// submitted; there are no partial-field patches.
pub struct SaveClientForm {
    /// Client identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub company: String,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
/// Form data for deleting a client. The destructive action is confirmed
/// in the browser before this form is ever submitted.
pub struct DeleteClientForm {
    pub id: i32,
}

impl TryFrom<&SaveClientForm> for UpdateClient {
    type Error = ParseStatusError;

    fn try_from(form: &SaveClientForm) -> Result<Self, Self::Error> {
        Ok(UpdateClient::new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.company.clone(),
            form.status.parse()?,
            form.notes.clone(),
        ))
    }
}
