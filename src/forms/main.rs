use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{ClientStatus, NewClient, ParseStatusError};

#[derive(Deserialize, Validate)]
/// Form data for registering a new client.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub company: String,
    /// Omitted or blank means the default status (`active`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<AddClientForm> for NewClient {
    type Error = ParseStatusError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        let status = match form.status.as_deref().map(str::trim) {
            None | Some("") => ClientStatus::default(),
            Some(value) => value.parse()?,
        };
        Ok(NewClient::new(
            form.name,
            form.email,
            form.phone,
            form.company,
            status,
            form.notes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(status: Option<&str>) -> AddClientForm {
        AddClientForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+55 11 98888-0000".to_string(),
            company: "Acme".to_string(),
            status: status.map(str::to_string),
            notes: None,
        }
    }

    #[test]
    fn missing_status_defaults_to_active() {
        let new_client = NewClient::try_from(form(None)).unwrap();
        assert_eq!(new_client.status, ClientStatus::Active);

        let new_client = NewClient::try_from(form(Some(""))).unwrap();
        assert_eq!(new_client.status, ClientStatus::Active);
    }

    #[test]
    fn invalid_status_is_rejected() {
        assert!(NewClient::try_from(form(Some("vip"))).is_err());
    }
}
