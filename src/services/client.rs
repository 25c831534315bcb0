use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::forms::client::SaveClientForm;
use crate::forms::main::AddClientForm;
use crate::repository::cache::ClientCache;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-client form and persists a new record. The cache is
/// refreshed before returning so the caller never reports success while
/// showing a stale list.
pub fn add_client<R>(repo: &R, cache: &ClientCache, form: AddClientForm) -> ServiceResult<()>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate add-client form: {err}");
        return Err(ServiceError::Form("Dados do cliente inválidos".to_string()));
    }

    let new_client =
        NewClient::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_client(&new_client)?;
    cache.refresh(repo)?;
    Ok(())
}

/// Replaces all mutable fields of the client matching the form's id, then
/// refreshes the cache. An id that no longer exists updates zero rows and
/// still counts as success.
pub fn save_client<R>(repo: &R, cache: &ClientCache, form: &SaveClientForm) -> ServiceResult<()>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate save-client form: {err}");
        return Err(ServiceError::Form("Dados do cliente inválidos".to_string()));
    }

    let updates = UpdateClient::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_client(form.id, &updates)?;
    cache.refresh(repo)?;
    Ok(())
}

/// Deletes the client matching `id` and refreshes the cache. Deleting an
/// id that is already gone is a no-op.
pub fn remove_client<R>(repo: &R, cache: &ClientCache, id: i32) -> ServiceResult<()>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    repo.delete_client(id)?;
    cache.refresh(repo)?;
    Ok(())
}
