use std::sync::RwLock;

use crate::domain::client::Client;
use crate::repository::ClientReader;
use crate::repository::errors::RepositoryResult;

/// The single authoritative in-memory copy of the client list.
///
/// The cache is never patched locally: after every successful mutation the
/// whole list is discarded and refetched from the database, so what is
/// rendered always matches what the gateway last reported. A failed refresh
/// leaves the previous list in place rather than clearing it.
#[derive(Debug, Default)]
pub struct ClientCache {
    clients: RwLock<Vec<Client>>,
}

impl ClientCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the currently cached list.
    pub fn snapshot(&self) -> Vec<Client> {
        self.clients
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Refetches the full list and replaces the cache wholesale. On error
    /// the prior contents are retained and the error is propagated.
    pub fn refresh<R>(&self, repo: &R) -> RepositoryResult<Vec<Client>>
    where
        R: ClientReader + ?Sized,
    {
        let clients = repo.list_clients()?;
        let mut guard = self
            .clients
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = clients.clone();
        Ok(clients)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::client::ClientStatus;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_client(id: i32) -> Client {
        Client {
            id,
            name: format!("Client #{id}"),
            email: format!("client{id}@example.com"),
            phone: "+55 11 90000-0000".to_string(),
            company: "Empresa".to_string(),
            status: ClientStatus::Active,
            notes: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn refresh_replaces_cache_wholesale() {
        let cache = ClientCache::new();
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .times(1)
            .returning(|| Ok(vec![sample_client(2), sample_client(1)]));

        let listed = cache.refresh(&repo).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(cache.snapshot(), listed);
    }

    #[test]
    fn failed_refresh_retains_prior_list() {
        let cache = ClientCache::new();
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .times(1)
            .returning(|| Ok(vec![sample_client(1)]));
        cache.refresh(&repo).unwrap();

        let mut failing = MockRepository::new();
        failing
            .expect_list_clients()
            .times(1)
            .returning(|| Err(RepositoryError::Connection("pool exhausted".into())));

        assert!(cache.refresh(&failing).is_err());
        assert_eq!(cache.snapshot(), vec![sample_client(1)]);
    }

    #[test]
    fn snapshot_of_fresh_cache_is_empty() {
        let cache = ClientCache::new();
        assert!(cache.snapshot().is_empty());
    }
}
