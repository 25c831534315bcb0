use crate::domain::stats::ClientStats;
use crate::dto::main::IndexPageData;
use crate::repository::ClientReader;
use crate::repository::cache::ClientCache;
use crate::services::ServiceResult;

/// Loads the dashboard data: refreshes the cached client list from the
/// repository and derives the status counters from it.
pub fn load_index_page<R>(repo: &R, cache: &ClientCache) -> ServiceResult<IndexPageData>
where
    R: ClientReader + ?Sized,
{
    let clients = cache.refresh(repo)?;
    let stats = ClientStats::from_clients(&clients);
    Ok(IndexPageData { clients, stats })
}

/// Fallback page data built from whatever the cache last held, used when
/// the refresh itself failed.
pub fn cached_index_page(cache: &ClientCache) -> IndexPageData {
    let clients = cache.snapshot();
    let stats = ClientStats::from_clients(&clients);
    IndexPageData { clients, stats }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::client::{Client, ClientStatus};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_client(id: i32, status: ClientStatus) -> Client {
        Client {
            id,
            name: format!("Client #{id}"),
            email: format!("client{id}@example.com"),
            phone: "+55 11 90000-0000".to_string(),
            company: "Empresa".to_string(),
            status,
            notes: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn index_page_derives_stats_from_the_fresh_list() {
        let cache = ClientCache::new();
        let mut repo = MockRepository::new();
        repo.expect_list_clients().times(1).returning(|| {
            Ok(vec![
                sample_client(1, ClientStatus::Active),
                sample_client(2, ClientStatus::Pending),
            ])
        });

        let page = load_index_page(&repo, &cache).unwrap();
        assert_eq!(page.clients.len(), 2);
        assert_eq!(page.stats.total, 2);
        assert_eq!(page.stats.active, 1);
        assert_eq!(page.stats.pending, 1);
    }

    #[test]
    fn cached_page_serves_the_retained_list_after_a_failure() {
        let cache = ClientCache::new();
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .times(1)
            .returning(|| Ok(vec![sample_client(1, ClientStatus::Inactive)]));
        load_index_page(&repo, &cache).unwrap();

        let mut failing = MockRepository::new();
        failing
            .expect_list_clients()
            .times(1)
            .returning(|| Err(RepositoryError::Connection("down".into())));
        assert!(load_index_page(&failing, &cache).is_err());

        let page = cached_index_page(&cache);
        assert_eq!(page.clients.len(), 1);
        assert_eq!(page.stats.inactive, 1);
    }
}
