use serde::Serialize;

use crate::domain::client::{Client, ClientStatus};

/// Counters shown on the dashboard. Derived from the cached client list on
/// every render, never persisted, so it can not drift from the list it was
/// computed from.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ClientStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub pending: usize,
}

impl ClientStats {
    /// Partitions the list by status. Order-independent; an empty list
    /// yields all zeros.
    #[must_use]
    pub fn from_clients(clients: &[Client]) -> Self {
        let mut stats = Self {
            total: clients.len(),
            ..Self::default()
        };
        for client in clients {
            match client.status {
                ClientStatus::Active => stats.active += 1,
                ClientStatus::Inactive => stats.inactive += 1,
                ClientStatus::Pending => stats.pending += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn client_with_status(id: i32, status: ClientStatus) -> Client {
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
    fn empty_list_yields_zeros() {
        assert_eq!(
            ClientStats::from_clients(&[]),
            ClientStats {
                total: 0,
                active: 0,
                inactive: 0,
                pending: 0
            }
        );
    }

    #[test]
    fn counts_partition_by_status() {
        let clients = vec![
            client_with_status(1, ClientStatus::Active),
            client_with_status(2, ClientStatus::Pending),
            client_with_status(3, ClientStatus::Pending),
            client_with_status(4, ClientStatus::Inactive),
        ];
        let stats = ClientStats::from_clients(&clients);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.inactive, 1);
    }

    #[test]
    fn total_equals_sum_of_partitions() {
        let statuses = [
            ClientStatus::Active,
            ClientStatus::Inactive,
            ClientStatus::Pending,
        ];
        let clients: Vec<Client> = (0..30)
            .map(|i| client_with_status(i, statuses[i as usize % 3]))
            .collect();
        let stats = ClientStats::from_clients(&clients);
        assert_eq!(stats.total, stats.active + stats.inactive + stats.pending);
    }
}
