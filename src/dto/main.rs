use crate::domain::client::Client;
use crate::domain::stats::ClientStats;

/// Data required to render the dashboard template.
pub struct IndexPageData {
    /// Clients shown in the table, newest first.
    pub clients: Vec<Client>,
    /// Counters derived from `clients`, recomputed on every render.
    pub stats: ClientStats,
}
