use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use smart_crm::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temp directory, dropped with the test.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("db path is not valid UTF-8"))
            .expect("Failed to create connection pool");

        let mut conn = pool.get().expect("Failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
