use diesel::connection::SimpleConnection;
use smart_crm::domain::client::{ClientStatus, NewClient, UpdateClient};
use smart_crm::repository::cache::ClientCache;
use smart_crm::repository::client::DieselClientRepository;
use smart_crm::repository::{ClientReader, ClientWriter};

mod common;

fn new_client(name: &str, status: ClientStatus) -> NewClient {
    NewClient::new(
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
        "+55 11 98888-0000".to_string(),
        "Empresa LTDA".to_string(),
        status,
        Some("indicação de parceiro".to_string()),
    )
}

#[test]
fn create_then_list_round_trips() {
    let test_db = common::TestDb::new("create_then_list.db");
    let repo = DieselClientRepository::new(test_db.pool());

    let fields = new_client("Alice", ClientStatus::Pending);
    repo.create_client(&fields).unwrap();

    let clients = repo.list_clients().unwrap();
    assert_eq!(clients.len(), 1);

    let created = &clients[0];
    assert!(created.id > 0);
    assert_eq!(created.name, fields.name);
    assert_eq!(created.email, fields.email);
    assert_eq!(created.phone, fields.phone);
    assert_eq!(created.company, fields.company);
    assert_eq!(created.status, fields.status);
    assert_eq!(created.notes, fields.notes);
}

#[test]
fn list_orders_newest_first() {
    let test_db = common::TestDb::new("list_orders.db");
    let repo = DieselClientRepository::new(test_db.pool());

    for name in ["Alice", "Bob", "Carla"] {
        repo.create_client(&new_client(name, ClientStatus::Active))
            .unwrap();
    }

    let clients = repo.list_clients().unwrap();
    let names: Vec<&str> = clients.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Carla", "Bob", "Alice"]);
}

#[test]
fn update_replaces_all_mutable_fields_and_is_idempotent() {
    let test_db = common::TestDb::new("update_idempotent.db");
    let repo = DieselClientRepository::new(test_db.pool());

    repo.create_client(&new_client("Alice", ClientStatus::Active))
        .unwrap();
    let id = repo.list_clients().unwrap()[0].id;

    let updates = UpdateClient::new(
        "Alícia".to_string(),
        "alicia@example.com".to_string(),
        "+55 11 97777-0000".to_string(),
        "Nova Empresa".to_string(),
        ClientStatus::Inactive,
        None,
    );

    repo.update_client(id, &updates).unwrap();
    let first = repo.get_client_by_id(id).unwrap().unwrap();

    repo.update_client(id, &updates).unwrap();
    let second = repo.get_client_by_id(id).unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(second.name, "Alícia");
    assert_eq!(second.status, ClientStatus::Inactive);
    assert_eq!(second.notes, None);
}

#[test]
fn update_of_unknown_id_is_a_noop() {
    let test_db = common::TestDb::new("update_unknown.db");
    let repo = DieselClientRepository::new(test_db.pool());

    repo.create_client(&new_client("Alice", ClientStatus::Active))
        .unwrap();
    let before = repo.list_clients().unwrap();

    let updates = UpdateClient::new(
        "Ghost".to_string(),
        "ghost@example.com".to_string(),
        "+55 11 90000-0000".to_string(),
        "Nowhere".to_string(),
        ClientStatus::Pending,
        None,
    );
    repo.update_client(9999, &updates).unwrap();

    assert_eq!(repo.list_clients().unwrap(), before);
}

#[test]
fn delete_removes_the_record_and_repeats_as_noop() {
    let test_db = common::TestDb::new("delete_noop.db");
    let repo = DieselClientRepository::new(test_db.pool());

    repo.create_client(&new_client("Alice", ClientStatus::Active))
        .unwrap();
    repo.create_client(&new_client("Bob", ClientStatus::Pending))
        .unwrap();
    let id = repo.list_clients().unwrap()[0].id;

    repo.delete_client(id).unwrap();
    let clients = repo.list_clients().unwrap();
    assert_eq!(clients.len(), 1);
    assert!(clients.iter().all(|c| c.id != id));

    // Deleting the same id again is not an error.
    repo.delete_client(id).unwrap();
    assert_eq!(repo.list_clients().unwrap().len(), 1);
}

#[test]
fn cache_refresh_tracks_mutations_and_survives_failures() {
    let test_db = common::TestDb::new("cache_refresh.db");
    let repo = DieselClientRepository::new(test_db.pool());
    let cache = ClientCache::new();

    repo.create_client(&new_client("Alice", ClientStatus::Active))
        .unwrap();
    let listed = cache.refresh(&repo).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(cache.snapshot(), listed);

    // Break the schema out from under the repository: the refresh fails
    // and the cache keeps serving the previous list.
    {
        let mut conn = test_db.pool().get().unwrap();
        conn.batch_execute("DROP TABLE clients").unwrap();
    }

    assert!(cache.refresh(&repo).is_err());
    assert_eq!(cache.snapshot(), listed);
}
