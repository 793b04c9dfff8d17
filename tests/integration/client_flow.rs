use costlens::db::repositories::client_repository::ClientRepository;
use costlens::db::DbPool;
use costlens::error::AppError;
use costlens::models::client::{
    ClientCreateInput, ClientInfo, ClientStatus, ClientUpdateInput,
};
use costlens::models::cost::{ConsultingInputs, CostInputs};
use costlens::services::client_service::ClientService;
use tempfile::tempdir;

fn client_input(name: &str) -> ClientCreateInput {
    ClientCreateInput {
        client_info: ClientInfo {
            name: name.to_string(),
            company: "Globex".to_string(),
            email: format!("{}@globex.test", name.to_lowercase()),
            ..ClientInfo::default()
        },
        cost_inputs: None,
        consulting_inputs: None,
    }
}

#[test]
fn client_crud_and_status_lifecycle() {
    let dir = tempdir().expect("temp dir");
    let pool = DbPool::new(dir.path().join("clients.sqlite")).expect("db pool");
    let service = ClientService::new(pool);

    let created = service.create_client(client_input("Morgan")).expect("create");
    assert!(!created.id.is_empty());
    assert_eq!(created.status, ClientStatus::Completed);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = service.get_client(&created.id).expect("get");
    assert_eq!(fetched, created);

    // Changing the engagement inputs recomputes the stored result.
    let mut cheaper = CostInputs::default();
    cheaper.team_size = 2.0;
    let updated = service
        .update_client(
            &created.id,
            ClientUpdateInput {
                cost_inputs: Some(cheaper.clone()),
                ..ClientUpdateInput::default()
            },
        )
        .expect("update");
    assert_eq!(updated.cost_inputs, cheaper);
    let calculations = updated.calculations.as_ref().expect("calculations");
    assert!(
        calculations.cost.total_cost
            < created.calculations.as_ref().unwrap().cost.total_cost
    );

    // Pending is manual and survives a later input save.
    let pending = service
        .update_client(
            &created.id,
            ClientUpdateInput {
                status: Some(ClientStatus::Pending),
                ..ClientUpdateInput::default()
            },
        )
        .expect("set pending");
    assert_eq!(pending.status, ClientStatus::Pending);

    let saved_again = service
        .update_client(
            &created.id,
            ClientUpdateInput {
                consulting_inputs: Some(ConsultingInputs::default()),
                ..ClientUpdateInput::default()
            },
        )
        .expect("save with pending status");
    assert_eq!(saved_again.status, ClientStatus::Pending);

    service.delete_client(&created.id).expect("delete");
    assert!(matches!(
        service.get_client(&created.id).unwrap_err(),
        AppError::NotFound
    ));
}

#[test]
fn list_orders_by_most_recently_updated() {
    let dir = tempdir().expect("temp dir");
    let pool = DbPool::new(dir.path().join("clients.sqlite")).expect("db pool");
    let service = ClientService::new(pool);

    let first = service.create_client(client_input("Alex")).expect("create");
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = service.create_client(client_input("Blair")).expect("create");

    let listed = service.list_clients().expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);

    std::thread::sleep(std::time::Duration::from_millis(5));
    service
        .update_client(
            &first.id,
            ClientUpdateInput {
                client_info: Some(ClientInfo {
                    name: "Alex".to_string(),
                    company: "Initech".to_string(),
                    ..ClientInfo::default()
                }),
                ..ClientUpdateInput::default()
            },
        )
        .expect("touch first");

    let listed = service.list_clients().expect("list again");
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].client_info.company, "Initech");

    let completed = service
        .pool()
        .with_connection(|conn| ClientRepository::count_by_status(conn, "completed"))
        .expect("count");
    assert_eq!(completed, 2);
}

#[test]
fn records_survive_reopening_the_store() {
    let dir = tempdir().expect("temp dir");
    let db_path = dir.path().join("clients.sqlite");

    let created = {
        let pool = DbPool::new(&db_path).expect("db pool");
        let service = ClientService::new(pool);
        service.create_client(client_input("Jordan")).expect("create")
    };

    let pool = DbPool::new(&db_path).expect("reopen db pool");
    let service = ClientService::new(pool);
    let reloaded = service.get_client(&created.id).expect("reload");

    assert_eq!(reloaded, created);
    // The persisted calculations are the stored bytes, not a recompute.
    assert_eq!(reloaded.calculations, created.calculations);
}
