use jotter::config::app_config::AppConfig;
use jotter::config::hasher_config::HasherConfigData;
use jotter::web::build_rocket;
use rocket::figment::Figment;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use test_utils::MockNoteTable;

pub fn test_config() -> AppConfig {
    AppConfig {
        table_url: "http://localhost/rest/v1/notes".to_owned(),
        table_api_key: "test-key".to_owned(),
        login_username: "admin".to_owned(),
        login_password: "admin123".to_owned(),
        // cheap parameters, login is exercised a lot here
        hasher_config: HasherConfigData { m_cost: 1024, t_cost: 1, p_cost: 1 },
    }
}

pub async fn client_with(table: MockNoteTable) -> Client {
    let figment = Figment::from(rocket::Config::debug_default());
    let rocket =
        build_rocket(figment, test_config(), Box::new(table)).expect("rocket build failed");
    Client::tracked(rocket).await.expect("valid rocket instance")
}

pub async fn login(client: &Client) {
    let response = client
        .post("/login")
        .header(ContentType::Form)
        .body("username=admin&password=admin123")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/"));
}
