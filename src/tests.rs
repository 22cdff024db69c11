//! Integration tests for the Pokédex backend.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::mapping::fixtures;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_page_size(10).await
    }

    async fn with_page_size(page_size: u32) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        let config = Config {
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            page_size,
            ..Config::default()
        };

        let state = AppState {
            repo,
            config: Arc::new(config),
        };

        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> reqwest::Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    /// Import `bulbasaur`, `charmander` and `squirtle`, in that order.
    async fn seed_starters(&self) {
        let docs = json!([
            fixtures::minimal("bulbasaur", &[(1, "grass"), (2, "poison")]),
            fixtures::charmander(),
            fixtures::minimal("squirtle", &[(1, "water")]),
        ]);
        let resp = self.post("/api/v1/pokemons", &docs).await;
        assert_eq!(resp.status(), 201);
    }
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

async fn assert_validation_error(resp: reqwest::Response) {
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/health").await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_router_answers_without_a_listener() {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.sqlite");
    let pool = init_database(&db_path).await.unwrap();
    let state = AppState {
        repo: Arc::new(Repository::new(pool)),
        config: Arc::new(Config {
            db_path,
            ..Config::default()
        }),
    };

    let resp = create_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/v1/pokemons/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_import_then_read_charmander() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post("/api/v1/pokemons", &fixtures::charmander())
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["ids"], json!([1]));

    let resp = fixture.get("/api/v1/pokemons/1").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "charmander");
    assert_eq!(
        body["sprites"]["front_default"],
        "https://img.example/4/front.png"
    );
    assert!(body["sprites"]["front_female"].is_null());
    assert_eq!(body["types"], json!([{ "slot": 1, "type": { "name": "fire" } }]));
    assert_eq!(body["species"], "charmander");
    assert_eq!(body["form"], "charmander");
    assert_eq!(body["height"], 6);
    assert_eq!(body["weight"], 85);
    assert_eq!(body["order"], 5);
    assert_eq!(body["stats"][0], json!({ "base_stat": 39, "stat": "hp", "effort": 0 }));
    assert_eq!(
        body["abilities"][1],
        json!({ "ability": "solar-power", "is_hidden": true, "slot": 3 })
    );
    assert_eq!(body["moves"][1]["move"], "ember");
    assert_eq!(
        body["moves"][1]["version_group_details"],
        json!([{
            "level_learned_at": 9,
            "version_group": "x-y",
            "move_learn_method": "level-up"
        }])
    );

    // Same shape on v2.
    let v2: Value = fixture.get("/api/v2/pokemons/1").await.json().await.unwrap();
    assert_eq!(v2, body);
}

#[tokio::test]
async fn test_type_slots_are_passed_through() {
    let fixture = TestFixture::new().await;

    let doc = fixtures::minimal("oddity", &[(2, "poison"), (1, "grass")]);
    assert_eq!(fixture.post("/api/v1/pokemons", &doc).await.status(), 201);

    let body: Value = fixture.get("/api/v1/pokemons").await.json().await.unwrap();
    assert_eq!(
        body[0]["types"],
        json!([
            { "slot": 2, "type": { "name": "poison" } },
            { "slot": 1, "type": { "name": "grass" } }
        ])
    );
}

#[tokio::test]
async fn test_get_pokemon_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/api/v1/pokemons/42").await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    assert_validation_error(fixture.get("/api/v1/pokemons/pikachu").await).await;
}

#[tokio::test]
async fn test_import_rejects_bad_bodies() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/v1/pokemons"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let resp = fixture
        .post("/api/v1/pokemons", &json!({ "name": "missingno" }))
        .await;
    assert_eq!(resp.status(), 400);

    let mut formless = fixtures::minimal("ditto", &[(1, "normal")]);
    formless["forms"] = json!([]);
    let resp = fixture
        .post("/api/v1/pokemons", &json!([fixtures::charmander(), formless]))
        .await;
    assert_validation_error(resp).await;

    // Nothing from the rejected batch was stored.
    let body: Value = fixture.get("/api/v1/pokemons").await.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_sorting() {
    let fixture = TestFixture::new().await;
    fixture.seed_starters().await;

    let body: Value = fixture.get("/api/v1/pokemons").await.json().await.unwrap();
    assert_eq!(names(&body), vec!["bulbasaur", "charmander", "squirtle"]);
    assert_eq!(
        body[0]["sprites"],
        json!({ "front_default": "https://img.example/bulbasaur.png" })
    );

    let body: Value = fixture
        .get("/api/v1/pokemons?sort=name-desc")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["squirtle", "charmander", "bulbasaur"]);

    let body: Value = fixture
        .get("/api/v1/pokemons?sort=id-desc&limit=2")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["squirtle", "charmander"]);

    let body: Value = fixture
        .get("/api/v1/pokemons?sort=name-asc&offset=1")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["charmander", "squirtle"]);
}

#[tokio::test]
async fn test_list_rejects_bad_options() {
    let fixture = TestFixture::new().await;

    for query in [
        "sort=weight-asc",
        "sort=0",
        "sort=name",
        "limit=0",
        "limit=abc",
        "offset=-1",
    ] {
        let resp = fixture.get(&format!("/api/v1/pokemons?{}", query)).await;
        assert_validation_error(resp).await;
        let resp = fixture.get(&format!("/api/v2/pokemons?{}", query)).await;
        assert_validation_error(resp).await;
    }
}

#[tokio::test]
async fn test_search() {
    let fixture = TestFixture::new().await;
    fixture.seed_starters().await;

    let body: Value = fixture
        .get("/api/v1/search?query=arman")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["charmander"]);

    let body: Value = fixture
        .get("/api/v1/search?query=POISON")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["bulbasaur"]);

    let resp = fixture.get("/api/v1/search?query=zubat").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    let resp = fixture.get("/api/v1/search?query=a&limit=0").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    let body: Value = fixture
        .get("/api/v1/search?query=r&limit=2")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body), vec!["bulbasaur", "charmander"]);

    assert_validation_error(fixture.get("/api/v1/search?query=").await).await;
    assert_validation_error(fixture.get("/api/v1/search").await).await;
    assert_validation_error(fixture.get("/api/v1/search?query=a&limit=-1").await).await;
}

#[tokio::test]
async fn test_v2_pagination_metadata() {
    let fixture = TestFixture::with_page_size(2).await;
    let docs: Vec<Value> = ["abra", "beedrill", "caterpie", "diglett", "eevee"]
        .iter()
        .map(|name| fixtures::minimal(name, &[(1, "normal")]))
        .collect();
    assert_eq!(
        fixture.post("/api/v1/pokemons", &json!(docs)).await.status(),
        201
    );

    // Page size from configuration.
    let body: Value = fixture.get("/api/v2/pokemons").await.json().await.unwrap();
    assert_eq!(names(&body["data"]), vec!["abra", "beedrill"]);
    assert_eq!(
        body["metadata"],
        json!({
            "total": 5,
            "pages": 3,
            "page": 0,
            "next": "/api/v2/pokemons?sort=id-asc&limit=2&offset=2",
            "previous": null
        })
    );

    // Explicit limit and sort carried into the links.
    let body: Value = fixture
        .get("/api/v2/pokemons?sort=name-desc&limit=2&offset=2")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body["data"]), vec!["caterpie", "beedrill"]);
    assert_eq!(body["metadata"]["page"], 1);
    assert_eq!(
        body["metadata"]["next"],
        "/api/v2/pokemons?sort=name-desc&limit=2&offset=4"
    );
    assert_eq!(
        body["metadata"]["previous"],
        "/api/v2/pokemons?sort=name-desc&limit=2&offset=0"
    );

    // Last page.
    let body: Value = fixture
        .get("/api/v2/pokemons?limit=2&offset=4")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(names(&body["data"]), vec!["eevee"]);
    assert!(body["metadata"]["next"].is_null());

    // Past the end: empty page, previous points at the last page.
    let resp = fixture.get("/api/v2/pokemons?limit=2&offset=50").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["metadata"]["total"], 5);
    assert!(body["metadata"]["next"].is_null());
    assert_eq!(
        body["metadata"]["previous"],
        "/api/v2/pokemons?sort=id-asc&limit=2&offset=4"
    );
}

#[tokio::test]
async fn test_v2_empty_store() {
    let fixture = TestFixture::new().await;

    let body: Value = fixture.get("/api/v2/pokemons").await.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "data": [],
            "metadata": { "total": 0, "pages": 0, "page": 0, "next": null, "previous": null }
        })
    );
}

#[tokio::test]
async fn test_delete_all_pokemons() {
    let fixture = TestFixture::new().await;
    fixture.seed_starters().await;

    let resp = fixture.delete("/api/v1/pokemons").await;
    assert_eq!(resp.status(), 204);

    let body: Value = fixture.get("/api/v1/pokemons").await.json().await.unwrap();
    assert_eq!(body, json!([]));
    assert_eq!(fixture.get("/api/v1/pokemons/1").await.status(), 404);

    // Identities keep increasing after a clear.
    let body: Value = fixture
        .post("/api/v1/pokemons", &fixtures::charmander())
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["ids"], json!([4]));
}

#[tokio::test]
async fn test_team_lifecycle() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post("/api/v1/teams", &json!({ "name": "Kanto" }))
        .await;
    assert_eq!(resp.status(), 201);
    let team: Value = resp.json().await.unwrap();
    assert_eq!(team["name"], "Kanto");
    assert_eq!(team["pokemons"], json!([]));
    assert!(team["user_id"].is_null());
    let id = team["id"].as_i64().unwrap();

    let resp = fixture
        .post(
            &format!("/api/v1/teams/{}", id),
            &json!({ "pokemons": [1, 2, 3, 4, 5, 6, 7] }),
        )
        .await;
    assert_validation_error(resp).await;

    let resp = fixture
        .post(
            &format!("/api/v1/teams/{}", id),
            &json!({ "pokemons": [25, 1, 4, 7, 25, 150] }),
        )
        .await;
    assert_eq!(resp.status(), 200);
    let team: Value = resp.json().await.unwrap();
    assert_eq!(team["pokemons"], json!([25, 1, 4, 7, 25, 150]));

    let teams: Value = fixture.get("/api/v1/teams").await.json().await.unwrap();
    assert_eq!(teams.as_array().unwrap().len(), 1);
    assert_eq!(teams[0]["pokemons"], json!([25, 1, 4, 7, 25, 150]));

    assert_eq!(
        fixture
            .delete(&format!("/api/v1/teams/{}", id))
            .await
            .status(),
        204
    );
    assert_eq!(
        fixture.get(&format!("/api/v1/teams/{}", id)).await.status(),
        404
    );
    assert_eq!(
        fixture
            .post(&format!("/api/v1/teams/{}", id), &json!({ "pokemons": [] }))
            .await
            .status(),
        404
    );
}

#[tokio::test]
async fn test_team_validation() {
    let fixture = TestFixture::new().await;

    assert_validation_error(fixture.post("/api/v1/teams", &json!({ "name": " " })).await).await;
    assert_validation_error(
        fixture
            .post("/api/v1/teams", &json!({ "name": "Johto", "user_id": 99 }))
            .await,
    )
    .await;
    assert_validation_error(fixture.get("/api/v1/teams/first").await).await;
}

#[tokio::test]
async fn test_user_registration_and_login() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post(
            "/api/v1/users",
            &json!({ "name": "misty", "email": "misty@cerulean.gym", "password": "Starmie#121" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let user: Value = resp.json().await.unwrap();
    assert_eq!(user["name"], "misty");
    assert_eq!(user["email"], "misty@cerulean.gym");
    assert!(user.get("password").is_none());
    let id = user["id"].as_i64().unwrap();

    // Duplicate name.
    assert_validation_error(
        fixture
            .post(
                "/api/v1/users",
                &json!({
                    "name": "misty",
                    "email": "other@cerulean.gym",
                    "password": "Starmie#121"
                }),
            )
            .await,
    )
    .await;

    // Weak password.
    assert_validation_error(
        fixture
            .post(
                "/api/v1/users",
                &json!({ "name": "brock", "email": "brock@pewter.gym", "password": "onix" }),
            )
            .await,
    )
    .await;

    let resp = fixture
        .post(
            "/api/v1/users/login",
            &json!({ "identifier": "misty@cerulean.gym", "password": "Starmie#121" }),
        )
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], id);

    let resp = fixture
        .post(
            "/api/v1/users/login",
            &json!({ "identifier": "misty", "password": "Staryu#121" }),
        )
        .await;
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let resp = fixture
        .post(
            "/api/v1/users/login",
            &json!({ "identifier": "gary", "password": "Eevee#1337" }),
        )
        .await;
    assert_eq!(resp.status(), 400);

    let users: Value = fixture.get("/api/v1/users").await.json().await.unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn test_deleting_a_user_orphans_their_teams() {
    let fixture = TestFixture::new().await;

    let user: Value = fixture
        .post(
            "/api/v1/users",
            &json!({ "name": "erika", "email": "erika@celadon.gym", "password": "Vileplume#45" }),
        )
        .await
        .json()
        .await
        .unwrap();
    let user_id = user["id"].as_i64().unwrap();

    let team: Value = fixture
        .post(
            "/api/v1/teams",
            &json!({ "name": "Celadon", "user_id": user_id }),
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(team["user_id"], user_id);
    let team_id = team["id"].as_i64().unwrap();

    assert_eq!(
        fixture
            .delete(&format!("/api/v1/users/{}", user_id))
            .await
            .status(),
        204
    );
    assert_eq!(
        fixture
            .get(&format!("/api/v1/users/{}", user_id))
            .await
            .status(),
        404
    );

    let team: Value = fixture
        .get(&format!("/api/v1/teams/{}", team_id))
        .await
        .json()
        .await
        .unwrap();
    assert!(team["user_id"].is_null());
}
