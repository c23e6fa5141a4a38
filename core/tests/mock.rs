//! Mock transport behaviour over a temporary resource directory.

use std::fs;
use std::time::Duration;

use fetch_core::{
    Client, ClientConfig, ClientError, Endpoint, EndpointSpec, MockTransport, RequestState, Transport,
};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use tokio::time::Instant;

const BASE: &str = "https://api.example.com";

#[derive(Debug, PartialEq, Deserialize, Serialize)]
struct User {
    id: u32,
    name: String,
}

fn fixtures(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

#[tokio::test]
async fn serves_typed_value_from_named_file() {
    let dir = fixtures(&[
        ("mock_get_users.json", r#"[{"id":1,"name":"Ada"},{"id":2,"name":"Grace"}]"#),
        ("mock_get_users_1.json", r#"{"id":1,"name":"Ada"}"#),
    ]);
    let mock = MockTransport::new(dir.path());

    let users: Vec<User> = mock.get(BASE, "/users", &[], &[]).await.unwrap();
    assert_eq!(users.len(), 2);

    let user: User = mock.get(BASE, "/users/1", &[], &[]).await.unwrap();
    assert_eq!(user, User { id: 1, name: "Ada".to_string() });
}

#[tokio::test]
async fn root_path_uses_root_resource() {
    let dir = fixtures(&[("mock_post_root.json", r#"{"id":9,"name":"root"}"#)]);
    let mock = MockTransport::new(dir.path());

    let user: User = mock
        .request(&Endpoint::post(BASE, ""))
        .await
        .unwrap();
    assert_eq!(user.id, 9);
}

#[tokio::test]
async fn request_details_other_than_method_and_path_are_ignored() {
    let dir = fixtures(&[("mock_post_users.json", r#"{"id":3,"name":"Created"}"#)]);
    let mock = MockTransport::new(dir.path());

    let created: User = mock
        .post(
            "not even a url",
            "/users",
            &User { id: 0, name: "ignored".to_string() },
            &[("Authorization", "Bearer nope")],
        )
        .await
        .unwrap();
    assert_eq!(created, User { id: 3, name: "Created".to_string() });
}

#[tokio::test]
async fn missing_resource_is_malformed_url() {
    let dir = fixtures(&[]);
    let mock = MockTransport::new(dir.path());

    let err = mock
        .request_raw(&Endpoint::delete(BASE, "/users/1"))
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::MalformedUrl);
}

#[tokio::test]
async fn empty_resource_is_no_data_unless_raw() {
    let dir = fixtures(&[("mock_delete_users_1.json", "")]);
    let mock = MockTransport::new(dir.path());
    let endpoint = Endpoint::delete(BASE, "/users/1");

    let err = mock.request::<User>(&endpoint).await.unwrap_err();
    assert_eq!(err, ClientError::NoData);

    let raw = mock.request_raw(&endpoint).await.unwrap();
    assert!(raw.is_empty());
}

#[tokio::test]
async fn mismatched_resource_is_decode_error() {
    let dir = fixtures(&[("mock_get_users_1.json", r#"{"id":"one","name":"Ada"}"#)]);
    let mock = MockTransport::new(dir.path());

    let err = mock.get::<User>(BASE, "/users/1", &[], &[]).await.unwrap_err();
    let expected = serde_json::from_str::<User>(r#"{"id":"one","name":"Ada"}"#)
        .unwrap_err()
        .to_string();
    assert_eq!(err, ClientError::Decode(expected));
}

#[tokio::test]
async fn unreadable_resource_is_network_error() {
    let dir = fixtures(&[]);
    fs::create_dir(dir.path().join("mock_get_users.json")).unwrap();
    let mock = MockTransport::new(dir.path());

    let err = mock
        .request_raw(&Endpoint::get(BASE, "/users"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn zero_delay_resolves_immediately() {
    let dir = fixtures(&[("mock_get_users_1.json", r#"{"id":1,"name":"Ada"}"#)]);
    let mock = MockTransport::new(dir.path());

    let started = Instant::now();
    let _: User = mock.get(BASE, "/users/1", &[], &[]).await.unwrap();
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn configured_delay_is_observed() {
    let dir = fixtures(&[("mock_get_users_1.json", r#"{"id":1,"name":"Ada"}"#)]);
    let delay = Duration::from_millis(150);
    let mock = MockTransport::new(dir.path()).with_delay(delay);

    let started = Instant::now();
    let _: User = mock.get(BASE, "/users/1", &[], &[]).await.unwrap();
    assert!(started.elapsed() >= delay);
}

#[tokio::test]
async fn delay_applies_to_failures_too() {
    let dir = fixtures(&[]);
    let delay = Duration::from_millis(80);
    let mock = MockTransport::new(dir.path()).with_delay(delay);

    let started = Instant::now();
    let err = mock.request_raw(&Endpoint::get(BASE, "/missing")).await.unwrap_err();
    assert_eq!(err, ClientError::MalformedUrl);
    assert!(started.elapsed() >= delay);
}

#[tokio::test]
async fn client_from_mock_config() {
    let dir = fixtures(&[("mock_put_users_2.json", r#"{"id":2,"name":"Updated"}"#)]);
    let config = ClientConfig::from_toml_str(&format!(
        "mode = \"mock\"\nresource_dir = {:?}\n",
        dir.path().display().to_string()
    ))
    .unwrap();
    let client = Client::from_config(&config).unwrap();
    assert!(client.is_mock());

    let state: RequestState<User> = client
        .put::<User, _>(BASE, "/users/2", &serde_json::json!({ "name": "Updated" }), &[])
        .await
        .into();
    assert_eq!(state.value().map(|u| u.name.as_str()), Some("Updated"));

    let state: RequestState<User> = client
        .get::<User>(BASE, "/users/404", &[], &[])
        .await
        .into();
    assert_eq!(state.error(), Some("malformed url"));
}

enum UsersApi {
    List,
    Show(u32),
    Rename { id: u32, name: String },
}

impl EndpointSpec for UsersApi {
    fn endpoint(&self) -> Endpoint {
        match self {
            UsersApi::List => Endpoint::get(BASE, "/users"),
            UsersApi::Show(id) => Endpoint::get(BASE, format!("/users/{id}")),
            UsersApi::Rename { id, name } => Endpoint::patch(BASE, format!("/users/{id}"))
                .json(&serde_json::json!({ "name": name }))
                .expect("json value serializes"),
        }
    }
}

#[tokio::test]
async fn endpoint_spec_variants_resolve_through_transport() {
    let dir = fixtures(&[
        ("mock_get_users.json", r#"[{"id":1,"name":"Ada"}]"#),
        ("mock_get_users_1.json", r#"{"id":1,"name":"Ada"}"#),
        ("mock_patch_users_1.json", r#"{"id":1,"name":"Countess"}"#),
    ]);
    let mock = MockTransport::new(dir.path());

    let users: Vec<User> = mock.send(&UsersApi::List).await.unwrap();
    assert_eq!(users.len(), 1);

    let user: User = mock.send(&UsersApi::Show(1)).await.unwrap();
    assert_eq!(user.name, "Ada");

    let renamed: User = mock
        .send(&UsersApi::Rename { id: 1, name: "Countess".to_string() })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Countess");

    let raw = mock.send_raw(&UsersApi::Show(1)).await.unwrap();
    assert_eq!(&raw[..], br#"{"id":1,"name":"Ada"}"#);

    let err = mock.send::<User, _>(&UsersApi::Show(2)).await.unwrap_err();
    assert_eq!(err, ClientError::MalformedUrl);
}
