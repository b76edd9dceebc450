//! In-memory stand-in for a Pelican panel, used to exercise the client over
//! real HTTP.
//!
//! # Design
//! One `Panel` value behind `Arc<RwLock<..>>` holds users, files of a single
//! client server and account API keys. Every route sits behind a bearer
//! check. Responses use the panel's wire shapes: `{object, attributes}`
//! items, `{object: "list", data}` lists with `meta.pagination` where the
//! real endpoint paginates, and `{errors: [...]}` bodies for failures.
//! Empty pagination links are rendered as `[]`, the way PHP encodes an
//! empty map.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

/// The only bearer token the mock accepts.
pub const MOCK_TOKEN: &str = "mock-token";
/// Identifier of the single client server the mock knows about.
pub const MOCK_SERVER: &str = "1a7ce997";

const TIMESTAMP: &str = "2024-01-01T00:00:00+00:00";
const DEFAULT_PER_PAGE: u64 = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub external_id: Option<String>,
    pub is_managed_externally: bool,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub language: String,
    pub root_admin: bool,
    #[serde(rename = "2fa_enabled")]
    pub two_factor_enabled: bool,
    #[serde(rename = "2fa")]
    pub two_factor: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Create and update payload. Everything is optional so validation can
/// answer with panel-shaped 422 errors instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct UserInput {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub external_id: Option<String>,
    pub language: Option<String>,
    pub root_admin: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub identifier: String,
    pub description: String,
    pub allowed_ips: Vec<String>,
    pub last_used_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiKeyInput {
    pub description: Option<String>,
    pub allowed_ips: Option<Vec<String>>,
}

#[derive(Debug, Default)]
pub struct Panel {
    users: BTreeMap<u64, User>,
    next_user_id: u64,
    files: BTreeMap<String, String>,
    api_keys: Vec<ApiKey>,
}

impl Panel {
    /// One admin user and a server with two files.
    pub fn seeded() -> Self {
        let mut panel = Self {
            next_user_id: 1,
            ..Self::default()
        };
        panel.insert_user(UserInput {
            email: Some("admin@example.com".to_string()),
            username: Some("admin".to_string()),
            root_admin: Some(true),
            ..UserInput::default()
        });
        panel
            .files
            .insert("server.properties".to_string(), "motd=A Pelican Server\n".to_string());
        panel.files.insert("eula.txt".to_string(), "eula=false\n".to_string());
        panel
    }

    fn insert_user(&mut self, input: UserInput) -> User {
        let id = self.next_user_id;
        self.next_user_id += 1;
        let user = User {
            id,
            external_id: input.external_id,
            is_managed_externally: false,
            uuid: Uuid::new_v4(),
            username: input.username.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            language: input.language.unwrap_or_else(|| "en".to_string()),
            root_admin: input.root_admin.unwrap_or(false),
            two_factor_enabled: false,
            two_factor: false,
            created_at: TIMESTAMP.to_string(),
            updated_at: TIMESTAMP.to_string(),
        };
        self.users.insert(id, user.clone());
        user
    }

    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        self.users
            .values()
            .any(|user| user.email == email && Some(user.id) != except)
    }
}

pub type Db = Arc<RwLock<Panel>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Panel::seeded()));
    Router::new()
        .route("/api/application/users", get(list_users).post(create_user))
        .route(
            "/api/application/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/api/application/nodes", get(list_nodes))
        .route("/api/application/nodes/{id}/configuration", get(node_configuration))
        .route("/api/application/broken", get(broken))
        .route("/api/client/account/api-keys", get(list_api_keys).post(create_api_key))
        .route("/api/client/account/api-keys/{identifier}", delete(delete_api_key))
        .route("/api/client/servers/{server}/files/list", get(list_files))
        .route("/api/client/servers/{server}/files/contents", get(file_contents))
        .route("/api/client/servers/{server}/files/write", post(write_file))
        .layer(middleware::from_fn(require_token))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// -----------------------------------------------------------------------------
// Errors and envelopes
// -----------------------------------------------------------------------------

/// `{errors: [...]}` response.
#[derive(Debug)]
pub struct PanelError {
    status: StatusCode,
    errors: Vec<Value>,
}

impl PanelError {
    fn new(status: StatusCode, code: &str, detail: &str) -> Self {
        Self {
            status,
            errors: vec![json!({
                "code": code,
                "status": status.as_u16().to_string(),
                "detail": detail,
            })],
        }
    }

    fn not_found(detail: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NotFoundHttpException", detail)
    }

    fn validation(failures: Vec<(&str, &str, String)>) -> Self {
        let errors = failures
            .into_iter()
            .map(|(field, rule, detail)| {
                json!({
                    "code": "ValidationException",
                    "status": "422",
                    "detail": detail,
                    "meta": {"source_field": field, "rule": rule},
                    "source": {"field": field},
                })
            })
            .collect();
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            errors,
        }
    }
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "errors": self.errors }))).into_response()
    }
}

fn item<T: Serialize>(object: &str, attributes: &T) -> Value {
    json!({ "object": object, "attributes": attributes })
}

fn list<T: Serialize>(object: &str, items: &[T]) -> Value {
    let data: Vec<Value> = items.iter().map(|entry| item(object, entry)).collect();
    json!({ "object": "list", "data": data })
}

/// One page of `items` with the panel's pagination block.
pub fn paginated<T: Serialize>(object: &str, path: &str, items: &[T], page: u64, per_page: u64) -> Value {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total = items.len() as u64;
    let total_pages = total.div_ceil(per_page).max(1);
    let start = usize::try_from((page - 1) * per_page).unwrap_or(usize::MAX);
    let data: Vec<Value> = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .map(|entry| item(object, entry))
        .collect();

    let mut links = Map::new();
    if page > 1 {
        links.insert("previous".to_string(), json!(format!("{path}?page={}", page - 1)));
    }
    if page < total_pages {
        links.insert("next".to_string(), json!(format!("{path}?page={}", page + 1)));
    }
    let links = if links.is_empty() { json!([]) } else { Value::Object(links) };

    json!({
        "object": "list",
        "meta": {"pagination": {
            "total": total,
            "count": data.len(),
            "per_page": per_page,
            "current_page": page,
            "total_pages": total_pages,
            "links": links,
        }},
        "data": data,
    })
}

fn number_param(query: &HashMap<String, String>, key: &str, default: u64) -> Result<u64, PanelError> {
    match query.get(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            PanelError::validation(vec![(key, "integer", format!("The {key} field must be an integer."))])
        }),
    }
}

// -----------------------------------------------------------------------------
// Middleware
// -----------------------------------------------------------------------------

async fn require_token(request: Request, next: Next) -> Response {
    let expected = format!("Bearer {MOCK_TOKEN}");
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented == Some(expected.as_str()) {
        next.run(request).await
    } else {
        debug!(uri = %request.uri(), "rejecting unauthenticated request");
        PanelError::new(StatusCode::UNAUTHORIZED, "AuthenticationException", "Unauthenticated.").into_response()
    }
}

// -----------------------------------------------------------------------------
// Application: users
// -----------------------------------------------------------------------------

async fn list_users(
    State(db): State<Db>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, PanelError> {
    let page = number_param(&query, "page", 1)?;
    let per_page = number_param(&query, "per_page", DEFAULT_PER_PAGE)?;
    let email = query.get("filter[email]");
    let panel = db.read().await;
    let users: Vec<&User> = panel
        .users
        .values()
        .filter(|user| email.map_or(true, |email| &user.email == email))
        .collect();
    Ok(Json(paginated("user", "/api/application/users", &users, page, per_page)))
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, PanelError> {
    let panel = db.read().await;
    let user = panel.users.get(&id).ok_or_else(|| PanelError::not_found("User not found"))?;
    Ok(Json(item("user", user)))
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserInput>,
) -> Result<(StatusCode, Json<Value>), PanelError> {
    let mut panel = db.write().await;
    let mut failures = Vec::new();
    match input.email.as_deref() {
        None | Some("") => failures.push(("email", "required", "The email field is required.".to_string())),
        Some(email) => failures.extend(check_email(&panel, email, None)),
    }
    if input.username.as_deref().map_or(true, str::is_empty) {
        failures.push(("username", "required", "The username field is required.".to_string()));
    }
    if !failures.is_empty() {
        return Err(PanelError::validation(failures));
    }
    let user = panel.insert_user(input);
    debug!(id = user.id, email = %user.email, "created user");
    Ok((StatusCode::CREATED, Json(item("user", &user))))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UserInput>,
) -> Result<Json<Value>, PanelError> {
    let mut panel = db.write().await;
    if !panel.users.contains_key(&id) {
        return Err(PanelError::not_found("User not found"));
    }
    if let Some(email) = input.email.as_deref() {
        let failures = check_email(&panel, email, Some(id));
        if !failures.is_empty() {
            return Err(PanelError::validation(failures));
        }
    }
    let user = panel.users.get_mut(&id).ok_or_else(|| PanelError::not_found("User not found"))?;
    if let Some(email) = input.email {
        user.email = email;
    }
    if let Some(username) = input.username {
        user.username = username;
    }
    if let Some(language) = input.language {
        user.language = language;
    }
    if let Some(external_id) = input.external_id {
        user.external_id = Some(external_id);
    }
    if let Some(root_admin) = input.root_admin {
        user.root_admin = root_admin;
    }
    Ok(Json(item("user", &*user)))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, PanelError> {
    let mut panel = db.write().await;
    panel
        .users
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| PanelError::not_found("User not found"))
}

fn check_email(panel: &Panel, email: &str, except: Option<u64>) -> Vec<(&'static str, &'static str, String)> {
    if !email.contains('@') {
        vec![("email", "email", "The email field must be a valid email address.".to_string())]
    } else if panel.email_taken(email, except) {
        vec![("email", "unique", "The email has already been taken.".to_string())]
    } else {
        Vec::new()
    }
}

// -----------------------------------------------------------------------------
// Application: nodes
// -----------------------------------------------------------------------------

fn node() -> Value {
    json!({
        "id": 1,
        "uuid": "0a1b2c3d-0000-4000-8000-000000000001",
        "public": true,
        "name": "node-1",
        "description": null,
        "fqdn": "node-1.example.com",
        "scheme": "https",
        "behind_proxy": false,
        "maintenance_mode": false,
        "memory": 16384,
        "memory_overallocate": 0,
        "disk": 102400,
        "disk_overallocate": 0,
        "cpu": 400,
        "cpu_overallocate": 0,
        "upload_size": 256,
        "daemon_listen": 8080,
        "daemon_connect": 8080,
        "daemon_sftp": 2022,
        "daemon_sftp_alias": null,
        "daemon_base": "/var/lib/pelican/volumes",
        "tags": ["eu"],
        "allocated_resources": {"memory": 2048, "disk": 10240, "cpu": 100},
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
    })
}

async fn list_nodes(Query(query): Query<HashMap<String, String>>) -> Result<Json<Value>, PanelError> {
    let page = number_param(&query, "page", 1)?;
    let per_page = number_param(&query, "per_page", DEFAULT_PER_PAGE)?;
    Ok(Json(paginated("node", "/api/application/nodes", &[node()], page, per_page)))
}

async fn node_configuration(Path(id): Path<u64>) -> Result<Json<Value>, PanelError> {
    if id != 1 {
        return Err(PanelError::not_found("Node not found"));
    }
    Ok(Json(json!({
        "debug": false,
        "uuid": "0a1b2c3d-0000-4000-8000-000000000001",
        "token_id": "mocktokenid",
        "token": "mock-daemon-token",
        "api": {
            "host": "0.0.0.0",
            "port": 8080,
            "ssl": {"enabled": true, "cert": "/etc/letsencrypt/live/node-1/fullchain.pem", "key": "/etc/letsencrypt/live/node-1/privkey.pem"},
            "upload_limit": 256
        },
        "system": {"data": "/var/lib/pelican/volumes", "sftp": {"bind_port": 2022}},
        "allowed_mounts": [],
        "remote": "http://localhost"
    })))
}

/// A proxy failure page: non-2xx with a body that is not JSON.
async fn broken() -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::BAD_GATEWAY,
        [(header::CONTENT_TYPE, "text/html")],
        "<html><body>502 Bad Gateway</body></html>",
    )
}

// -----------------------------------------------------------------------------
// Client: account API keys
// -----------------------------------------------------------------------------

async fn list_api_keys(State(db): State<Db>) -> Json<Value> {
    let panel = db.read().await;
    Json(list("api_key", &panel.api_keys))
}

async fn create_api_key(
    State(db): State<Db>,
    Json(input): Json<ApiKeyInput>,
) -> Result<Json<Value>, PanelError> {
    let description = match input.description {
        Some(description) if !description.is_empty() => description,
        _ => {
            return Err(PanelError::validation(vec![(
                "description",
                "required",
                "The description field is required.".to_string(),
            )]))
        }
    };
    let key = ApiKey {
        identifier: format!("pacc_{}", &Uuid::new_v4().simple().to_string()[..11]),
        description,
        allowed_ips: input.allowed_ips.unwrap_or_default(),
        last_used_at: None,
        created_at: TIMESTAMP.to_string(),
    };
    let secret = Uuid::new_v4().simple().to_string();
    db.write().await.api_keys.push(key.clone());
    Ok(Json(json!({
        "object": "api_key",
        "attributes": key,
        "meta": {"secret_token": secret},
    })))
}

async fn delete_api_key(State(db): State<Db>, Path(identifier): Path<String>) -> Result<StatusCode, PanelError> {
    let mut panel = db.write().await;
    let before = panel.api_keys.len();
    panel.api_keys.retain(|key| key.identifier != identifier);
    if panel.api_keys.len() == before {
        return Err(PanelError::not_found("API key not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// -----------------------------------------------------------------------------
// Client: server files
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub file: String,
}

fn check_server(server: &str) -> Result<(), PanelError> {
    if server == MOCK_SERVER {
        Ok(())
    } else {
        Err(PanelError::not_found("Server not found"))
    }
}

fn file_key(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

async fn list_files(State(db): State<Db>, Path(server): Path<String>) -> Result<Json<Value>, PanelError> {
    check_server(&server)?;
    let panel = db.read().await;
    let entries: Vec<Value> = panel
        .files
        .iter()
        .map(|(name, content)| {
            json!({
                "name": name,
                "mode": "-rw-r--r--",
                "mode_bits": "644",
                "size": content.len(),
                "is_file": true,
                "is_symlink": false,
                "mimetype": "text/plain",
                "created_at": TIMESTAMP,
                "modified_at": TIMESTAMP,
            })
        })
        .collect();
    Ok(Json(list("file_object", &entries)))
}

async fn file_contents(
    State(db): State<Db>,
    Path(server): Path<String>,
    Query(query): Query<FileQuery>,
) -> Result<Response, PanelError> {
    check_server(&server)?;
    let panel = db.read().await;
    let content = panel
        .files
        .get(&file_key(&query.file))
        .ok_or_else(|| PanelError::not_found("File not found"))?;
    Ok(([(header::CONTENT_TYPE, "text/plain")], content.clone()).into_response())
}

async fn write_file(
    State(db): State<Db>,
    Path(server): Path<String>,
    Query(query): Query<FileQuery>,
    body: String,
) -> Result<StatusCode, PanelError> {
    check_server(&server)?;
    db.write().await.files.insert(file_key(&query.file), body);
    Ok(StatusCode::NO_CONTENT)
}
