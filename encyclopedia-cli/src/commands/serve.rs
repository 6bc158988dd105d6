//! Web interface: browse, search, add, and edit entries.

use super::open_store;
use anyhow::{Context, Result};
use askama::Template;
use axum::{
    body::Body,
    extract::{Form, Path as AxumPath, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use encyclopedia_core::{EntryStore, FsStorage, SearchOutcome, StoreError, Title};
use encyclopedia_render::{
    EditTemplate, EntryTemplate, IndexTemplate, NotFoundTemplate, SiteContext,
};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Embedded stylesheet and other static assets
static STATIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const ALREADY_EXISTS: &str = "Entry name already exists.";
const INVALID_FORM: &str = "Form wasn't a valid one.";

#[derive(Clone)]
struct AppState {
    store: Arc<EntryStore<FsStorage>>,
    site: Arc<SiteContext>,
}

/// Start the web server
pub async fn serve(config_path: &Path, port: Option<u16>) -> Result<()> {
    let (config, store) = open_store(config_path)?;
    let addr = config.listen_addr(port);

    let state = AppState {
        store: Arc::new(store),
        site: Arc::new(SiteContext::from_config(&config)),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Serving {:?} on http://{}", config.entries_dir(), addr);
    println!("\nServing at http://{}", addr);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/wiki/{title}", get(show_entry))
        .route("/wiki/{title}/edit", get(edit_form).post(save_edit))
        .route("/search", get(search))
        .route("/add", get(add_form).post(add_entry))
        .route("/random", get(random))
        .route("/static/{*path}", get(static_asset))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---- errors ----

/// Failures that end a request with an error status
#[derive(Debug)]
enum AppError {
    Store(StoreError),
    Template(askama::Error),
    Task(tokio::task::JoinError),
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Template(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(err) if err.is_invalid_input() => {
                tracing::debug!("Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            AppError::Store(err) => {
                tracing::error!("Storage error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error").into_response()
            }
            AppError::Template(err) => {
                tracing::error!("Template error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
            AppError::Task(err) => {
                tracing::error!("Store task failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

/// Run a store operation off the async executor
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&EntryStore<FsStorage>) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(AppError::Task)?
        .map_err(AppError::Store)
}

fn page<T: Template>(status: StatusCode, template: T) -> Result<Response, AppError> {
    Ok((status, Html(template.render()?)).into_response())
}

// ---- handlers ----

async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let titles = with_store(&state, |store| store.list_titles()).await?;
    page(
        StatusCode::OK,
        IndexTemplate::new(&state.site, "All Pages", &titles),
    )
}

async fn show_entry(
    AxumPath(title): AxumPath<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let requested = title.clone();
    let entry = with_store(&state, move |store| store.entry(&requested)).await?;

    match entry {
        Some(entry) => {
            let html = entry.to_html();
            page(
                StatusCode::OK,
                EntryTemplate::new(&state.site, &entry.title, html),
            )
        }
        None => page(
            StatusCode::NOT_FOUND,
            NotFoundTemplate::new(&state.site, title.trim()).with_create_link(&state.site),
        ),
    }
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let query = params.q.unwrap_or_default().trim().to_string();
    if query.is_empty() {
        return page(
            StatusCode::BAD_REQUEST,
            IndexTemplate::new(&state.site, "Search Results", &[])
                .with_message("Please enter a search term."),
        );
    }

    let needle = query.clone();
    let outcome = with_store(&state, move |store| store.find(&needle)).await?;

    match outcome {
        SearchOutcome::ExactMatch(title) => {
            Ok(Redirect::to(&state.site.entry_url(&title)).into_response())
        }
        SearchOutcome::Candidates(titles) => page(
            StatusCode::OK,
            IndexTemplate::new(&state.site, "Search Results", &titles)
                .with_message(format!("Entries containing \"{}\":", query)),
        ),
        SearchOutcome::NoMatch => page(
            StatusCode::OK,
            IndexTemplate::new(&state.site, "Search Results", &[])
                .with_message(format!("Nothing matches \"{}\".", query)),
        ),
    }
}

#[derive(Deserialize)]
struct AddParams {
    name: Option<String>,
}

async fn add_form(
    State(state): State<AppState>,
    Query(params): Query<AddParams>,
) -> Result<Response, AppError> {
    let name = params.name.unwrap_or_default();
    page(StatusCode::OK, EditTemplate::add(&state.site, &name, ""))
}

/// Fields posted by the add and edit forms
#[derive(Deserialize)]
struct EntryForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    content: String,
}

impl EntryForm {
    /// Both fields are required; the name must also be a valid title
    fn is_valid(&self) -> bool {
        Title::parse(&self.name).is_ok() && !self.content.trim().is_empty()
    }
}

async fn add_entry(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, AppError> {
    if !form.is_valid() {
        return page(
            StatusCode::BAD_REQUEST,
            EditTemplate::add(&state.site, &form.name, &form.content).with_message(INVALID_FORM),
        );
    }

    let (name, content) = (form.name.clone(), form.content.clone());
    let created = with_store(&state, move |store| store.create(&name, &content)).await?;

    if created {
        Ok(Redirect::to(&state.site.entry_url(form.name.trim())).into_response())
    } else {
        page(
            StatusCode::CONFLICT,
            EditTemplate::add(&state.site, &form.name, &form.content)
                .with_message(ALREADY_EXISTS),
        )
    }
}

async fn edit_form(
    AxumPath(title): AxumPath<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let requested = title.clone();
    let entry = with_store(&state, move |store| store.entry(&requested)).await?;

    match entry {
        Some(entry) => page(
            StatusCode::OK,
            EditTemplate::edit(&state.site, &entry.title, &entry.content),
        ),
        None => page(
            StatusCode::NOT_FOUND,
            NotFoundTemplate::new(&state.site, title.trim()).with_create_link(&state.site),
        ),
    }
}

async fn save_edit(
    AxumPath(title): AxumPath<String>,
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, AppError> {
    // The title comes from the path; the form's name field is read-only
    let form = EntryForm {
        name: title.clone(),
        ..form
    };
    if !form.is_valid() {
        return page(
            StatusCode::BAD_REQUEST,
            EditTemplate::edit(&state.site, title.trim(), &form.content).with_message(INVALID_FORM),
        );
    }

    let content = form.content;
    with_store(&state, move |store| store.upsert(&title, &content))
        .await
        .map(|_| Redirect::to(&state.site.entry_url(form.name.trim())).into_response())
}

async fn random(State(state): State<AppState>) -> Result<Response, AppError> {
    let target = match with_store(&state, |store| store.random_title()).await? {
        Some(title) => state.site.entry_url(&title),
        None => state.site.base_url.clone(),
    };
    Ok(Redirect::to(&target).into_response())
}

async fn static_asset(AxumPath(path): AxumPath<String>) -> Response {
    match STATIC_ASSETS.get_file(&path) {
        Some(file) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type_for_path(&path))
            .body(Body::from(file.contents()))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    page(
        StatusCode::NOT_FOUND,
        NotFoundTemplate::new(&state.site, uri.path()),
    )
}

fn content_type_for_path(path: &str) -> &'static str {
    match Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}
