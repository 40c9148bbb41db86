use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::catalog::{libraries, markdown, preview};
use crate::db;
use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;

use super::render;

#[derive(Template)]
#[template(path = "projects/list.html")]
struct ProjectListTemplate {
    projects: Vec<ProjectCard>,
}

/// A project plus the display attributes computed for this render only.
struct ProjectCard {
    id: i64,
    title: String,
    github_link: String,
    link_href: Option<String>,
    preview: String,
    image_url: String,
    libraries: Vec<&'static str>,
    created_at: String,
}

#[derive(Template)]
#[template(path = "projects/add.html")]
struct AddProjectTemplate;

#[derive(Template)]
#[template(path = "projects/overview.html")]
struct OverviewTemplate {
    project: Project,
    link_href: Option<String>,
    created_at: String,
    rendered_html: String,
}

#[derive(Deserialize)]
pub struct AddProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub github_link: String,
}

pub async fn list(State(state): State<SharedState>) -> Result<Response, AppError> {
    if db::projects::count(&state.pool).await? == 0 {
        return Ok(Redirect::to("/add/").into_response());
    }

    let projects = db::projects::list(&state.pool).await?;

    let mut cards = Vec::with_capacity(projects.len());
    // One contents API round-trip per record, so page cost grows with the catalog.
    for project in projects {
        let image_url = state.assets.probe(&project.github_link).await;
        cards.push(ProjectCard {
            preview: preview::summarize(&project.overview, state.config.preview_width),
            libraries: libraries::detect(&project.overview),
            image_url,
            created_at: format_timestamp(&project.created_at),
            link_href: markdown::web_link(&project.github_link),
            id: project.id,
            title: project.title,
            github_link: project.github_link,
        });
    }

    Ok(render(&ProjectListTemplate { projects: cards })?.into_response())
}

pub async fn add_page() -> Result<Html<String>, AppError> {
    render(&AddProjectTemplate)
}

/// Store the submission whatever the README fetch produced, then go back to the listing.
pub async fn add(
    State(state): State<SharedState>,
    Form(form): Form<AddProject>,
) -> Result<Redirect, AppError> {
    let overview = state.readme.fetch(&form.github_link).await;

    let project =
        db::projects::create(&state.pool, &form.title, &form.github_link, &overview).await?;
    tracing::info!("Registered project {} for {}", project.id, project.github_link);

    Ok(Redirect::to("/"))
}

pub async fn overview(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let not_found = || AppError::NotFound("Project not found".to_string());

    // Non-numeric ids name no project either.
    let id: i64 = id.parse().map_err(|_| not_found())?;
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    let template = OverviewTemplate {
        link_href: markdown::web_link(&project.github_link),
        rendered_html: markdown::render_html(&project.overview),
        created_at: format_timestamp(&project.created_at),
        project,
    };
    render(&template)
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
