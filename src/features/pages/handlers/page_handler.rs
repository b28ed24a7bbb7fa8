use axum::response::Html;
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::shared::templates::{render_template, INDEX_TEMPLATE};
use crate::shared::validation::PHILIPPINES;

const PAGE_TITLE: &str = "Location Tracker";

/// Render the landing page
pub async fn index() -> Result<Html<String>> {
    let html = render_template(
        INDEX_TEMPLATE,
        context! {
            title => PAGE_TITLE,
            min_latitude => *PHILIPPINES.latitude.start(),
            max_latitude => *PHILIPPINES.latitude.end(),
            min_longitude => *PHILIPPINES.longitude.start(),
            max_longitude => *PHILIPPINES.longitude.end(),
        },
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Html(html))
}
