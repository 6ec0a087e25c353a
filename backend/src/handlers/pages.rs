use axum::{
    extract::{Path, State},
    response::Html,
};
use chrono_tz::Tz;

use crate::{
    error::AppError,
    services::bun_catalog::{generate_time_for_bun, BunCatalog},
    state::AppState,
    utils::time::{now_in_timezone, parse_time, parse_time_zone},
    views,
};

/// `GET /`: the only page that runs the time zone redirector.
pub async fn landing(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(views::redirect_shell(&state.config.default_time_zone)?))
}

/// `GET /buns/{bun_file}`
pub async fn with_bun(
    State(state): State<AppState>,
    Path(bun_file): Path<String>,
) -> Result<Html<String>, AppError> {
    let catalog = BunCatalog::load(&state.config.buns_file).await?;
    let bun = catalog
        .find_by_filename(&bun_file)
        .ok_or_else(|| AppError::NotFound(format!("No buns with filename {}", bun_file)))?;

    let mut rng = rand::thread_rng();
    let time = generate_time_for_bun(bun, &mut rng);
    Ok(Html(views::bun_page(bun, &time, &mut rng)?))
}

/// `GET /{time}`, e.g. `/15:05` or `/3:05 PM`. Single-segment zone names
/// such as `/UTC` render the current time there instead.
pub async fn at_time(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Html<String>, AppError> {
    let time = match parse_time(&segment) {
        Some(time) => time,
        None => {
            if let Some(tz) = parse_time_zone(&segment) {
                return render_now_in(&state, tz).await;
            }
            tracing::info!(input = %segment, "Unable to parse time");
            return Err(AppError::BadRequest("Unable to parse time".to_string()));
        }
    };

    let catalog = BunCatalog::load(&state.config.buns_file).await?;
    let mut rng = rand::thread_rng();
    let bun = catalog
        .find_matching(&time, &mut rng)
        .ok_or_else(|| AppError::NotFound(format!("No matching buns at {} :(", time)))?;
    Ok(Html(views::bun_page(bun, &time, &mut rng)?))
}

/// `GET /{region}/{*location}`: the current time in a zone such as
/// `Australia/Sydney` or `America/Argentina/Buenos_Aires`.
pub async fn in_time_zone(
    State(state): State<AppState>,
    Path((region, location)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let name = format!("{}/{}", region, location.trim_matches('/'));
    let tz = parse_time_zone(&name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown time zone {}", name)))?;
    render_now_in(&state, tz).await
}

async fn render_now_in(state: &AppState, tz: Tz) -> Result<Html<String>, AppError> {
    let catalog = BunCatalog::load(&state.config.buns_file).await?;
    let now = now_in_timezone(&tz).time();
    let mut rng = rand::thread_rng();
    let bun = catalog.find_matching(&now, &mut rng).ok_or_else(|| {
        AppError::NotFound(format!(
            "No matching buns at {} in {} :(",
            now.format("%H:%M"),
            tz.name()
        ))
    })?;
    Ok(Html(views::bun_page(bun, &now, &mut rng)?))
}
