//! Server-rendered HTML, from the askama templates under `templates/`.
//!
//! Only the landing page loads the redirector bundle. Bun pages never do, since
//! they live at the very paths the redirector navigates to.

use askama::Template;
use chrono::NaiveTime;
use chrono_tz::Tz;
use rand::{seq::SliceRandom, Rng};

use crate::{models::BunDefinition, utils::time::format_time};

pub const REDIRECTOR_MODULE: &str = "/static/pkg/bnuuy_time_frontend.js";

const UNNAMED_BUN_NAMES: [&str; 3] = ["Bun", "Bunny", "Bnuuy"];

/// Landing page that hands off to the wasm redirector.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate<'a> {
    pub redirector_module: &'a str,
    /// Linked when scripting is disabled.
    pub zone: &'a str,
}

#[derive(Template)]
#[template(path = "bun.html")]
pub struct BunPageTemplate<'a> {
    pub bun: &'a BunDefinition,
    pub name: &'a str,
    pub time: String,
}

pub fn redirect_shell(default_time_zone: &Tz) -> askama::Result<String> {
    LandingTemplate {
        redirector_module: REDIRECTOR_MODULE,
        zone: default_time_zone.name(),
    }
    .render()
}

pub fn bun_page<R: Rng + ?Sized>(
    bun: &BunDefinition,
    time: &NaiveTime,
    rng: &mut R,
) -> askama::Result<String> {
    let name = match &bun.name {
        Some(name) => name.as_str(),
        None => UNNAMED_BUN_NAMES.choose(rng).copied().unwrap_or("Bun"),
    };
    BunPageTemplate {
        bun,
        name,
        time: format_time(time),
    }
    .render()
}
