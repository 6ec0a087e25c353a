//! One-shot redirect from the landing page to `/<time zone>`.
//!
//! The browser's resolved IANA zone is read through `Intl.DateTimeFormat` and
//! written into `location.pathname`, which triggers a full navigation. The
//! destination pages must not load this bundle again or the redirect loops.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Characters escaped inside a single path segment when encoding is enabled.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("unable to resolve local time zone: {0}")]
    Resolution(String),
    #[error("unable to navigate: {0}")]
    Navigation(String),
}

impl From<RedirectError> for JsValue {
    fn from(err: RedirectError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// How the zone identifier is placed into the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathEncoding {
    /// Insert the identifier verbatim, so `America/New_York` becomes two
    /// path segments.
    #[default]
    Raw,
    /// Percent-encode every `/`-separated segment on its own.
    PerSegment,
}

pub trait TimeZoneSource {
    fn resolve_time_zone(&self) -> Result<String, RedirectError>;
}

pub trait Navigator {
    fn set_pathname(&self, path: &str) -> Result<(), RedirectError>;
}

pub fn redirect_path(zone: &str, encoding: PathEncoding) -> String {
    match encoding {
        PathEncoding::Raw => format!("/{}", zone),
        PathEncoding::PerSegment => {
            let segments: Vec<String> = zone
                .split('/')
                .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
                .collect();
            format!("/{}", segments.join("/"))
        }
    }
}

/// Resolves the zone from `source` and points `navigator` at `/<zone>`.
///
/// Nothing is written to the navigator when resolution fails.
pub fn redirect_with<S, N>(
    source: &S,
    navigator: &N,
    encoding: PathEncoding,
) -> Result<(), RedirectError>
where
    S: TimeZoneSource + ?Sized,
    N: Navigator + ?Sized,
{
    let zone = source.resolve_time_zone()?;
    // An empty zone would send the page back to `/` and loop.
    if zone.is_empty() {
        return Err(RedirectError::Resolution("empty time zone name".into()));
    }
    let path = redirect_path(&zone, encoding);
    log::info!("Redirecting to {}", path);
    navigator.set_pathname(&path)
}

/// Detects the browser time zone and navigates to it.
pub fn redirect_to_time_zone() -> Result<(), RedirectError> {
    let config = crate::config::load();
    let location = BrowserLocation::current()?;
    redirect_with(&BrowserTimeZone, &location, config.path_encoding)
}

/// `Intl.DateTimeFormat().resolvedOptions().timeZone`
pub struct BrowserTimeZone;

impl TimeZoneSource for BrowserTimeZone {
    fn resolve_time_zone(&self) -> Result<String, RedirectError> {
        let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
        let options = format.resolved_options();
        let zone = js_sys::Reflect::get(&options, &"timeZone".into())
            .map_err(|err| RedirectError::Resolution(describe_js_error(&err)))?;
        zone.as_string().ok_or_else(|| {
            RedirectError::Resolution("resolvedOptions().timeZone is not a string".into())
        })
    }
}

pub struct BrowserLocation {
    location: web_sys::Location,
}

impl BrowserLocation {
    pub fn current() -> Result<Self, RedirectError> {
        let window = web_sys::window()
            .ok_or_else(|| RedirectError::Navigation("no global `window` exists".into()))?;
        Ok(Self {
            location: window.location(),
        })
    }
}

impl Navigator for BrowserLocation {
    fn set_pathname(&self, path: &str) -> Result<(), RedirectError> {
        self.location
            .set_pathname(path)
            .map_err(|err| RedirectError::Navigation(describe_js_error(&err)))
    }
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
