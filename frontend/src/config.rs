use crate::redirect::PathEncoding;

/// Optional page-provided settings:
/// `window.__BNUUY_CONFIG = { path_encoding: "raw" | "segment" }`.
const CONFIG_GLOBAL: &str = "__BNUUY_CONFIG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub path_encoding: PathEncoding,
}

impl RuntimeConfig {
    pub fn from_setting(path_encoding: Option<&str>) -> Self {
        let path_encoding = match path_encoding.map(|v| v.trim().to_ascii_lowercase()) {
            None => PathEncoding::default(),
            Some(value) => match value.as_str() {
                "raw" => PathEncoding::Raw,
                "segment" | "per_segment" => PathEncoding::PerSegment,
                other => {
                    log::warn!("Ignoring unknown path_encoding {:?}", other);
                    PathEncoding::default()
                }
            },
        };
        Self { path_encoding }
    }
}

fn get_from_window_config(key: &str) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &CONFIG_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    js_sys::Reflect::get(&obj, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

/// Reads the runtime config, falling back to defaults outside a browser.
pub fn load() -> RuntimeConfig {
    let setting = get_from_window_config("path_encoding");
    RuntimeConfig::from_setting(setting.as_deref())
}
