use shared::page::PageProps;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

/// Id of the `<script type="application/json">` element the host renders page props into.
#[cfg(target_arch = "wasm32")]
const PAGE_PROPS_ELEMENT_ID: &str = "page-props";

const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Reads the props the host page was rendered with. Missing or malformed props yield defaults.
pub fn page_props() -> PageProps {
    #[cfg(target_arch = "wasm32")]
    if let Some(json) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_PROPS_ELEMENT_ID))
        .and_then(|e| e.text_content())
    {
        match serde_json::from_str(&json) {
            Ok(props) => return props,
            Err(e) => warn!("Ignoring malformed page props: {}", e),
        }
    }
    PageProps::default()
}

pub fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
        return origin;
    }
    DEFAULT_ORIGIN.to_string()
}
