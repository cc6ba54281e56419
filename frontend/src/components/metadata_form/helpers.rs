//! Helpers for the metadata form component: resource-id extraction from the
//! page address and the help-popover glue.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use crate::events::ListenerHandle;

/// Extracts the resource identifier from a page address: the second-to-last
/// `/`-delimited segment (resource pages end in `/<id>/`).
pub fn resource_id_from_url(url: &str) -> Option<String> {
    let segments: Vec<&str> = url.split('/').collect();
    if segments.len() < 2 {
        return None;
    }
    let id = segments[segments.len() - 2];
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

/// Wires every `[data-toggle="popover"]` trigger on the page to a click
/// handler that shows its `data-content` text in a floating panel.
pub fn init_help_popovers(document: &Document) -> Vec<ListenerHandle> {
    let mut hooks = Vec::new();
    let Ok(triggers) = document.query_selector_all("[data-toggle=\"popover\"]") else {
        return hooks;
    };
    for index in 0..triggers.length() {
        let Some(trigger) = triggers
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let doc = document.clone();
        let source = trigger.clone();
        match ListenerHandle::attach(&trigger, "click", move |_event: Event| {
            toggle_popover(&doc, &source);
        }) {
            Ok(handle) => hooks.push(handle),
            Err(error) => gloo_console::error!("failed to attach popover handler", error),
        }
    }
    hooks
}

const POPOVER_CLASS: &str = "metadata-help-popover";

/// Shows the popover panel for `trigger`, or removes the visible one on a
/// second click. Panels also remove themselves after a few seconds.
fn toggle_popover(document: &Document, trigger: &HtmlElement) {
    if let Some(existing) = document
        .query_selector(&format!(".{POPOVER_CLASS}"))
        .ok()
        .flatten()
    {
        existing.remove();
        return;
    }

    let Some(content) = trigger.get_attribute("data-content") else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(panel) = document.create_element("div") else {
        return;
    };
    let panel: HtmlElement = panel.unchecked_into();
    panel.set_class_name(POPOVER_CLASS);
    panel.set_inner_text(&content);

    let rect = trigger.get_bounding_client_rect();
    let style = panel.style();
    style.set_property("position", "fixed").ok();
    style.set_property("left", &format!("{}px", rect.left())).ok();
    style.set_property("top", &format!("{}px", rect.bottom() + 4.0)).ok();
    style.set_property("max-width", "280px").ok();
    style.set_property("background", "#fff").ok();
    style.set_property("border", "1px solid #ccc").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("padding", "8px 12px").ok();
    style.set_property("box-shadow", "0 2px 6px rgba(0, 0, 0, 0.2)").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&panel).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(6000).await;
            if let Some(parent) = panel.parent_node() {
                parent.remove_child(&panel).ok();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_second_to_last_segment_with_trailing_slash() {
        assert_eq!(
            resource_id_from_url("https://www.hydroshare.org/resource/abc123def/").as_deref(),
            Some("abc123def")
        );
    }

    #[test]
    fn takes_second_to_last_segment_without_trailing_slash() {
        // Without a trailing slash the id segment is last, so the segment
        // before it wins. The address contract guarantees the trailing slash.
        assert_eq!(
            resource_id_from_url("https://host/resource/abc123def").as_deref(),
            Some("resource")
        );
    }

    #[test]
    fn too_short_addresses_yield_none() {
        assert_eq!(resource_id_from_url("abc123def"), None);
        assert_eq!(resource_id_from_url(""), None);
    }

    #[test]
    fn empty_segment_yields_none() {
        assert_eq!(resource_id_from_url("https://host//"), None);
    }
}
