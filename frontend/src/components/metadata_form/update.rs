//! Update function for the metadata form component.
//!
//! Loads are token-stamped: a completion is applied only when it belongs to
//! the latest issued request, so overlapping fetches (rapid submit-outcome
//! signals) cannot apply out of order. Success and failure both end in the
//! same unconditional step: rebuilding the multi-select widgets from the
//! current state of the native selects.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::metadata_api::fetch_model_metadata;

use super::messages::Msg;
use super::state::MetadataFormComponent;

/// Central update function. Always returns `false`: the rendered markup is
/// static and every effect happens against the bound DOM handles.
pub fn update(
    component: &mut MetadataFormComponent,
    ctx: &Context<MetadataFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::LoadMetadata => {
            let Some(resource_id) = component.resource_id.clone() else {
                gloo_console::error!("no resource id available; skipping metadata load");
                rebuild_widgets(component);
                return false;
            };
            let token = component.sequencer.issue();
            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_model_metadata(&resource_id).await {
                    Ok(record) => link.send_message(Msg::MetadataLoaded(token, record)),
                    Err(error) => link.send_message(Msg::MetadataFailed(token, error)),
                }
            });
            false
        }
        Msg::MetadataLoaded(token, record) => {
            if !component.sequencer.is_current(token) {
                return false;
            }
            if let Some(view) = &component.view_model {
                view.apply_metadata(&record);
            }
            rebuild_widgets(component);
            false
        }
        Msg::MetadataFailed(token, error) => {
            if !component.sequencer.is_current(token) {
                return false;
            }
            gloo_console::error!(format!("model metadata request failed: {error}"));
            rebuild_widgets(component);
            false
        }
    }
}

fn rebuild_widgets(component: &mut MetadataFormComponent) {
    let Some(view) = &component.view_model else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Err(error) = component.registry.remount(&document, view) {
        gloo_console::error!("failed to rebuild multi-select widgets", error);
    }
}
