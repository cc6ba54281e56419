//! Metadata form synchronizer: root module wiring the Yew `Component`
//! implementation with submodules for messages, props, state, update logic,
//! view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the component surface (`Msg`, `FieldConfig`,
//!   `MetadataFormProps`, `MetadataFormComponent`).
//! - Provide the `Component` implementation delegating to `update::update`
//!   and `view::view`.
//! - On first render, bind the view model over the form markup, attach the
//!   date-picker handler, the submit-outcome hooks, and the help popovers,
//!   then trigger the first metadata load.

use web_sys::Event;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{FieldConfig, MetadataFormProps};
pub use state::MetadataFormComponent;

use crate::events::ListenerHandle;
use crate::view_model::{reveal_save_control, ViewModel};

impl Component for MetadataFormComponent {
    type Message = Msg;
    type Properties = MetadataFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MetadataFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.initialized {
            return;
        }
        self.initialized = true;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // A page without the edit-mode marker has nothing to synchronize.
        let view = match ViewModel::bind(&document) {
            Ok(Some(view)) => view,
            Ok(None) => return,
            Err(error) => {
                gloo_console::error!(format!("metadata form binding failed: {error}"));
                return;
            }
        };

        // Date selection: copy the picker value into the hidden submission
        // field and reveal the save control.
        let picker = view.date_picker.clone();
        let handler = {
            let picker = picker.clone();
            let hidden = view.hidden_date.clone();
            let save_tab = view.save_tab.clone();
            move |_event: Event| {
                hidden.set_value(&picker.value());
                reveal_save_control(&save_tab);
            }
        };
        match ListenerHandle::attach(&picker, "change", handler) {
            Ok(hook) => self.page_hooks.push(hook),
            Err(error) => gloo_console::error!("failed to attach date handler", error),
        }

        // The external submission layer signals its outcome with custom
        // events; either one triggers exactly one re-load.
        for event_name in ["submit-success", "submit-error"] {
            let link = ctx.link().clone();
            match ListenerHandle::attach(&document, event_name, move |_event: Event| {
                link.send_message(Msg::LoadMetadata);
            }) {
                Ok(hook) => self.page_hooks.push(hook),
                Err(error) => gloo_console::error!("failed to attach submit hook", error),
            }
        }

        self.page_hooks.extend(helpers::init_help_popovers(&document));

        self.resource_id = ctx.props().resource_id.clone().or_else(|| {
            window
                .location()
                .href()
                .ok()
                .and_then(|href| helpers::resource_id_from_url(&href))
        });

        self.view_model = Some(view);
        ctx.link().send_message(Msg::LoadMetadata);
    }
}
