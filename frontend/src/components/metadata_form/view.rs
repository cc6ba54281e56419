//! View rendering for the metadata form.
//!
//! The markup mirrors the binding contract of the view model: a marker
//! container, one `div-multi-select` per field (carrying the
//! `parent_metadata` attribute, the native select, and its hidden submission
//! field), the release-date pair, and the save tab. The output is static;
//! everything dynamic happens through the bound DOM handles, so the update
//! function never triggers a re-render.

use yew::prelude::*;

use crate::view_model::{
    hidden_field_id, DATE_PICKER_ID, FIELD_CONTAINER_CLASS, FORM_CONTAINER_ID, HIDDEN_DATE_ID,
    SAVE_TAB_ID,
};

use super::props::FieldConfig;
use super::state::MetadataFormComponent;

pub fn view(_component: &MetadataFormComponent, ctx: &Context<MetadataFormComponent>) -> Html {
    let props = ctx.props();
    if !props.edit_mode {
        // Display-only view: no form, nothing to initialize.
        return Html::default();
    }

    html! {
        <>
            <div id={FORM_CONTAINER_ID}>
                <fieldset>
                    { for props.fields.iter().map(render_field) }
                    <div class="div-release-date form-group">
                        <label for={DATE_PICKER_ID}>{ "Release date" }</label>
                        <input type="date" id={DATE_PICKER_ID} class="form-control" />
                        <input type="hidden" id={HIDDEN_DATE_ID} name="modelReleaseDate" />
                    </div>
                </fieldset>
            </div>
            <div id={SAVE_TAB_ID}>
                <button type="button" class="btn btn-primary" style="display: none;">
                    { "Save changes" }
                </button>
            </div>
        </>
    }
}

fn render_field(field: &FieldConfig) -> Html {
    html! {
        <div class={FIELD_CONTAINER_CLASS} parent_metadata={field.term.clone()}>
            <label class="control-label">{ field.label.clone() }</label>
            {
                match &field.help {
                    Some(help) => html! {
                        <span
                            class="metadata-help"
                            data-toggle="popover"
                            data-content={help.clone()}
                        >
                            { "?" }
                        </span>
                    },
                    None => Html::default(),
                }
            }
            <select multiple={true} class="multi-select" name={field.term.clone()}>
                { for field.options.iter().map(|option| html! {
                    <option value={option.clone()}>{ option.clone() }</option>
                }) }
            </select>
            <input type="hidden" id={hidden_field_id(&field.term)} name={field.term.clone()} />
        </div>
    }
}
