//! Typed view model over the metadata form markup.
//!
//! The page addresses its form controls through fixed ids and the
//! `parent_metadata` attribute. Instead of re-querying those strings from
//! every handler, the markup is resolved once into a [`ViewModel`] of typed
//! DOM handles, and every binding (including the hidden submission field for
//! each multi-select) is validated at that point. A page without the
//! edit-mode marker binds to `None`; a page with broken bindings fails with a
//! [`BindError`] up front instead of crashing later inside a capture handler.

use common::model::metadata::ModelMetadata;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

/// Marker for the editable metadata form; absent on display-only views.
pub const FORM_CONTAINER_ID: &str = "id-mpmetadata";
/// Visible release-date picker.
pub const DATE_PICKER_ID: &str = "modelReleaseDate_picker";
/// Hidden field the form actually submits for the release date.
pub const HIDDEN_DATE_ID: &str = "id_modelReleaseDate";
/// Tab holding the form's save control.
pub const SAVE_TAB_ID: &str = "resourceSpecificTab";
/// Container class of one multi-select field.
pub const FIELD_CONTAINER_CLASS: &str = "div-multi-select";
/// Attribute binding a container to its metadata term.
pub const TERM_ATTRIBUTE: &str = "parent_metadata";

/// Id of the hidden submission field bound to a metadata term.
pub fn hidden_field_id(term: &str) -> String {
    format!("id_{term}")
}

#[derive(Debug, Error)]
pub enum BindError {
    #[error("metadata form is missing its `{0}` element")]
    MissingElement(&'static str),
    #[error("multi-select container has no `parent_metadata` attribute")]
    MissingTermAttribute,
    #[error("no hidden input `id_{0}` for multi-select term `{0}`")]
    MissingHiddenField(String),
}

/// One multi-select field: its container, native select, and hidden field.
#[derive(Clone)]
pub struct FieldBinding {
    pub term: String,
    pub container: HtmlElement,
    pub select: HtmlSelectElement,
    pub hidden: HtmlInputElement,
}

/// Resolved handles for everything the synchronizer touches on the page.
pub struct ViewModel {
    pub fields: Vec<FieldBinding>,
    pub date_picker: HtmlInputElement,
    pub hidden_date: HtmlInputElement,
    pub save_tab: HtmlElement,
}

impl ViewModel {
    /// Resolves and validates the form markup.
    ///
    /// Returns `Ok(None)` when the edit-mode marker is absent (nothing to
    /// synchronize) and `Err` when the markup violates the binding contract.
    pub fn bind(document: &Document) -> Result<Option<Self>, BindError> {
        let Some(form) = document.get_element_by_id(FORM_CONTAINER_ID) else {
            return Ok(None);
        };

        let fieldset = form
            .get_elements_by_tag_name("fieldset")
            .item(0)
            .ok_or(BindError::MissingElement("fieldset"))?;

        let containers = fieldset.get_elements_by_class_name(FIELD_CONTAINER_CLASS);
        let mut fields = Vec::new();
        for index in 0..containers.length() {
            let Some(container) = containers.item(index) else {
                continue;
            };
            let term = container
                .get_attribute(TERM_ATTRIBUTE)
                .ok_or(BindError::MissingTermAttribute)?;
            let select = container
                .query_selector("select.multi-select")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                .ok_or(BindError::MissingElement("select.multi-select"))?;
            let hidden = element_of::<HtmlInputElement>(document, &hidden_field_id(&term))
                .ok_or_else(|| BindError::MissingHiddenField(term.clone()))?;

            fields.push(FieldBinding {
                term,
                container: container.unchecked_into(),
                select,
                hidden,
            });
        }

        let date_picker = element_of::<HtmlInputElement>(document, DATE_PICKER_ID)
            .ok_or(BindError::MissingElement(DATE_PICKER_ID))?;
        let hidden_date = element_of::<HtmlInputElement>(document, HIDDEN_DATE_ID)
            .ok_or(BindError::MissingElement(HIDDEN_DATE_ID))?;
        let save_tab = element_of::<HtmlElement>(document, SAVE_TAB_ID)
            .ok_or(BindError::MissingElement(SAVE_TAB_ID))?;

        Ok(Some(Self {
            fields,
            date_picker,
            hidden_date,
            save_tab,
        }))
    }

    /// Applies a fetched metadata record to the native controls.
    ///
    /// For every term present in both the record and the bound fields, exactly
    /// the options listed in the record end up selected. Terms missing from
    /// the record leave their field untouched. The release date is normalized
    /// and written to both the picker and its hidden field.
    pub fn apply_metadata(&self, record: &ModelMetadata) {
        for field in &self.fields {
            let saved = record.selected_for(&field.term);
            let options = field.select.options();
            for index in 0..options.length() {
                let Some(option) = options
                    .item(index)
                    .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
                else {
                    continue;
                };
                let value = option.value();
                option.set_selected(desired_selection(saved, option.selected(), &value));
            }
        }

        if let Some(raw) = record.date_released.as_deref() {
            match normalize_release_date(raw) {
                Some(date) => {
                    self.date_picker.set_value(&date);
                    self.hidden_date.set_value(&date);
                }
                None => {
                    gloo_console::error!(format!("unparsable date_released value: {raw}"));
                }
            }
        }
    }

}

/// Shows the form's save control (`.btn-primary` under the resource tab).
pub fn reveal_save_control(save_tab: &HtmlElement) {
    if let Some(button) = save_tab.query_selector(".btn-primary").ok().flatten() {
        let button: HtmlElement = button.unchecked_into();
        let _ = button.style().remove_property("display");
    }
}

/// Selection state an option should end up with after applying a record.
///
/// A term present in the record resets its field to exactly the listed
/// values; a term absent from the record leaves the option's current state
/// untouched.
pub fn desired_selection(saved: Option<&[String]>, current: bool, value: &str) -> bool {
    match saved {
        Some(saved) => saved.iter().any(|v| v == value),
        None => current,
    }
}

/// Normalizes a date-parsable endpoint value to the `YYYY-MM-DD` form the
/// date input expects. The endpoint sends either a plain date or a timestamp
/// with a `T`/space separator; anything else is rejected.
pub fn normalize_release_date(raw: &str) -> Option<String> {
    let head = raw.get(..10)?;
    let shape_ok = head
        .bytes()
        .enumerate()
        .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !shape_ok {
        return None;
    }
    if raw.len() > 10 && !matches!(raw.as_bytes()[10], b'T' | b' ') {
        return None;
    }
    Some(head.to_string())
}

fn element_of<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_field_id_prefixes_term() {
        assert_eq!(hidden_field_id("modelProgramLanguage"), "id_modelProgramLanguage");
    }

    #[test]
    fn listed_values_end_up_selected() {
        let saved = vec!["Python".to_string(), "Fortran".to_string()];
        assert!(desired_selection(Some(&saved), false, "Python"));
        assert!(desired_selection(Some(&saved), true, "Fortran"));
    }

    #[test]
    fn unlisted_values_end_up_deselected() {
        let saved = vec!["Python".to_string()];
        assert!(!desired_selection(Some(&saved), true, "C"));
        assert!(!desired_selection(Some(&[]), true, "C"));
    }

    #[test]
    fn term_absent_from_response_leaves_selection_untouched() {
        assert!(desired_selection(None, true, "Python"));
        assert!(!desired_selection(None, false, "Python"));
    }

    #[test]
    fn plain_date_passes_through() {
        assert_eq!(normalize_release_date("2015-10-01").as_deref(), Some("2015-10-01"));
    }

    #[test]
    fn timestamp_is_truncated_to_date() {
        assert_eq!(
            normalize_release_date("2015-10-01T00:00:00Z").as_deref(),
            Some("2015-10-01")
        );
        assert_eq!(
            normalize_release_date("2015-10-01 12:30:00").as_deref(),
            Some("2015-10-01")
        );
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert_eq!(normalize_release_date("10/01/2015"), None);
        assert_eq!(normalize_release_date("2015-10"), None);
        assert_eq!(normalize_release_date("2015-10-01x"), None);
        assert_eq!(normalize_release_date(""), None);
    }
}
