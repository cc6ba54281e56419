//! Multi-select widget enhancement and capture.
//!
//! Each bound multi-select field gets an enhanced widget: the native
//! `<select multiple>` is hidden behind a toggle button and a checkbox
//! dropdown panel. Checkbox changes are synced back into the native select,
//! and dismissing the dropdown (toggling it closed or clicking elsewhere on
//! the page) captures the selection into the field's hidden submission field.
//!
//! Widgets are owned by a [`WidgetRegistry`] with an explicit
//! teardown-then-mount lifecycle, so a reload after a metadata fetch or a
//! form submission never leaves duplicate panels or stale listeners behind.

use std::cell::Cell;
use std::rc::Rc;

use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, Node};

use crate::events::ListenerHandle;
use crate::view_model::{reveal_save_control, FieldBinding, ViewModel};

/// Classes carried by every generated dropdown panel.
pub const PANEL_CLASS: &str = "multiselect-container dropdown-menu";
/// Alignment class each panel carries exactly once.
pub const ALIGNMENT_CLASS: &str = "pull-right";
/// Button label when nothing is selected.
pub const EMPTY_SUMMARY: &str = "None selected";

/// Separator-joined form of a selection, as stored in the hidden field.
pub fn joined_values(values: &[String]) -> String {
    values.join(";")
}

/// Button summary for a selection.
pub fn summary_label(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY_SUMMARY.to_string()
    } else {
        values.join(", ")
    }
}

/// Values of the currently selected options of a native select.
pub fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.options();
    let mut values = Vec::new();
    for index in 0..options.length() {
        if let Some(option) = option_at(select, index) {
            if option.selected() {
                values.push(option.value());
            }
        }
    }
    values
}

/// Writes the field's current selection into its hidden submission field and
/// reveals the form's save control.
pub fn capture_selection(field: &FieldBinding, save_tab: &HtmlElement) {
    let values = selected_values(&field.select);
    field.hidden.set_value(&joined_values(&values));
    reveal_save_control(save_tab);
}

/// One mounted multi-select widget.
pub struct MultiSelectWidget {
    field: FieldBinding,
    wrapper: HtmlElement,
    listeners: Vec<ListenerHandle>,
}

impl MultiSelectWidget {
    /// Builds the enhanced widget for `field` inside its container.
    pub fn mount(
        document: &Document,
        field: &FieldBinding,
        save_tab: &HtmlElement,
    ) -> Result<Self, JsValue> {
        field.select.style().set_property("display", "none")?;

        let wrapper: HtmlElement = document.create_element("div")?.unchecked_into();
        wrapper.set_class_name("multiselect btn-group");
        wrapper.set_id(&format!("id-{}", Uuid::new_v4()));

        let button: HtmlElement = document.create_element("button")?.unchecked_into();
        button.set_attribute("type", "button")?;
        button.set_class_name("multiselect-toggle btn btn-default");
        button.set_inner_text(&summary_label(&selected_values(&field.select)));
        wrapper.append_child(&button)?;

        let panel: HtmlElement = document.create_element("ul")?.unchecked_into();
        panel.set_class_name(PANEL_CLASS);
        let classes = panel.class_list();
        if !classes.contains(ALIGNMENT_CLASS) {
            classes.add_1(ALIGNMENT_CLASS)?;
        }
        panel.style().set_property("display", "none")?;
        wrapper.append_child(&panel)?;

        let mut listeners = Vec::new();

        let options = field.select.options();
        for index in 0..options.length() {
            let Some(option) = option_at(&field.select, index) else {
                continue;
            };

            let item: HtmlElement = document.create_element("li")?.unchecked_into();
            let label: HtmlElement = document.create_element("label")?.unchecked_into();
            let checkbox: HtmlInputElement = document.create_element("input")?.unchecked_into();
            checkbox.set_attribute("type", "checkbox")?;
            checkbox.set_value(&option.value());
            checkbox.set_checked(option.selected());
            let text: HtmlElement = document.create_element("span")?.unchecked_into();
            text.set_inner_text(&option.text());
            label.append_child(&checkbox)?;
            label.append_child(&text)?;
            item.append_child(&label)?;
            panel.append_child(&item)?;

            let select = field.select.clone();
            let summary_button = button.clone();
            let source = checkbox.clone();
            listeners.push(ListenerHandle::attach(&checkbox, "change", move |_event: Event| {
                set_option_selected(&select, &source.value(), source.checked());
                summary_button.set_inner_text(&summary_label(&selected_values(&select)));
            })?);
        }

        let open = Rc::new(Cell::new(false));

        // Toggling the button closed counts as a dropdown dismissal.
        {
            let open = open.clone();
            let panel = panel.clone();
            let field = field.clone();
            let save_tab = save_tab.clone();
            listeners.push(ListenerHandle::attach(&button, "click", move |_event: Event| {
                if open.get() {
                    dismiss(&panel, &open, &field, &save_tab);
                } else {
                    open.set(true);
                    let _ = panel.style().set_property("display", "block");
                }
            })?);
        }

        // Clicking anywhere outside the widget dismisses an open dropdown.
        {
            let open = open.clone();
            let panel = panel.clone();
            let bounds = wrapper.clone();
            let field = field.clone();
            let save_tab = save_tab.clone();
            listeners.push(ListenerHandle::attach(document, "click", move |event: Event| {
                if !open.get() {
                    return;
                }
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                    .map(|node| bounds.contains(Some(&node)))
                    .unwrap_or(false);
                if !inside {
                    dismiss(&panel, &open, &field, &save_tab);
                }
            })?);
        }

        field.container.append_child(&wrapper)?;

        Ok(Self {
            field: field.clone(),
            wrapper,
            listeners,
        })
    }

    /// Detaches all listeners, removes the generated markup, and restores the
    /// native select.
    pub fn teardown(mut self) {
        self.listeners.clear();
        self.wrapper.remove();
        let _ = self.field.select.style().remove_property("display");
    }
}

/// Owns the mounted widgets; a remount is always teardown-then-mount.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: Vec<MultiSelectWidget>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teardown(&mut self) {
        for widget in self.widgets.drain(..) {
            widget.teardown();
        }
    }

    /// Rebuilds every widget from the current state of the native selects.
    pub fn remount(&mut self, document: &Document, view: &ViewModel) -> Result<(), JsValue> {
        self.teardown();
        for field in &view.fields {
            self.widgets
                .push(MultiSelectWidget::mount(document, field, &view.save_tab)?);
        }
        Ok(())
    }
}

fn dismiss(panel: &HtmlElement, open: &Cell<bool>, field: &FieldBinding, save_tab: &HtmlElement) {
    open.set(false);
    let _ = panel.style().set_property("display", "none");
    capture_selection(field, save_tab);
}

fn set_option_selected(select: &HtmlSelectElement, value: &str, selected: bool) {
    let options = select.options();
    for index in 0..options.length() {
        if let Some(option) = option_at(select, index) {
            if option.value() == value {
                option.set_selected(selected);
            }
        }
    }
}

fn option_at(select: &HtmlSelectElement, index: u32) -> Option<HtmlOptionElement> {
    select
        .options()
        .item(index)
        .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_selection_with_semicolons() {
        let values = ["a".to_string(), "c".to_string()];
        assert_eq!(joined_values(&values), "a;c");
    }

    #[test]
    fn empty_selection_joins_to_empty_string() {
        assert_eq!(joined_values(&[]), "");
    }

    #[test]
    fn single_value_has_no_separator() {
        assert_eq!(joined_values(&["Python".to_string()]), "Python");
    }

    #[test]
    fn summary_falls_back_when_nothing_selected() {
        assert_eq!(summary_label(&[]), EMPTY_SUMMARY);
        assert_eq!(
            summary_label(&["Linux".to_string(), "Windows".to_string()]),
            "Linux, Windows"
        );
    }
}
