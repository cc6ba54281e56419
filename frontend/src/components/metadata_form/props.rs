//! Properties of the metadata form component.

use yew::prelude::*;

/// Declares one multi-select metadata field of the form.
#[derive(Clone, PartialEq)]
pub struct FieldConfig {
    /// Metadata term the field is bound to; also names the hidden submission
    /// field (`id_<term>`).
    pub term: String,
    /// Visible label.
    pub label: String,
    /// The fixed option vocabulary of the field.
    pub options: Vec<String>,
    /// Optional help text shown as a popover.
    pub help: Option<String>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct MetadataFormProps {
    /// Resource whose metadata is loaded. When `None`, the identifier is
    /// derived from the page address (second-to-last path segment).
    #[prop_or_default]
    pub resource_id: Option<String>,

    /// Whether the view is editable. A display-only view renders nothing and
    /// attaches no handlers.
    #[prop_or(true)]
    pub edit_mode: bool,

    /// The multi-select fields of the form.
    pub fields: Vec<FieldConfig>,
}
