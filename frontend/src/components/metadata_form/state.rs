//! Runtime state of the metadata form component.

use crate::events::ListenerHandle;
use crate::sequence::RequestSequencer;
use crate::view_model::ViewModel;
use crate::widgets::WidgetRegistry;

/// State container for the metadata form synchronizer.
///
/// Fields are `pub` because they are accessed by the `update` and `view`
/// modules.
pub struct MetadataFormComponent {
    /// Typed handles over the form markup; `None` until bound on first
    /// render, and stays `None` on display-only views.
    pub view_model: Option<ViewModel>,

    /// Owner of the mounted multi-select widgets.
    pub registry: WidgetRegistry,

    /// Token source for in-flight metadata loads; stale completions are
    /// dropped.
    pub sequencer: RequestSequencer,

    /// Resource identifier resolved at initialization (prop or page address).
    pub resource_id: Option<String>,

    /// Page-level subscriptions: date-picker changes, submit-outcome events,
    /// help popovers. Dropped with the component.
    pub page_hooks: Vec<ListenerHandle>,

    /// Guard so first-render initialization runs once.
    pub initialized: bool,
}

impl MetadataFormComponent {
    pub fn new() -> Self {
        Self {
            view_model: None,
            registry: WidgetRegistry::new(),
            sequencer: RequestSequencer::new(),
            resource_id: None,
            page_hooks: Vec::new(),
            initialized: false,
        }
    }
}
