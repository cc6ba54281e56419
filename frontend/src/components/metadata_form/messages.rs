use common::model::metadata::ModelMetadata;

use crate::api::metadata_api::FetchError;

pub enum Msg {
    /// Start a metadata load for the current resource.
    LoadMetadata,
    /// A load completed; the token identifies which request it belongs to.
    MetadataLoaded(u64, ModelMetadata),
    /// A load failed; field state is left alone, widgets are still rebuilt.
    MetadataFailed(u64, FetchError),
}
