pub mod metadata_form;
