//! Use-Cases: Löschen, Sammel-Anwendung der Felder, Alles-Leeren.

pub mod apply_fields;
pub mod clear_all;
pub mod delete_selected;

pub use apply_fields::apply_fields_to_selection;
pub use clear_all::clear_all;
pub use delete_selected::delete_selected;
