//! Add-Item Form State
//!
//! Backs the "Add New Medicine" modal: open/closed, the draft being typed,
//! and the inline messages from the last failed submission.

use log::info;

use crate::catalog::Catalog;
use crate::draft::{Draft, DraftField, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddItemForm {
    pub open: bool,
    pub draft: Draft,
    pub errors: ValidationErrors,
}

impl AddItemForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close via the Cancel button. The draft is kept for next time.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Close via a click on the overlay, only if nothing has been typed.
    pub fn dismiss(&mut self) -> bool {
        if self.draft.is_empty() {
            self.open = false;
        }
        !self.open
    }

    /// Inline message for a field
    pub fn error(&self, field: DraftField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Add the draft to the catalog.
    ///
    /// On success the draft is cleared, the form closes and the new id is
    /// returned. On failure the errors are kept for display and the form
    /// stays open.
    pub fn submit(&mut self, catalog: &mut Catalog) -> Option<u32> {
        match catalog.add_item(&self.draft) {
            Ok(item) => {
                info!("Added medicine #{} ({})", item.id, item.name);
                let id = item.id;
                self.reset();
                Some(id)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.open = false;
        self.draft = Draft::default();
        self.errors = ValidationErrors::new();
    }
}
