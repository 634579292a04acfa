//! UI Components
//!
//! Leptos components for the store screen.

mod add_medicine_form;
mod cart_counter;
mod medicine_card;

pub use add_medicine_form::AddMedicineForm;
pub use cart_counter::CartCounter;
pub use medicine_card::MedicineCard;
