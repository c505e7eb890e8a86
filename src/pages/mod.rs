//! Route components, one module per screen.

pub mod adopter_form;
pub mod adopters_list;
pub mod animal_form;
pub mod animals_list;
pub mod consultation_form;
pub mod consultations_list;
pub mod dashboard;
pub mod login;
pub mod ngo_form;
pub mod ngos_list;
