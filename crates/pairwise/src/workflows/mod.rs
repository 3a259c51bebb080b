pub mod comparison;
pub mod profiles;
