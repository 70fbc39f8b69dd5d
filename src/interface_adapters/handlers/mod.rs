// HTTP handlers split by endpoint family.

pub mod pages;
pub mod settings;
