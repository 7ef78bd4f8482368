// Module exports for data models

pub mod settings;
pub mod time_parts;
