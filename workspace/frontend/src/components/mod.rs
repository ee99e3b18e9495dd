pub mod layout;
pub mod prediction;
pub mod sections;
