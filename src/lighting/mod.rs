pub mod colors;
pub mod dates;
pub mod description;
pub mod error;
pub mod model;
pub mod parser;
