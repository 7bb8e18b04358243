pub mod bounds;
pub mod document;
pub mod grid;
pub mod layout;
pub mod outline;
pub mod path;
