pub mod comment;
pub mod editor;
pub mod region;
