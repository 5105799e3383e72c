pub mod context;
pub mod document;
pub mod goals;
pub mod grade;
pub mod narrative;
pub mod visit;
