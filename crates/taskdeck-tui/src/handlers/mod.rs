pub mod actions;
pub mod filters;
pub mod net;
pub mod reorder;
pub mod submit;
