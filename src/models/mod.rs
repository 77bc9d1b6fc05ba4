pub mod navigation;
pub mod preferences;
pub mod rating_input;
pub mod review;
pub mod session;
pub mod summary;
