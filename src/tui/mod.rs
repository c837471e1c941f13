pub mod app;
pub mod form;
pub mod header;
pub mod layout;
pub mod question_list;
pub mod status_bar;
pub mod summary;
