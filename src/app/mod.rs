pub mod config;
pub mod error;
pub mod models;
pub mod task_edit;
pub mod task_list;
pub mod ui;
