pub mod catalog;
pub mod cli;
pub mod config;
pub mod console;
pub mod cricbuzz;
pub mod db;
pub mod error;
pub mod format;
pub mod format_csv;
pub mod format_detect;
pub mod masking;
pub mod normalize;
pub mod output;
pub mod players;
pub mod profile;
pub mod validation;
pub mod verbose;
pub mod web;
