pub mod clear;
pub mod compare;
pub mod config;
pub mod context;
pub mod detail;
pub mod favorites;
pub mod featured;
pub mod prompts;
pub mod search;
pub mod share;
pub mod theme;
pub mod ui;
pub mod watchlist;
