//! Concessionario back office - Leptos frontend library

pub mod app;
pub mod components;
pub mod formatters;
pub mod pages;
pub mod storage;
