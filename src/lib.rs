//! Terminal recipe browser with locally persisted favourites

pub mod config;
pub mod controller;
pub mod data;
pub mod logging;
pub mod model;
pub mod view;
