//! Local HTTP translation endpoint

pub mod api;
