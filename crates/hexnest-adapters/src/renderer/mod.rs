//! Template engine adapters.

pub mod handlebars;

pub use handlebars::HandlebarsEngine;
