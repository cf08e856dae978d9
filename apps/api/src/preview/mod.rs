// Derived view logic for the rendered portfolio: recency filter, theme,
// hero fallback, export settings. Pure functions; no model calls here.

pub mod handlers;
pub mod recency;
pub mod view;
