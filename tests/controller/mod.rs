mod api;
mod error_probe;
mod static_assets;
