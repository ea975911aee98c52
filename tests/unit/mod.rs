/// Unit test target covering the public API surface
mod core_api;
