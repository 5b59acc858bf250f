mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    Config, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_URL, HttpConfig, OutputConfig, SourceConfig,
};
