use super::Config;
use crate::error::PanelgrabError;
use config::Config as ConfigBuilder;

pub fn load_config(config_path: &str) -> Result<Config, PanelgrabError> {
    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
