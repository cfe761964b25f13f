use mindband_model::ModelError;
use thiserror::Error;

use crate::domains::features::FeatureError;
use crate::infra::ConfigLoadError;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error(transparent)]
    Feature(#[from] FeatureError),
    #[error(transparent)]
    Config(#[from] ConfigLoadError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
