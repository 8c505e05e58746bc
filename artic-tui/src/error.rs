//! Frontend error type.

use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("API error: {0}")]
    Api(#[from] artic_lib::error::Error),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
