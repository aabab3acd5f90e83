pub mod io;
pub mod system;

use crate::model::error::io::IOError;
use crate::model::error::system::SystemError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(IOError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn log(&self) {
        match self {
            Error::IO(error) => error.log(),
            Error::System(error) => error.log(),
        }
    }

    pub fn log_with_context(&self, context: &dyn std::fmt::Display) {
        match self {
            Error::IO(error) => error.log_with_context(context),
            Error::System(error) => error.log_with_context(context),
        }
    }
}

impl From<IOError> for Error {
    fn from(error: IOError) -> Self {
        Self::IO(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}
