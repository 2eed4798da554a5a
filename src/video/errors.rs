#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Backend: {}", _0)]
    Backend(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Invalid video settings: {}", _0)]
    Settings(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<failure::Error> for Error {
    fn from(err: failure::Error) -> Error {
        Error::Backend(format!("{}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}
