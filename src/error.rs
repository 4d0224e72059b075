use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown channel `{channel}`")]
    UnknownChannel { channel: &'static str },

    #[error("channel `{channel}` carries `{expected}` payloads, got `{got}`")]
    ChannelTypeMismatch {
        channel: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("a close request is already pending")]
    AlreadyPending,
}
