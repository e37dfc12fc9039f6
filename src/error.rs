use thiserror::Error;

pub type DriveChartResult<T> = Result<T, DriveChartError>;

#[derive(Debug, Error)]
pub enum DriveChartError {
    #[error("malformed drive record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("drives from both teams start at {elapsed_seconds}s elapsed; merge order is ambiguous")]
    AmbiguousSimultaneousDrives { elapsed_seconds: u32 },

    #[error("unknown team code: {0}")]
    UnknownTeam(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("drive data i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
