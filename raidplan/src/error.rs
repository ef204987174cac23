use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value: {message}")]
    InvalidValue { message: String },

    #[error("invalid fps {fps}: must be a positive finite number")]
    InvalidFps { fps: f32 },

    #[error("duplicate timeline event id '{id}'")]
    DuplicateEventId { id: String },

    #[error("unsupported mechanic format version {found} (max supported {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid frame range {start}..{end}")]
    InvalidFrameRange { start: u32, end: u32 },

    #[error("invalid worker count {workers}")]
    InvalidWorkerCount { workers: usize },

    #[error("export cancelled after {completed} of {total} frames")]
    ExportCancelled { completed: usize, total: usize },

    #[cfg(feature = "json")]
    #[error("failed to parse mechanic JSON: {message}")]
    JsonParse { message: String },

    #[cfg(feature = "json")]
    #[error("failed to serialize mechanic JSON: {message}")]
    JsonSerialize { message: String },
}
