use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid glyph configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Supported glyphs are not configured, call set_supported_glyphs first")]
    NotConfigured,

    #[error(
        "Column actions do not match the sequences: {columns} columns and {glyphs} new glyphs, \
         actions consume {consumed_columns} columns and {consumed_glyphs} glyphs"
    )]
    Alignment {
        columns: usize,
        glyphs: usize,
        consumed_columns: usize,
        consumed_glyphs: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
