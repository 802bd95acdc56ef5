use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate. Laying text out never fails; these all come
/// from loading fonts and configuration, or from drawing and saving the card.
#[derive(Error, Debug)]
pub enum CardError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("failed to read font {}: {source}", path.display())]
    /// A font file could not be read
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(
        "font file not found at {} and no system fonts found, please provide a TTF font file in the fonts/ directory",
        path.display()
    )]
    /// Neither a bundled font nor any of the system fonts exist
    FontNotFound { path: PathBuf },

    #[error(transparent)]
    /// [toml] failed to parse a card configuration
    Config(#[from] toml::de::Error),

    #[error("cannot draw on a {width}x{height} canvas")]
    /// The canvas has no pixels
    Canvas { width: u32, height: u32 },

    #[error(transparent)]
    /// [image] failed to encode the card
    Image(#[from] image::ImageError),
}
