use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page '{title}' has {lines} lines but only {capacity} fit")]
    PageOverflow { title: String, lines: usize, capacity: usize },

    #[error("{0}")]
    Other(String),
}
