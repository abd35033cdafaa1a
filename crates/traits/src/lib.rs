pub mod executor;
pub mod pdf;
pub mod typeset;

pub use executor::{Executor, ExecutorError, SyncExecutor};
pub use pdf::{ImageOverlayer, ImagePlacement, PdfError, PdfMerger};
pub use typeset::{TypesetError, Typesetter};
