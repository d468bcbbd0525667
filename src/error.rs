//! Error type returned by the public drawing operations

/// Errors surfaced at the dispatch boundary. The rasterizers themselves are
/// total functions; everything here is caught before any pixel is touched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// Surfaces must be 1, 2, 3 or 4 bytes per pixel.
    #[error("unsupported surface bit depth ({0}) for drawing")]
    UnsupportedBitDepth(u8),

    /// Point sequences need at least 2 points for polylines, 3 for polygons.
    #[error("points argument must contain {min} or more points")]
    TooFewPoints { min: usize },

    /// The surface refused to lock.
    #[error("error locking surface")]
    Lock,

    /// The surface refused to unlock.
    #[error("error unlocking surface")]
    Unlock,
}
