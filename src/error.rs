use thiserror::Error;

/// Failures while deriving a tooltip anchor from image map markup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("No area found for image map '{map_id}'")]
    NoRegions { map_id: String },

    #[error("Image map '{map_id}' has {len} areas, index {index} is out of range")]
    RegionOutOfRange { map_id: String, index: usize, len: usize },

    #[error("Invalid coords '{coords}' on image map '{map_id}'")]
    InvalidCoords { map_id: String, coords: String },

    #[error("Could not find an image using map: {map_id}")]
    NoImage { map_id: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TipError {
    #[error("Cannot find {0} in document")]
    TargetNotFound(String),

    #[error("Tooltip target has no id attribute")]
    MissingId,

    #[error("Tooltip anchor {0} not found in document")]
    AnchorNotFound(String),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("Invalid tooltip options: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for TipError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TipError>;
