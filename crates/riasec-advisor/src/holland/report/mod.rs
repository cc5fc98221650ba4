mod summary;
pub mod views;

pub use summary::{
    BALANCED_PROFILE_CODE, DEFAULT_MAJOR_DISPLAY_LIMIT, NO_COMPATIBLE_MAJOR_MESSAGE,
    NO_DOMINANT_TYPE_MESSAGE,
};
pub use views::{MajorView, RecommendationSummary, TopTypeView};
