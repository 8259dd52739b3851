pub mod error;
pub mod features;
pub mod grades;
pub mod model;
pub mod reference;
pub mod schema;

pub use error::ModelError;
pub use features::{FEATURE_COUNT, FEATURE_NAMES, StudentFeatures};
pub use grades::{GRADES, GradeInfo, grade_info};
pub use model::{ClassifierParams, ModelConfig, ScalerParams};
pub use schema::student;
