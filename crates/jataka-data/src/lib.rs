//! Data layer for the Jataka emotion dashboard
//!
//! Resolves each logical dataset to a real or mockup CSV file according to
//! the process-wide [`DataMode`], loads and validates it, and reports
//! missing or corrupt data as typed errors the pages can render.
//!
//! ```ignore
//! use std::sync::Arc;
//! use jataka_data::{DataConfig, DatasetName, Loader};
//!
//! let loader = Loader::new(Arc::new(DataConfig::load(".")?));
//! let scores = loader.load(DatasetName::EmotionScores, None)?;
//! if scores.is_mockup() {
//!     println!("showing demonstration data");
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod mode;
pub mod pages;
pub mod resolver;
pub mod scaling;
pub mod source;
pub mod stats;
pub mod survey;
pub mod table;

pub use config::{ConfigResolver, DataConfig, EnvSnapshot};
pub use dataset::{ColumnKind, ColumnSpec, DatasetName, DatasetSchema, EMOTIONS};
pub use error::{Error, Result};
pub use loader::{LoadResult, LoadedTable, Loader};
pub use mode::{DataMode, ModeOrigin, ModeSettings, Setting, SettingKey, resolve_mode};
pub use pages::{Page, PageData, Section};
pub use resolver::{
    Candidate, DataLayout, ResolutionRequest, ResolvedPath, SourceKind, resolve_paths,
};
pub use scaling::{ScaledScore, ScalingMethod, format_score, scale_emotion_scores};
pub use source::{DataSource, FsSource, MemorySource};
pub use stats::DatasetStats;
pub use survey::{Outcome, Survey, SurveyEntry};
pub use table::{ContentProblem, Table};
