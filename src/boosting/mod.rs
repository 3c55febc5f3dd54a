//! Gradient boosting: the MART driver, ensemble accumulation, validation
//! tracking, and training observation.

pub mod early_stopping;
pub mod ensemble;
pub mod mart;
pub mod observer;

pub use early_stopping::ValidationTracker;
pub use ensemble::Ensemble;
pub use mart::{MartRanker, TrainingReport};
pub use observer::{LogObserver, NullObserver, TrainingObserver};
