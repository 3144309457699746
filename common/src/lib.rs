pub mod singleton;
pub mod subject_observer;
