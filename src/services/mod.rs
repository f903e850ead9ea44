pub(crate) mod batch;
pub(crate) mod extraction;
pub(crate) mod pipeline;
pub(crate) mod progress;
