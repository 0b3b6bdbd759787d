pub mod lambert;
pub mod layout;

pub use lambert::LambertPipeline;
pub use layout::PipelineLayouts;
