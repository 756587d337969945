mod activation;
mod scan;

pub use activation::ActivationErrorKind;
pub use scan::ScanErrorKind;
