#[derive(thiserror::Error, Debug)]
pub enum ScanErrorKind {
    #[error(transparent)]
    Universe(#[from] anyhow::Error),
}
