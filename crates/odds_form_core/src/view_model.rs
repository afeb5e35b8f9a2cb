use crate::{Phase, StatusKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub input: String,
    pub phase: Phase,
    pub in_flight: bool,
    /// The submit control is disabled while in flight or when the input is empty.
    pub submit_enabled: bool,
    pub banner: Option<BannerView>,
    pub dirty: bool,
}
