//! Odds form core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FailureKind, Msg};
pub use state::{
    validate_url_input, FormState, Phase, Status, StatusKind, SubmissionId, UrlInputError,
    ERROR_PREFIX, REJECTED_FALLBACK, SENDING_MESSAGE, SUCCESS_FALLBACK, SUCCESS_PREFIX,
    UNEXPECTED_ERROR,
};
pub use update::update;
pub use view_model::{BannerView, FormViewModel};
