//! Odds client: submits race URLs to the odds backend and reports completions.
mod handle;
mod settings;
mod submit;
mod types;

pub use handle::SubmissionHandle;
pub use settings::{ClientSettings, SettingsError, BASE_URL_ENV, DEFAULT_BASE_URL, FETCH_PATH};
pub use submit::{FetchRequest, ReqwestSubmitter, Submitter};
pub use types::{Accepted, ClientEvent, SubmitError};
