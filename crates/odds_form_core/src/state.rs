use url::Url;

use crate::view_model::{BannerView, FormViewModel};

pub type SubmissionId = u64;

pub const SENDING_MESSAGE: &str = "バックエンドへリクエストを送信中...";
pub const SUCCESS_PREFIX: &str = "成功: ";
pub const ERROR_PREFIX: &str = "エラー: ";
pub const SUCCESS_FALLBACK: &str = "リクエストを受け付けました。";
pub const REJECTED_FALLBACK: &str = "サーバーがリクエストを拒否しました。";
pub const UNEXPECTED_ERROR: &str = "予期しないエラーが発生しました。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Message shown in the status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    pub fn kind(&self) -> StatusKind {
        match self {
            Status::Info(_) => StatusKind::Info,
            Status::Success(_) => StatusKind::Success,
            Status::Error(_) => StatusKind::Error,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Status::Info(message) | Status::Success(message) | Status::Error(message) => message,
        }
    }
}

/// Interaction state of one mounted form. `new()` is the mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    input: String,
    status: Option<Status>,
    phase: Phase,
    next_submission_id: SubmissionId,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_flight(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            input: self.input.clone(),
            phase: self.phase,
            in_flight: self.in_flight(),
            submit_enabled: !self.in_flight() && !self.input.is_empty(),
            banner: self.status.as_ref().map(|status| BannerView {
                kind: status.kind(),
                text: status.message().to_string(),
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        self.phase = Phase::Submitting;
        self.status = Some(Status::Info(SENDING_MESSAGE.to_string()));
        self.dirty = true;
        self.next_submission_id
    }

    pub(crate) fn apply_success(&mut self, message: Option<String>) {
        let message = message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| SUCCESS_FALLBACK.to_string());
        self.phase = Phase::Succeeded;
        self.status = Some(Status::Success(format!("{SUCCESS_PREFIX}{message}")));
        self.input.clear();
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, display_message: &str) {
        self.phase = Phase::Failed;
        self.status = Some(Status::Error(format!("{ERROR_PREFIX}{display_message}")));
        self.dirty = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlInputError {
    Empty,
    Invalid(String),
    UnsupportedScheme(String),
}

impl std::fmt::Display for UrlInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlInputError::Empty => write!(f, "URLを入力してください。"),
            UrlInputError::Invalid(reason) => write!(f, "有効なURL形式で入力してください。({reason})"),
            UrlInputError::UnsupportedScheme(scheme) => {
                write!(f, "http または https のURLを入力してください。({scheme})")
            }
        }
    }
}

/// Form-level check that the input is an absolute http(s) URL.
///
/// The submit handler itself only rejects the exact empty string; this runs
/// before the handler is dispatched, like the browser's `type=url` constraint.
pub fn validate_url_input(input: &str) -> Result<(), UrlInputError> {
    if input.is_empty() {
        return Err(UrlInputError::Empty);
    }
    let parsed = Url::parse(input).map_err(|err| UrlInputError::Invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(UrlInputError::UnsupportedScheme(other.to_string())),
    }
}
