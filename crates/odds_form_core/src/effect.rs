use crate::SubmissionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one `POST /api/odds/fetch` carrying `url`.
    PostFetchRequest { id: SubmissionId, url: String },
}
