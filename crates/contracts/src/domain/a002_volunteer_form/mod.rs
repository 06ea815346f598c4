pub mod aggregate;
pub mod notice;
pub mod validation;

pub use aggregate::{FieldKey, SubmissionState, SubmitOutcome, VolunteerForm};
pub use notice::{Notice, NoticeKind};
pub use validation::{is_valid_email, FormValidation};
