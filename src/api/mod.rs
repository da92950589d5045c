//! One namespace per API resource, each exposing the operations implemented for it.

mod assignments;
mod subjects;
mod summary;
mod user;
mod voice_actors;

pub use assignments::{AssignmentFilters, AssignmentsApi};
pub use subjects::{SubjectFilters, SubjectsApi};
pub use summary::SummaryApi;
pub use user::UserApi;
pub use voice_actors::{VoiceActorFilters, VoiceActorsApi};
