pub mod message;
pub mod profile;
pub mod recommendation;
pub mod user;

pub use message::Message;
pub use profile::Profile;
pub use recommendation::Recommendation;
pub use user::User;
