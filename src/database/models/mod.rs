pub mod about;
pub mod admin;
pub mod contact;
pub mod experience;
pub mod project;
pub mod skill;
pub mod social;

pub use about::About;
pub use admin::Admin;
pub use contact::Contact;
pub use experience::Experience;
pub use project::Project;
pub use skill::Skill;
pub use social::Social;
