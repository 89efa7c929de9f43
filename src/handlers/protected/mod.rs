pub mod about;
pub mod contact;
pub mod experience;
pub mod project;
pub mod skill;
pub mod social;
pub mod utils;
