// handlers/mod.rs - Two-tier handler architecture
//
// Public (no auth): login, content reads
// Protected (bearer auth): content writes

pub mod protected;
pub mod public;
