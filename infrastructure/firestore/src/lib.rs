pub mod client;
pub mod connector;
pub mod wire;
pub mod student_call {
    pub mod entity;
    pub mod repository;
}
