//! UseCase layer: drives a session over real channels.

mod run_session;

pub use run_session::RunSessionUseCase;
