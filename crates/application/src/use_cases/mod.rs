pub mod sweep;
pub mod verify_record;

// Re-export use cases
pub use sweep::SweepUseCase;
pub use verify_record::VerifyRecordUseCase;
