pub mod config;
pub mod hashing;
pub mod persistence;
pub mod telemetry;
pub mod wire;

// Re-export commonly used types for convenience
pub use crate::config::{GatekeepSettings, HashingSettings, RulesSettings, SettingsError};
pub use crate::hashing::Argon2PasswordHasher;
pub use crate::persistence::HashMapAccountStore;
pub use crate::telemetry::init_tracing;
pub use crate::wire::{
    AccountConfirmationCodec, BooleanCodec, CredentialCodec, FIELD_SEPARATOR, MappingError,
    OBJECT_SEPARATOR, SubjectIdCodec, TemporaryAccountCodec, TokenCodec, TokenVerificationCodec,
    WireCodec,
};
