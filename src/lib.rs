//! # Gatekeep - Credential Validation and Wire Mapping
//!
//! This is a facade crate that re-exports all public APIs from the gatekeep components.
//! Use this crate to get access to validation, tokens, use cases and wire codecs in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Credential`, `Token`, `TemporaryAccountRequest`, `Validator`, etc.
//! - **Ports**: `AccountStore`, `PasswordHasher`
//! - **Use cases**: `AuthenticateUseCase`, `RequestTemporaryAccountUseCase`, etc.
//! - **Adapters**: wire codecs, `Argon2PasswordHasher`, `HashMapAccountStore`, settings

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatekeep_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatekeep_core::{
    Account, AccountUpdateError, AuthenticationRules, Credential, HashedPassword, RulesError,
    SubjectId, TemporaryAccountRequest, Token, TokenError, TokenStatus, ValidationError,
    ValidationErrors, Validator,
};

/// Messages exchanged with other services
pub use gatekeep_core::{AccountConfirmation, TemporaryAccountCreationResult, TokenVerification};

// ============================================================================
// Ports
// ============================================================================

pub use gatekeep_core::{AccountStore, AccountStoreError, PasswordHashError, PasswordHasher};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use gatekeep_application::*;
}

pub use gatekeep_application::{
    AuthenticateError, AuthenticateUseCase, ChangeEmailError, ChangeEmailUseCase,
    ChangePasswordError, ChangePasswordUseCase, RequestTemporaryAccountUseCase,
    ResetPasswordError, ResetPasswordUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Delimited string codecs
    pub mod wire {
        pub use gatekeep_adapters::wire::*;
    }

    /// Password hashing implementations
    pub mod hashing {
        pub use gatekeep_adapters::hashing::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use gatekeep_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use gatekeep_adapters::config::*;
    }

    pub use gatekeep_adapters::telemetry::init_tracing;
}

// Re-export commonly used adapters at root level
pub use gatekeep_adapters::{
    Argon2PasswordHasher, GatekeepSettings, HashMapAccountStore, MappingError, WireCodec,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the store port
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
