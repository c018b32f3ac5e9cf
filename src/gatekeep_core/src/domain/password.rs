use secrecy::{ExposeSecret, Secret};

/// Output of a [`PasswordHasher`](crate::PasswordHasher). Opaque to the core.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<String> for HashedPassword {
    fn from(hash: String) -> Self {
        Self(Secret::new(hash))
    }
}

impl PartialEq for HashedPassword {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for HashedPassword {}
