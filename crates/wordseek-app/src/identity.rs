use wordseek_store::OwnerId;

/// Turns an opaque credential into the owner it belongs to.
///
/// Token issuing and refresh happen elsewhere; the app only needs to know
/// who is asking before it touches the store.
pub trait IdentityProvider {
    /// Verifies `token` and returns its owner.
    fn verify(&self, token: &str) -> Result<OwnerId, AuthError>;
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AuthError {
    #[display("no credentials were given")]
    MissingToken,
    #[display("invalid credentials {token:?}")]
    InvalidToken { token: String },
}

/// Trusts a local user name as the credential.
///
/// Names are 1 to 64 ASCII letters, digits, `-`, `_`, or `.` and are compared
/// case-insensitively.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalIdentity;

impl LocalIdentity {
    const MAX_NAME_LEN: usize = 64;
}

impl IdentityProvider for LocalIdentity {
    fn verify(&self, token: &str) -> Result<OwnerId, AuthError> {
        let name = token.trim();
        if name.is_empty() {
            return Err(AuthError::MissingToken);
        }
        let valid = name.len() <= Self::MAX_NAME_LEN
            && name
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
        if !valid {
            return Err(AuthError::InvalidToken {
                token: token.to_owned(),
            });
        }
        Ok(OwnerId::new(name.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_identity() {
        let provider = LocalIdentity;
        assert_eq!(provider.verify(" Alice "), Ok(OwnerId::new("alice")));
        assert_eq!(provider.verify("bob_2.x"), Ok(OwnerId::new("bob_2.x")));
        assert_eq!(provider.verify("  "), Err(AuthError::MissingToken));
        assert!(matches!(
            provider.verify("eve/../root"),
            Err(AuthError::InvalidToken { .. })
        ));
        assert!(provider.verify(&"a".repeat(65)).is_err());
    }
}
