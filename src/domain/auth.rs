/// Admin credential check used by the admin login flow.
///
/// This is a convenience gate for the admin panel, not a security boundary.
/// Replacing the implementation with real credential issuance does not touch
/// the donor operations.
pub trait AdminAuthenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}
