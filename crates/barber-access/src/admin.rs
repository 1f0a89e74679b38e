//! Super-admin flag.
//!
//! Exactly one authorization check per signed-in identity. Only a literal
//! JSON `true` grants access. Everything else, including a lookup error,
//! denies; errors are logged and never reach the caller.

use serde_json::Value;

use barber_core::identity::Identity;
use barber_core::records::SUPER_ADMIN;
use barber_core::store::DataStore;

pub struct AdminFlagResolver<S> {
    store: S,
    privilege: String,
}

impl<S: DataStore> AdminFlagResolver<S> {
    /// Resolver checking the `super_admin` privilege.
    pub fn new(store: S) -> Self {
        Self::with_privilege(store, SUPER_ADMIN)
    }

    pub fn with_privilege(store: S, privilege: impl Into<String>) -> Self {
        Self {
            store,
            privilege: privilege.into(),
        }
    }

    pub fn privilege(&self) -> &str {
        &self.privilege
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Whether `identity` holds the admin privilege.
    pub async fn is_super_admin(&self, identity: Option<&Identity>) -> bool {
        let Some(identity) = identity else {
            return false;
        };
        self.check_subject(identity.subject_id()).await
    }

    /// Same as [`Self::is_super_admin`] for a bare subject id.
    pub async fn check_subject(&self, subject_id: &str) -> bool {
        match self
            .store
            .authorization_check(subject_id, &self.privilege)
            .await
        {
            Ok(Value::Bool(true)) => true,
            Ok(other) => {
                tracing::debug!(subject_id, answer = %other, "authorization check denied");
                false
            }
            Err(error) => {
                tracing::warn!(
                    subject_id,
                    privilege = %self.privilege,
                    %error,
                    "authorization check failed; denying admin access"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use rstest::rstest;
    use serde_json::json;

    use barber_core::store::LookupError;

    use super::*;
    use crate::test_support::FakeStore;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn absent_identity_is_not_admin_and_makes_no_call() {
        let admin = AdminFlagResolver::new(FakeStore::new());
        assert!(!admin.is_super_admin(None).await);
        assert!(admin.store().calls().is_empty());
    }

    #[rstest]
    #[case::literal_true(json!(true), true)]
    #[case::literal_false(json!(false), false)]
    #[case::string_true(json!("true"), false)]
    #[case::number_one(json!(1), false)]
    #[case::null(json!(null), false)]
    #[case::wrapped(json!({ "has_role": true }), false)]
    #[tokio::test]
    async fn only_literal_true_grants(#[case] answer: Value, #[case] expected: bool) {
        let store = FakeStore::new().with_answer("user-a", Ok(answer));
        let admin = AdminFlagResolver::new(store);

        let identity = Identity::new("user-a");
        assert_eq!(admin.is_super_admin(Some(&identity)).await, expected);
        assert_eq!(admin.store().calls(), vec![None]);
    }

    #[tokio::test]
    async fn lookup_failure_denies_and_logs_warning() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let store = FakeStore::new()
            .with_answer("user-b", Err(LookupError::Transport("network down".into())));
        let admin = AdminFlagResolver::new(store);

        let identity = Identity::new("user-b");
        assert!(!admin.is_super_admin(Some(&identity)).await);

        let output = logs.contents();
        assert!(output.contains("WARN"), "missing warning in: {output}");
        assert!(output.contains("network down"), "missing cause in: {output}");
    }

    #[tokio::test]
    async fn custom_privilege_is_sent() {
        let admin = AdminFlagResolver::with_privilege(FakeStore::new(), "shop_admin");
        assert_eq!(admin.privilege(), "shop_admin");
        assert!(!admin.check_subject("user-c").await);
    }
}
