//! Resolution against the libSQL-backed store.

use std::sync::Arc;

use barber_access::{
    AccessGate, AdminFlagResolver, AdminGuard, CachedResolver, GateInputs, Navigator, RoleResolver,
    SubjectCache,
};
use barber_core::enums::{AccessState, Role};
use barber_core::identity::{Identity, IdentitySnapshot};
use barber_core::role::RoleAssignment;
use barber_db::service::BarberService;
use pretty_assertions::assert_eq;

async fn service() -> BarberService {
    BarberService::new_local(":memory:").await.unwrap()
}

#[derive(Default)]
struct Redirects(std::sync::Mutex<Vec<String>>);

impl Navigator for Redirects {
    fn redirect(&self, path: &str) {
        self.0.lock().unwrap().push(path.to_string());
    }
}

#[tokio::test]
async fn owner_takes_precedence_over_staff_and_roles() {
    let svc = service().await;
    let owned = svc.create_organization("Fade Factory", "user-1").await.unwrap();
    let other = svc.create_organization("Other Shop", "user-2").await.unwrap();
    svc.add_staff_member(&other.id, "Rui", Some("user-1")).await.unwrap();
    svc.assign_role("user-1", Role::Customer, None).await.unwrap();

    let resolver = RoleResolver::new(&svc);
    let assignment = resolver.resolve(Some(&Identity::new("user-1"))).await.unwrap();
    assert_eq!(
        assignment,
        RoleAssignment::Owner {
            organization_id: owned.id
        }
    );
}

#[tokio::test]
async fn deactivated_staff_falls_back_to_stored_role() {
    let svc = service().await;
    let org = svc.create_organization("Shop", "owner").await.unwrap();
    let staff = svc.add_staff_member(&org.id, "Rui", Some("user-rui")).await.unwrap();
    svc.assign_role("user-rui", Role::Customer, Some(&org.id)).await.unwrap();

    let resolver = RoleResolver::new(&svc);
    let identity = Identity::new("user-rui");

    let active = resolver.resolve(Some(&identity)).await.unwrap();
    assert_eq!(active.role(), Role::Staff);
    assert_eq!(active.staff_id(), Some(staff.id.as_str()));

    svc.set_staff_active(&staff.id, false).await.unwrap();
    let inactive = resolver.resolve(Some(&identity)).await.unwrap();
    assert_eq!(
        inactive,
        RoleAssignment::Customer {
            organization_id: Some(org.id)
        }
    );
}

#[tokio::test]
async fn deactivated_organization_still_resolves_owner() {
    let svc = service().await;
    let org = svc.create_organization("Closed Shop", "owner").await.unwrap();
    svc.set_organization_active(&org.id, false).await.unwrap();

    let resolver = RoleResolver::new(&svc);
    let assignment = resolver.resolve(Some(&Identity::new("owner"))).await.unwrap();
    assert_eq!(assignment.role(), Role::Owner);
}

#[tokio::test]
async fn unknown_subject_resolves_to_none() {
    let svc = service().await;
    let resolver = RoleResolver::new(&svc);
    let assignment = resolver.resolve(Some(&Identity::new("stranger"))).await.unwrap();
    assert!(assignment.is_none());
}

#[tokio::test]
async fn mutations_invalidate_cached_roles() {
    let cache = Arc::new(SubjectCache::<RoleAssignment>::new());
    let mut svc = service().await;
    svc.add_invalidator(cache.clone());

    let cached = CachedResolver::with_cache(&svc, Arc::clone(&cache));
    let identity = Identity::new("user-9");

    assert!(cached.resolve(Some(&identity)).await.unwrap().is_none());
    assert_eq!(cache.get("user-9"), Some(RoleAssignment::None));

    svc.assign_role("user-9", Role::Customer, None).await.unwrap();
    assert_eq!(cache.get("user-9"), None);

    let refreshed = cached.resolve(Some(&identity)).await.unwrap();
    assert_eq!(refreshed.role(), Role::Customer);
}

#[tokio::test]
async fn admin_flag_follows_privilege_table() {
    let svc = service().await;
    svc.grant_privilege("boss", "super_admin").await.unwrap();

    let admin = AdminFlagResolver::new(&svc);
    assert!(admin.is_super_admin(Some(&Identity::new("boss"))).await);
    assert!(!admin.is_super_admin(Some(&Identity::new("barber"))).await);
    assert!(!admin.is_super_admin(None).await);
}

#[tokio::test]
async fn guard_picks_up_privilege_revocation() {
    let flags = Arc::new(SubjectCache::<bool>::new());
    let mut svc = service().await;
    svc.add_invalidator(flags.clone());
    svc.grant_privilege("boss", "super_admin").await.unwrap();

    let nav = Redirects::default();
    let mut guard = AdminGuard::with_flag_cache(
        AdminFlagResolver::new(&svc),
        AccessGate::new(&nav),
        Arc::clone(&flags),
    );
    let signed_in = IdentitySnapshot::signed_in(Identity::new("boss"));

    let status = guard.on_identity(signed_in.clone()).await;
    assert_eq!(status.state, AccessState::Authorized);
    assert_eq!(flags.get("boss"), Some(true));

    assert!(svc.revoke_privilege("boss", "super_admin").await.unwrap());
    assert_eq!(flags.get("boss"), None);

    let status = guard.on_identity(signed_in).await;
    assert_eq!(status.state, AccessState::Unauthorized);
    assert_eq!(nav.0.lock().unwrap().as_slice(), ["/"]);
}

#[test]
fn gate_inputs_compose_for_status_checks() {
    let nav = Redirects::default();
    let mut gate = AccessGate::new(&nav);
    let status = gate.update(&GateInputs::checking(Identity::new("u")));
    assert_eq!(status.state, AccessState::Initializing);
    assert!(status.is_loading);
}
