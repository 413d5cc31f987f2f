// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use catalog::CatalogTable;
use catalog_audit::Actor;
use catalog_persistence::Persistence;

use super::helpers::{create_persistence_with_software, create_test_admin, create_test_member};
use crate::{
    ApiError, AuthError, AuthenticatedActor, AuthorizationService, RemoveDemoRequest, Role,
    batch_delete_software, load_demo, remove_demo, seed_all, seed_reference,
};

#[test]
fn test_role_token_parsing() {
    assert_eq!(Role::from_token("admin"), Role::Admin);
    assert_eq!(Role::from_token(" ADMIN "), Role::Admin);
    assert_eq!(Role::from_token("editor"), Role::Member);
    assert_eq!(Role::from_token(""), Role::Member);
}

#[test]
fn test_identity_requires_an_id() {
    let missing = AuthenticatedActor::from_identity(None, Some("admin"));
    let blank = AuthenticatedActor::from_identity(Some("  "), Some("admin"));

    assert!(matches!(
        missing,
        Err(AuthError::AuthenticationFailed { .. })
    ));
    assert!(matches!(blank, Err(AuthError::AuthenticationFailed { .. })));
}

#[test]
fn test_identity_rejects_the_system_reference() {
    for id in ["SYSTEM", "system", " System "] {
        let result = AuthenticatedActor::from_identity(Some(id), Some("admin"));
        assert!(matches!(
            result,
            Err(AuthError::AuthenticationFailed { .. })
        ));
    }
}

#[test]
fn test_user_actors_never_decode_as_system() {
    let (mut persistence, _ids) = create_persistence_with_software();
    let actor = AuthenticatedActor::from_identity(Some("systems-admin"), Some("admin")).unwrap();

    batch_delete_software(&mut persistence, &actor, b"").unwrap();

    let latest = persistence.list_audit_records(1).unwrap();
    assert_eq!(latest[0].entry.actor, Actor::user("systems-admin"));
    assert_ne!(latest[0].entry.actor, Actor::System);
}

#[test]
fn test_identity_without_role_is_a_member() {
    let actor = AuthenticatedActor::from_identity(Some("u-1"), None).unwrap();
    assert_eq!(actor.role, Role::Member);
    assert_eq!(actor.to_audit_actor(), Actor::user("u-1"));
}

#[test]
fn test_authorize_admin() {
    assert!(AuthorizationService::authorize_admin(&create_test_admin(), "load_demo").is_ok());

    let err = AuthorizationService::authorize_admin(&create_test_member(), "load_demo")
        .unwrap_err();
    assert_eq!(
        err,
        AuthError::Unauthorized {
            action: String::from("load_demo"),
            required_role: String::from("Admin"),
        }
    );
}

#[test]
fn test_member_cannot_run_any_mutation() {
    let (mut persistence, ids) = create_persistence_with_software();
    let member = create_test_member();
    let audits_before = persistence.count_audit_records().unwrap();

    let results: Vec<Result<(), ApiError>> = vec![
        load_demo(&mut persistence, &member).map(|_| ()),
        remove_demo(&mut persistence, &member, &RemoveDemoRequest::default()).map(|_| ()),
        seed_reference(&mut persistence, &member, "categories").map(|_| ()),
        seed_all(&mut persistence, &member).map(|_| ()),
        batch_delete_software(&mut persistence, &member, b"").map(|_| ()),
    ];

    for result in results {
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }
    assert_eq!(persistence.list_software_ids().unwrap(), ids);
    assert_eq!(persistence.count_audit_records().unwrap(), audits_before);
}

#[test]
fn test_admin_mutations_are_attributed_to_the_caller() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    load_demo(&mut persistence, &create_test_admin()).unwrap();

    let latest = persistence.list_audit_records(1).unwrap();
    assert_eq!(latest[0].entry.actor, Actor::user("admin-123"));
    assert_eq!(persistence.count_rows(CatalogTable::Software).unwrap(), 7);
}
