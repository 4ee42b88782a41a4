/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the route guard and token claim decoding

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use entity::UserProfile;
use hr_core::Session;
use hr_core::roles::*;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_test::block_on;

struct StubProfiles {
    profile: Option<UserProfile>,
    calls: AtomicUsize,
}

impl StubProfiles {
    fn returning(profile: UserProfile) -> Self {
        StubProfiles {
            profile: Some(profile),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        StubProfiles {
            profile: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for StubProfiles {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profile
            .clone()
            .ok_or_else(|| anyhow!("503 Service Unavailable"))
    }
}

fn token(payload: Value) -> Session {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    Session::new(format!("{}.{}.signature", header, body)).unwrap()
}

#[test]
fn test_no_token_never_fetches() {
    let profiles = StubProfiles::returning(UserProfile {
        role: Some("admin".to_string()),
        ..Default::default()
    });
    let guard = RoleGuard::new(["admin"]);

    let decision = block_on(guard.evaluate(None, &profiles));
    assert_eq!(decision, Decision::Denied(DenyReason::NoToken));
    assert_eq!(decision.route(), Route::RedirectLogin);
    assert_eq!(profiles.calls(), 0);
}

#[test]
fn test_role_claim_allows_without_fetch() {
    let profiles = StubProfiles::failing();
    let session = token(json!({"user_id": 1, "role": "hr"}));
    let guard = RoleGuard::new(["admin", "hr"]);

    let decision = block_on(guard.evaluate(Some(&session), &profiles));
    assert_eq!(decision, Decision::Allowed);
    assert_eq!(decision.route(), Route::Render);
    assert_eq!(profiles.calls(), 0);
}

#[test]
fn test_user_type_claim_counts_as_role() {
    let profiles = StubProfiles::failing();
    let session = token(json!({"user_type": "admin"}));
    let guard = RoleGuard::new(["admin"]);

    assert!(block_on(guard.evaluate(Some(&session), &profiles)).is_allowed());
}

#[test]
fn test_staff_claim_allows_admin_equivalent_routes() {
    let profiles = StubProfiles::failing();
    let session = token(json!({"is_staff": true}));

    let decision = block_on(RoleGuard::new(["hr"]).evaluate(Some(&session), &profiles));
    assert_eq!(decision, Decision::Allowed);

    let decision = block_on(RoleGuard::new(["employee"]).evaluate(Some(&session), &profiles));
    assert_eq!(decision, Decision::Denied(DenyReason::FallbackUnavailable));
}

#[test]
fn test_fallback_failure_fails_closed() {
    let profiles = StubProfiles::failing();
    let session = token(json!({"role": "employee"}));
    let guard = RoleGuard::new(["admin"]);

    let decision = block_on(guard.evaluate(Some(&session), &profiles));
    assert_eq!(decision, Decision::Denied(DenyReason::FallbackUnavailable));
    assert_eq!(decision.route(), Route::RedirectForbidden);
    assert_eq!(profiles.calls(), 1);
}

#[test]
fn test_fallback_profile_allows() {
    let profiles = StubProfiles::returning(UserProfile {
        is_staff: true,
        ..Default::default()
    });
    let session = token(json!({"user_id": 4}));
    let guard = RoleGuard::new(["admin"]);

    assert_eq!(block_on(guard.evaluate(Some(&session), &profiles)), Decision::Allowed);
    assert_eq!(profiles.calls(), 1);
}

#[test]
fn test_fallback_profile_denies() {
    let profiles = StubProfiles::returning(UserProfile {
        is_employee: true,
        ..Default::default()
    });
    let session = token(json!({}));
    let guard = RoleGuard::new(["admin", "hr"]);

    assert_eq!(
        block_on(guard.evaluate(Some(&session), &profiles)),
        Decision::Denied(DenyReason::RoleNotAllowed)
    );
}

#[test]
fn test_opaque_token_falls_back_to_profile() {
    let profiles = StubProfiles::returning(UserProfile {
        role: Some("hr".to_string()),
        ..Default::default()
    });
    let session = Session::new("not-a-jwt").unwrap();

    assert!(block_on(RoleGuard::new(["hr"]).evaluate(Some(&session), &profiles)).is_allowed());
    assert_eq!(profiles.calls(), 1);
}

#[test]
fn test_every_evaluation_starts_fresh() {
    let profiles = StubProfiles::returning(UserProfile {
        role: Some("hr".to_string()),
        ..Default::default()
    });
    let session = token(json!({"role": "employee"}));
    let guard = RoleGuard::new(["hr"]);

    block_on(guard.evaluate(Some(&session), &profiles));
    block_on(guard.evaluate(Some(&session), &profiles));
    assert_eq!(profiles.calls(), 2);
}

#[test]
fn test_authenticated_guard_only_needs_session() {
    let profiles = StubProfiles::failing();
    let session = Session::new("opaque").unwrap();
    let guard = RoleGuard::authenticated();

    assert!(block_on(guard.evaluate(Some(&session), &profiles)).is_allowed());
    assert_eq!(profiles.calls(), 0);
}

#[test]
fn test_profile_role_derivation() {
    let profile = UserProfile {
        user_type: Some("hr".to_string()),
        is_staff: true,
        ..Default::default()
    };
    assert_eq!(profile.role().as_deref(), Some("hr"));

    let profile = UserProfile {
        is_staff: true,
        ..Default::default()
    };
    assert_eq!(profile.role().as_deref(), Some("admin"));

    let profile = UserProfile {
        is_employee: true,
        ..Default::default()
    };
    assert_eq!(profile.role().as_deref(), Some("employee"));

    assert_eq!(UserProfile::default().role(), None);
}

#[test]
fn test_session_rejects_blank_token() {
    assert!(Session::new("").is_none());
    assert!(Session::new("   ").is_none());
    assert_eq!(Session::new("abc").unwrap().bearer(), "Bearer abc");
}

#[test]
fn test_decode_claims_tolerates_padding() {
    let body = URL_SAFE_NO_PAD.encode(json!({"role": "hr"}).to_string());
    let session = Session::new(format!("x.{}==.y", body)).unwrap();

    let claims = session.decode_claims().unwrap();
    assert_eq!(claims.role.as_deref(), Some("hr"));
}

#[test]
fn test_decode_claims_accepts_standard_alphabet() {
    let body = STANDARD_NO_PAD.encode(r#"{"role":"hr","note":"???>>>?"}"#);
    assert!(body.contains('/') && body.contains('+'));
    let session = Session::new(format!("x.{}.y", body)).unwrap();

    let claims = session.decode_claims().unwrap();
    assert_eq!(claims.role.as_deref(), Some("hr"));
}

#[test]
fn test_odd_claim_shapes_keep_the_role() {
    let profiles = StubProfiles::failing();
    let session = token(json!({"role": "hr", "is_superuser": null, "exp": 1767225600.5}));

    let claims = session.decode_claims().unwrap();
    assert_eq!(claims.role.as_deref(), Some("hr"));
    assert!(!claims.is_superuser);
    assert_eq!(claims.exp, Some(1767225600));

    let decision = block_on(RoleGuard::new(["hr"]).evaluate(Some(&session), &profiles));
    assert_eq!(decision, Decision::Allowed);
    assert_eq!(profiles.calls(), 0);
}

#[test]
fn test_scalar_claims_read_as_text() {
    let session = token(json!({"role": 3, "is_staff": "true", "username": false}));
    let claims = session.decode_claims().unwrap();

    assert_eq!(claims.role.as_deref(), Some("3"));
    assert!(claims.is_staff);
    assert_eq!(claims.username.as_deref(), Some("false"));

    let session = token(json!({"role": "", "user_type": "admin", "is_staff": 0}));
    let claims = session.decode_claims().unwrap();
    assert_eq!(claims.role().as_deref(), Some("admin"));
    assert!(!claims.is_elevated());
}

#[test]
fn test_profile_with_null_flags_still_decodes() {
    let profile: UserProfile = serde_json::from_value(json!({
        "id": "12",
        "role": null,
        "user_type": "hr",
        "is_staff": null,
        "is_superuser": 1,
        "is_employee": "no"
    }))
    .unwrap();

    assert_eq!(profile.id, Some(12));
    assert_eq!(profile.role().as_deref(), Some("hr"));
    assert!(profile.is_elevated());
    assert!(!profile.is_employee);

    let profiles = StubProfiles::returning(profile);
    let session = token(json!({"user_id": 12}));
    assert!(block_on(RoleGuard::new(["hr"]).evaluate(Some(&session), &profiles)).is_allowed());
}

#[test]
fn test_session_debug_redacts_token() {
    let session = Session::new("secret-token").unwrap();
    assert!(!format!("{:?}", session).contains("secret-token"));
}
