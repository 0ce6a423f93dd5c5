//! Integration-style tests for the accommodations domain services.
//!
//! Key points:
//! - Each test runs on a fresh in-memory SQLite DB and applies migrations.
//! - Services are constructed with SeaORM-backed repositories (Domain Port + Adapter).
//! - The local client is tested against the same services.

mod common;

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use accommodations::contract::client::AccommodationsApi;
use accommodations::contract::error::AccommodationsError;
use accommodations::contract::model::{
    AccommodationPatch, AccommodationType, AuthUser, NewAccommodation, NewCategory, NewUser,
};
use accommodations::domain::error::DomainError;
use accommodations::domain::repo::{AccommodationDraft, AccommodationsRepository, RepoError};
use accommodations::gateways::local::AccommodationsLocalClient;
use accommodations::infra::storage::SeaOrmAccommodationsRepository;

use common::{category, create_test_db, create_test_services, new_accommodation, register, services_on};

#[tokio::test]
async fn test_domain_service_crud() -> Result<()> {
    let svc = create_test_services().await;
    let (owner, caller) = register(&svc, "owner@example.com").await;
    let domestic = category(&svc, "Domestic").await;

    // create
    let created = svc
        .accommodations
        .create_accommodation(new_accommodation("Seaside Inn", domestic.id), &caller)
        .await?;
    assert_eq!(created.name, "Seaside Inn");
    assert_eq!(created.owner_id, owner.id);
    assert_eq!(created.phone_number, "010-1234-5678");
    assert_eq!(created.city, "Busan");
    assert_eq!(created.accommodation_type, AccommodationType::Hotel);
    assert_eq!(created.category_id, domestic.id);
    assert_eq!(created.information, "Ocean view rooms");

    // get (idempotent)
    let first = svc.accommodations.get_accommodation(created.id).await?;
    let second = svc.accommodations.get_accommodation(created.id).await?;
    assert_eq!(first, second);
    assert_eq!(first.id, created.id);

    // list
    let all = svc.accommodations.list_accommodations().await?;
    assert_eq!(all.len(), 1);

    // update: every present field is applied
    let patch = AccommodationPatch {
        name: Some("Seaside Inn Annex".to_string()),
        phone_number: Some("051-987-6543".to_string()),
        city: Some("Jeju".to_string()),
        accommodation_type: Some(AccommodationType::Resort),
        information: Some("Now with a pool".to_string()),
    };
    let updated = svc
        .accommodations
        .update_accommodation(created.id, patch, &caller)
        .await?;
    let reread = svc.accommodations.get_accommodation(created.id).await?;
    assert_eq!(updated, reread);
    assert_eq!(reread.name, "Seaside Inn Annex");
    assert_eq!(reread.phone_number, "051-987-6543");
    assert_eq!(reread.city, "Jeju");
    assert_eq!(reread.accommodation_type, AccommodationType::Resort);
    assert_eq!(reread.information, "Now with a pool");
    assert_eq!(reread.owner_id, owner.id);
    assert!(reread.updated_at >= created.updated_at);

    // delete
    let deleted_id = svc
        .accommodations
        .delete_accommodation(created.id, &caller)
        .await?;
    assert_eq!(deleted_id, created.id);
    let result = svc.accommodations.get_accommodation(created.id).await;
    assert!(matches!(
        result,
        Err(DomainError::AccommodationNotFound { id }) if id == created.id
    ));

    Ok(())
}

#[tokio::test]
async fn partial_update_leaves_absent_fields_unchanged() -> Result<()> {
    let svc = create_test_services().await;
    let (_, caller) = register(&svc, "owner@example.com").await;
    let c = category(&svc, "Domestic").await;
    let created = svc
        .accommodations
        .create_accommodation(new_accommodation("Hill House", c.id), &caller)
        .await?;

    let patch = AccommodationPatch {
        city: Some("Gangneung".to_string()),
        ..Default::default()
    };
    let updated = svc
        .accommodations
        .update_accommodation(created.id, patch, &caller)
        .await?;
    assert_eq!(updated.city, "Gangneung");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.phone_number, created.phone_number);
    assert_eq!(updated.information, created.information);

    // Keeping the current name is not a duplicate
    let patch = AccommodationPatch {
        name: Some("Hill House".to_string()),
        ..Default::default()
    };
    svc.accommodations
        .update_accommodation(created.id, patch, &caller)
        .await?;
    Ok(())
}

#[tokio::test]
async fn same_name_from_another_owner_is_rejected_and_not_stored() -> Result<()> {
    let svc = create_test_services().await;
    let (_, u1) = register(&svc, "u1@example.com").await;
    let (_, u2) = register(&svc, "u2@example.com").await;
    let c = category(&svc, "Domestic").await;

    svc.accommodations
        .create_accommodation(new_accommodation("Seaside Inn", c.id), &u1)
        .await?;
    let err = svc
        .accommodations
        .create_accommodation(new_accommodation("Seaside Inn", c.id), &u2)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::DuplicatedAccommodation { ref name } if name == "Seaside Inn"
    ));

    let all = svc.accommodations.list_accommodations().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].owner_id, u1.id);
    Ok(())
}

#[tokio::test]
async fn renaming_onto_a_taken_name_is_rejected() -> Result<()> {
    let svc = create_test_services().await;
    let (_, caller) = register(&svc, "owner@example.com").await;
    let c = category(&svc, "Domestic").await;
    svc.accommodations
        .create_accommodation(new_accommodation("First", c.id), &caller)
        .await?;
    let second = svc
        .accommodations
        .create_accommodation(new_accommodation("Second", c.id), &caller)
        .await?;

    let patch = AccommodationPatch {
        name: Some("First".to_string()),
        ..Default::default()
    };
    let err = svc
        .accommodations
        .update_accommodation(second.id, patch, &caller)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicatedAccommodation { .. }));
    assert_eq!(
        svc.accommodations.get_accommodation(second.id).await?.name,
        "Second"
    );
    Ok(())
}

#[tokio::test]
async fn non_owner_cannot_update_or_delete() -> Result<()> {
    let svc = create_test_services().await;
    let (u1_user, u1) = register(&svc, "u1@example.com").await;
    let (_, u2) = register(&svc, "u2@example.com").await;
    let c = category(&svc, "Domestic").await;
    let created = svc
        .accommodations
        .create_accommodation(new_accommodation("Seaside Inn", c.id), &u1)
        .await?;

    let patch = AccommodationPatch {
        name: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let err = svc
        .accommodations
        .update_accommodation(created.id, patch, &u2)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::AuthenticationFail { caller, owner } if caller == u2.id && owner == u1_user.id
    ));

    let err = svc
        .accommodations
        .delete_accommodation(created.id, &u2)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AuthenticationFail { .. }));

    // Record unchanged
    let current = svc.accommodations.get_accommodation(created.id).await?;
    assert_eq!(current, created);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_not_found() -> Result<()> {
    let svc = create_test_services().await;
    let (_, caller) = register(&svc, "owner@example.com").await;

    let err = svc.accommodations.get_accommodation(99).await.unwrap_err();
    assert!(matches!(err, DomainError::AccommodationNotFound { id: 99 }));

    let err = svc
        .accommodations
        .update_accommodation(99, AccommodationPatch::default(), &caller)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AccommodationNotFound { id: 99 }));

    let err = svc
        .accommodations
        .delete_accommodation(99, &caller)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AccommodationNotFound { id: 99 }));
    Ok(())
}

#[tokio::test]
async fn caller_without_user_record_cannot_create() -> Result<()> {
    let svc = create_test_services().await;
    let c = category(&svc, "Domestic").await;

    let err = svc
        .accommodations
        .create_accommodation(new_accommodation("Ghost Lodge", c.id), &AuthUser::new(404))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound { id: 404 }));
    assert!(svc.accommodations.list_accommodations().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_category_is_an_illegal_argument() -> Result<()> {
    let svc = create_test_services().await;
    let (_, caller) = register(&svc, "owner@example.com").await;

    let err = svc
        .accommodations
        .create_accommodation(new_accommodation("Nowhere Inn", 77), &caller)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::IllegalArgument { .. }));
    Ok(())
}

#[tokio::test]
async fn list_by_category_filters_in_id_order() -> Result<()> {
    let svc = create_test_services().await;
    let (_, caller) = register(&svc, "owner@example.com").await;
    let domestic = category(&svc, "Domestic").await;
    let overseas = category(&svc, "Overseas").await;

    let a = svc
        .accommodations
        .create_accommodation(new_accommodation("A", domestic.id), &caller)
        .await?;
    svc.accommodations
        .create_accommodation(new_accommodation("B", overseas.id), &caller)
        .await?;
    let c = svc
        .accommodations
        .create_accommodation(new_accommodation("C", domestic.id), &caller)
        .await?;

    let found = svc
        .accommodations
        .list_accommodations_by_category(domestic.id)
        .await?;
    let ids: Vec<i32> = found.iter().map(|x| x.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);

    let none = svc
        .accommodations
        .list_accommodations_by_category(12345)
        .await?;
    assert!(none.is_empty());
    Ok(())
}

#[tokio::test]
async fn unique_index_is_authoritative_for_names() -> Result<()> {
    let db = create_test_db().await;
    let svc = services_on(&db);
    let (owner, _) = register(&svc, "owner@example.com").await;
    let c = category(&svc, "Domestic").await;
    let repo = SeaOrmAccommodationsRepository::new(db.clone());

    let draft = AccommodationDraft::new(owner.id, new_accommodation("Twin", c.id), Utc::now());
    repo.insert(draft.clone()).await?;
    let err = repo.insert(draft).await.unwrap_err();
    assert!(matches!(err, RepoError::UniqueViolation(_)));
    Ok(())
}

#[tokio::test]
async fn update_of_missing_row_reports_none() -> Result<()> {
    let db = create_test_db().await;
    let svc = services_on(&db);
    let (owner, _) = register(&svc, "owner@example.com").await;
    let c = category(&svc, "Domestic").await;
    let repo = SeaOrmAccommodationsRepository::new(db.clone());

    let draft = AccommodationDraft::new(owner.id, new_accommodation("Gone", c.id), Utc::now());
    let mut stored = repo.insert(draft).await?;
    assert!(repo.delete(stored.id).await?);

    stored.city = "Jeju".to_string();
    assert!(repo.update(stored).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn users_and_categories() -> Result<()> {
    let svc = create_test_services().await;
    let (user, _) = register(&svc, "kim@example.com").await;
    assert_eq!(svc.users.get_user(user.id).await?, user);

    let err = svc
        .users
        .register_user(NewUser {
            email: "kim@example.com".to_string(),
            name: "Another Kim".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicatedUser { .. }));

    let err = svc.users.get_user(4242).await.unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound { id: 4242 }));

    let domestic = category(&svc, "Domestic").await;
    let err = svc
        .categories
        .create_category(NewCategory {
            name: "Domestic".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::IllegalArgument { .. }));
    assert_eq!(svc.categories.get_category(domestic.id).await?, domestic);
    assert!(matches!(
        svc.categories.get_category(999).await,
        Err(DomainError::CategoryNotFound { id: 999 })
    ));

    let seeds = vec!["Domestic".to_string(), "Camping".to_string()];
    let created = svc.categories.ensure_categories(&seeds).await?;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "Camping");
    assert!(svc.categories.ensure_categories(&seeds).await?.is_empty());

    let names: Vec<String> = svc
        .categories
        .list_categories()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Domestic", "Camping"]);
    Ok(())
}

#[tokio::test]
async fn local_client_maps_errors_to_contract() -> Result<()> {
    let svc = create_test_services().await;
    let client: Arc<dyn AccommodationsApi> = Arc::new(AccommodationsLocalClient::new(
        svc.accommodations.clone(),
        svc.users.clone(),
        svc.categories.clone(),
    ));

    let user = client
        .register_user(NewUser {
            email: "client@example.com".to_string(),
            name: "Client".to_string(),
        })
        .await?;
    let caller = AuthUser::new(user.id);
    let c = client
        .create_category(NewCategory {
            name: "Domestic".to_string(),
        })
        .await?;
    assert_eq!(client.list_categories().await?.len(), 1);
    assert_eq!(client.get_category(c.id).await?, c);
    assert_eq!(
        client.get_category(c.id + 100).await.unwrap_err(),
        AccommodationsError::not_found("Category", c.id + 100)
    );

    let created = client
        .create_accommodation(
            NewAccommodation {
                accommodation_type: AccommodationType::Pension,
                ..new_accommodation("Pine Pension", c.id)
            },
            caller,
        )
        .await?;
    assert_eq!(client.get_accommodation(created.id).await?, created);
    assert_eq!(client.list_accommodations().await?.len(), 1);
    assert_eq!(
        client.list_accommodations_by_category(c.id).await?.len(),
        1
    );

    let err = client
        .delete_accommodation(created.id, AuthUser::new(user.id + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AccommodationsError::PermissionDenied { .. }));

    let err = client
        .update_accommodation(created.id, AccommodationPatch::default(), AuthUser::new(user.id + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AccommodationsError::PermissionDenied { .. }));

    assert_eq!(client.delete_accommodation(created.id, caller).await?, created.id);
    assert_eq!(
        client.get_accommodation(created.id).await.unwrap_err(),
        AccommodationsError::not_found("Accommodation", created.id)
    );
    assert_eq!(client.get_user(user.id).await?.email, "client@example.com");
    Ok(())
}
