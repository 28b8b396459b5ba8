mod common;

use common::{create_test_pool, create_test_user, create_test_weight_entry};

use hr_db::WeightEntryRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_entry_when_created_then_found_for_owner() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "alice").await;
    let repo = WeightEntryRepository::new(pool);
    let entry = create_test_weight_entry(user.id, 71.5, 0);

    // When
    repo.create(&entry).await.unwrap();

    // Then
    let found = repo.find_for_user(entry.id, user.id).await.unwrap().unwrap();
    assert_that!(found.weight_kg, eq(71.5));
    assert_that!(found.note, some(eq("morning")));
    assert_that!(found.measured_at, eq(entry.measured_at));
}

#[tokio::test]
async fn given_entry_of_other_user_when_found_then_returns_none() {
    // Given
    let pool = create_test_pool().await;
    let alice = create_test_user(&pool, "alice").await;
    let bob = create_test_user(&pool, "bob").await;
    let repo = WeightEntryRepository::new(pool);
    let entry = create_test_weight_entry(alice.id, 60.0, 0);
    repo.create(&entry).await.unwrap();

    // When
    let result = repo.find_for_user(entry.id, bob.id).await.unwrap();

    // Then
    assert_that!(result, none());
}

#[tokio::test]
async fn given_several_entries_when_listed_then_newest_first_and_windowed() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "alice").await;
    let repo = WeightEntryRepository::new(pool);
    for (weight, minutes_ago) in [(70.0, 30), (71.0, 10), (72.0, 20)] {
        repo.create(&create_test_weight_entry(user.id, weight, minutes_ago))
            .await
            .unwrap();
    }

    // When
    let first_two = repo.list_for_user(user.id, 0, 2).await.unwrap();
    let rest = repo.list_for_user(user.id, 2, 2).await.unwrap();

    // Then
    let weights: Vec<f64> = first_two.iter().map(|e| e.weight_kg).collect();
    assert_that!(weights, eq(&vec![71.0, 72.0]));
    assert_that!(rest, len(eq(1)));
    assert_that!(rest[0].weight_kg, eq(70.0));
}

#[tokio::test]
async fn given_entry_when_deleted_by_other_user_then_kept() {
    // Given
    let pool = create_test_pool().await;
    let alice = create_test_user(&pool, "alice").await;
    let bob = create_test_user(&pool, "bob").await;
    let repo = WeightEntryRepository::new(pool);
    let entry = create_test_weight_entry(alice.id, 60.0, 0);
    repo.create(&entry).await.unwrap();

    // When
    let deleted_by_bob = repo.delete_for_user(entry.id, bob.id).await.unwrap();
    let deleted_by_alice = repo.delete_for_user(entry.id, alice.id).await.unwrap();

    // Then
    assert_that!(deleted_by_bob, eq(false));
    assert_that!(deleted_by_alice, eq(true));
    assert_that!(repo.find_for_user(entry.id, alice.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_unknown_id_when_deleted_then_returns_false() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool, "alice").await;
    let repo = WeightEntryRepository::new(pool);

    assert_that!(
        repo.delete_for_user(Uuid::new_v4(), user.id).await.unwrap(),
        eq(false)
    );
}
