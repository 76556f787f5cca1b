//! The mutation pipeline end to end: capability gate, rule-set validation,
//! pre-persist transform, storage.

mod support;

use chalkboard::domain::Student;
use chalkboard::registry::Capabilities;
use chalkboard::service::Mutability;
use chalkboard::testkit::builders;
use chalkboard::Error;
use support::registry::{registry, registry_with};

#[tokio::test]
async fn valid_entity_is_persisted() {
    let reg = registry();
    reg.students.add(builders::student(1)).await.unwrap();

    let stored = reg.students.by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Amira");
}

#[tokio::test]
async fn invalid_entity_reports_every_violation() {
    let reg = registry();
    let broken = Student {
        student_id: 0,
        first_name: String::new(),
        parent_id: -3,
        ..builders::student(1)
    };

    let err = reg.students.add(broken).await.unwrap_err();
    let Error::Validation(failure) = err else {
        panic!("expected a validation failure, got {err}");
    };
    assert_eq!(failure.entity, "Student");
    assert_eq!(
        failure.fields(),
        vec!["student_id", "first_name", "first_name", "parent_id"]
    );

    assert!(reg.students.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn batch_with_one_invalid_entity_persists_nothing() {
    let reg = registry();
    let mut second = builders::student(2);
    second.class_name.clear();

    let result = reg
        .students
        .add_range(vec![builders::student(1), second, builders::student(3)])
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(reg.students.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_batch_add_is_rejected() {
    let reg = registry();
    let err = reg.students.add_range(Vec::new()).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { name: "entities", .. }));
    assert!(reg.students.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_flows_store_not_found_through() {
    let reg = registry();
    let err = reg.students.update(builders::student(42)).await.unwrap_err();
    assert!(matches!(err, Error::Database(_)));
}

#[tokio::test]
async fn update_replaces_the_stored_row() {
    let reg = registry();
    reg.students.add(builders::student(1)).await.unwrap();

    let mut changed = builders::student(1);
    changed.class_name = "8A".into();
    reg.students.update(changed).await.unwrap();

    let stored = reg.students.by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.class_name, "8A");
}

#[tokio::test]
async fn delete_of_none_is_a_null_argument() {
    let reg = registry();
    let err = reg.students.delete(None).await.unwrap_err();
    assert!(matches!(err, Error::NullArgument { name: "entity" }));
}

#[tokio::test]
async fn delete_removes_the_row() {
    let reg = registry();
    let student = builders::student(1);
    reg.students.add(student.clone()).await.unwrap();

    reg.students.delete(Some(&student)).await.unwrap();
    assert!(reg.students.by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn empty_delete_batch_is_rejected() {
    let reg = registry();
    let err = reg.students.delete_range(&[]).await.unwrap_err();
    assert!(err.is_caller_error());
}

#[tokio::test]
async fn read_only_service_rejects_every_mutation() {
    let reg = registry_with(Capabilities {
        students: Mutability::ReadOnly,
        ..Capabilities::default()
    });

    let student = builders::student(1);
    for result in [
        reg.students.add(student.clone()).await,
        reg.students.update(student.clone()).await,
        reg.students.delete(Some(&student)).await,
        reg.students.delete_range(std::slice::from_ref(&student)).await,
    ] {
        assert!(matches!(
            result,
            Err(Error::MutationDisabled { entity: "Student" })
        ));
    }

    // Reads stay available, and other entities stay mutable.
    assert!(reg.students.get_all().await.unwrap().is_empty());
    reg.parents.add(builders::parent(1)).await.unwrap();
}

#[tokio::test]
async fn user_password_is_hashed_before_storage() {
    let reg = registry();
    let plain = builders::user(1).password_hash;
    reg.users.add(builders::user(1)).await.unwrap();

    let stored = reg.users.by_id(1).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, plain);
    assert!(stored.password_hash.starts_with("$2"));
    assert!(bcrypt::verify(&plain, &stored.password_hash).unwrap());
}

#[tokio::test]
async fn identical_passwords_store_distinct_digests() {
    let reg = registry();
    let mut second = builders::user(2);
    second.password_hash = builders::user(1).password_hash;
    reg.users
        .add_range(vec![builders::user(1), second])
        .await
        .unwrap();

    let a = reg.users.by_id(1).await.unwrap().unwrap();
    let b = reg.users.by_id(2).await.unwrap().unwrap();
    assert_ne!(a.password_hash, b.password_hash);
}

#[tokio::test]
async fn user_rules_run_against_the_plaintext() {
    let reg = registry();
    let mut short = builders::user(1);
    short.password_hash = "abc".into();

    let err = reg.users.add(short).await.unwrap_err();
    let Error::Validation(failure) = err else {
        panic!("expected a validation failure, got {err}");
    };
    assert_eq!(failure.fields(), vec!["password_hash"]);
}
