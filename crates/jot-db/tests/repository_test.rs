//! Repository integration tests.
//!
//! These need a running PostgreSQL instance; point DATABASE_URL at one to
//! run them. Without it each test prints a notice and returns early, so the
//! suite stays green on machines without a database.

use jot_core::{
    CreateNoteRequest, CreateUserRequest, DocId, Error, NoteRepository, ReplaceNoteRequest, User,
    UserRepository,
};
use jot_db::Database;

async fn connect() -> Option<Database> {
    dotenvy::dotenv().ok();
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping repository integration test");
            return None;
        }
    };
    let db = Database::connect(&url).await.expect("database connection");
    sqlx::migrate!("../../migrations")
        .run(db.pool())
        .await
        .expect("migrations");
    Some(db)
}

async fn seed_user(db: &Database) -> User {
    // DocId generation gives us a collision-free username per test run.
    let unique = DocId::new();
    db.users
        .insert(CreateUserRequest {
            username: format!("user-{}", unique),
            name: None,
            password_hash: "integration-test-hash".to_string(),
        })
        .await
        .expect("insert user")
}

async fn remove_user(db: &Database, user: &User) {
    // Cascades to the user's notes.
    sqlx::query("DELETE FROM app_user WHERE id = $1")
        .bind(user.id.as_str())
        .execute(db.pool())
        .await
        .expect("cleanup user");
}

#[tokio::test]
async fn note_lookup_is_scoped_to_owner() {
    let Some(db) = connect().await else { return };
    let alice = seed_user(&db).await;
    let bob = seed_user(&db).await;

    let note = db
        .notes
        .insert(CreateNoteRequest {
            content: "HTML is easy".to_string(),
            important: false,
            owner: alice.id.clone(),
        })
        .await
        .expect("insert note");

    let found = db
        .notes
        .find_for_owner(&note.id, &alice.id)
        .await
        .expect("find under owner");
    assert_eq!(found.as_ref(), Some(&note));

    // Under a different owner the same id behaves as nonexistent.
    let foreign = db
        .notes
        .find_for_owner(&note.id, &bob.id)
        .await
        .expect("find under other owner");
    assert_eq!(foreign, None);

    remove_user(&db, &alice).await;
    remove_user(&db, &bob).await;
}

#[tokio::test]
async fn replace_updates_content_and_keeps_omitted_important() {
    let Some(db) = connect().await else { return };
    let user = seed_user(&db).await;

    let note = db
        .notes
        .insert(CreateNoteRequest {
            content: "original".to_string(),
            important: true,
            owner: user.id.clone(),
        })
        .await
        .expect("insert note");

    let updated = db
        .notes
        .replace_for_owner(
            &note.id,
            &user.id,
            ReplaceNoteRequest {
                content: String::new(),
                important: None,
            },
        )
        .await
        .expect("replace")
        .expect("note exists");

    // Empty content is legal at this layer; the flag survives omission.
    assert_eq!(updated.content, "");
    assert!(updated.important);

    let missing = db
        .notes
        .replace_for_owner(
            &DocId::parse(&"0".repeat(24)).unwrap(),
            &user.id,
            ReplaceNoteRequest {
                content: "x".to_string(),
                important: None,
            },
        )
        .await
        .expect("replace nonexistent");
    assert_eq!(missing, None);

    remove_user(&db, &user).await;
}

#[tokio::test]
async fn delete_removes_note_once() {
    let Some(db) = connect().await else { return };
    let user = seed_user(&db).await;

    let first = db
        .notes
        .insert(CreateNoteRequest {
            content: "keep".to_string(),
            important: false,
            owner: user.id.clone(),
        })
        .await
        .expect("insert first");
    let second = db
        .notes
        .insert(CreateNoteRequest {
            content: "drop".to_string(),
            important: false,
            owner: user.id.clone(),
        })
        .await
        .expect("insert second");

    assert!(db
        .notes
        .delete_for_owner(&second.id, &user.id)
        .await
        .expect("delete"));
    // Repeating the delete finds nothing.
    assert!(!db
        .notes
        .delete_for_owner(&second.id, &user.id)
        .await
        .expect("repeat delete"));

    let remaining = db.notes.list_for_owner(&user.id).await.expect("list");
    assert_eq!(remaining, vec![first]);

    remove_user(&db, &user).await;
}

#[tokio::test]
async fn duplicate_username_maps_to_typed_error() {
    let Some(db) = connect().await else { return };
    let user = seed_user(&db).await;

    let result = db
        .users
        .insert(CreateUserRequest {
            username: user.username.clone(),
            name: Some("Impostor".to_string()),
            password_hash: "other-hash".to_string(),
        })
        .await;

    match result {
        Err(Error::DuplicateUsername(name)) => assert_eq!(name, user.username),
        other => panic!("expected DuplicateUsername, got {:?}", other.map(|u| u.username)),
    }

    remove_user(&db, &user).await;
}

#[tokio::test]
async fn list_with_notes_expands_in_creation_order() {
    let Some(db) = connect().await else { return };
    let user = seed_user(&db).await;

    let first = db
        .notes
        .insert(CreateNoteRequest {
            content: "HTML is easy".to_string(),
            important: false,
            owner: user.id.clone(),
        })
        .await
        .expect("insert first");
    let second = db
        .notes
        .insert(CreateNoteRequest {
            content: "Browser can execute only JavaScript".to_string(),
            important: true,
            owner: user.id.clone(),
        })
        .await
        .expect("insert second");

    let listed = db.users.list_with_notes().await.expect("list users");
    let entry = listed
        .iter()
        .find(|u| u.user.id == user.id)
        .expect("seeded user present");

    assert_eq!(entry.notes, vec![first, second]);

    remove_user(&db, &user).await;
}
