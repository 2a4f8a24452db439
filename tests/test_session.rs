//! Integration tests for the review/add workflow.
//!
//! Tests cover:
//! - First load, adding, deleting and clearing, end to end
//! - Add validation
//! - Cycling through cards and answer visibility
//! - Delete index handling
//! - Persistence failures leaving memory untouched

mod common;

use common::*;

async fn loaded_session(cards: &[Flashcard]) -> anyhow::Result<FlashcardSession<MemoryStore>> {
    let (repo, _store) = memory_repo();
    repo.save(cards).await?;
    let mut session = FlashcardSession::new(repo);
    session.load().await.expect("load should succeed");
    Ok(session)
}

async fn stored(session: &FlashcardSession<impl KeyValueStore>) -> Option<Vec<Flashcard>> {
    session
        .repository()
        .load()
        .await
        .expect("stored collection should be readable")
}

#[tokio::test]
async fn test_full_scenario() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let mut session = FlashcardSession::new(FlashcardRepository::new(store));

    // 1. Empty store shows the sample card
    session.load().await.expect("load should succeed");
    assert_eq!(session.state().cards(), [Flashcard::sample()]);
    assert_eq!(stored(&session).await, None);

    // 2. Add a card, which also persists the sample
    session.add("Q1", "A1").await.expect("add should succeed");
    let expected = vec![Flashcard::sample(), card("Q1", "A1")];
    assert_eq!(session.state().cards(), expected.as_slice());
    assert_eq!(stored(&session).await, Some(expected));

    // 3. Delete the card at index 0
    session.delete_current().await.expect("delete should succeed");
    assert_eq!(session.state().cards(), [card("Q1", "A1")]);
    assert_eq!(session.state().index(), 0);
    assert_eq!(stored(&session).await, Some(vec![card("Q1", "A1")]));

    // 4. Clear everything
    assert_eq!(session.clear().await, Notice::Cleared);
    assert!(session.state().is_empty());
    assert_eq!(session.repository().store().get(STORAGE_KEY).await?, None);

    Ok(())
}

#[tokio::test]
async fn test_add_rejects_blank_fields() -> anyhow::Result<()> {
    let mut session = loaded_session(&numbered_cards(2)).await?;

    for (question, answer) in [("", "valid"), ("valid", ""), ("   ", "valid"), ("valid", "\n\t ")] {
        let result = session.add(question, answer).await;
        assert_eq!(result, Err(Notice::MissingField));
    }

    assert_eq!(session.state().cards(), numbered_cards(2).as_slice());
    assert_eq!(stored(&session).await, Some(numbered_cards(2)));

    Ok(())
}

#[tokio::test]
async fn test_adds_grow_collection_one_at_a_time() -> anyhow::Result<()> {
    let mut session = loaded_session(&[]).await?;
    assert!(session.state().is_empty());

    for i in 0..5 {
        session
            .add(&format!(" Q{i}\n"), &format!("A{i} "))
            .await
            .expect("add should succeed");
        assert_eq!(session.state().cards().len(), i + 1);
        assert_eq!(
            stored(&session).await.as_deref(),
            Some(session.state().cards())
        );
    }

    // Text is stored as typed, without trimming
    assert_eq!(session.state().cards()[4].question, " Q4\n");
    assert_eq!(session.state().cards()[4].answer, "A4 ");

    Ok(())
}

#[tokio::test]
async fn test_add_keeps_review_position() -> anyhow::Result<()> {
    let mut session = loaded_session(&numbered_cards(3)).await?;
    session.next();
    session.toggle_answer();

    session.add("Q9", "A9").await.expect("add should succeed");

    assert_eq!(session.state().index(), 1);
    assert!(session.state().answer_visible());
    assert_eq!(session.state().cards().len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_next_cycles_and_hides_answer() -> anyhow::Result<()> {
    let mut session = loaded_session(&numbered_cards(3)).await?;

    let mut visited = vec![session.state().index()];
    for _ in 0..6 {
        session.toggle_answer();
        assert!(session.state().answer_visible());
        session.next();
        assert!(!session.state().answer_visible());
        visited.push(session.state().index());
    }
    assert_eq!(visited, [0, 1, 2, 0, 1, 2, 0]);

    Ok(())
}

#[tokio::test]
async fn test_toggle_shows_and_hides_answer() -> anyhow::Result<()> {
    let mut session = loaded_session(&numbered_cards(1)).await?;

    assert!(!session.state().answer_visible());
    session.toggle_answer();
    assert!(session.state().answer_visible());
    session.toggle_answer();
    assert!(!session.state().answer_visible());

    Ok(())
}

#[tokio::test]
async fn test_delete_at_every_position() -> anyhow::Result<()> {
    for n in 1..=4 {
        for i in 0..n {
            let original = numbered_cards(n);
            let mut session = loaded_session(&original).await?;
            for _ in 0..i {
                session.next();
            }
            session.toggle_answer();

            session.delete_current().await.expect("delete should succeed");

            let mut expected = original.clone();
            expected.remove(i);
            assert_eq!(session.state().cards(), expected.as_slice());
            assert_eq!(stored(&session).await, Some(expected));
            assert!(!session.state().answer_visible());

            // The following card takes the freed slot; deleting the last wraps to 0
            let expected_index = if i < n - 1 { i } else { 0 };
            assert_eq!(session.state().index(), expected_index, "n={n} i={i}");
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_delete_on_empty_is_noop() -> anyhow::Result<()> {
    let mut session = loaded_session(&[]).await?;

    assert_eq!(session.delete_current().await, Ok(()));
    assert!(session.state().is_empty());
    assert_eq!(stored(&session).await, Some(vec![]));

    Ok(())
}

#[tokio::test]
async fn test_clear_from_any_state() -> anyhow::Result<()> {
    for n in [0, 1, 5] {
        let mut session = loaded_session(&numbered_cards(n)).await?;
        session.next();

        assert_eq!(session.clear().await, Notice::Cleared);
        assert!(session.state().is_empty());
        assert_eq!(session.state().index(), 0);
        assert_eq!(stored(&session).await, None);
    }

    Ok(())
}

#[tokio::test]
async fn test_load_failure_leaves_collection_empty() -> anyhow::Result<()> {
    let (repo, store) = memory_repo();
    store.set(STORAGE_KEY, "{ broken".to_string()).await?;
    let mut session = FlashcardSession::new(repo);

    assert_eq!(session.load().await, Err(Notice::LoadFailed));
    assert!(session.state().is_empty());

    let mut session = FlashcardSession::new(FlashcardRepository::new(
        FailingStore::failing_reads(MemoryStore::new()),
    ));
    assert_eq!(session.load().await, Err(Notice::LoadFailed));
    assert!(session.state().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_failed_writes_keep_state() -> anyhow::Result<()> {
    let inner = MemoryStore::new();
    FlashcardRepository::new(inner.clone())
        .save(&numbered_cards(3))
        .await?;

    let mut session = FlashcardSession::new(FlashcardRepository::new(
        FailingStore::failing_writes(inner),
    ));
    session.load().await.expect("reads still work");
    session.next();
    session.toggle_answer();
    let before = session.state().clone();

    assert_eq!(session.delete_current().await, Err(Notice::DeleteFailed));
    assert_eq!(session.state(), &before);

    assert_eq!(session.clear().await, Notice::ClearFailed);
    assert_eq!(session.state(), &before);

    assert_eq!(session.add("Q", "A").await, Err(Notice::SaveFailed));
    assert_eq!(session.state(), &before);

    assert_eq!(stored(&session).await, Some(numbered_cards(3)));

    // Once the store recovers the same actions go through
    session.repository().store().set_fail_writes(false);
    session.add("Q", "A").await.expect("add should succeed");
    assert_eq!(session.state().cards().len(), 4);

    Ok(())
}
