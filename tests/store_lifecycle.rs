mod common;

use common::{comment_draft, sample_dish, StaticGateway};
use tableside::ports::FetchError;
use tableside::store::comments::CommentsIntent;
use tableside::store::DomainStore;

#[tokio::test]
async fn load_all_populates_every_slice() {
    let gateway = StaticGateway {
        dishes: Ok(vec![sample_dish(0), sample_dish(1)]),
        favorites: Ok(vec![3, 7]),
        ..StaticGateway::default()
    };
    let store = DomainStore::new();

    store.load_all(&gateway).await;

    let dishes = store.dishes();
    assert_eq!(dishes.dishes.data.len(), 2);
    assert!(!dishes.dishes.is_loading);
    assert!(dishes.dish(1).is_some());

    assert!(!store.comments().comments.has_error());
    assert!(store.is_favorite(3));
    assert!(store.is_favorite(7));
    assert!(!store.is_favorite(4));
}

#[tokio::test]
async fn failed_dish_reload_keeps_the_stale_menu() {
    let store = DomainStore::new();

    let good = StaticGateway {
        dishes: Ok(vec![sample_dish(4)]),
        ..StaticGateway::default()
    };
    store.load_dishes(&good).await;

    let bad = StaticGateway {
        dishes: Err(FetchError::Transport("connection refused".to_string())),
        ..StaticGateway::default()
    };
    store.load_dishes(&bad).await;

    let dishes = store.dishes();
    assert!(dishes.dishes.has_error());
    assert_eq!(dishes.dishes.data.len(), 1);
    assert!(dishes.dish(4).is_some());
}

#[tokio::test]
async fn failed_comment_load_drops_the_list() {
    let store = DomainStore::new();
    store.dispatch_comments(CommentsIntent::Add {
        draft: comment_draft(2),
    });

    let bad = StaticGateway {
        comments: Err(FetchError::Status(500)),
        ..StaticGateway::default()
    };
    store.load_comments(&bad).await;

    let comments = store.comments();
    assert!(comments.comments.has_error());
    assert!(comments.comments.data.is_empty());
}

#[tokio::test]
async fn failed_favorites_load_keeps_the_marks() {
    let store = DomainStore::new();

    let good = StaticGateway {
        favorites: Ok(vec![9]),
        ..StaticGateway::default()
    };
    store.load_favorites(&good).await;

    let bad = StaticGateway {
        favorites: Err(FetchError::Transport("network down".to_string())),
        ..StaticGateway::default()
    };
    store.load_favorites(&bad).await;

    assert!(store.is_favorite(9));
    assert_eq!(
        store.favorites().favorites.error_message.as_deref(),
        Some("transport error: network down")
    );
}

#[tokio::test]
async fn comment_submissions_interleave_with_loads() {
    let store = DomainStore::new();

    let gateway = StaticGateway {
        comments: Ok(vec![]),
        ..StaticGateway::default()
    };
    store.load_comments(&gateway).await;

    store.dispatch_comments(CommentsIntent::Add {
        draft: comment_draft(2),
    });
    store.dispatch_comments(CommentsIntent::Add {
        draft: comment_draft(2),
    });

    let comments = store.comments();
    let ids: Vec<u32> = comments.comments.data.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 1]);
}
