use gshop_activity::*;
use std::time::Duration;

#[tokio::test]
async fn publish_without_subscribers_is_silent() {
    let feed = ActivityFeed::new(4).unwrap();
    assert_eq!(feed.subscriber_count(), 0);

    feed.publish("alice", Activity::Logout);
}

#[tokio::test]
async fn zero_capacity_is_rejected() {
    assert!(matches!(ActivityFeed::new(0), Err(ActivityError::InvalidCapacity { .. })));
}

#[tokio::test]
async fn every_subscriber_sees_every_record() {
    let feed = ActivityFeed::default();
    let mut first = feed.subscribe();
    let mut second = feed.subscribe();

    feed.publish("bob", Activity::Donation { amount: 20_000, method: "momo".to_owned() });

    let a = first.next_record().await.unwrap();
    let b = second.next_record().await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.activity, Activity::Donation { amount: 20_000, method: "momo".to_owned() });
}

#[tokio::test]
async fn lagging_subscriber_recovers() {
    let feed = ActivityFeed::new(2).unwrap();
    let mut rx = feed.subscribe();

    for items in 0..10 {
        feed.publish("carol", Activity::Checkout { items, amount: 1 });
    }

    let first = rx.next_record().await.unwrap();
    let second = rx.next_record().await.unwrap();
    assert_eq!(first.activity, Activity::Checkout { items: 8, amount: 1 });
    assert_eq!(second.activity, Activity::Checkout { items: 9, amount: 1 });
}

#[tokio::test]
async fn receiver_ends_when_feed_is_dropped() {
    let feed = ActivityFeed::default();
    let mut rx = feed.subscribe();
    drop(feed);

    assert!(rx.next_record().await.is_none());
}

#[tokio::test]
async fn journal_drains_backlog_before_finishing() {
    let feed = ActivityFeed::default();
    let journal = Journal::spawn(&feed);

    feed.publish("dave", Activity::Register { email: "dave@example.com".to_owned() });
    feed.publish("dave", Activity::Login { is_admin: false });
    feed.publish("dave", Activity::Logout);
    drop(feed);

    let written = tokio::time::timeout(Duration::from_secs(5), journal.finish()).await.unwrap();
    assert_eq!(written, 3);
}
