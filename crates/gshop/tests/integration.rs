use gshop::activity::{Activity, ActivityReceiverExt};
use gshop::domain::config::ShopConfig;
use gshop::domain::{AccountStatus, DonationStatus, ErrorKind, GameCode};
use gshop::features::auth::Registration;
use gshop::features::cart::ClearOutcome;
use gshop::features::catalog::{AccountDraft, AccountFilter};
use gshop::features::donations::{BankDonation, Decision};
use gshop::{Shop, ShopError};
use tempfile::TempDir;

fn memory_config() -> ShopConfig {
    let mut config = ShopConfig::default();
    config.storage.url = "mem://".to_owned();
    config
}

fn disk_config(dir: &TempDir) -> ShopConfig {
    let mut config = ShopConfig::default();
    config.storage.url = format!("file://{}", dir.path().display());
    config
}

async fn register_dave(shop: &mut Shop) {
    let form = Registration {
        username: "dave",
        email: "dave@example.com",
        password: "letmein",
        confirm_password: "letmein",
    };
    shop.register(&form).await.unwrap();
}

#[tokio::test]
async fn open_seeds_admin_and_samples() {
    let shop = Shop::open(&memory_config()).await.unwrap();

    assert_eq!(shop.state().users.len(), 1);
    assert_eq!(shop.list_accounts(&AccountFilter::default()).len(), 3);
    let donors: Vec<u64> = shop.donors().iter().map(|d| d.amount).collect();
    assert_eq!(donors, [200_000, 100_000, 50_000]);
    assert!(shop.actor().is_none());
}

#[tokio::test]
async fn seeding_can_be_disabled() {
    let mut config = memory_config();
    config.seed.enabled = false;

    let shop = Shop::open(&config).await.unwrap();

    assert!(shop.state().users.is_empty());
    assert!(shop.state().accounts.is_empty());
}

#[tokio::test]
async fn zero_activity_capacity_is_rejected() {
    let mut config = memory_config();
    config.activity.capacity = 0;

    let err = Shop::open(&config).await.unwrap_err();

    assert!(matches!(err, ShopError::Activity { .. }));
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.is_fatal());
}

#[tokio::test]
async fn shopping_flow_publishes_activity() {
    let mut shop = Shop::open(&memory_config()).await.unwrap();
    let mut feed = shop.activity().subscribe();

    register_dave(&mut shop).await;
    let actor = shop.login("dave", "letmein").await.unwrap();
    assert!(!actor.is_admin);

    let ids: Vec<u64> =
        shop.list_accounts(&AccountFilter::default()).iter().map(|a| a.id).collect();
    let bought = shop.purchase(ids[0]).await.unwrap();
    assert_eq!(bought.status, AccountStatus::Sold);

    shop.add_to_cart(ids[1]).await.unwrap();
    let dup = shop.add_to_cart(ids[1]).await.unwrap_err();
    assert!(dup.is_warning());
    shop.add_to_cart(ids[2]).await.unwrap();
    let receipt = shop.checkout().await.unwrap();
    assert_eq!(receipt.settled, [ids[1], ids[2]]);
    assert_eq!(shop.cart_count(), 0);
    assert!(shop.list_accounts(&AccountFilter::default()).is_empty());

    assert!(shop.logout().await.unwrap());
    assert!(!shop.logout().await.unwrap());

    let mut kinds = Vec::new();
    for _ in 0..5 {
        kinds.push(feed.next_record().await.unwrap().activity.kind());
    }
    assert_eq!(kinds, ["register", "login", "purchase", "checkout", "logout"]);
}

#[tokio::test]
async fn guest_restrictions() {
    let mut shop = Shop::open(&memory_config()).await.unwrap();
    let id = shop.list_accounts(&AccountFilter::default())[0].id;

    let err = shop.add_to_cart(id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);
    assert!(!err.is_fatal());

    let err = shop.checkout().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StateConflict, "empty cart is reported first");

    let err = shop.approve_account(id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);

    assert_eq!(shop.clear_cart().await.unwrap(), ClearOutcome::AlreadyEmpty);
}

#[tokio::test]
async fn admin_reviews_proposals_and_donations() {
    let mut shop = Shop::open(&memory_config()).await.unwrap();
    register_dave(&mut shop).await;
    shop.login("dave", "letmein").await.unwrap();

    let draft = AccountDraft {
        game: GameCode::Fifa,
        rank: "Elite".to_owned(),
        server: "EU".to_owned(),
        price: 250_000,
        description: String::new(),
        image: None,
    };
    let proposed = shop.propose_account(draft).await.unwrap();
    let bank = BankDonation { method: "momo", amount: 500_000, transfer_note: "GS-9", note: "" };
    let donation = shop.donate_bank(&bank).await.unwrap();
    assert_eq!(donation.donor, "dave");

    let err = shop.review_donation(donation.id, Decision::Approve).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);

    shop.login("admin", "admin123").await.unwrap();
    assert!(shop.is_admin());
    assert_eq!(shop.pending_accounts().len(), 1);
    shop.approve_account(proposed).await.unwrap();
    let reviewed = shop.review_donation(donation.id, Decision::Approve).await.unwrap();
    assert_eq!(reviewed.status, DonationStatus::Approved);

    assert_eq!(shop.list_accounts(&AccountFilter::default()).len(), 4);
    assert_eq!(shop.donors()[0].donor, "dave");
    assert!(shop.pending_donations().is_empty());
}

#[tokio::test]
async fn state_and_session_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = disk_config(&dir);

    let sold = {
        let mut shop = Shop::open(&config).await.unwrap();
        register_dave(&mut shop).await;
        shop.login("dave", "letmein").await.unwrap();
        let id = shop.list_accounts(&AccountFilter::default())[0].id;
        shop.purchase(id).await.unwrap();
        id
    };

    let shop = Shop::open(&config).await.unwrap();

    assert_eq!(shop.current_user().map(|u| u.username.as_str()), Some("dave"));
    assert_eq!(shop.state().users.len(), 2, "seeding does not duplicate the admin");
    assert_eq!(shop.account(sold).unwrap().buyer.as_deref(), Some("dave"));
    assert_eq!(shop.list_accounts(&AccountFilter::default()).len(), 2);
}

#[tokio::test]
async fn anonymous_donation_activity() {
    let mut shop = Shop::open(&memory_config()).await.unwrap();
    let mut feed = shop.activity().subscribe();

    let bank = BankDonation { method: "vietcombank", amount: 20_000, transfer_note: "hi", note: "" };
    shop.donate_bank(&bank).await.unwrap();

    let record = feed.next_record().await.unwrap();
    assert_eq!(record.username, "Anonymous");
    assert_eq!(record.activity, Activity::Donation { amount: 20_000, method: "vietcombank".to_owned() });
}
