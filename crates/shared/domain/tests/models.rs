use chrono::{TimeZone, Utc};
use gshop_domain::{
    Account, AccountStatus, CartItem, Donation, DonationDetails, DonationStatus, ErrorKind,
    GameCode,
};
use serde_json::json;

fn sample_account() -> Account {
    Account {
        id: 42,
        game: GameCode::Valorant,
        rank: "Immortal".to_owned(),
        server: "Asia".to_owned(),
        price: 800_000,
        description: "Full agents".to_owned(),
        image: None,
        status: AccountStatus::Active,
        created_by: "admin".to_owned(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        approved_by: None,
        approved_at: None,
        buyer: None,
        sold_at: None,
    }
}

#[test]
fn game_codes_parse_case_insensitively() {
    assert_eq!("LoL".parse::<GameCode>().unwrap(), GameCode::Lol);
    assert_eq!(" pubg ".parse::<GameCode>().unwrap(), GameCode::Pubg);
    assert!("dota".parse::<GameCode>().is_err());
    assert_eq!(GameCode::Fifa.display_name(), "FIFA");
}

#[test]
fn account_serializes_with_camel_case_and_skips_empty_options() {
    let value = serde_json::to_value(sample_account()).unwrap();
    assert_eq!(value["game"], "valorant");
    assert_eq!(value["status"], "active");
    assert_eq!(value["createdBy"], "admin");
    assert!(value.get("buyer").is_none());
    assert!(value.get("image").is_none());
}

#[test]
fn cart_item_snapshots_display_fields() {
    let account = sample_account();
    let item = CartItem::from(&account);
    assert_eq!(item.id, account.id);
    assert_eq!(item.price, 800_000);
    assert_eq!(item.rank, "Immortal");
}

#[test]
fn donation_reads_flat_tagged_json() {
    let raw = json!({
        "id": 2,
        "type": "bank",
        "method": "momo",
        "amount": 100_000,
        "donor": "alice",
        "status": "approved",
        "createdAt": "2025-01-01T00:00:00Z"
    });

    let donation: Donation = serde_json::from_value(raw).unwrap();
    assert_eq!(donation.status, DonationStatus::Approved);
    assert_eq!(
        donation.details,
        DonationDetails::Bank { transfer_note: String::new(), note: String::new() }
    );

    let back = serde_json::to_value(&donation).unwrap();
    assert_eq!(back["type"], "bank");
    assert_eq!(back["transferNote"], "");
}

#[test]
fn fatal_kinds_are_persistence_and_internal() {
    assert!(ErrorKind::Persistence.is_fatal());
    assert!(ErrorKind::Internal.is_fatal());
    assert!(!ErrorKind::Validation.is_fatal());
    assert_eq!(ErrorKind::StateConflict.to_string(), "state_conflict");
}
