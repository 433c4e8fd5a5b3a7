use chrono::{Duration, Utc};
use gshop_domain::{Actor, DonationDetails, DonationStatus, ErrorKind, ShopState};
use gshop_donations::*;

fn admin() -> Actor {
    Actor { user_id: 1, username: "admin".to_owned(), is_admin: true }
}

fn carol() -> Actor {
    Actor { user_id: 4, username: "carol".to_owned(), is_admin: false }
}

const CARD: CardDonation<'static> =
    CardDonation { card_type: "viettel", amount: 50_000, serial: "1234567890", code: "0987654321" };

const BANK: BankDonation<'static> =
    BankDonation { method: "momo", amount: 100_000, transfer_note: "GS-1001", note: "keep it up" };

#[test]
fn card_donation_is_recorded_pending() {
    let mut state = ShopState::default();

    let donation = submit_card(&mut state, &CARD, Some(&carol()), Utc::now()).unwrap();

    assert_eq!(donation.status, DonationStatus::Pending);
    assert_eq!(donation.donor, "carol");
    assert_eq!(donation.method, "viettel");
    assert_eq!(donation.amount, 50_000);
    assert!(matches!(&donation.details, DonationDetails::Card { serial, .. } if serial == "1234567890"));
    assert!(list_approved_donors(&state).is_empty());
    assert_eq!(list_pending(&state).len(), 1);
}

#[test]
fn guests_donate_anonymously() {
    let mut state = ShopState::default();
    let donation = submit_bank(&mut state, &BANK, None, Utc::now()).unwrap();
    assert_eq!(donation.donor, "Anonymous");
}

#[test]
fn card_validation() {
    let mut state = ShopState::default();
    let now = Utc::now();

    let zero = CardDonation { amount: 0, serial: "", ..CARD };
    match submit_card(&mut state, &zero, None, now).unwrap_err() {
        DonationError::MissingFields { message, .. } => assert_eq!(message, "amount, serial"),
        other => panic!("unexpected error: {other}"),
    }

    let short = CardDonation { code: "123456789", ..CARD };
    let err = submit_card(&mut state, &short, None, now).unwrap_err();
    assert!(matches!(err, DonationError::InvalidCardDetails { min_len: 10, .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(state.donations.is_empty());
}

#[test]
fn bank_validation() {
    let mut state = ShopState::default();
    let now = Utc::now();

    let blank = BankDonation { transfer_note: "  ", note: "", ..BANK };
    assert!(matches!(
        submit_bank(&mut state, &blank, None, now).unwrap_err(),
        DonationError::MissingFields { .. }
    ));

    let small = BankDonation { amount: 9_999, ..BANK };
    let err = submit_bank(&mut state, &small, None, now).unwrap_err();
    assert!(matches!(err, DonationError::BelowMinimum { amount: 9_999, minimum: 10_000, .. }));

    let exact = BankDonation { amount: 10_000, note: "", ..BANK };
    submit_bank(&mut state, &exact, None, now).unwrap();
    assert_eq!(state.donations.len(), 1);
}

#[test]
fn review_is_admin_only_and_single_shot() {
    let mut state = ShopState::default();
    let now = Utc::now();
    let id = submit_bank(&mut state, &BANK, Some(&carol()), now).unwrap().id;

    let err = review(&mut state, id, Decision::Approve, Some(&carol()), now).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);
    let err = review(&mut state, id + 1, Decision::Approve, Some(&admin()), now).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let later = now + Duration::hours(1);
    let approved = review(&mut state, id, Decision::Approve, Some(&admin()), later).unwrap();
    assert_eq!(approved.status, DonationStatus::Approved);
    assert_eq!(approved.reviewed_by.as_deref(), Some("admin"));
    assert_eq!(approved.reviewed_at, Some(later));

    let err = review(&mut state, id, Decision::Reject, Some(&admin()), later).unwrap_err();
    assert!(matches!(err, DonationError::InvalidState { status: DonationStatus::Approved, .. }));
    assert_eq!(err.kind(), ErrorKind::StateConflict);
}

#[test]
fn donor_board_orders_by_amount() {
    let mut state = ShopState::default();
    let now = Utc::now();
    let mut ids = Vec::new();
    for amount in [50_000, 200_000, 50_000, 75_000] {
        let bank = BankDonation { amount, ..BANK };
        ids.push(submit_bank(&mut state, &bank, Some(&carol()), now).unwrap().id);
    }
    let rejected = submit_bank(&mut state, &BankDonation { amount: 999_999, ..BANK }, None, now)
        .unwrap()
        .id;
    for &id in &ids {
        review(&mut state, id, Decision::Approve, Some(&admin()), now).unwrap();
    }
    review(&mut state, rejected, Decision::Reject, Some(&admin()), now).unwrap();

    let board: Vec<u64> = list_approved_donors(&state).iter().map(|d| d.id).collect();

    assert_eq!(board, [ids[1], ids[3], ids[0], ids[2]]);
    assert!(list_pending(&state).is_empty());
}
