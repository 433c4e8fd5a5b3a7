use gshop_domain::{Donation, DonationStatus, ShopState};

/// Approved donations, largest first. Equal amounts keep their recorded order.
#[must_use]
pub fn list_approved_donors(state: &ShopState) -> Vec<&Donation> {
    let mut donors: Vec<&Donation> =
        state.donations.iter().filter(|d| d.status == DonationStatus::Approved).collect();
    donors.sort_by(|a, b| b.amount.cmp(&a.amount));
    donors
}

/// The admin review queue, oldest first.
#[must_use]
pub fn list_pending(state: &ShopState) -> Vec<&Donation> {
    state.donations.iter().filter(|d| d.status == DonationStatus::Pending).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gshop_domain::DonationDetails;
    use proptest::prelude::*;

    fn donation(id: u64, amount: u64, status: DonationStatus) -> Donation {
        Donation {
            id,
            details: DonationDetails::Bank { transfer_note: "gift".to_owned(), note: String::new() },
            method: "momo".to_owned(),
            amount,
            donor: format!("donor-{id}"),
            status,
            created_at: Utc::now(),
            reviewed_by: None,
            reviewed_at: None,
        }
    }

    #[test]
    fn only_approved_donations_are_listed() {
        let state = ShopState {
            donations: vec![
                donation(1, 50_000, DonationStatus::Approved),
                donation(2, 900_000, DonationStatus::Pending),
                donation(3, 70_000, DonationStatus::Rejected),
                donation(4, 200_000, DonationStatus::Approved),
            ],
            ..ShopState::default()
        };

        let ids: Vec<u64> = list_approved_donors(&state).iter().map(|d| d.id).collect();
        assert_eq!(ids, [4, 1]);
        assert_eq!(list_pending(&state)[0].id, 2);
    }

    proptest! {
        #[test]
        fn donors_sorted_descending_and_stable(amounts in proptest::collection::vec(0u64..5, 0..40)) {
            let state = ShopState {
                donations: amounts
                    .iter()
                    .zip(0u64..)
                    .map(|(&amount, id)| donation(id, amount, DonationStatus::Approved))
                    .collect(),
                ..ShopState::default()
            };

            let board = list_approved_donors(&state);
            prop_assert_eq!(board.len(), amounts.len());
            for pair in board.windows(2) {
                prop_assert!(pair[0].amount >= pair[1].amount);
                if pair[0].amount == pair[1].amount {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }
}
