use crate::Shop;
use crate::error::ShopError;
use chrono::Utc;
use gshop_activity::Activity;
use gshop_domain::Donation;
use gshop_donations::{BankDonation, CardDonation, Decision};

impl Shop {
    /// # Errors
    /// Validation failures from the ledger, or a persistence error.
    pub async fn donate_card(&mut self, card: &CardDonation<'_>) -> Result<Donation, ShopError> {
        let actor = self.actor();
        let donation =
            gshop_donations::submit_card(&mut self.state, card, actor.as_ref(), Utc::now())?.clone();
        self.announce_donation(&donation).await?;
        Ok(donation)
    }

    /// # Errors
    /// Validation failures from the ledger, or a persistence error.
    pub async fn donate_bank(&mut self, bank: &BankDonation<'_>) -> Result<Donation, ShopError> {
        let actor = self.actor();
        let donation =
            gshop_donations::submit_bank(&mut self.state, bank, actor.as_ref(), Utc::now())?.clone();
        self.announce_donation(&donation).await?;
        Ok(donation)
    }

    async fn announce_donation(&self, donation: &Donation) -> Result<(), ShopError> {
        let activity =
            Activity::Donation { amount: donation.amount, method: donation.method.clone() };
        self.commit(Some((donation.donor.clone(), activity))).await
    }

    #[must_use]
    pub fn donors(&self) -> Vec<&Donation> {
        gshop_donations::list_approved_donors(&self.state)
    }

    #[must_use]
    pub fn pending_donations(&self) -> Vec<&Donation> {
        gshop_donations::list_pending(&self.state)
    }

    /// # Errors
    /// `Unauthorized`, `NotFound` or `InvalidState` from the ledger, or a persistence error.
    pub async fn review_donation(
        &mut self,
        id: u64,
        decision: Decision,
    ) -> Result<Donation, ShopError> {
        let actor = self.actor();
        let donation =
            gshop_donations::review(&mut self.state, id, decision, actor.as_ref(), Utc::now())?
                .clone();
        self.commit(None).await?;
        Ok(donation)
    }
}
