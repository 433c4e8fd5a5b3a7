use crate::error::{DatabaseError, DatabaseErrorExt};
use chrono::Duration;
use gshop_domain::config::SeedConfig;
use gshop_domain::{
    Account, AccountStatus, Donation, DonationDetails, DonationStatus, GameCode, ShopState,
    Timestamp, User,
};
use gshop_kernel::security::password::hash_password;
use std::fmt;

/// A unit of first-run bootstrap data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStep {
    AdminUser,
    SampleAccounts,
    SampleDonations,
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AdminUser => "admin_user",
            Self::SampleAccounts => "sample_accounts",
            Self::SampleDonations => "sample_donations",
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub applied: Vec<SeedStep>,
    pub skipped: Vec<SeedStep>,
}

impl SeedReport {
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Applies every seed step whose target collection is still empty.
#[derive(Debug)]
pub(crate) struct SeedRunner<'a> {
    config: &'a SeedConfig,
    now: Timestamp,
}

impl<'a> SeedRunner<'a> {
    pub(crate) const fn new(config: &'a SeedConfig, now: Timestamp) -> Self {
        Self { config, now }
    }

    pub(crate) fn run(&self, state: &mut ShopState) -> Result<SeedReport, DatabaseError> {
        let mut report = SeedReport::default();

        if state.users.iter().any(|u| u.username == self.config.admin_username) {
            report.skipped.push(SeedStep::AdminUser);
        } else {
            let id = state.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
            state.users.push(self.admin(id)?);
            report.applied.push(SeedStep::AdminUser);
        }

        if !self.config.sample_data || !state.accounts.is_empty() {
            report.skipped.push(SeedStep::SampleAccounts);
        } else {
            state.accounts.extend(self.sample_accounts());
            report.applied.push(SeedStep::SampleAccounts);
        }

        if !self.config.sample_data || !state.donations.is_empty() {
            report.skipped.push(SeedStep::SampleDonations);
        } else {
            state.donations.extend(self.sample_donations());
            report.applied.push(SeedStep::SampleDonations);
        }

        Ok(report)
    }

    fn admin(&self, id: u64) -> Result<User, DatabaseError> {
        Ok(User {
            id,
            username: self.config.admin_username.clone(),
            email: self.config.admin_email.clone(),
            password_hash: hash_password(&self.config.admin_password)
                .context("Hashing the seeded admin password")?,
            is_admin: true,
            created_at: self.now,
        })
    }

    fn sample_accounts(&self) -> Vec<Account> {
        let listing = |id, game, rank: &str, server: &str, price, description: &str| Account {
            id,
            game,
            rank: rank.to_owned(),
            server: server.to_owned(),
            price,
            description: description.to_owned(),
            image: None,
            status: AccountStatus::Active,
            created_by: self.config.admin_username.clone(),
            created_at: self.now,
            approved_by: None,
            approved_at: None,
            buyer: None,
            sold_at: None,
        };

        vec![
            listing(
                1,
                GameCode::Lol,
                "Diamond IV",
                "VN",
                500_000,
                "League of Legends account at Diamond IV, plenty of skins, never penalized.",
            ),
            listing(
                2,
                GameCode::Valorant,
                "Immortal",
                "Asia",
                800_000,
                "Valorant account at Immortal with many weapon skins and strong stats.",
            ),
            listing(
                3,
                GameCode::Pubg,
                "Crown",
                "Asia",
                300_000,
                "PUBG account at Crown with rare outfits and weapon skins.",
            ),
        ]
    }

    fn sample_donations(&self) -> Vec<Donation> {
        let bank = || DonationDetails::Bank { transfer_note: String::new(), note: String::new() };
        let gift = |id, details, method: &str, amount, donor: &str, days_ago| Donation {
            id,
            details,
            method: method.to_owned(),
            amount,
            donor: donor.to_owned(),
            status: DonationStatus::Approved,
            created_at: self.now - Duration::days(days_ago),
            reviewed_by: Some(self.config.admin_username.clone()),
            reviewed_at: Some(self.now),
        };

        vec![
            gift(1, bank(), "momo", 100_000, "Nguyễn Văn A", 2),
            gift(
                2,
                DonationDetails::Card { serial: String::new(), code: String::new() },
                "viettel",
                50_000,
                "Trần Thị B",
                1,
            ),
            gift(3, bank(), "vietcombank", 200_000, "Lê Văn C", 0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn config() -> SeedConfig {
        SeedConfig { admin_password: "pw".to_owned(), ..SeedConfig::default() }
    }

    #[test]
    fn seeds_an_empty_state() {
        let config = config();
        let mut state = ShopState::default();

        let report = SeedRunner::new(&config, Utc::now()).run(&mut state).unwrap();

        assert_eq!(
            report.applied,
            [SeedStep::AdminUser, SeedStep::SampleAccounts, SeedStep::SampleDonations]
        );
        assert!(state.users[0].is_admin);
        assert_ne!(state.users[0].password_hash, "pw");
        assert_eq!(state.accounts.len(), 3);
        assert!(state.accounts.iter().all(Account::is_active));
        let mut amounts: Vec<u64> = state.donations.iter().map(|d| d.amount).collect();
        amounts.sort_unstable();
        assert_eq!(amounts, [50_000, 100_000, 200_000]);
    }

    #[test]
    fn second_run_is_a_noop() {
        let config = config();
        let mut state = ShopState::default();
        let runner = SeedRunner::new(&config, Utc::now());
        runner.run(&mut state).unwrap();
        let before = state.clone();

        let report = runner.run(&mut state).unwrap();

        assert!(report.is_noop());
        assert_eq!(report.skipped.len(), 3);
        assert_eq!(state, before);
    }

    #[test]
    fn sample_data_can_be_disabled() {
        let config = SeedConfig { sample_data: false, ..config() };
        let mut state = ShopState::default();

        let report = SeedRunner::new(&config, Utc::now()).run(&mut state).unwrap();

        assert_eq!(report.applied, [SeedStep::AdminUser]);
        assert!(state.accounts.is_empty());
        assert!(state.donations.is_empty());
    }
}
