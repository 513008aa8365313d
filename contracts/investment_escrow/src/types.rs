//! # Types
//!
//! Shared data structures used across all modules of the investment escrow.
//!
//! ## Design decisions
//!
//! ### Terms / State split
//!
//! An `Investment` is internally stored as two separate ledger entries:
//!
//! - [`InvestmentTerms`]: written once when the offer is created; never mutated.
//! - [`InvestmentState`]: rewritten on every lifecycle transition.
//!
//! The public API exposes the reconstructed [`Investment`] struct.
//!
//! ### Status as a Finite-State Machine
//!
//! [`InvestmentStatus`] replaces the four independent `active` / `funded` /
//! `repaid` / `withdrawn` flags with a single enum, so combinations such as
//! "repaid and withdrawn" cannot be stored at all:
//!
//! ```text
//! Open ──► Funded ──► Repaid
//!   │          └────► Withdrawn
//!   └──► Cancelled
//! ```
//!
//! `Repaid`, `Withdrawn` and `Cancelled` are terminal. The transition methods
//! on [`InvestmentState`] are the only place the status changes.

use soroban_sdk::{contracttype, Address, String};

use crate::Error;

/// Lifecycle status of an investment offer.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvestmentStatus {
    /// Offer is open and waiting for a startup to fund it.
    Open,
    /// A startup claimed the offer.
    Funded,
    /// The startup repaid; principal minus fee went to the investor.
    Repaid,
    /// The investor reclaimed the principal after the lock period.
    Withdrawn,
    /// The investor cancelled an unfunded offer after its deadline.
    Cancelled,
}

impl InvestmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Repaid | Self::Withdrawn | Self::Cancelled)
    }
}

/// Immutable offer terms, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentTerms {
    pub id: u64,
    pub investor: Address,
    pub amount: i128,
    pub equity_percentage: u32,
    pub valuation: i128,
    pub funding_deadline: u64,
    pub startup_name: String,
    pub description: String,
}

/// Mutable part of an investment, rewritten on each transition.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestmentState {
    /// Set exactly once, when the offer is funded.
    pub startup: Option<Address>,
    pub status: InvestmentStatus,
}

impl InvestmentState {
    pub fn open() -> Self {
        InvestmentState {
            startup: None,
            status: InvestmentStatus::Open,
        }
    }

    /// Open → Funded.
    pub fn fund(&mut self, startup: Address) -> Result<(), Error> {
        match self.status {
            InvestmentStatus::Open => {
                self.startup = Some(startup);
                self.status = InvestmentStatus::Funded;
                Ok(())
            }
            _ => Err(Error::NotOpen),
        }
    }

    /// Funded → Repaid.
    pub fn repay(&mut self) -> Result<(), Error> {
        self.require_funded()?;
        self.status = InvestmentStatus::Repaid;
        Ok(())
    }

    /// Funded → Withdrawn.
    pub fn withdraw(&mut self) -> Result<(), Error> {
        self.require_funded()?;
        self.status = InvestmentStatus::Withdrawn;
        Ok(())
    }

    /// Open → Cancelled.
    pub fn cancel(&mut self) -> Result<(), Error> {
        match self.status {
            InvestmentStatus::Open => {
                self.status = InvestmentStatus::Cancelled;
                Ok(())
            }
            InvestmentStatus::Funded | InvestmentStatus::Repaid | InvestmentStatus::Withdrawn => {
                Err(Error::AlreadyFunded)
            }
            InvestmentStatus::Cancelled => Err(Error::NotOpen),
        }
    }

    /// Succeeds only for a funded record with no terminal outcome yet.
    pub fn require_funded(&self) -> Result<(), Error> {
        match self.status {
            InvestmentStatus::Funded => Ok(()),
            InvestmentStatus::Repaid => Err(Error::AlreadyRepaid),
            InvestmentStatus::Withdrawn => Err(Error::AlreadyWithdrawn),
            InvestmentStatus::Open | InvestmentStatus::Cancelled => Err(Error::NotFunded),
        }
    }
}

/// Full on-chain representation of an investment.
///
/// Used as the public API return type; reconstructed internally from
/// the split `InvestmentTerms` + `InvestmentState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    /// Sequential identifier, starting at 0.
    pub id: u64,
    /// Address that created the offer and escrowed `amount`.
    pub investor: Address,
    /// Address that funded the offer; `None` until funding.
    pub startup: Option<Address>,
    /// Escrowed principal in token units.
    pub amount: i128,
    pub equity_percentage: u32,
    pub valuation: i128,
    /// Ledger timestamp after which the offer can no longer be funded.
    pub funding_deadline: u64,
    pub startup_name: String,
    pub description: String,
    pub status: InvestmentStatus,
}

impl Investment {
    pub fn from_parts(terms: InvestmentTerms, state: InvestmentState) -> Self {
        Investment {
            id: terms.id,
            investor: terms.investor,
            startup: state.startup,
            amount: terms.amount,
            equity_percentage: terms.equity_percentage,
            valuation: terms.valuation,
            funding_deadline: terms.funding_deadline,
            startup_name: terms.startup_name,
            description: terms.description,
            status: state.status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == InvestmentStatus::Open
    }

    pub fn is_funded(&self) -> bool {
        matches!(
            self.status,
            InvestmentStatus::Funded | InvestmentStatus::Repaid | InvestmentStatus::Withdrawn
        )
    }

    pub fn is_repaid(&self) -> bool {
        self.status == InvestmentStatus::Repaid
    }

    pub fn is_withdrawn(&self) -> bool {
        self.status == InvestmentStatus::Withdrawn
    }
}

/// Process-wide, owner-mutable configuration threaded into every lifecycle call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolConfig {
    /// Token contract that carries all escrowed value.
    pub token: Address,
    /// Percentage of a repayment kept by the platform, 0..=5.
    pub platform_fee_percentage: u32,
    /// Timestamp of the last fee change; `None` until the first change.
    pub fee_updated_at: Option<u64>,
    /// Offer lifetime applied at creation.
    pub funding_duration_days: u64,
}
