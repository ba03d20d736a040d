use std::fmt;

use log::info;
use thiserror::Error;

const ADDRESS_HEX_DIGITS: usize = 40;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("enter a wallet address")]
    Empty,
    #[error("wallet address must start with 0x")]
    MissingPrefix,
    #[error("wallet address must have 40 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("wallet address contains invalid character {0:?}")]
    InvalidCharacter(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AddressError::Empty);
        }

        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidCharacter(bad));
        }
        if digits.len() != ADDRESS_HEX_DIGITS {
            return Err(AddressError::InvalidLength(digits.len()));
        }

        Ok(Self(format!("0x{digits}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `0x1234...abcd`
    pub fn short(&self) -> String {
        let head = &self.0[..6];
        let tail = &self.0[self.0.len() - 4..];
        format!("{head}...{tail}")
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    pub address: WalletAddress,
}

#[derive(Clone, Debug, Default)]
pub struct AuthGate {
    session: Option<WalletSession>,
}

impl AuthGate {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&WalletSession> {
        self.session.as_ref()
    }

    pub fn login(&mut self, address: &str) -> Result<&WalletSession, AddressError> {
        let address = WalletAddress::parse(address)?;
        info!("wallet {} connected", address.short());
        Ok(self.session.insert(WalletSession { address }))
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!("wallet {} disconnected", session.address.short());
        }
    }
}
