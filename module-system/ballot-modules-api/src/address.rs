use core::fmt;
use core::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use borsh::{BorshDeserialize, BorshSerialize};
use derive_more::Display;
use thiserror::Error;

use crate::AddressTrait;

const HRP: &str = "vote";

/// Error returned when a string is not a valid bech32m encoded [`Address`].
#[derive(Debug, Error)]
pub enum Bech32ParseError {
    /// The string is not valid bech32.
    #[error("Bech32 error: {0}")]
    Bech32(#[from] bech32::Error),
    /// The human readable part is not the expected one.
    #[error("Wrong HRP: {0}")]
    WrongHRP(String),
    /// The payload is not 32 bytes long.
    #[error("Address must be 32 bytes long, got {0}")]
    WrongLength(usize),
}

/// The human readable form of an [`Address`]: a bech32m string with the `vote` prefix.
#[derive(Debug, PartialEq, Clone, Eq, Display)]
#[display(fmt = "{}", "value")]
pub struct AddressBech32 {
    value: String,
    bytes: [u8; 32],
}

impl From<AddressBech32> for String {
    fn from(addr: AddressBech32) -> Self {
        addr.value
    }
}

/// A 32 byte identity.
#[derive(PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, BorshDeserialize, BorshSerialize)]
pub struct Address {
    addr: [u8; 32],
}

impl AddressTrait for Address {}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.addr
    }
}

impl Address {
    /// Creates a new address containing the given bytes.
    pub const fn new(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl<'a> TryFrom<&'a [u8]> for Address {
    type Error = anyhow::Error;

    fn try_from(addr: &'a [u8]) -> Result<Self, Self::Error> {
        if addr.len() != 32 {
            anyhow::bail!("Address must be 32 bytes long");
        }
        let mut addr_bytes = [0u8; 32];
        addr_bytes.copy_from_slice(addr);
        Ok(Self { addr: addr_bytes })
    }
}

impl FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressBech32::from_str(s)
            .map_err(|e| anyhow::anyhow!(e))
            .map(|addr_bech32| addr_bech32.into())
    }
}

impl From<[u8; 32]> for Address {
    fn from(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", AddressBech32::from(self))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", AddressBech32::from(self).value)
    }
}

impl From<AddressBech32> for Address {
    fn from(addr: AddressBech32) -> Self {
        Self { addr: addr.bytes }
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&AddressBech32::from(self).value)
        } else {
            serde::Serialize::serialize(&self.addr, serializer)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let value: String = serde::Deserialize::deserialize(deserializer)?;
            AddressBech32::from_str(&value)
                .map(Address::from)
                .map_err(serde::de::Error::custom)
        } else {
            let addr = <[u8; 32] as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Address { addr })
        }
    }
}

fn vec_to_bech32m(vec: &[u8], hrp: &str) -> Result<String, bech32::Error> {
    let data = vec.to_base32();
    bech32::encode(hrp, data, Variant::Bech32m)
}

fn bech32m_to_decoded_vec(bech32_addr: &str) -> Result<(String, Vec<u8>), bech32::Error> {
    let (hrp, data, _) = bech32::decode(bech32_addr)?;
    let vec = Vec::<u8>::from_base32(&data)?;
    Ok((hrp, vec))
}

impl From<&Address> for AddressBech32 {
    fn from(addr: &Address) -> Self {
        let value = vec_to_bech32m(&addr.addr, HRP).expect("HRP is a valid bech32 prefix");
        AddressBech32 {
            value,
            bytes: addr.addr,
        }
    }
}

impl From<Address> for AddressBech32 {
    fn from(addr: Address) -> Self {
        AddressBech32::from(&addr)
    }
}

impl TryFrom<String> for AddressBech32 {
    type Error = Bech32ParseError;

    fn try_from(addr: String) -> Result<Self, Bech32ParseError> {
        AddressBech32::from_str(&addr)
    }
}

impl FromStr for AddressBech32 {
    type Err = Bech32ParseError;

    fn from_str(s: &str) -> Result<Self, Bech32ParseError> {
        let (hrp, data) = bech32m_to_decoded_vec(s)?;

        if HRP != hrp {
            return Err(Bech32ParseError::WrongHRP(hrp));
        }

        let bytes: [u8; 32] = data
            .as_slice()
            .try_into()
            .map_err(|_| Bech32ParseError::WrongLength(data.len()))?;

        Ok(AddressBech32 {
            value: s.to_string(),
            bytes,
        })
    }
}
