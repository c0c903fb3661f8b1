//! Serialization and deserialization -related logic.

use borsh::{BorshDeserialize, BorshSerialize};

/// A trait for types that can serialize and deserialize values for storage
/// access.
pub trait StateValueCodec<V> {
    /// Error type that can arise during deserialization.
    type Error: std::fmt::Debug;

    /// Serializes a value into a bytes vector.
    ///
    /// This method **must** not panic as all instances of the value type are
    /// supposed to be serializable.
    fn encode_value(&self, value: &V) -> Vec<u8>;

    /// Tries to deserialize a value from a bytes slice, and returns a
    /// [`Result`] with either the deserialized value or an error.
    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::Error>;

    /// Deserializes a value from a bytes slice.
    ///
    /// # Panics
    /// Panics if the call to [`StateValueCodec::try_decode_value`] fails. Use
    /// [`StateValueCodec::try_decode_value`] if you need to gracefully handle
    /// errors.
    fn decode_value_unwrap(&self, bytes: &[u8]) -> V {
        self.try_decode_value(bytes).unwrap_or_else(|err| {
            panic!(
                "Failed to decode value 0x{}, error: {:?}",
                hex::encode(bytes),
                err
            )
        })
    }
}

/// A trait for types that can serialize keys for storage access.
///
/// Unlike [`StateValueCodec`], this trait does not provide deserialization
/// logic, keys are never read back.
pub trait StateKeyCodec<K> {
    /// Serializes a key into a bytes vector.
    ///
    /// # Determinism
    ///
    /// Equal (as defined by [`Eq`]) keys **MUST** be serialized to the same
    /// byte sequence, independently of the target and runtime environment.
    fn encode_key(&self, key: &K) -> Vec<u8>;
}

/// A trait for types that can serialize keys and values, as well
/// as deserializing values for storage access.
pub trait StateCodec {
    /// The codec used to serialize keys. See [`StateKeyCodec`].
    type KeyCodec;
    /// The codec used to serialize and deserialize values. See
    /// [`StateValueCodec`].
    type ValueCodec;

    /// Returns a reference to the type's key codec.
    fn key_codec(&self) -> &Self::KeyCodec;
    /// Returns a reference to the type's value codec.
    fn value_codec(&self) -> &Self::ValueCodec;
}

/// A [`StateCodec`] that uses [`borsh`] for all keys and values.
#[derive(
    Debug, Default, PartialEq, Eq, Clone, BorshDeserialize, BorshSerialize, serde::Serialize,
    serde::Deserialize,
)]
pub struct BorshCodec;

impl<V> StateValueCodec<V> for BorshCodec
where
    V: BorshSerialize + BorshDeserialize,
{
    type Error = std::io::Error;

    fn encode_value(&self, value: &V) -> Vec<u8> {
        value.try_to_vec().expect("Failed to serialize value")
    }

    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::Error> {
        V::try_from_slice(bytes)
    }
}

impl<K> StateKeyCodec<K> for BorshCodec
where
    K: BorshSerialize,
{
    fn encode_key(&self, key: &K) -> Vec<u8> {
        key.try_to_vec().expect("Failed to serialize key")
    }
}

impl StateCodec for BorshCodec {
    type KeyCodec = Self;
    type ValueCodec = Self;

    fn key_codec(&self) -> &Self::KeyCodec {
        self
    }

    fn value_codec(&self) -> &Self::ValueCodec {
        self
    }
}
