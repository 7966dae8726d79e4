//local shortcuts

//third-party shortcuts
use bincode::Options;
use serde::{Serialize, Deserialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Serializes a message.
///
/// Returns an empty buffer if serialization fails (the failure is logged). An empty buffer never deserializes into
/// a valid message, so receivers drop it.
pub fn ser_msg<T: Serialize>(message_object: &T) -> Vec<u8>
{
    match bincode::DefaultOptions::new().serialize(message_object)
    {
        Ok(bytes) => bytes,
        Err(err) =>
        {
            tracing::error!(?err, "failed serializing message");
            Vec::default()
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Deserializes a message.
pub fn deser_msg<'a, T: Deserialize<'a>>(message: &'a [u8]) -> Option<T>
{
    match bincode::DefaultOptions::new().deserialize::<T>(message)
    {
        Ok(result) => Some(result),
        _          => None
    }
}

//-------------------------------------------------------------------------------------------------------------------
