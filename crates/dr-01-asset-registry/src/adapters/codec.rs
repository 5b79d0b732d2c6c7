use crate::domain::entities::Asset;
use crate::errors::CodecError;
use crate::ports::outbound::RecordSerializer;

/// serde_json encoding of [`Asset`].
///
/// Field names come from the `Asset` serde attributes, so records written
/// by earlier deployments decode unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRecordSerializer;

impl RecordSerializer for JsonRecordSerializer {
    fn encode(&self, asset: &Asset) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(asset)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Asset, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
