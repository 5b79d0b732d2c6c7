//! # Invocation Envelope
//!
//! One JSON object per line in, one JSON object per line out.
//!
//! ```text
//! -> {"caller": "Org1MSP", "function": "ReadAsset", "args": ["DLR001"]}
//! <- {"ok": true, "result": {"DEALERID": "DLR001", ...}}
//! <- {"ok": false, "error": {"kind": "NotFound", "message": "..."}}
//! ```
//!
//! Arguments are strings, as the contract API receives them; numeric
//! arguments are parsed here.

use dr_01_asset_registry::adapters::StaticIdentity;
use dr_01_asset_registry::{AssetRegistryApi, AssetRequest, PlaintextPin, RegistryError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

const ENCODE_FAILURE: &str =
    r#"{"ok":false,"error":{"kind":"EncodeError","message":"failed to encode response"}}"#;

/// A decoded invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct Invocation {
    /// Caller's organization (MSP ID), absent for anonymous calls.
    #[serde(default)]
    pub caller: Option<String>,
    /// Operation name, e.g. `CreateAsset`.
    pub function: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Errors raised while turning an invocation into a registry call.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The line is not a valid invocation object.
    #[error("malformed invocation: {0}")]
    Malformed(String),

    /// No operation with this name.
    #[error("unknown function {0:?}")]
    UnknownFunction(String),

    /// Wrong number of positional arguments.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A numeric argument did not parse.
    #[error("argument {name} is not a number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    /// The result could not be rendered as JSON.
    #[error("failed to encode result: {0}")]
    Encode(String),

    /// The registry rejected the call.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl InvocationError {
    /// Stable machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "MalformedInvocation",
            Self::UnknownFunction(_) => "UnknownFunction",
            Self::ArgumentCount { .. } => "InvalidArgumentCount",
            Self::InvalidNumber { .. } => "InvalidInput",
            Self::Encode(_) => "EncodeError",
            Self::Registry(e) => e.kind(),
        }
    }

    fn is_client_error(&self) -> bool {
        match self {
            Self::Registry(e) => e.is_client_error(),
            Self::Encode(_) => false,
            _ => true,
        }
    }
}

/// Response line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Error payload of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

impl Response {
    fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    fn failure(err: &InvocationError) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(ErrorBody {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

/// Handles one input line and returns the response line.
pub fn handle_line(api: &dyn AssetRegistryApi, line: &str) -> String {
    let response = match parse(line).and_then(|inv| dispatch(api, &inv)) {
        Ok(result) => Response::success(result),
        Err(err) => {
            if err.is_client_error() {
                debug!(kind = err.kind(), error = %err, "[node] invocation rejected");
            } else {
                warn!(kind = err.kind(), error = %err, "[node] invocation failed");
            }
            Response::failure(&err)
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|_| ENCODE_FAILURE.to_string())
}

/// Decodes one input line.
pub fn parse(line: &str) -> Result<Invocation, InvocationError> {
    serde_json::from_str(line).map_err(|e| InvocationError::Malformed(e.to_string()))
}

/// Routes an invocation to the registry and renders its result.
pub fn dispatch(api: &dyn AssetRegistryApi, inv: &Invocation) -> Result<Value, InvocationError> {
    let caller = match &inv.caller {
        Some(msp_id) => StaticIdentity::new(msp_id.clone()),
        None => StaticIdentity::anonymous(),
    };
    let args = inv.args.as_slice();

    match inv.function.as_str() {
        // Ungated: any caller, anonymous included, may rewrite the seed
        // accounts, restoring their balances, PINs and deleted records.
        "InitLedger" => {
            expect_args("InitLedger", args, 0)?;
            to_json(&api.init_ledger()?)
        }
        "CreateAsset" => {
            expect_args("CreateAsset", args, 8)?;
            api.create_asset(&caller, asset_request(args)?)?;
            Ok(Value::Null)
        }
        "UpdateAsset" => {
            expect_args("UpdateAsset", args, 8)?;
            api.update_asset(&caller, asset_request(args)?)?;
            Ok(Value::Null)
        }
        "DeleteAsset" => {
            expect_args("DeleteAsset", args, 1)?;
            api.delete_asset(&caller, &args[0])?;
            Ok(Value::Null)
        }
        "ReadAsset" => {
            expect_args("ReadAsset", args, 1)?;
            to_json(&api.read_asset(&args[0])?)
        }
        "AssetExists" => {
            expect_args("AssetExists", args, 1)?;
            to_json(&api.asset_exists(&args[0])?)
        }
        "GetAllAssets" => {
            expect_args("GetAllAssets", args, 0)?;
            to_json(&api.get_all_assets()?)
        }
        "GetAssetHistory" => {
            expect_args("GetAssetHistory", args, 1)?;
            to_json(&api.get_asset_history(&args[0])?)
        }
        "VerifyMPIN" => {
            expect_args("VerifyMPIN", args, 2)?;
            let candidate = PlaintextPin::new(args[1].as_str());
            to_json(&api.verify_credential(&args[0], &candidate)?)
        }
        other => Err(InvocationError::UnknownFunction(other.to_string())),
    }
}

fn expect_args(
    function: &'static str,
    args: &[String],
    expected: usize,
) -> Result<(), InvocationError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(InvocationError::ArgumentCount {
            function,
            expected,
            actual: args.len(),
        })
    }
}

/// `dealerID, msisdn, mpin, balance, status, transAmount, transType, remarks`
fn asset_request(args: &[String]) -> Result<AssetRequest, InvocationError> {
    Ok(AssetRequest {
        dealer_id: args[0].clone(),
        msisdn: args[1].clone(),
        pin: PlaintextPin::new(args[2].as_str()),
        balance: parse_number("balance", &args[3])?,
        status: args[4].clone(),
        txn_amount: parse_number("transAmount", &args[5])?,
        txn_type: args[6].clone(),
        remarks: args[7].clone(),
    })
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, InvocationError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InvocationError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, InvocationError> {
    serde_json::to_value(value).map_err(|e| InvocationError::Encode(e.to_string()))
}
