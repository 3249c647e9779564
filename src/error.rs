/// Error codes assigned by EIP-1193. Providers reuse the JSON-RPC error
/// object for everything else (user mistakes, node failures, EIP-1474
/// server errors such as `-32603`); those codes are preserved in
/// [`ErrorCode::Unknown`] rather than reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum ErrorCode {
    #[error("The user rejected the request.")]
    UserRejectedRequest,
    #[error("The requested method and/or account has not been authorized by the user.")]
    Unauthorized,
    #[error("The provider does not support the requested method.")]
    UnsupportedMethod,
    #[error("The provider is disconnected from all chains.")]
    Disconnected,
    #[error("The provider is not connected to the requested chain.")]
    ChainDisconnected,
    #[error("Unknown error code `{0}'")]
    Unknown(i64),
}

/// The rejection payload of a provider `request` call, as specified by
/// EIP-1193. `data` is whatever extra payload the wallet attached (a nested
/// RPC error, the original cause); it is carried through untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error, serde::Deserialize)]
#[error("{code} ({message})")]
pub struct ProviderRpcError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// The only failure raised by this crate itself is
/// [`Error::ProviderNotFound`]. Everything else originates in the wallet and
/// is surfaced as received: no retries, no remapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No EIP-1193 provider is injected at `window.ethereum`, either because
    /// no wallet extension is installed or because it has not run yet.
    #[error("No injected Ethereum provider found at `window.ethereum'")]
    ProviderNotFound,
    /// The provider rejected the request with a well-formed
    /// [`ProviderRpcError`].
    #[error(transparent)]
    Rpc(#[from] ProviderRpcError),
    /// The provider resolved or rejected with a value this crate could not
    /// decode; the value is carried stringified.
    #[error("Unexpected provider response: {0}")]
    UnexpectedResponse(String),
}

impl<'de> serde::Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = ErrorCode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "Expecting an integer ErrorCode")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match v {
                    4001 => Ok(ErrorCode::UserRejectedRequest),
                    4100 => Ok(ErrorCode::Unauthorized),
                    4200 => Ok(ErrorCode::UnsupportedMethod),
                    4900 => Ok(ErrorCode::Disconnected),
                    4901 => Ok(ErrorCode::ChainDisconnected),
                    unknown => Ok(ErrorCode::Unknown(unknown)),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_i64(v as i64)
            }
        }

        deserializer.deserialize_i64(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_code_json() {
        assert_eq!(
            serde_json::from_value::<ErrorCode>(json! { 4001 }).unwrap(),
            ErrorCode::UserRejectedRequest
        );
        assert_eq!(
            serde_json::from_value::<ErrorCode>(json! { 4100 }).unwrap(),
            ErrorCode::Unauthorized
        );
        assert_eq!(
            serde_json::from_value::<ErrorCode>(json! { 4200 }).unwrap(),
            ErrorCode::UnsupportedMethod
        );
        assert_eq!(
            serde_json::from_value::<ErrorCode>(json! { 4900 }).unwrap(),
            ErrorCode::Disconnected
        );
        assert_eq!(
            serde_json::from_value::<ErrorCode>(json! { 4901 }).unwrap(),
            ErrorCode::ChainDisconnected
        );
        assert_eq!(
            serde_json::from_value::<ErrorCode>(json! { -32603 }).unwrap(),
            ErrorCode::Unknown(-32603)
        );
    }

    #[test]
    fn provider_rpc_error_json() {
        assert_eq!(
            serde_json::from_value::<ProviderRpcError>(json! { {
                "code": 4001,
                "message": "User rejected the request.",
            }})
            .unwrap(),
            ProviderRpcError {
                code: ErrorCode::UserRejectedRequest,
                message: "User rejected the request.".to_owned(),
                data: None,
            }
        );

        assert_eq!(
            serde_json::from_value::<ProviderRpcError>(json! { {
                "code": 4900,
                "message": "The provider is disconnected.",
            }})
            .unwrap(),
            ProviderRpcError {
                code: ErrorCode::Disconnected,
                message: "The provider is disconnected.".to_owned(),
                data: None,
            }
        );
    }

    #[test]
    fn provider_rpc_error_data_is_carried_untouched() {
        assert_eq!(
            serde_json::from_value::<ProviderRpcError>(json! { {
                "code": -32603,
                "message": "Internal JSON-RPC error.",
                "data": { "originalError": { "code": 3, "message": "execution reverted" } },
            }})
            .unwrap(),
            ProviderRpcError {
                code: ErrorCode::Unknown(-32603),
                message: "Internal JSON-RPC error.".to_owned(),
                data: Some(json! { {
                    "originalError": { "code": 3, "message": "execution reverted" },
                }}),
            }
        );
    }
}
