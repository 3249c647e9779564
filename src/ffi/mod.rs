pub mod eip1193;

pub use self::eip1193::Eip1193Provider;

/// The request object handed to the provider's `request` method.
///
/// Every wallet RPC goes through `provider.request({ method, params })`.
/// `params` is omitted entirely when a method takes none: some wallets
/// reject an explicit `params: null`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RequestArguments {
    method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<serde_json::Value>,
}

impl RequestArguments {
    /// a request for a method that takes no parameters
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    /// a request carrying the given parameters, passed through to the
    /// provider as-is
    pub fn with_params(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            params: Some(params),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// `eth_requestAccounts`: prompt the user for account access (unless
    /// already granted) and list the authorized accounts.
    pub fn request_accounts() -> Self {
        Self::new("eth_requestAccounts")
    }

    /// `eth_accounts`: list the already-authorized accounts, without
    /// prompting.
    pub fn accounts() -> Self {
        Self::new("eth_accounts")
    }

    /// `eth_chainId`: the id of the chain the provider is connected to.
    pub fn chain_id() -> Self {
        Self::new("eth_chainId")
    }

    /// `personal_sign` over a plaintext message. The parameter order is
    /// message first, signing account second.
    pub fn personal_sign(message: &str, account: &str) -> Self {
        Self::with_params("personal_sign", serde_json::json!([message, account]))
    }

    /// `eth_signTypedData_v4` over an EIP-712 payload the caller has already
    /// serialized to JSON. The parameter order is account first, payload
    /// second.
    pub fn sign_typed_data_v4(account: &str, typed_json: &str) -> Self {
        Self::with_params("eth_signTypedData_v4", serde_json::json!([account, typed_json]))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parameterless_requests_omit_the_params_field() {
        assert_eq!(
            serde_json::to_value(RequestArguments::request_accounts()).unwrap(),
            json! { { "method": "eth_requestAccounts" } }
        );
        assert_eq!(
            serde_json::to_value(RequestArguments::accounts()).unwrap(),
            json! { { "method": "eth_accounts" } }
        );
        assert_eq!(
            serde_json::to_value(RequestArguments::chain_id()).unwrap(),
            json! { { "method": "eth_chainId" } }
        );
    }

    #[test]
    fn personal_sign_params_are_message_then_account() {
        assert_eq!(
            serde_json::to_value(RequestArguments::personal_sign("hello world", "0xAAA")).unwrap(),
            json! { {
                "method": "personal_sign",
                "params": ["hello world", "0xAAA"],
            }}
        );
    }

    #[test]
    fn sign_typed_data_params_are_account_then_payload() {
        assert_eq!(
            serde_json::to_value(RequestArguments::sign_typed_data_v4(
                "0xCCC",
                r#"{"types":{}}"#
            ))
            .unwrap(),
            json! { {
                "method": "eth_signTypedData_v4",
                "params": ["0xCCC", "{\"types\":{}}"],
            }}
        );
    }

    #[test]
    fn custom_params_are_carried_untouched() {
        let args = RequestArguments::with_params(
            "wallet_switchEthereumChain",
            json!([{ "chainId": "0x89" }]),
        );

        assert_eq!(args.method(), "wallet_switchEthereumChain");
        assert_eq!(
            serde_json::to_value(args).unwrap(),
            json! { {
                "method": "wallet_switchEthereumChain",
                "params": [{ "chainId": "0x89" }],
            }}
        );
    }
}
