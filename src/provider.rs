use crate::{
    error::{Error, ProviderRpcError},
    ffi::{self, RequestArguments},
};
use core::fmt;
use serde::Serialize as _;
use wasm_bindgen::JsValue;

/// The chain identifier as reported by the provider through `eth_chainId`.
///
/// Providers encode it as a string, conventionally a hex-prefixed numeral
/// (`"0x1"` for Ethereum mainnet). The raw string is kept exactly as
/// received; [`ChainId::number`] decodes the conventional encodings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(String);

impl ChainId {
    /// the chain id exactly as the provider returned it
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// decode the numeric chain id, accepting the hex-prefixed form the
    /// wallets emit as well as a plain decimal numeral
    pub fn number(&self) -> Option<u64> {
        if let Some(hex) = self.0.strip_prefix("0x").or_else(|| self.0.strip_prefix("0X")) {
            u64::from_str_radix(hex, 16).ok()
        } else {
            self.0.parse().ok()
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signature produced by the wallet, paired with the account that signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    pub signature: String,
    pub account: String,
}

#[derive(Clone, PartialEq)]
pub struct Provider {
    eip1193: ffi::Eip1193Provider,
}

/// Locate the EIP-1193 provider the wallet extension injected at
/// `window.ethereum`.
///
/// This is the only place [`Error::ProviderNotFound`] is raised: once a
/// [`Provider`] is in hand, the capability exists and every operation on it
/// talks to the wallet directly.
///
/// Extensions inject the provider while the page is loading, so an early
/// call may fail even though the user has a wallet installed. The lookup
/// goes back to `window` every time rather than trusting the value captured
/// at module start, which makes it safe to simply call again later.
pub fn provider() -> Result<Provider, Error> {
    ffi::eip1193::ETHEREUM.with(|injected| {
        // Re-read window.ethereum in case the extension injected it after
        // the initial snapshot.
        let fresh =
            js_sys::Reflect::get(&js_sys::global(), &wasm_bindgen::JsValue::from_str("window"))
                .ok()
                .and_then(|window| {
                    js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("ethereum")).ok()
                });

        if let Some(value) = fresh {
            if looks_like_eip1193_provider(&value) {
                return Ok(Provider::new(ffi::Eip1193Provider::from(value)));
            }
        }

        injected
            .clone()
            .map(Provider::new)
            .ok_or(Error::ProviderNotFound)
    })
}

fn looks_like_eip1193_provider(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }

    js_sys::Reflect::get(value, &JsValue::from_str("request"))
        .ok()
        .map(|v| v.is_function())
        .unwrap_or(false)
}

impl Provider {
    fn new(eip1193: ffi::Eip1193Provider) -> Self {
        Provider { eip1193 }
    }

    /// whether the injected provider advertises itself as MetaMask
    pub fn is_metamask(&self) -> bool {
        self.eip1193.is_metamask().unwrap_or(false)
    }

    /// whether the provider reports being connected to its chain
    ///
    /// Providers that do not implement `isConnected` report `false` here.
    pub fn connected(&self) -> bool {
        self.eip1193.is_connected().unwrap_or(false)
    }

    /// Submit a raw RPC request to the provider.
    ///
    /// The typed operations below all go through here; this is public so
    /// applications can reach wallet methods this crate does not wrap (chain
    /// switching, watching assets, ...). The resolved value is returned
    /// undecoded.
    pub async fn request(&self, args: RequestArguments) -> Result<JsValue, Error> {
        // json_compatible keeps JSON maps as plain objects rather than ES
        // Maps, which is the shape wallets expect for params.
        let args = args
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|encode_error| {
                Error::UnexpectedResponse(format!(
                    "Couldn't encode the request arguments: {encode_error}"
                ))
            })?;

        self.eip1193.request(args).await.map_err(rpc_error)
    }

    /// Ask the wallet for account access, prompting the user if this page
    /// was not already authorized, and list the accounts the user granted.
    ///
    /// The list can be empty and its order is the wallet's own; the first
    /// entry is conventionally the active account.
    pub async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        let accounts = self.request(RequestArguments::request_accounts()).await?;
        decode_accounts(accounts)
    }

    /// List the accounts this page is already authorized to see, without
    /// prompting the user. Returns an empty list when the page was never
    /// connected.
    pub async fn accounts(&self) -> Result<Vec<String>, Error> {
        let accounts = self.request(RequestArguments::accounts()).await?;
        decode_accounts(accounts)
    }

    /// the id of the chain the provider is currently connected to
    pub async fn chain_id(&self) -> Result<ChainId, Error> {
        let id = self.request(RequestArguments::chain_id()).await?;

        match id.as_string() {
            Some(id) => Ok(ChainId(id)),
            None => Err(Error::UnexpectedResponse(format!(
                "Invalid chain id: {id:?}"
            ))),
        }
    }

    /// Sign a plaintext message with `personal_sign`.
    ///
    /// Account access is requested anew on every call and the first account
    /// the wallet returns is the signer, so the user may see two prompts in
    /// a row (one for access, one for the signature). The message is passed
    /// through to the wallet unmodified.
    pub async fn sign_message(&self, message: &str) -> Result<SignedMessage, Error> {
        let accounts = self.request_accounts().await?;
        let Some(account) = accounts.into_iter().next() else {
            return Err(Error::UnexpectedResponse(
                "The provider returned no account to sign with".to_owned(),
            ));
        };

        let signature = self
            .request(RequestArguments::personal_sign(message, &account))
            .await?;

        match signature.as_string() {
            Some(signature) => Ok(SignedMessage { signature, account }),
            None => Err(Error::UnexpectedResponse(format!(
                "Invalid signature: {signature:?}"
            ))),
        }
    }

    /// Sign an EIP-712 payload with `eth_signTypedData_v4`.
    ///
    /// `typed_json` is the typed-data document already serialized to JSON by
    /// the caller; no schema validation happens here. The wallet decides
    /// whether the given account may sign.
    pub async fn sign_typed_data(
        &self,
        account: &str,
        typed_json: &str,
    ) -> Result<SignedMessage, Error> {
        let signature = self
            .request(RequestArguments::sign_typed_data_v4(account, typed_json))
            .await?;

        match signature.as_string() {
            Some(signature) => Ok(SignedMessage {
                signature,
                account: account.to_owned(),
            }),
            None => Err(Error::UnexpectedResponse(format!(
                "Invalid signature: {signature:?}"
            ))),
        }
    }
}

fn decode_accounts(accounts: JsValue) -> Result<Vec<String>, Error> {
    serde_wasm_bindgen::from_value(accounts.clone()).map_err(|decode_error| {
        Error::UnexpectedResponse(format!(
            "Couldn't decode the account list: {decode_error} ({accounts:?})"
        ))
    })
}

fn rpc_error(error: JsValue) -> Error {
    match serde_wasm_bindgen::from_value::<ProviderRpcError>(error.clone()) {
        Ok(rpc_error) => Error::Rpc(rpc_error),
        Err(_) => Error::UnexpectedResponse(format!("{error:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_is_kept_as_received() {
        let id = ChainId("0x1".to_owned());

        assert_eq!(id.as_str(), "0x1");
        assert_eq!(id.to_string(), "0x1");
    }

    #[test]
    fn chain_id_number_decodes_the_conventional_encodings() {
        assert_eq!(ChainId("0x1".to_owned()).number(), Some(1));
        assert_eq!(ChainId("0x89".to_owned()).number(), Some(137));
        assert_eq!(ChainId("0XAA36A7".to_owned()).number(), Some(11_155_111));
        assert_eq!(ChainId("11155111".to_owned()).number(), Some(11_155_111));
        assert_eq!(ChainId("mainnet".to_owned()).number(), None);
        assert_eq!(ChainId("0x".to_owned()).number(), None);
    }
}
