/*!

# Ethereum Connector for EIP-1193 wallets

This library is meant to be used for web applications that need to interact
with the Ethereum wallet the user runs as a browser extension (MetaMask and
friends). It provides a simple and easy-to-use interface over the provider
object those extensions inject into the page.

## Features

- Detect the injected provider
- Request and list the authorized accounts
- Sign plaintext messages and EIP-712 typed data
- Read the connected chain id

## Usage

First locate the injected provider:

```no_run
# fn main() -> Result<(), ethereum_connector::Error> {
let provider = ethereum_connector::provider()?;
# Ok(()) }
```

Only a provider implementing the EIP-1193 `request` entry point will be
returned; the lookup fails with [`Error::ProviderNotFound`] when no wallet
extension injected one, and that failure must be handled before any wallet
operation can be reached.

To connect, ask the wallet for account access. The user is prompted on
first request, later requests are served from cached permissions:

```no_run
# async fn test() -> anyhow::Result<()> {
# let provider = ethereum_connector::provider()?;
let accounts = provider.request_accounts().await?;
# Ok(()) }
```

From there the wallet can sign on behalf of its accounts:

```no_run
# async fn test() -> anyhow::Result<()> {
# let provider = ethereum_connector::provider()?;
let signed = provider.sign_message("hello world").await?;
println!("{} signed by {}", signed.signature, signed.account);
# Ok(()) }
```

[`Error::ProviderNotFound`]: crate::error::Error::ProviderNotFound

*/

pub mod error;
pub mod ffi;
mod provider;

pub use self::{
    error::{Error, ErrorCode, ProviderRpcError},
    provider::{ChainId, Provider, SignedMessage, provider},
};
