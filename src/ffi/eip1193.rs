use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_namespace = ["window"], js_name = "ethereum")]
    pub static ETHEREUM: Option<Eip1193Provider>;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, PartialEq)]
    pub type Eip1193Provider;

    /// Set to `true` by MetaMask, and by wallets that want dApps to treat
    /// them like MetaMask. Purely informational: nothing in the provider
    /// contract depends on it.
    #[wasm_bindgen(method, getter, js_name = "isMetaMask")]
    pub fn is_metamask(this: &Eip1193Provider) -> Option<bool>;

    /// Returns `true` while the provider can service RPC requests to the
    /// chain it currently reports through `eth_chainId`. Not every injected
    /// provider implements this method, so the call may throw.
    #[wasm_bindgen(method, catch, js_name = "isConnected")]
    pub fn is_connected(this: &Eip1193Provider) -> Result<bool, JsValue>;

    /// The single entry point of the EIP-1193 contract: submits an RPC
    /// request described by a `{ method, params }` object and resolves with
    /// whatever the wallet produced for it.
    ///
    /// Rejections carry a `ProviderRpcError` object (`code`, `message` and
    /// an optional `data` payload). `4001` means the user dismissed the
    /// prompt; the `49xx` range reports connection state. See
    /// [EIP-1193](https://eips.ethereum.org/EIPS/eip-1193#request) for the
    /// full contract.
    #[wasm_bindgen(method, catch)]
    pub async fn request(this: &Eip1193Provider, args: JsValue) -> Result<JsValue, JsValue>;
}
