//! Aggregation pipeline: fan out ledger calls, normalize, classify, fold.

use serde_json::{json, Value};

use crate::assets::fleet;
use crate::assets::normalize;
use crate::assets::types::{AssetsReport, FleetReport, TransactionsReport};
use crate::rpc::{RpcClient, RpcResult};

pub const GET_BALANCE: &str = "suix_getBalance";
pub const GET_OWNED_OBJECTS: &str = "suix_getOwnedObjects";
pub const QUERY_TRANSACTION_BLOCKS: &str = "suix_queryTransactionBlocks";

/// Native coin type passed to `suix_getBalance`.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// Only the first page of owned objects is fetched.
pub const OWNED_OBJECTS_PAGE_SIZE: u32 = 50;

/// Hard cap on the transaction page size, whatever the caller asks for.
pub const MAX_TRANSACTIONS_PAGE_SIZE: u32 = 50;

/// Page size used when the caller gives none.
pub const DEFAULT_TRANSACTIONS_LIMIT: u64 = 20;

/// Stateless read-through over the ledger RPC.
#[derive(Debug, Clone)]
pub struct AssetPipeline {
    rpc: RpcClient,
}

impl AssetPipeline {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Balance and first page of owned objects, fetched concurrently.
    ///
    /// Fails as a whole if either call fails.
    pub async fn get_assets(&self, address: &str) -> RpcResult<AssetsReport> {
        let (balance, objects) = tokio::try_join!(
            self.rpc.call(GET_BALANCE, balance_params(address)),
            self.rpc.call(GET_OWNED_OBJECTS, owned_objects_params(address)),
        )?;

        let mist = normalize::balance_mist(&balance);
        let objects = normalize::owned_objects(&objects);

        tracing::debug!(
            wallet = address,
            balance_mist = mist,
            objects = objects.len(),
            "Assets fetched"
        );

        Ok(AssetsReport {
            wallet: address.to_string(),
            sui_balance: normalize::mist_to_sui(mist as i128),
            sui_balance_mist: mist,
            total_objects: objects.len(),
            objects,
        })
    }

    /// Fleet view derived from [`get_assets`](Self::get_assets).
    pub async fn get_fleet(&self, address: &str) -> RpcResult<FleetReport> {
        let assets = self.get_assets(address).await?;
        Ok(fleet::summarize(assets.wallet, assets.sui_balance, assets.objects))
    }

    /// Most recent transactions sent by `address`, newest first.
    pub async fn get_transactions(&self, address: &str, limit: u64) -> RpcResult<TransactionsReport> {
        let page_size = transactions_page_size(limit);
        let result = self
            .rpc
            .call(QUERY_TRANSACTION_BLOCKS, transactions_params(address, page_size))
            .await?;

        let transactions = normalize::transaction_records(&result);
        Ok(TransactionsReport {
            wallet: address.to_string(),
            transaction_count: transactions.len(),
            transactions,
        })
    }
}

/// Caller limit clamped to `1..=MAX_TRANSACTIONS_PAGE_SIZE`.
pub fn transactions_page_size(limit: u64) -> u32 {
    match u32::try_from(limit) {
        Ok(limit) => limit.clamp(1, MAX_TRANSACTIONS_PAGE_SIZE),
        Err(_) => MAX_TRANSACTIONS_PAGE_SIZE,
    }
}

fn balance_params(address: &str) -> Vec<Value> {
    vec![json!(address), json!(SUI_COIN_TYPE)]
}

fn owned_objects_params(address: &str) -> Vec<Value> {
    vec![
        json!(address),
        json!({
            "options": {
                "showType": true,
                "showContent": true,
                "showDisplay": true,
            }
        }),
        Value::Null,
        json!(OWNED_OBJECTS_PAGE_SIZE),
    ]
}

fn transactions_params(address: &str, page_size: u32) -> Vec<Value> {
    vec![
        json!({
            "filter": { "FromAddress": address },
            "options": { "showInput": true, "showEffects": true },
        }),
        Value::Null,
        json!(page_size),
        json!(true),
    ]
}
