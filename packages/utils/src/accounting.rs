use cosmwasm_schema::{cw_serde, QueryResponses};

/// Read-only surface of the source chain accounting oracle.
#[cw_serde]
#[derive(QueryResponses)]
pub enum AccountingOracleQueryMsg {
    #[returns(ChainConfigResponse)]
    ChainConfig {},
    /// Reference slot of the last report that has been processed.
    #[returns(u64)]
    LastProcessingRefSlot {},
}

#[cw_serde]
pub struct ChainConfigResponse {
    pub slots_per_epoch: u64,
    pub seconds_per_slot: u64,
    pub genesis_time: u64,
}

impl ChainConfigResponse {
    /// Wall clock time of the beginning of `slot`.
    pub fn slot_timestamp(&self, slot: u64) -> Option<u64> {
        self.seconds_per_slot
            .checked_mul(slot)
            .and_then(|offset| offset.checked_add(self.genesis_time))
    }
}
