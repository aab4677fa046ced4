use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use crate::mock_accounting::{
    ExecuteMsg as AccountingExecuteMsg, InstantiateMsg as AccountingInstantiateMsg,
};
use crate::mock_messenger::{
    ExecuteMsg as MessengerExecuteMsg, QueryMsg as MessengerQueryMsg, SentMessage,
};
use crate::mock_observer::{
    Behaviour, InstantiateMsg as ObserverInstantiateMsg, QueryMsg as ObserverQueryMsg,
};
use utils::observer::TokenRebaseReport;

pub const GENESIS_TIME: u64 = 1_606_824_023;
pub const SECONDS_PER_SLOT: u64 = 12;

// -------------------------------------------------------------------------------------------------
// Contracts
// -------------------------------------------------------------------------------------------------

fn contract_mock_messenger() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        crate::mock_messenger::execute,
        crate::mock_messenger::instantiate,
        crate::mock_messenger::query,
    )
    .with_reply_empty(crate::mock_messenger::reply);

    Box::new(contract)
}

fn contract_mock_accounting() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        crate::mock_accounting::execute,
        crate::mock_accounting::instantiate,
        crate::mock_accounting::query,
    );

    Box::new(contract)
}

fn contract_mock_observer() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        crate::mock_observer::execute,
        crate::mock_observer::instantiate,
        crate::mock_observer::query,
    );

    Box::new(contract)
}

// -------------------------------------------------------------------------------------------------
// Builder
// -------------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct BridgeSuiteBuilder {
    pub owner: Addr,
    pub genesis_time: u64,
    pub seconds_per_slot: u64,
    pub last_processing_ref_slot: u64,
}

impl BridgeSuiteBuilder {
    pub fn new(owner: Addr) -> Self {
        Self {
            owner,
            genesis_time: GENESIS_TIME,
            seconds_per_slot: SECONDS_PER_SLOT,
            last_processing_ref_slot: 0,
        }
    }

    /// Picks the ref slot so the accounting oracle reports `timestamp` as its last report time.
    /// `timestamp` has to be aligned to a slot boundary.
    pub fn with_report_timestamp(mut self, timestamp: u64) -> Self {
        self.last_processing_ref_slot = (timestamp - self.genesis_time) / self.seconds_per_slot;
        self
    }

    pub fn init_bridge(&self, app: &mut App) -> BridgeSuite {
        let messenger_code_id = app.store_code(contract_mock_messenger());
        let accounting_code_id = app.store_code(contract_mock_accounting());
        let observer_code_id = app.store_code(contract_mock_observer());

        let messenger = app
            .instantiate_contract(
                messenger_code_id,
                self.owner.clone(),
                &Empty {},
                &[],
                "Mock Messenger",
                None,
            )
            .unwrap();

        let accounting_oracle = app
            .instantiate_contract(
                accounting_code_id,
                self.owner.clone(),
                &AccountingInstantiateMsg {
                    genesis_time: self.genesis_time,
                    seconds_per_slot: self.seconds_per_slot,
                    last_processing_ref_slot: self.last_processing_ref_slot,
                },
                &[],
                "Mock Accounting Oracle",
                None,
            )
            .unwrap();

        BridgeSuite {
            owner: self.owner.clone(),
            messenger,
            accounting_oracle,
            observer_code_id,
            genesis_time: self.genesis_time,
            seconds_per_slot: self.seconds_per_slot,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Suite
// -------------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct BridgeSuite {
    pub owner: Addr,
    /// Stands in for the messenger on both chains
    pub messenger: Addr,
    pub accounting_oracle: Addr,
    observer_code_id: u64,
    pub genesis_time: u64,
    pub seconds_per_slot: u64,
}

impl BridgeSuite {
    pub fn create_observer(&self, app: &mut App, behaviour: Behaviour) -> Addr {
        app.instantiate_contract(
            self.observer_code_id,
            self.owner.clone(),
            &ObserverInstantiateMsg { behaviour },
            &[],
            "Mock Observer",
            None,
        )
        .unwrap()
    }

    pub fn relay_message(
        &self,
        app: &mut App,
        relayer: &str,
        nonce: u64,
    ) -> AnyResult<AppResponse> {
        app.execute_contract(
            Addr::unchecked(relayer),
            self.messenger.clone(),
            &MessengerExecuteMsg::RelayMessage { nonce },
            &[],
        )
    }

    pub fn set_cross_domain_sender(
        &self,
        app: &mut App,
        sender: Option<&str>,
    ) -> AnyResult<AppResponse> {
        app.execute_contract(
            self.owner.clone(),
            self.messenger.clone(),
            &MessengerExecuteMsg::SetCrossDomainMessageSender {
                sender: sender.map(str::to_owned),
            },
            &[],
        )
    }

    pub fn set_last_processing_ref_slot(
        &self,
        app: &mut App,
        ref_slot: u64,
    ) -> AnyResult<AppResponse> {
        app.execute_contract(
            self.owner.clone(),
            self.accounting_oracle.clone(),
            &AccountingExecuteMsg::SetLastProcessingRefSlot { ref_slot },
            &[],
        )
    }

    pub fn slot_timestamp(&self, ref_slot: u64) -> u64 {
        self.genesis_time + self.seconds_per_slot * ref_slot
    }

    pub fn query_sent_message(&self, app: &App, nonce: u64) -> AnyResult<SentMessage> {
        let msg = app.wrap().query_wasm_smart(
            self.messenger.clone(),
            &MessengerQueryMsg::SentMessage { nonce },
        )?;
        Ok(msg)
    }

    pub fn query_message_nonce(&self, app: &App) -> AnyResult<u64> {
        let nonce = app
            .wrap()
            .query_wasm_smart(self.messenger.clone(), &MessengerQueryMsg::MessageNonce {})?;
        Ok(nonce)
    }

    pub fn query_observer_pushes(
        &self,
        app: &App,
        observer: &Addr,
    ) -> AnyResult<Vec<TokenRebaseReport>> {
        let pushes = app
            .wrap()
            .query_wasm_smart(observer.clone(), &ObserverQueryMsg::Pushes {})?;
        Ok(pushes)
    }
}
