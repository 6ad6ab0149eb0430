//! Scripted contract transports.

use std::collections::VecDeque;
use std::sync::Mutex;

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;

use predictions_data::domain::LedgerResponse;
use predictions_data::error::{ContractError, Result};
use predictions_data::port::outbound::contract::{PredictionContract, UserRoundsPage};
use predictions_data::port::outbound::multicall::{Call, Multicall};

pub const ACCOUNT: Address = Address::repeat_byte(0xab);
pub const PREDICTION: Address = Address::repeat_byte(0x18);

/// ABI-encode a return value the way the node would hand it back.
pub fn returns<C: SolCall>(ret: &C::Return) -> Bytes {
    C::abi_encode_returns(ret).into()
}

pub fn reverted(method: &'static str) -> ContractError {
    ContractError::Reverted {
        method,
        reason: "execution reverted".into(),
    }
}

pub fn unreachable_node(method: &'static str) -> ContractError {
    ContractError::Call {
        method,
        reason: "connection refused".into(),
    }
}

/// Multicall that answers each batch from a queue and records what was sent.
#[derive(Default)]
pub struct ScriptedMulticall {
    responses: Mutex<VecDeque<std::result::Result<Vec<Bytes>, ContractError>>>,
    batches: Mutex<Vec<Vec<Call>>>,
}

impl ScriptedMulticall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, results: Vec<Bytes>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(results));
        self
    }

    pub fn fail(self, err: ContractError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn batches(&self) -> Vec<Vec<Call>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl<'a> Multicall for &'a ScriptedMulticall {
    async fn aggregate(&self, calls: Vec<Call>) -> Result<Vec<Bytes>> {
        self.batches.lock().unwrap().push(calls);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected multicall batch");
        Ok(next?)
    }
}

/// Prediction contract with fixed answers that records page requests.
pub struct MockPredictionContract {
    length: std::result::Result<U256, ContractError>,
    page: std::result::Result<UserRoundsPage, ContractError>,
    pages_requested: Mutex<Vec<(U256, U256)>>,
}

impl MockPredictionContract {
    pub fn new(length: u64) -> Self {
        Self {
            length: Ok(U256::from(length)),
            page: Ok(UserRoundsPage::default()),
            pages_requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_length_error(mut self, err: ContractError) -> Self {
        self.length = Err(err);
        self
    }

    pub fn with_page(mut self, entries: &[(u64, LedgerResponse)]) -> Self {
        let epochs = entries.iter().map(|(epoch, _)| U256::from(*epoch)).collect();
        let ledgers = entries.iter().map(|(_, ledger)| *ledger).collect();
        self.page = Ok(UserRoundsPage {
            epochs,
            ledgers,
            cursor: U256::from(entries.len()),
        });
        self
    }

    pub fn with_raw_page(mut self, page: UserRoundsPage) -> Self {
        self.page = Ok(page);
        self
    }

    pub fn with_page_error(mut self, err: ContractError) -> Self {
        self.page = Err(err);
        self
    }

    /// `(cursor, size)` of every `getUserRounds` call.
    pub fn pages_requested(&self) -> Vec<(U256, U256)> {
        self.pages_requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionContract for MockPredictionContract {
    async fn get_user_rounds(
        &self,
        _account: Address,
        cursor: U256,
        size: U256,
    ) -> std::result::Result<UserRoundsPage, ContractError> {
        self.pages_requested.lock().unwrap().push((cursor, size));
        self.page.clone()
    }

    async fn get_user_rounds_length(
        &self,
        _account: Address,
    ) -> std::result::Result<U256, ContractError> {
        self.length.clone()
    }
}

pub fn ledger(position: u8, amount: u64, claimed: bool) -> LedgerResponse {
    LedgerResponse {
        position,
        amount: U256::from(amount),
        claimed,
    }
}
