//! Solidity bindings for the contracts read by this crate.

use alloy_sol_types::sol;

use crate::domain::{LedgerResponse, RoundsResponse};

sol! {
    /// Read-only surface of the BNB prediction contract.
    #[sol(rpc)]
    interface IPancakePredictionV2 {
        struct BetInfo {
            uint8 position;
            uint256 amount;
            bool claimed;
        }

        function currentEpoch() external view returns (uint256);
        function intervalSeconds() external view returns (uint256);
        function bufferSeconds() external view returns (uint256);
        function minBetAmount() external view returns (uint256);
        function paused() external view returns (bool);

        function claimable(uint256 epoch, address user) external view returns (bool);

        function ledger(uint256 epoch, address user)
            external
            view
            returns (uint8 position, uint256 amount, bool claimed);

        function rounds(uint256 id)
            external
            view
            returns (
                uint256 epoch,
                uint256 startTimestamp,
                uint256 lockTimestamp,
                uint256 closeTimestamp,
                int256 lockPrice,
                int256 closePrice,
                uint256 lockOracleId,
                uint256 closeOracleId,
                uint256 totalAmount,
                uint256 bullAmount,
                uint256 bearAmount,
                uint256 rewardBaseCalAmount,
                uint256 rewardAmount,
                bool oracleCalled
            );

        function getUserRounds(address user, uint256 cursor, uint256 size)
            external
            view
            returns (uint256[] epochs, BetInfo[] bets, uint256 nextCursor);

        function getUserRoundsLength(address user) external view returns (uint256);
    }
}

sol! {
    /// Multicall3 `aggregate`, deployed at the same address on most EVM chains.
    #[sol(rpc)]
    interface IMulticall3 {
        struct Call {
            address target;
            bytes callData;
        }

        function aggregate(Call[] calls)
            external
            returns (uint256 blockNumber, bytes[] returnData);
    }
}

impl From<IPancakePredictionV2::ledgerReturn> for LedgerResponse {
    fn from(r: IPancakePredictionV2::ledgerReturn) -> Self {
        Self {
            position: r.position,
            amount: r.amount,
            claimed: r.claimed,
        }
    }
}

impl From<IPancakePredictionV2::BetInfo> for LedgerResponse {
    fn from(bet: IPancakePredictionV2::BetInfo) -> Self {
        Self {
            position: bet.position,
            amount: bet.amount,
            claimed: bet.claimed,
        }
    }
}

impl From<IPancakePredictionV2::roundsReturn> for RoundsResponse {
    fn from(r: IPancakePredictionV2::roundsReturn) -> Self {
        Self {
            epoch: r.epoch,
            start_timestamp: r.startTimestamp,
            lock_timestamp: r.lockTimestamp,
            close_timestamp: r.closeTimestamp,
            lock_price: r.lockPrice,
            close_price: r.closePrice,
            lock_oracle_id: r.lockOracleId,
            close_oracle_id: r.closeOracleId,
            total_amount: r.totalAmount,
            bull_amount: r.bullAmount,
            bear_amount: r.bearAmount,
            reward_base_cal_amount: r.rewardBaseCalAmount,
            reward_amount: r.rewardAmount,
            oracle_called: r.oracleCalled,
        }
    }
}
