//! Solidity ABI definitions of the contracts the scripts talk to
#![allow(missing_docs)]

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IErc20Balances {
        function balanceOf(address account) external view returns (uint256 balance);
    }

    #[sol(rpc)]
    contract MyTokenV1 {
        function initialize(address owner, uint256 initialSupply) external;
        function mint(address to, uint256 value) external;

        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);

        function upgradeToAndCall(address newImplementation, bytes calldata data) external payable;
    }

    #[sol(rpc)]
    contract MyTokenV2 {
        function version() external view returns (string version);

        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
    }
}
