#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract MyTokenProxy {
        function implementation() external view returns (address implementation);

        // Served by the implementation behind the proxy.
        function initialize(address owner, uint256 initialSupply) external;
        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function owner() external view returns (address owner);

        error ERC1967InvalidImplementation(address implementation);

        #[derive(Debug, PartialEq)]
        event Upgraded(address indexed implementation);
        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
    }
);
