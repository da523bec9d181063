#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract MyTokenV1 {
        function initialize(address owner, uint256 initialSupply) external;
        function mint(address to, uint256 value) external;

        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256 allowance);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        function owner() external view returns (address owner);
        function transferOwnership(address newOwner) external;

        function UPGRADE_INTERFACE_VERSION() external view returns (string version);
        function upgradeToAndCall(address newImplementation, bytes calldata data) external payable;
        function proxiableUUID() external view returns (bytes32 uuid);
        function getVersion() external view returns (uint32 version);

        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);

        error OwnableUnauthorizedAccount(address account);
        error OwnableInvalidOwner(address owner);

        error UUPSUnauthorizedCallContext();
        error UUPSUnsupportedProxiableUUID(bytes32 slot);
        error InvalidInitialization();

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        #[derive(Debug, PartialEq)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
    }

    #[sol(rpc)]
    contract MyTokenV2 {
        function version() external view returns (string version);
        function getVersion() external view returns (uint32 version);
    }

    #[sol(rpc)]
    contract MyTokenProxy {
        function implementation() external view returns (address implementation);

        #[derive(Debug, PartialEq)]
        event Upgraded(address indexed implementation);
    }
);
