use soroban_sdk::{contracttype, Address};

/// Storage keys for the contract.
/// Using enum with variants for type-safe storage access.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Admin address (can change the protocol fee)
    Admin,
    /// Payment token contract address (micro-unit denomination)
    PaymentToken,
    /// Protocol fee in basis points, applied to every trade
    FeePercent,
    /// Outstanding key supply per subject: Supply(subject)
    Supply(Address),
    /// Key balance per holder: Balance(subject, holder)
    Balance(Address, Address),
}

/// Flat component of every non-empty quote, in micro-units.
pub const BASE_PRICE: i128 = 10;

/// Divisor flattening the quadratic step of the curve.
/// Calibrated so that price(0, 200) = 80_010.
pub const PRICE_DIVISOR: i128 = 100;

/// Default protocol fee in basis points (1 bp = 0.01%).
/// 200 bp = 2% of the gross price, routed to the subject.
pub const DEFAULT_FEE_BPS: i128 = 200;

/// Basis points denominator (100% = 10000 bp).
pub const FEE_DENOMINATOR: i128 = 10_000;
