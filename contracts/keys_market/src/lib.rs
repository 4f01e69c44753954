#![no_std]

mod curve;
mod error;
mod ledger;
mod storage;

use error::KeysError;
use soroban_sdk::{contract, contractimpl, token, Address, Env};
use storage::{DataKey, DEFAULT_FEE_BPS};

/// Bonding-Curve Key Market Contract
///
/// Every principal ("subject") has its own key market, priced by a
/// quadratic bonding curve over the subject's outstanding supply.
///
/// Key features:
/// - Anyone can buy and sell a subject's keys at curve prices
/// - A subject's very first keys can only be bought by the subject itself
/// - A protocol fee on every trade is routed to the subject principal
/// - The contract retains exactly the gross price of outstanding keys
/// - The admin fixed at deployment controls the protocol fee percent
#[contract]
pub struct KeysMarket;

#[contractimpl]
impl KeysMarket {
    /// Constructor: called automatically at deployment.
    ///
    /// Delegates to initialize() for the actual setup logic.
    pub fn __constructor(env: Env, admin: Address, payment_token: Address) {
        Self::initialize(env, admin, payment_token).expect("initialization failed");
    }

    /// Initialize the market with its admin and payment token.
    ///
    /// Can be called directly for manual deployment, or via constructor.
    ///
    /// # Arguments
    /// * `admin` - Address that can change the protocol fee
    /// * `payment_token` - Token contract trades settle in (micro-units)
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), KeysError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(KeysError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage()
            .instance()
            .set(&DataKey::FeePercent, &DEFAULT_FEE_BPS);

        Ok(())
    }

    /// Buy keys of a subject's market.
    ///
    /// The buyer pays the gross curve price to the contract plus the
    /// protocol fee, which goes straight to the subject. While a
    /// subject's supply is zero only the subject itself may buy.
    ///
    /// # Arguments
    /// * `buyer` - Paying principal (must authorize)
    /// * `subject` - Principal whose keys are bought
    /// * `amount` - Number of keys to buy
    ///
    /// # Returns
    /// Total amount debited from the buyer (gross price + fee)
    pub fn buy_keys(
        env: Env,
        buyer: Address,
        subject: Address,
        amount: i128,
    ) -> Result<i128, KeysError> {
        Self::require_initialized(&env)?;

        if amount <= 0 {
            return Err(KeysError::InvalidAmount);
        }

        buyer.require_auth();

        let supply = ledger::supply(&env, &subject);
        if supply == 0 && buyer != subject {
            return Err(KeysError::SupplyUnavailable);
        }

        let gross = curve::price(supply, amount)?;
        let fee = curve::protocol_fee(gross, Self::fee_percent(&env))?;

        // Gross price into the contract, fee straight to the subject.
        let client = token::Client::new(&env, &Self::payment_token(&env)?);
        client.transfer(&buyer, &env.current_contract_address(), &gross);
        client.transfer(&buyer, &subject, &fee);

        ledger::increase_supply(&env, &subject, amount)?;
        ledger::credit(&env, &subject, &buyer, amount)?;

        gross.checked_add(fee).ok_or(KeysError::Overflow)
    }

    /// Sell keys back into a subject's market.
    ///
    /// The seller receives the gross curve price of the removed keys
    /// minus the protocol fee, which goes to the subject. The supply
    /// bound is checked before the seller's own balance, so a sell
    /// against an exhausted market reports `SupplyUnavailable` even
    /// when the balance is also short.
    ///
    /// # Arguments
    /// * `seller` - Selling principal (must authorize)
    /// * `subject` - Principal whose keys are sold
    /// * `amount` - Number of keys to sell
    ///
    /// # Returns
    /// Net proceeds credited to the seller (gross price - fee)
    pub fn sell_keys(
        env: Env,
        seller: Address,
        subject: Address,
        amount: i128,
    ) -> Result<i128, KeysError> {
        Self::require_initialized(&env)?;

        if amount <= 0 {
            return Err(KeysError::InvalidAmount);
        }

        seller.require_auth();

        let supply = ledger::supply(&env, &subject);
        if amount > supply {
            return Err(KeysError::SupplyUnavailable);
        }
        if amount > ledger::balance(&env, &subject, &seller) {
            return Err(KeysError::InsufficientBalance);
        }

        // Price of the removed keys, symmetric with the buy curve.
        let gross = curve::price(supply - amount, amount)?;
        let fee = curve::protocol_fee(gross, Self::fee_percent(&env))?;
        let proceeds = gross - fee;

        ledger::decrease_supply(&env, &subject, amount)?;
        ledger::debit(&env, &subject, &seller, amount)?;

        let client = token::Client::new(&env, &Self::payment_token(&env)?);
        client.transfer(&env.current_contract_address(), &seller, &proceeds);
        client.transfer(&env.current_contract_address(), &subject, &fee);

        Ok(proceeds)
    }

    /// Update the protocol fee percent (admin only, must stay positive).
    pub fn set_protocol_fee_percent(
        env: Env,
        caller: Address,
        new_percent: i128,
    ) -> Result<(), KeysError> {
        Self::require_initialized(&env)?;

        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(KeysError::NotInitialized)?;
        if caller != admin {
            return Err(KeysError::Unauthorized);
        }
        caller.require_auth();

        if new_percent <= 0 {
            return Err(KeysError::ZeroFee);
        }

        env.storage()
            .instance()
            .set(&DataKey::FeePercent, &new_percent);

        Ok(())
    }

    /// Quote the gross price to move a supply level by `amount` keys.
    pub fn get_price(_env: Env, supply: i128, amount: i128) -> Result<i128, KeysError> {
        curve::price(supply, amount)
    }

    /// Quote the gross proceeds of selling `amount` keys of `subject`
    /// at the current supply, before the protocol fee.
    pub fn get_sell_price(env: Env, subject: Address, amount: i128) -> Result<i128, KeysError> {
        if amount < 0 {
            return Err(KeysError::InvalidAmount);
        }
        let supply = ledger::supply(&env, &subject);
        if amount > supply {
            return Err(KeysError::SupplyUnavailable);
        }
        curve::price(supply - amount, amount)
    }

    /// Get a subject's outstanding key supply (0 for an untraded subject).
    pub fn get_keys_supply(env: Env, subject: Address) -> i128 {
        ledger::supply(&env, &subject)
    }

    /// Get a holder's key balance in a subject's market.
    pub fn get_keys_balance(env: Env, subject: Address, holder: Address) -> i128 {
        ledger::balance(&env, &subject, &holder)
    }

    /// Whether `holder` holds at least one key of `subject`.
    pub fn is_keyholder(env: Env, subject: Address, holder: Address) -> bool {
        ledger::balance(&env, &subject, &holder) > 0
    }

    /// Get the protocol fee percent in basis points.
    pub fn get_protocol_fee_percent(env: Env) -> i128 {
        Self::fee_percent(&env)
    }

    /// Get the admin address.
    pub fn get_admin(env: Env) -> Result<Address, KeysError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(KeysError::NotInitialized)
    }

    /// Get the payment token address.
    pub fn get_payment_token(env: Env) -> Result<Address, KeysError> {
        Self::payment_token(&env)
    }

    // --- Internal helpers ---

    fn require_initialized(env: &Env) -> Result<(), KeysError> {
        if !env.storage().instance().has(&DataKey::Admin) {
            return Err(KeysError::NotInitialized);
        }
        Ok(())
    }

    fn fee_percent(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::FeePercent)
            .unwrap_or(DEFAULT_FEE_BPS)
    }

    fn payment_token(env: &Env) -> Result<Address, KeysError> {
        env.storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(KeysError::NotInitialized)
    }
}
