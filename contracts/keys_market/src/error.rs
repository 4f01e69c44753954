use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum KeysError {
    /// Trade amount must be positive
    InvalidAmount = 0,
    /// First keys of a subject are reserved to the subject itself,
    /// and a sell cannot exceed the outstanding supply
    SupplyUnavailable = 1,
    // code 2 is reserved for host transfer failures, which abort the
    // invocation instead of returning an error
    /// Holder's key balance is smaller than the requested sell
    InsufficientBalance = 3,
    /// Only the admin can change the protocol fee
    Unauthorized = 4,
    /// Protocol fee percent must be positive
    ZeroFee = 5,
    /// Arithmetic overflow in price or fee computation
    Overflow = 6,
    /// Contract already initialized
    AlreadyInitialized = 7,
    /// Contract not initialized
    NotInitialized = 8,
}
