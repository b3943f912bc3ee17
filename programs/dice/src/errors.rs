use anchor_lang::prelude::*;

#[error_code]
pub enum DiceError {
    #[msg("Initial funding must be strictly positive")]
    InvalidFundingAmount,

    #[msg("Roll threshold out of range: must be between 1 and 99")]
    InvalidRollThreshold,

    #[msg("Bet amount must be strictly positive")]
    InvalidBetAmount,

    #[msg("Vault cannot cover the maximum payout for this bet")]
    VaultUnderfunded,

    #[msg("Instruction at index 0 is not the Ed25519 program")]
    Ed25519Program,

    #[msg("Malformed Ed25519 instruction header")]
    Ed25519Header,

    #[msg("Ed25519 instruction must carry exactly one signature")]
    Ed25519SignatureCount,

    #[msg("Signer public key does not match the bet's house")]
    Ed25519Pubkey,

    #[msg("Signature does not match the Ed25519 instruction")]
    Ed25519Signature,

    #[msg("Signed message does not match the bet commitment")]
    Ed25519Message,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
}
