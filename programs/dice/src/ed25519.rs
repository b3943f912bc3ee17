use anchor_lang::prelude::*;

use crate::errors::*;

/// One signature entry carried by an Ed25519 verify instruction.
///
/// The precompile proves `signature` is valid for `message` under
/// `public_key`; callers still have to check those parts are the ones they
/// expect.
pub struct Ed25519Entry<'a> {
    pub public_key: &'a [u8],
    pub signature: &'a [u8],
    pub message: &'a [u8],
}

/// Instruction data layout of the Ed25519 precompile:
/// count (u8) + padding (u8), then per entry seven little-endian u16s
/// (signature offset/index, public key offset/index, message offset, size,
/// index) followed by the referenced bytes.
const COUNT_LEN: usize = 2;
const OFFSETS_LEN: usize = 14;
const PUBKEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;

/// Instruction-index value meaning "this instruction"
const SELF_REFERENCE: u16 = u16::MAX;

/// Unpack an Ed25519 verify instruction carrying exactly one entry whose
/// parts all live in the instruction itself.
pub fn parse_single_entry(data: &[u8]) -> Result<Ed25519Entry<'_>> {
    require!(data.len() >= COUNT_LEN + OFFSETS_LEN, DiceError::Ed25519Header);
    require!(data[0] == 1, DiceError::Ed25519SignatureCount);
    require!(data[1] == 0, DiceError::Ed25519Header);

    let signature_offset = read_u16(data, 2)?;
    let signature_ix_index = read_u16(data, 4)?;
    let public_key_offset = read_u16(data, 6)?;
    let public_key_ix_index = read_u16(data, 8)?;
    let message_offset = read_u16(data, 10)?;
    let message_size = read_u16(data, 12)?;
    let message_ix_index = read_u16(data, 14)?;

    // Entries referencing other instructions cannot be tied to this bet
    require!(
        signature_ix_index == SELF_REFERENCE
            && public_key_ix_index == SELF_REFERENCE
            && message_ix_index == SELF_REFERENCE,
        DiceError::Ed25519Header
    );

    Ok(Ed25519Entry {
        public_key: read_slice(data, public_key_offset, PUBKEY_LEN)?,
        signature: read_slice(data, signature_offset, SIGNATURE_LEN)?,
        message: read_slice(data, message_offset, message_size as usize)?,
    })
}

fn read_u16(data: &[u8], pos: usize) -> Result<u16> {
    let bytes = data
        .get(pos..pos + 2)
        .ok_or_else(|| error!(DiceError::Ed25519Header))?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_slice(data: &[u8], offset: u16, len: usize) -> Result<&[u8]> {
    let start = offset as usize;
    let end = start
        .checked_add(len)
        .ok_or_else(|| error!(DiceError::Ed25519Header))?;
    data.get(start..end)
        .ok_or_else(|| error!(DiceError::Ed25519Header))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mirror of the layout web3's Ed25519Program builder produces: header,
    /// offsets block, then pubkey at 16, signature at 48, message at 112.
    fn build(public_key: &[u8; 32], signature: &[u8; 64], message: &[u8]) -> Vec<u8> {
        let pubkey_offset = (COUNT_LEN + OFFSETS_LEN) as u16;
        let signature_offset = pubkey_offset + PUBKEY_LEN as u16;
        let message_offset = signature_offset + SIGNATURE_LEN as u16;

        let mut data = vec![1u8, 0u8];
        data.extend_from_slice(&signature_offset.to_le_bytes());
        data.extend_from_slice(&SELF_REFERENCE.to_le_bytes());
        data.extend_from_slice(&pubkey_offset.to_le_bytes());
        data.extend_from_slice(&SELF_REFERENCE.to_le_bytes());
        data.extend_from_slice(&message_offset.to_le_bytes());
        data.extend_from_slice(&(message.len() as u16).to_le_bytes());
        data.extend_from_slice(&SELF_REFERENCE.to_le_bytes());
        data.extend_from_slice(public_key);
        data.extend_from_slice(signature);
        data.extend_from_slice(message);
        data
    }

    #[test]
    fn parses_well_formed_entry() {
        let data = build(&[3u8; 32], &[7u8; 64], b"commitment");
        let entry = parse_single_entry(&data).unwrap();
        assert_eq!(entry.public_key, &[3u8; 32]);
        assert_eq!(entry.signature, &[7u8; 64]);
        assert_eq!(entry.message, b"commitment");
    }

    #[test]
    fn rejects_multiple_signatures() {
        let mut data = build(&[0u8; 32], &[0u8; 64], b"m");
        data[0] = 2;
        assert!(parse_single_entry(&data).is_err());
    }

    #[test]
    fn rejects_truncated_header() {
        assert!(parse_single_entry(&[1u8, 0u8]).is_err());
    }

    #[test]
    fn rejects_cross_instruction_reference() {
        let mut data = build(&[0u8; 32], &[0u8; 64], b"m");
        // signature_instruction_index points at instruction 0 instead
        data[4] = 0;
        data[5] = 0;
        assert!(parse_single_entry(&data).is_err());
    }

    #[test]
    fn rejects_out_of_bounds_message() {
        let mut data = build(&[0u8; 32], &[0u8; 64], b"m");
        let len = data.len();
        // message_data_size runs past the end of the instruction
        data[12..14].copy_from_slice(&((len as u16) * 2).to_le_bytes());
        assert!(parse_single_entry(&data).is_err());
    }

    #[test]
    fn rejects_nonzero_padding() {
        let mut data = build(&[0u8; 32], &[0u8; 64], b"m");
        data[1] = 9;
        assert!(parse_single_entry(&data).is_err());
    }
}
