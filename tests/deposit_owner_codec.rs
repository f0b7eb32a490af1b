//! Deposit Owner Extra-Data Codec Tests
//!
//! Exercises the public encode/decode surface across chain families.

use tbtc_redeemer_rs::{Address, ChainFamily, Error, ExtraDataEncoder, Hex, SolanaAddress};

#[test]
fn test_sui_roundtrip_through_hex_text() {
    let encoder = ExtraDataEncoder::new(ChainFamily::Sui);
    let owner = Address::parse(
        ChainFamily::Sui,
        "0x8D6B2CC3A3D1D3C2E5F4A6B7C8D9E0F1A2B3C4D5E6F708192A3B4C5D6E7F8091",
    )
    .unwrap();

    let extra = encoder.encode_deposit_owner(&owner).unwrap();

    // Decode accepts the field with or without a textual prefix
    let prefixed: Hex = extra.to_hex().to_prefixed_string().parse().unwrap();
    let bare: Hex = extra.to_hex().to_string().parse().unwrap();

    assert_eq!(encoder.decode_deposit_owner(&prefixed).unwrap(), owner);
    assert_eq!(encoder.decode_deposit_owner(&bare).unwrap(), owner);
}

#[test]
fn test_solana_owner_is_raw_pubkey() {
    let encoder = ExtraDataEncoder::new(ChainFamily::Solana);
    let owner: SolanaAddress = "11111111111111111111111111111112".parse().unwrap();

    let extra = encoder.encode_deposit_owner(&owner.into()).unwrap();
    assert_eq!(extra.as_bytes(), owner.as_bytes());

    let decoded = encoder.decode_deposit_owner(&extra.to_hex()).unwrap();
    assert_eq!(decoded.to_string(), "11111111111111111111111111111112");
}

#[test]
fn test_length_boundaries() {
    for family in [ChainFamily::Sui, ChainFamily::Solana, ChainFamily::Evm] {
        let encoder = ExtraDataEncoder::new(family);

        for len in [0usize, 20, 31, 33, 64] {
            let err = encoder
                .decode_deposit_owner(&Hex::from_bytes(vec![0u8; len]))
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidAddressFormat { family: f, .. } if f == family),
                "{} accepted {} bytes",
                family,
                len
            );
        }

        assert!(encoder
            .decode_deposit_owner(&Hex::from_bytes(vec![0u8; 32]))
            .is_ok());
    }
}

#[test]
fn test_family_mismatch_is_rejected() {
    let sui_owner = Address::parse(ChainFamily::Sui, &"ab".repeat(32)).unwrap();

    for family in [ChainFamily::Solana, ChainFamily::Evm] {
        let err = ExtraDataEncoder::new(family)
            .encode_deposit_owner(&sui_owner)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAddressFormat { .. }));
    }
}
