// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in token sequences.
//!
//! `transfer_tokens` is a real legacy ether transfer as the decoder splits it
//! and backs the `/sample` page. `placeholder_tokens` is the hand-written
//! mock-up the page layout was designed against; it repeats labels and byte
//! ranges on purpose and does not reconstruct to a valid transaction.

use crate::annotator::{Token, TokenSequence};

/// Raw transaction behind [`transfer_tokens`].
pub const TRANSFER_TX: &str = "0xf86b8085012a05f200825208949b0a420cd00b9d75fce4226262789f734046e54987026bf86755a05b8026a06a49585b2e6720633828f7a55e5f98709d9f6f4bfe869c9f5616ce46eb26566aa0751d23163c267e0f141481964100620f3f228da1636fe90129687425d8a8f836";

pub fn transfer_tokens() -> TokenSequence {
    TokenSequence::new(vec![
        Token::new(
            "f86b",
            "RLP Prefix. Tells us that this transaction is a list of length 0x6b (107 bytes)",
            "The first byte (0xf8-0xf7) tells us the length of the length (0x6b) of transaction",
        ),
        Token::new(
            "80",
            "Nonce: 0",
            "The nonce is an incrementing sequence number used to prevent message replay",
        ),
        Token::new(
            "85012a05f200",
            "Gas Price: 5000000000",
            "The price of gas (in wei) that the sender is willing to pay.",
        ),
        Token::new(
            "825208",
            "Gas Limit: 21000",
            "The maximum amount of gas the originator is willing to pay for this transaction.",
        ),
        Token::new(
            "949b0a420cd00b9d75fce4226262789f734046e549",
            "Recipient Address: 0x9b0a420cd00b9d75fce4226262789f734046e549",
            "The address of the user account or contract to interact with",
        ),
        Token::new(
            "87026bf86755a05b",
            "Value: 681664583147611",
            "The amount of ether (in wei) to send to the recipient address.",
        ),
        Token::new(
            "80",
            "Data: ",
            "Data being sent to a contract function. The first 4 bytes are known as the 'function selector'",
        ),
        Token::new(
            "26",
            "Signature Prefix Value (v): 26",
            "Indicates both the chainID of the transaction and the parity (odd or even) of the y component of the public key",
        ),
        Token::new(
            "a06a49585b2e6720633828f7a55e5f98709d9f6f4bfe869c9f5616ce46eb26566a",
            "Signature (r) value: 6a49585b2e6720633828f7a55e5f98709d9f6f4bfe869c9f5616ce46eb26566a",
            "Part of the signature pair (r,s). Represents the X-coordinate of an ephemeral public key created during the ECDSA signing process",
        ),
        Token::new(
            "a0751d23163c267e0f141481964100620f3f228da1636fe90129687425d8a8f836",
            "Signature (s) value: 751d23163c267e0f141481964100620f3f228da1636fe90129687425d8a8f836",
            "Part of the signature pair (r,s). Generated using the ECDSA signing algorithm",
        ),
    ])
}

pub fn placeholder_tokens() -> TokenSequence {
    TokenSequence::new(vec![
        Token::new("f9aa01", "Nonce", "Long explanation about nonces"),
        Token::new("85012a05f200", "GasPrice", "Long gas price explantion"),
        Token::new(
            "8327c50e",
            "Gas Limit",
            "Long explanation about noncesnthuntohnuh nthunouhtn nthountohun t\n ntohuntouh",
        ),
        Token::new(
            "35fb136cbadbc168910b66a9f7c40b03e4bd467f",
            "Destination Address",
            "How addresses are derived. \n 1. Concatenate x + y coordinate of pubkey\n2. keccak256(that point)\n3. last 20 bytes of hash",
        ),
        Token::new("68910b66a9f7c40", "Value", "Cash money business"),
        Token::new(
            "3e4bd467f80b8441e9a695000000000000000000000000035fb136cbadbc168910b66a9f7c40b03e4bd467f000000000000000000000",
            "Contract Data",
            "Extra stuff if i detect er20 20. + how to hash function prototypes",
        ),
        Token::new("f9", "Signature V", "Long explanation about nonces"),
        Token::new(
            "aca0026a00320143282b77654f3eedf2c6d384346a4be52c902f66032",
            "Signature S",
            "Long explanation about nonces",
        ),
        Token::new(
            "aca0026a00320143282b77654f3eedf2c6d384346a4be52c902f66032",
            "Signature V",
            "Long explanation about nonces",
        ),
    ])
}
