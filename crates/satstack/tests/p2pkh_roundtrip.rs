use num_bigint::BigUint;

use satstack::prelude::*;

#[test]
fn it_signs_and_verifies_a_p2pkh_spend_end_to_end() {
    let priv_key = PrivKey::new(BigUint::from(20_258_925u64));
    let pubkey = priv_key.public_key().unwrap();

    let prevout_script_pubkey = p2pkh_script_pubkey(&pubkey, true).unwrap();
    assert!(is_p2pkh(&prevout_script_pubkey));

    let input = Input::unsigned(
        OutPoint {
            txid: TxId::new([0x5au8; 32]),
            index: 1,
        },
        0xffffffff,
    );
    let change_script = p2pkh_script_pubkey(&pubkey, true).unwrap();
    let mut tx = Transaction::new(
        1,
        vec![input],
        vec![Output::new(45_000, change_script)],
        0,
    );

    tx.sign_input(0, &priv_key, &prevout_script_pubkey, true)
        .unwrap();

    assert!(tx.verify_input(0, &prevout_script_pubkey).unwrap());

    let txid = tx.txid().unwrap();
    let mut buf = Vec::new();
    tx.write_to(&mut buf).unwrap();
    let reparsed = Transaction::read_from(&mut buf.as_slice()).unwrap();
    assert_eq!(reparsed.txid().unwrap(), txid);
}

#[test]
fn it_resolves_prevouts_from_an_in_memory_cache() {
    let priv_key = PrivKey::new(BigUint::from(112_233u64));
    let pubkey = priv_key.public_key().unwrap();
    let locking_script = p2pkh_script_pubkey(&pubkey, true).unwrap();

    let funding_tx = Transaction::new(
        1,
        vec![Input::unsigned(
            OutPoint {
                txid: TxId::new([0x01u8; 32]),
                index: 0,
            },
            0xffffffff,
        )],
        vec![Output::new(60_000, locking_script.clone())],
        0,
    );
    let funding_txid = funding_tx.txid().unwrap();

    let mut resolver = MemoryPrevoutResolver::new();
    resolver.insert(funding_tx).unwrap();

    let resolved = resolver
        .resolve(&OutPoint {
            txid: funding_txid,
            index: 0,
        })
        .unwrap();
    assert_eq!(resolved.value, 60_000);
    assert_eq!(resolved.script_pubkey, locking_script);
}
