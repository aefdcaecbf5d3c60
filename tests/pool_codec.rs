use poolswap_sdk::{
    parse_account, Account, Candle, CodecError, NPool, Pool, Pubkey,
};

fn pool_fixture() -> Pool {
    let mut pool = Pool {
        authority: Pubkey::new_from_array([10; 32]),
        token_0_mint: Pubkey::new_from_array([11; 32]),
        token_1_mint: Pubkey::new_from_array([12; 32]),
        vault_0: Pubkey::new_from_array([13; 32]),
        vault_1: Pubkey::new_from_array([14; 32]),
        lp_mint: Pubkey::new_from_array([15; 32]),
        amp: 100,
        init_amp: 100,
        target_amp: 200,
        ramp_start: 1_700_000_000,
        ramp_stop: 1_700_086_400,
        fee_bps: 30,
        admin_fee_pct: 50,
        balance_0: 1_000_000_000,
        balance_1: 999_500_000,
        lp_supply: 1_999_749_968,
        admin_fee_0: 12_345,
        admin_fee_1: 54_321,
        volume_0: 77_000_000_000,
        volume_1: 76_900_000_000,
        paused: false,
        pool_bump: 255,
        vault_0_bump: 254,
        vault_1_bump: 253,
        lp_mint_bump: 252,
        authority_bump: 251,
        pending_authority: Pubkey::new_from_array([16; 32]),
        pending_authority_ts: 1_700_090_000,
        pending_amp: 300,
        pending_amp_ts: 1_700_093_600,
        trade_count: 4_321,
        trade_sum: 98_765_432_100,
        max_price: 1_002_000,
        min_price: 998_000,
        hour_anchor_slot: 260_000_000,
        day_anchor_slot: 259_900_000,
        hour_index: 23,
        day_index: 6,
        ..Pool::default()
    };
    pool.trader_bloom[0] = 0b1010_1010;
    pool.trader_bloom[127] = 0xFF;
    pool.hourly_candles[0] = Candle {
        open: 1_000_000,
        high_delta: 500,
        low_delta: 300,
        close_delta: -100,
        volume: 42,
    };
    pool.hourly_candles[23] = Candle {
        open: 999_900,
        high_delta: 10,
        low_delta: 0,
        close_delta: 100,
        volume: 7,
    };
    pool.daily_candles[6] = Candle {
        open: 1_000_100,
        high_delta: 2_000,
        low_delta: 1_500,
        close_delta: 50,
        volume: 1_000,
    };
    pool
}

#[test]
fn test_pool_round_trip() {
    let pool = pool_fixture();
    let bytes = pool.pack();
    assert_eq!(bytes.len(), Pool::SIZE);
    assert_eq!(Pool::unpack(&bytes).unwrap(), pool);
}

#[test]
fn test_pool_field_offsets_are_pinned() {
    let bytes = pool_fixture().pack();

    assert_eq!(&bytes[..8], b"POOLSWAP");
    // amp at its documented offset
    assert_eq!(bytes[200], 0x64);
    assert_eq!(&bytes[200..208], &100u64.to_le_bytes());
    assert_eq!(&bytes[240..248], &30u64.to_le_bytes()); // fee_bps
    assert_eq!(&bytes[256..264], &1_000_000_000u64.to_le_bytes()); // balance_0
    assert_eq!(bytes[312], 0); // paused
    assert_eq!(bytes[313], 255); // pool bump
    assert_eq!(bytes[409], 23); // hour index
    assert_eq!(bytes[410], 6); // day index
    assert_eq!(bytes[417], 0b1010_1010); // bloom start
    // first hourly candle open
    assert_eq!(&bytes[545..549], &1_000_000u32.to_le_bytes());
    // first daily candle slot is empty in the fixture
    assert_eq!(&bytes[833..845], &[0u8; 12]);
}

#[test]
fn test_pool_minimal_blob_parses() {
    // scenario: a blob that is discriminator + amp and zeroes elsewhere
    let mut data = vec![0u8; Pool::SIZE];
    data[..8].copy_from_slice(b"POOLSWAP");
    data[200..208].copy_from_slice(&0x64u64.to_le_bytes());
    let pool = Pool::unpack(&data).unwrap();
    assert_eq!(pool.amp, 100);
    assert_eq!(pool.lp_supply, 0);
}

#[test]
fn test_pool_ignores_trailing_bytes() {
    let pool = pool_fixture();
    let mut bytes = pool.pack();
    bytes.extend_from_slice(&[0xEE; 100]);
    assert_eq!(Pool::unpack(&bytes).unwrap(), pool);
}

#[test]
fn test_pool_tolerates_nonzero_padding() {
    let pool = pool_fixture();
    let mut bytes = pool.pack();
    bytes[318] = 0xAB; // bump padding
    bytes[411] = 0xCD; // analytics padding
    bytes[1000] = 0xEF; // trailing reserved space
    assert_eq!(Pool::unpack(&bytes).unwrap(), pool);
}

#[test]
fn test_pool_discriminator_perturbation() {
    let bytes = pool_fixture().pack();
    for position in 0..8 {
        let mut corrupt = bytes.clone();
        corrupt[position] ^= 0x01;
        assert_eq!(
            Pool::unpack(&corrupt),
            Err(CodecError::InvalidDiscriminator),
            "perturbation at byte {position} not rejected"
        );
    }
}

#[test]
fn test_pool_error_ladder() {
    assert_eq!(Pool::unpack(&[]), Err(CodecError::InsufficientData));
    assert_eq!(Pool::unpack(b"POOLSWA"), Err(CodecError::InsufficientData));

    let mut short = pool_fixture().pack();
    short.truncate(Pool::SIZE - 1);
    assert_eq!(Pool::unpack(&short), Err(CodecError::InvalidFormat));
}

fn npool_fixture() -> NPool {
    let mut npool = NPool {
        authority: Pubkey::new_from_array([20; 32]),
        n_tokens: 3,
        paused: false,
        bump: 254,
        amp: 200,
        fee_bps: 10,
        admin_fee_pct: 50,
        lp_supply: 3_000_000_000,
        lp_mint: Pubkey::new_from_array([30; 32]),
        total_volume: 123_456_789,
        trade_count: 999,
        last_trade_slot: 260_100_000,
        ..NPool::default()
    };
    for i in 0..3 {
        npool.mints[i] = Pubkey::new_from_array([40 + i as u8; 32]);
        npool.vaults[i] = Pubkey::new_from_array([50 + i as u8; 32]);
        npool.balances[i] = 1_000_000_000 + i as u64;
        npool.admin_fees[i] = 100 * i as u64;
    }
    npool
}

#[test]
fn test_npool_round_trip() {
    let npool = npool_fixture();
    let bytes = npool.pack();
    assert_eq!(bytes.len(), NPool::SIZE);
    assert_eq!(NPool::unpack(&bytes).unwrap(), npool);
}

#[test]
fn test_npool_field_offsets_are_pinned() {
    let bytes = npool_fixture().pack();
    assert_eq!(&bytes[..8], b"NPOOLSWA");
    assert_eq!(bytes[40], 3); // n_tokens
    assert_eq!(&bytes[48..56], &200u64.to_le_bytes()); // amp
    assert_eq!(&bytes[80..112], &[40u8; 32]); // first mint
    assert_eq!(&bytes[592..624], &[30u8; 32]); // lp mint
    assert_eq!(&bytes[624..632], &1_000_000_000u64.to_le_bytes()); // balance 0
}

#[test]
fn test_npool_unused_slots_stay_zero() {
    let npool = npool_fixture();
    let parsed = NPool::unpack(&npool.pack()).unwrap();
    assert_eq!(parsed.active_balances().len(), 3);
    for i in 3..8 {
        assert_eq!(parsed.mints[i], Pubkey::default());
        assert_eq!(parsed.balances[i], 0);
        assert_eq!(parsed.admin_fees[i], 0);
    }
}

#[test]
fn test_npool_rejects_pool_discriminator() {
    let mut bytes = npool_fixture().pack();
    bytes[..8].copy_from_slice(b"POOLSWAP");
    assert_eq!(NPool::unpack(&bytes), Err(CodecError::InvalidDiscriminator));
}

#[test]
fn test_parse_account_picks_correct_kind() {
    match parse_account(&pool_fixture().pack()).unwrap() {
        Account::Pool(pool) => assert_eq!(pool.amp, 100),
        other => panic!("expected a pool, got {other:?}"),
    }
    match parse_account(&npool_fixture().pack()).unwrap() {
        Account::NPool(npool) => assert_eq!(npool.n_tokens, 3),
        other => panic!("expected an npool, got {other:?}"),
    }
}
