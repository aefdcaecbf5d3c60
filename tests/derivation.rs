use poolswap_sdk::{
    derive_gov_proposal, derive_lp_mint, derive_pool, derive_registry, derive_vault,
    DeriveError, Pubkey, PROGRAM_ID, PROGRAM_ID_STR,
};

const MINT_0: Pubkey = Pubkey::new_from_array([1; 32]);
const MINT_1: Pubkey = Pubkey::new_from_array([2; 32]);

#[test]
fn test_program_id_text_form() {
    assert_eq!(PROGRAM_ID.to_base58(), PROGRAM_ID_STR);
}

#[test]
fn test_pool_address_golden() {
    let (address, bump) = derive_pool(&MINT_0, &MINT_1).unwrap();
    assert_eq!(bump, 255);
    assert_eq!(
        address.to_base58(),
        "FkVpCdBaPBSWgJEQck8wYMD51Rpgbckc21Ca5XtWxQUG"
    );
    assert_eq!(
        address.to_bytes(),
        [
            219, 40, 43, 239, 189, 143, 89, 91, 15, 108, 149, 213, 237, 204, 178, 103, 172, 58,
            241, 181, 187, 161, 93, 30, 57, 115, 35, 60, 238, 68, 89, 49
        ]
    );
}

#[test]
fn test_registry_address_golden() {
    let (address, bump) = derive_registry().unwrap();
    assert_eq!(bump, 255);
    assert_eq!(
        address.to_base58(),
        "Ez97hpqWk2ubqTsn8pv5Lv39Q4cJMKdwRPJVYDXBggJQ"
    );
}

#[test]
fn test_vault_address_golden() {
    let (pool, _) = derive_pool(&MINT_0, &MINT_1).unwrap();
    let (vault, bump) = derive_vault(&pool, &MINT_0).unwrap();
    assert_eq!(bump, 255);
    assert_eq!(
        vault.to_base58(),
        "8aUuVJ6xhPgmHWRuo9fZakJycvJVGgLfmRQhZk1jMsbE"
    );
}

#[test]
fn test_lp_mint_address_golden_with_searched_bump() {
    let (pool, _) = derive_pool(&MINT_0, &MINT_1).unwrap();
    let (lp_mint, bump) = derive_lp_mint(&pool).unwrap();
    // bumps 255 and 254 land on the curve for these seeds
    assert_eq!(bump, 253);
    assert_eq!(
        lp_mint.to_base58(),
        "9RxUJaJXTaNBq8tworgn9tjnkiPNf8F4M22PgJujb88A"
    );

    let on_curve = Pubkey::create_program_address(
        &[b"lp_mint", pool.as_ref()],
        255,
        &PROGRAM_ID,
    );
    assert_eq!(on_curve, Err(DeriveError::OnCurve));
}

#[test]
fn test_gov_proposal_address_golden() {
    let (pool, _) = derive_pool(&MINT_0, &MINT_1).unwrap();
    let (proposal, bump) = derive_gov_proposal(&pool, 7).unwrap();
    assert_eq!(bump, 254);
    assert_eq!(
        proposal.to_base58(),
        "8KBfBRpsT546dGpFwDKWMm1DDvUAbHV6rqKebHQAxqyJ"
    );
}

#[test]
fn test_create_program_address_round_trips_found_bump() {
    let seeds: &[&[u8]] = &[b"pool", MINT_0.as_ref(), MINT_1.as_ref()];
    let (found, bump) = Pubkey::find_program_address(seeds, &PROGRAM_ID).unwrap();
    let rebuilt = Pubkey::create_program_address(seeds, bump, &PROGRAM_ID).unwrap();
    assert_eq!(rebuilt, found);
}

#[test]
fn test_derived_addresses_are_off_curve() {
    for seeds in [
        &[b"pool".as_ref(), MINT_0.as_ref(), MINT_1.as_ref()][..],
        &[b"registry".as_ref()][..],
        &[b"farm".as_ref(), MINT_0.as_ref()][..],
    ] {
        let (address, _) = Pubkey::find_program_address(seeds, &PROGRAM_ID).unwrap();
        assert!(!address.is_on_curve(), "{address} is on the curve");
    }
}

#[test]
fn test_derivation_depends_on_every_seed() {
    let base = derive_pool(&MINT_0, &MINT_1).unwrap().0;
    let other_mint = derive_pool(&MINT_0, &Pubkey::new_from_array([3; 32])).unwrap().0;
    let other_program = Pubkey::find_program_address(
        &[b"pool", MINT_0.as_ref(), MINT_1.as_ref()],
        &Pubkey::new_from_array([77; 32]),
    )
    .unwrap()
    .0;
    assert_ne!(base, other_mint);
    assert_ne!(base, other_program);
}
