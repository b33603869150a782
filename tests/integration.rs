//! Integration tests exercising the full system from config to quote.
//!
//! These tests verify end-to-end flows through the public API:
//! JSON config to snapshot, single-hop pricing, routed swaps, the error
//! surface, and snapshot publication through [`SharedMarket`].

#![allow(clippy::panic)]

use oracle_amm::config::{AssetConfig, OracleConfig, PoolConfig};
use oracle_amm::domain::{Amount, AssetId, FeeRate};
use oracle_amm::error::AmmError;
use oracle_amm::engine::QuoteEngine;
use oracle_amm::math::{div_ceil, mul_ceil, mul_floor};
use oracle_amm::router::{Hop, Router};
use oracle_amm::state::{MarketSnapshot, OracleState, PoolAssetState, SharedMarket};
use oracle_amm::traits::FromConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn hex(b: u8) -> String {
    format!("{b:02x}").repeat(32)
}

fn id(b: u8) -> AssetId {
    AssetId::from_bytes([b; 32])
}

fn usd() -> AssetId {
    id(0)
}

fn eth() -> AssetId {
    id(1)
}

fn btc() -> AssetId {
    id(2)
}

fn flat_asset(b: u8, reserve: Decimal, price: Decimal) -> AssetConfig {
    AssetConfig::new(hex(b), reserve, OracleConfig::at_price(price))
}

fn build(config: &PoolConfig) -> MarketSnapshot {
    let Ok(market) = MarketSnapshot::from_config(config) else {
        panic!("valid config");
    };
    market
}

/// USD hub with ETH at 2000 and BTC at 40000, no spread, no slippage, no fee.
fn flat_market() -> MarketSnapshot {
    build(
        &PoolConfig::new(hex(0), dec!(10_000_000))
            .with_asset(flat_asset(1, dec!(1_000), dec!(2_000)))
            .with_asset(flat_asset(2, dec!(100), dec!(40_000))),
    )
}

fn whole(n: u128) -> Amount {
    Amount::from_whole(n)
}

fn decimal(d: Decimal) -> Amount {
    let Ok(a) = Amount::from_decimal(d) else {
        panic!("representable amount");
    };
    a
}

// ---------------------------------------------------------------------------
// Fixed-point vectors
// ---------------------------------------------------------------------------

#[test]
fn wad_rounding_vectors() {
    assert_eq!(
        mul_floor(Amount::new(300_000_000), Amount::new(3_000_000_000)),
        Ok(Amount::ZERO)
    );
    assert_eq!(
        mul_ceil(Amount::new(200_000_000), Amount::new(1_000_000_000)),
        Ok(Amount::new(1))
    );
    assert_eq!(div_ceil(Amount::new(1), whole(2)), Ok(Amount::new(1)));
    assert_eq!(mul_floor(whole(2), whole(12)), Ok(whole(24)));
}

// ---------------------------------------------------------------------------
// Single-hop pricing
// ---------------------------------------------------------------------------

#[test]
fn flat_market_prices_at_oracle() {
    let market = flat_market();
    let engine = QuoteEngine::new(&market);
    assert_eq!(engine.sell_base(&eth(), whole(3)), Ok(whole(6_000)));
    assert_eq!(engine.sell_quote(&btc(), whole(20_000)), Ok(decimal(dec!(0.5))));
}

#[test]
fn btc_sale_pays_spread_and_small_slippage() {
    let Ok(btc_reading) = OracleConfig {
        price: dec!(50_000),
        spread: dec!(0.0001),
        coefficient: dec!(0.000000001),
        feasible: true,
    }
    .to_state() else {
        panic!("valid oracle");
    };
    let Ok(ledger) = PoolAssetState::from_parts(
        whole(10),
        Amount::ZERO,
        whole(9),
        FeeRate::ZERO,
        Amount::ONE,
        true,
    ) else {
        panic!("valid ledger");
    };

    let mut market = flat_market();
    let Ok(()) = market.pool_mut().update_asset(&btc(), |_| Ok(ledger)) else {
        panic!("registered");
    };
    market.pool_mut().set_quote_reserve(whole(1_000_000));
    market.oracle_mut().insert(btc(), btc_reading);

    let Ok(out) = QuoteEngine::new(&market).sell_base(&btc(), Amount::ONE) else {
        panic!("priced");
    };
    assert!(out < whole(50_000), "no discount applied: {out}");
    assert!(out > whole(49_990), "discount too steep: {out}");
}

#[test]
fn json_config_end_to_end() {
    let json = format!(
        r#"{{
            "quote_asset": "0x{usd}",
            "quote_reserve": "1000000",
            "assets": [{{
                "id": "0x{eth}",
                "reserve": "100",
                "fee_rate": "0.001",
                "oracle": {{ "price": "2000", "spread": "0.0002", "coefficient": "0.000000001" }}
            }}]
        }}"#,
        usd = hex(0),
        eth = hex(1),
    );
    let Ok(config) = PoolConfig::from_json(&json) else {
        panic!("valid json");
    };
    let market = build(&config);
    let engine = QuoteEngine::new(&market);

    let Ok(q) = engine.quote_sell_base(&eth(), Amount::ONE) else {
        panic!("priced");
    };
    assert!(!q.fee().is_zero());
    assert!(q.amount_out() > whole(1_997), "{q}");
    assert!(q.amount_out() < whole(1_998), "{q}");
    let Ok(rate) = q.execution_rate() else {
        panic!("non-zero input");
    };
    assert_eq!(rate, q.amount_out());
}

#[test]
fn round_trip_loses_only_spread_slippage_and_fee() {
    let mut asset = AssetConfig::new(
        hex(1),
        dec!(100),
        OracleConfig {
            price: dec!(2_000),
            spread: dec!(0.0002),
            coefficient: dec!(0.000000001),
            feasible: true,
        },
    );
    asset.fee_rate = dec!(0.0005);
    let market = build(&PoolConfig::new(hex(0), dec!(1_000_000)).with_asset(asset));
    let engine = QuoteEngine::new(&market);

    let Ok(quote) = engine.sell_base(&eth(), Amount::ONE) else {
        panic!("priced");
    };
    let Ok(back) = engine.sell_quote(&eth(), quote) else {
        panic!("priced");
    };
    assert!(back < Amount::ONE, "round trip gained: {back}");
    assert!(back > decimal(dec!(0.998)), "round trip too lossy: {back}");
}

#[test]
fn round_trip_loss_comes_from_slippage_alone() {
    // No spread, no fee, balanced base: only k = 1e-9 at p = 2000 bites.
    let asset = AssetConfig::new(
        hex(1),
        dec!(1_000),
        OracleConfig {
            price: dec!(2_000),
            spread: Decimal::ZERO,
            coefficient: dec!(0.000000001),
            feasible: true,
        },
    );
    let market = build(&PoolConfig::new(hex(0), dec!(10_000_000)).with_asset(asset));
    let engine = QuoteEngine::new(&market);
    // 2·k·p
    let two_kp = decimal(dec!(0.000004));

    for n in [1u128, 10, 50] {
        let x = whole(n);
        let Ok(back) = engine.sell_base(&eth(), x).and_then(|q| engine.sell_quote(&eth(), q)) else {
            panic!("priced");
        };
        assert!(back < x, "x={n}: round trip gained {back}");
        let Ok(slippage) = mul_ceil(x, x).and_then(|xx| mul_ceil(xx, two_kp)) else {
            panic!("no overflow");
        };
        let Some(bound) = slippage.checked_add(&Amount::new(1_000)) else {
            panic!("no overflow");
        };
        let loss = x.saturating_sub(&back);
        assert!(loss <= bound, "x={n}: lost {loss}, bound {bound}");
    }

    // One unit: about 1 / (1 + 4e-6), just over 0.999996.
    let Ok(back) = engine
        .sell_base(&eth(), Amount::ONE)
        .and_then(|q| engine.sell_quote(&eth(), q))
    else {
        panic!("priced");
    };
    assert!(back > decimal(dec!(0.999995)));
    assert!(back < decimal(dec!(0.999997)));
}

#[test]
fn round_trip_is_exact_without_slippage() {
    let market = build(
        &PoolConfig::new(hex(0), dec!(10_000_000)).with_asset(flat_asset(1, dec!(1_000), dec!(0.7))),
    );
    let engine = QuoteEngine::new(&market);

    for x in [Amount::ONE, whole(37), Amount::new(1_234_567_890_123_456_789)] {
        let Ok(back) = engine.sell_base(&eth(), x).and_then(|q| engine.sell_quote(&eth(), q)) else {
            panic!("priced");
        };
        assert!(back <= x, "round trip gained: {back} > {x}");
        assert!(x.saturating_sub(&back) <= Amount::new(3), "lost more than rounding: {back} vs {x}");
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[test]
fn route_through_hub() {
    let market = flat_market();
    let router = Router::new(QuoteEngine::new(&market));

    assert_eq!(
        router.route(&eth(), &btc()),
        Ok(vec![Hop::SellBase(eth()), Hop::SellQuote(btc())])
    );
    assert_eq!(router.swap(&eth(), &btc(), whole(20)), Ok(Amount::ONE));
    assert_eq!(router.swap(&usd(), &eth(), whole(2_000)), Ok(Amount::ONE));
    assert_eq!(router.swap(&btc(), &usd(), Amount::ONE), Ok(whole(40_000)));
}

#[test]
fn routed_swap_equals_chained_hops() {
    let mut eth_cfg = AssetConfig::new(
        hex(1),
        dec!(1_000),
        OracleConfig {
            price: dec!(2_000),
            spread: dec!(0.0002),
            coefficient: dec!(0.00000001),
            feasible: true,
        },
    );
    eth_cfg.threshold = dec!(1_200);
    eth_cfg.fee_rate = dec!(0.003);
    let mut btc_cfg = AssetConfig::new(
        hex(2),
        dec!(50),
        OracleConfig {
            price: dec!(40_000),
            spread: dec!(0.0001),
            coefficient: dec!(0.000000001),
            feasible: true,
        },
    );
    btc_cfg.fee_rate = dec!(0.001);
    btc_cfg.rebalance_factor = dec!(0.5);
    let market = build(
        &PoolConfig::new(hex(0), dec!(5_000_000))
            .with_asset(eth_cfg)
            .with_asset(btc_cfg),
    );
    let engine = QuoteEngine::new(&market);

    let amount = decimal(dec!(7.25));
    let chained = engine
        .sell_base(&eth(), amount)
        .and_then(|q| engine.sell_quote(&btc(), q));
    assert!(chained.is_ok());
    assert_eq!(Router::new(engine).swap(&eth(), &btc(), amount), chained);
}

#[test]
fn slippage_bound_enforced() {
    let market = flat_market();
    let router = Router::new(QuoteEngine::new(&market));

    assert_eq!(
        router.swap_with_min_out(&eth(), &btc(), whole(20), Amount::ONE),
        Ok(Amount::ONE)
    );
    let Some(tight) = Amount::ONE.checked_add(&Amount::new(1)) else {
        panic!("no overflow");
    };
    let Err(AmmError::MinimumOutputNotMet { .. }) =
        router.swap_with_min_out(&eth(), &btc(), whole(20), tight)
    else {
        panic!("expected MinimumOutputNotMet");
    };
}

#[test]
fn same_asset_route_rejected() {
    let market = flat_market();
    let router = Router::new(QuoteEngine::new(&market));
    let Err(AmmError::InvalidToken(_)) = router.swap(&eth(), &eth(), Amount::ONE) else {
        panic!("expected InvalidToken");
    };
}

// ---------------------------------------------------------------------------
// Error surface
// ---------------------------------------------------------------------------

#[test]
fn fee_above_one_percent_rejected() {
    let Err(AmmError::InvalidFee(_)) = FeeRate::new(decimal(dec!(0.0101))) else {
        panic!("expected InvalidFee");
    };
    assert!(FeeRate::new(decimal(dec!(0.01))).is_ok());

    let mut asset = flat_asset(1, dec!(10), dec!(1));
    asset.fee_rate = dec!(0.02);
    let Err(AmmError::InvalidFee(_)) =
        MarketSnapshot::from_config(&PoolConfig::new(hex(0), dec!(10)).with_asset(asset))
    else {
        panic!("expected InvalidFee");
    };
}

#[test]
fn infeasible_oracle_rejected() {
    let mut asset = flat_asset(1, dec!(10), dec!(2_000));
    asset.oracle.feasible = false;
    let market = build(&PoolConfig::new(hex(0), dec!(1_000_000)).with_asset(asset));
    let Err(AmmError::OracleInfeasible(_)) = QuoteEngine::new(&market).sell_base(&eth(), Amount::ONE)
    else {
        panic!("expected OracleInfeasible");
    };
}

#[test]
fn unregistered_asset_rejected() {
    let market = flat_market();
    let Err(AmmError::AssetNotRegistered(_)) =
        QuoteEngine::new(&market).sell_quote(&id(9), Amount::ONE)
    else {
        panic!("expected AssetNotRegistered");
    };
}

#[test]
fn invalid_asset_checked_before_oracle() {
    let mut asset = flat_asset(1, dec!(10), dec!(2_000));
    asset.valid = false;
    asset.oracle.feasible = false;
    let market = build(&PoolConfig::new(hex(0), dec!(1_000_000)).with_asset(asset));
    let Err(AmmError::AssetInvalid(_)) = QuoteEngine::new(&market).sell_base(&eth(), Amount::ONE)
    else {
        panic!("expected AssetInvalid");
    };
}

#[test]
fn output_beyond_reserve_rejected() {
    let market = build(
        &PoolConfig::new(hex(0), dec!(100)).with_asset(flat_asset(1, dec!(10), dec!(2_000))),
    );
    let engine = QuoteEngine::new(&market);
    let Err(AmmError::InsufficientPoolBalance { .. }) = engine.sell_base(&eth(), Amount::ONE)
    else {
        panic!("expected InsufficientPoolBalance");
    };
    assert_eq!(engine.try_sell_base(&eth(), Amount::ONE), None);
}

// ---------------------------------------------------------------------------
// Snapshot publication
// ---------------------------------------------------------------------------

#[test]
fn shared_market_publishes_new_prices() {
    let shared = SharedMarket::new(flat_market());
    let before = shared.load();

    let Ok(reading) = OracleState::new(whole(2_500), Amount::ZERO, Amount::ZERO, true) else {
        panic!("valid oracle");
    };
    let Ok(version) = shared.update(|m| {
        m.oracle_mut().insert(eth(), reading);
        Ok(())
    }) else {
        panic!("update applies");
    };
    assert_eq!(version, 1);

    let after = shared.load();
    assert_eq!(QuoteEngine::new(&before).sell_base(&eth(), Amount::ONE), Ok(whole(2_000)));
    assert_eq!(QuoteEngine::new(&after).sell_base(&eth(), Amount::ONE), Ok(whole(2_500)));

    let failed = shared.update(|m| m.pool_mut().update_asset(&id(9), Ok));
    assert!(matches!(failed, Err(AmmError::AssetNotRegistered(_))));
    assert_eq!(shared.version(), 1);
}
