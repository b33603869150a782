//! Property-based tests using `proptest` for curve and engine invariants.
//!
//! 1. **Netting totality** — netting succeeds across the whole
//!    `{reserve, target}` space and never widens a bonus window past the
//!    raw deficit.
//! 2. **Inverse pairs** — the bonus form undoes the penalty form.
//! 3. **Monotonicity** — cumulative `sell_base` output never decreases
//!    with input.
//! 4. **Router composition** — `swap(A, B, x) == sell_quote(B, sell_base(A, x))`.
//! 5. **Round trip** — base → quote → base never returns more than it took.
//! 6. **Fee monotonicity** — a larger input never pays a smaller fee.
//! 7. **Slippage-only loss** — with no spread, imbalance or fee the round
//!    trip loses at most `x·2·k·p·x`, and nothing beyond rounding at `k = 0`.

use proptest::prelude::*;

use super::{base_from_quote_penalty, compute_bought_amounts, quote_from_base_bonus};
use crate::domain::{Amount, AssetId, FeeRate};
use crate::engine::QuoteEngine;
use crate::error::AmmError;
use crate::math::mul_ceil;
use crate::router::Router;
use crate::state::{MarketSnapshot, OracleSnapshot, OracleState, PoolAssetState, PoolSnapshot};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const WAD: u128 = 1_000_000_000_000_000_000;
const USD: AssetId = AssetId::from_bytes([0; 32]);
const ETH: AssetId = AssetId::from_bytes([1; 32]);
const BTC: AssetId = AssetId::from_bytes([2; 32]);

fn ledger(reserve: u128, target: u128, fee_raw: u128, r_raw: u128) -> PoolAssetState {
    let Ok(fee) = FeeRate::new(Amount::new(fee_raw)) else {
        panic!("valid fee");
    };
    let Ok(s) = PoolAssetState::from_parts(
        Amount::new(reserve),
        Amount::ZERO,
        Amount::new(target),
        fee,
        Amount::new(r_raw),
        true,
    ) else {
        panic!("valid state");
    };
    s
}

fn reading(price: u128, spread_raw: u128, k_raw: u128) -> OracleState {
    let Ok(o) = OracleState::new(Amount::new(price), Amount::new(spread_raw), Amount::new(k_raw), true)
    else {
        panic!("valid oracle");
    };
    o
}

fn market(quote_reserve: u128, assets: &[(AssetId, PoolAssetState, OracleState)]) -> MarketSnapshot {
    let mut pool = PoolSnapshot::new(USD, Amount::new(quote_reserve));
    let mut oracle = OracleSnapshot::new();
    for (id, state, o) in assets {
        let Ok(()) = pool.register(*id, *state) else {
            panic!("registered");
        };
        oracle.insert(*id, *o);
    }
    MarketSnapshot::new(pool, oracle)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Ledger quantities from dust to a billion whole units.
fn quantity_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![0u128..=1_000u128, WAD..=1_000_000_000 * WAD]
}

/// Prices from 0.01 to 100 000 quote per base.
fn price_strategy() -> impl Strategy<Value = u128> {
    (WAD / 100)..=100_000 * WAD
}

/// Slippage coefficients from zero to 1e-6.
fn coefficient_strategy() -> impl Strategy<Value = u128> {
    0u128..=1_000_000_000_000u128
}

/// Fee rates within the 1% bound.
fn fee_strategy() -> impl Strategy<Value = u128> {
    0u128..=10_000_000_000_000_000u128
}

/// Rebalance factors in [0, 1].
fn rebalance_strategy() -> impl Strategy<Value = u128> {
    0u128..=WAD
}

/// Trade sizes from one raw unit to a thousand whole units.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000 * WAD
}

// ---------------------------------------------------------------------------
// Property 1: Netting totality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_netting_is_total_and_bounded(
        base_reserve in quantity_strategy(),
        base_target in quantity_strategy(),
        quote_reserve in quantity_strategy(),
        quote_target in quantity_strategy(),
        price in price_strategy(),
        k in coefficient_strategy(),
        selling_base in any::<bool>(),
    ) {
        let base = ledger(base_reserve, base_target, 0, WAD);
        let quote = ledger(quote_reserve, quote_target, 0, WAD);
        let result = compute_bought_amounts(&base, &quote, Amount::new(price), Amount::new(k), selling_base);
        let Ok(bought) = result else {
            return Err(TestCaseError::fail(format!("netting failed: {result:?}")));
        };

        prop_assert!(bought.bought_base <= base.imbalance().deficit());
        prop_assert!(bought.bought_quote >= quote.imbalance().deficit());
        if base_reserve >= base_target {
            prop_assert!(bought.bought_base.is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Inverse pairs
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_bonus_undoes_penalty(
        price in price_strategy(),
        k in coefficient_strategy(),
        quote in trade_strategy(),
    ) {
        let (p, k, q) = (Amount::new(price), Amount::new(k), Amount::new(quote));
        let Ok(base) = base_from_quote_penalty(p, k, Amount::ONE, q) else {
            return Ok(());
        };
        let Ok(back) = quote_from_base_bonus(p, k, Amount::ONE, base) else {
            return Err(TestCaseError::fail("bonus saturated on a penalty output"));
        };
        prop_assert!(back <= q, "inverse overshoots: {back} > {q}");
        // One raw unit of base lost to flooring is worth about p quote; the
        // rounded price factors add a relative error far below 1e-15.
        let tolerance = quote / 1_000_000_000_000_000 + (price / WAD + 2) * 4;
        prop_assert!(
            q.saturating_sub(&back) <= Amount::new(tolerance),
            "inverse too lossy: {back} vs {q}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_sell_base_monotonic(
        base_reserve in quantity_strategy(),
        base_target in quantity_strategy(),
        quote_reserve in WAD..=1_000_000_000 * WAD,
        price in price_strategy(),
        k in coefficient_strategy(),
        fee in fee_strategy(),
        r in rebalance_strategy(),
        a in trade_strategy(),
        b in trade_strategy(),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let m = market(
            quote_reserve,
            &[(ETH, ledger(base_reserve, base_target, fee, r), reading(price, 0, k))],
        );
        let e = QuoteEngine::new(&m);
        let Ok(lo) = e.sell_base(&ETH, Amount::new(small)) else {
            return Ok(());
        };
        match e.sell_base(&ETH, Amount::new(large)) {
            Ok(hi) => prop_assert!(hi >= lo, "sell_base({large}) = {hi} < sell_base({small}) = {lo}"),
            Err(AmmError::InsufficientPoolBalance { .. }) => {}
            Err(err) => return Err(TestCaseError::fail(format!("larger trade failed: {err}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Router composition
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_router_composes_two_hops(
        eth_reserve in quantity_strategy(),
        eth_target in quantity_strategy(),
        btc_reserve in quantity_strategy(),
        btc_target in quantity_strategy(),
        eth_price in price_strategy(),
        btc_price in price_strategy(),
        k in coefficient_strategy(),
        fee in fee_strategy(),
        amount in trade_strategy(),
    ) {
        let m = market(
            1_000_000_000 * WAD,
            &[
                (ETH, ledger(eth_reserve, eth_target, fee, WAD), reading(eth_price, 0, k)),
                (BTC, ledger(btc_reserve, btc_target, fee, WAD / 2), reading(btc_price, 0, k)),
            ],
        );
        let engine = QuoteEngine::new(&m);
        let routed = Router::new(engine).swap(&ETH, &BTC, Amount::new(amount));
        let chained = engine
            .sell_base(&ETH, Amount::new(amount))
            .and_then(|q| engine.sell_quote(&BTC, q));
        prop_assert_eq!(routed, chained);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_never_gains(
        reserve in WAD..=1_000_000 * WAD,
        quote_reserve in WAD..=1_000_000_000 * WAD,
        price in price_strategy(),
        k in coefficient_strategy(),
        amount in trade_strategy(),
    ) {
        let m = market(
            quote_reserve,
            &[(ETH, ledger(reserve, reserve, 0, WAD), reading(price, 0, k))],
        );
        let e = QuoteEngine::new(&m);
        let quote = match e.sell_base(&ETH, Amount::new(amount)) {
            Ok(q) => q,
            Err(AmmError::InsufficientPoolBalance { .. }) => return Ok(()),
            Err(err) => return Err(TestCaseError::fail(format!("sell_base failed: {err}"))),
        };
        let back = match e.sell_quote(&ETH, quote) {
            Ok(b) => b,
            Err(AmmError::InsufficientPoolBalance { .. }) => return Ok(()),
            Err(err) => return Err(TestCaseError::fail(format!("sell_quote failed: {err}"))),
        };
        prop_assert!(back <= Amount::new(amount), "round trip gained: {back} > {amount}");
    }
}

// ---------------------------------------------------------------------------
// Property 6: Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sell_quote_fee_monotonic(
        reserve in WAD..=1_000_000 * WAD,
        price in price_strategy(),
        fee in fee_strategy(),
        a in trade_strategy(),
        b in trade_strategy(),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let m = market(WAD, &[(ETH, ledger(reserve, reserve, fee, WAD), reading(price, 0, 0))]);
        let e = QuoteEngine::new(&m);
        let (Ok(lo), Ok(hi)) = (
            e.quote_sell_quote(&ETH, Amount::new(small)),
            e.quote_sell_quote(&ETH, Amount::new(large)),
        ) else {
            return Ok(());
        };
        prop_assert!(hi.fee() >= lo.fee());
    }
}

// ---------------------------------------------------------------------------
// Property 7: Round-trip loss is slippage only
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_loss_bounded_by_coefficient(
        price in price_strategy(),
        k in coefficient_strategy(),
        amount in trade_strategy(),
    ) {
        // Deep reserves on both sides so neither leg hits a balance check.
        let m = market(
            1_000_000_000_000 * WAD,
            &[(ETH, ledger(1_000_000 * WAD, 1_000_000 * WAD, 0, WAD), reading(price, 0, k))],
        );
        let e = QuoteEngine::new(&m);
        let x = Amount::new(amount);
        let Ok(quote) = e.sell_base(&ETH, x) else {
            return Err(TestCaseError::fail("sell_base failed"));
        };
        let Ok(back) = e.sell_quote(&ETH, quote) else {
            return Err(TestCaseError::fail("sell_quote failed"));
        };
        prop_assert!(back <= x);

        // Each leg divides by at most 1 + k·p·x, so the loss is below
        // x · 2·k·p·x; rounding adds a relative error far below 1e-15.
        let (Ok(kp), Ok(xx)) = (mul_ceil(Amount::new(k), Amount::new(price)), mul_ceil(x, x)) else {
            return Err(TestCaseError::fail("bound overflow"));
        };
        let Ok(half) = mul_ceil(xx, kp) else {
            return Err(TestCaseError::fail("bound overflow"));
        };
        // One raw unit of quote lost to flooring is worth WAD / p raw base.
        let rounding = Amount::new(amount / 1_000_000_000_000_000 + WAD / price + 1_000);
        let Some(bound) = half.checked_add(&half).and_then(|b| b.checked_add(&rounding)) else {
            return Err(TestCaseError::fail("bound overflow"));
        };
        let loss = x.saturating_sub(&back);
        prop_assert!(loss <= bound, "round trip lost {loss}, bound {bound}");
        if k == 0 {
            prop_assert!(loss <= Amount::new(amount / 1_000_000_000_000_000 + WAD / price + 2));
        }
    }
}
