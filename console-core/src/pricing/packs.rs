//! Pack pricing
//!
//! Items can carry quantity-tiered price packs ("3 for 120 000"). The
//! console computes the cheapest combination for a quantity and sends
//! the result along with the order; the backend stores it verbatim.

use shared::models::{PriceCalc, PriceCalcPack, PriceMethod, PricePack};

/// Largest quantity the exact-cover table is built for. Anything bigger
/// goes straight to the greedy fallback.
const MAX_DP_QTY: i64 = 9999;

/// Cheapest way to buy `qty` units with the given packs.
///
/// Exact cover via dynamic programming over pack multiples when the
/// quantity is reachable; otherwise the pack with the best per-unit price
/// is bought `ceil(qty / pack_qty)` times. No usable packs (or a
/// non-positive quantity) yields an empty `fallback-none` calculation.
pub fn compute_min_cost(prices: &[PricePack], qty: f64) -> PriceCalc {
    let qty = qty as i64;
    // usable packs: positive quantity, non-negative price, whole units
    let packs: Vec<(i64, i64)> = prices
        .iter()
        .filter_map(|p| {
            let q = p.qty as i64;
            let c = p.bundle_price as i64;
            (q > 0 && c >= 0).then_some((q, c))
        })
        .collect();

    if packs.is_empty() || qty <= 0 {
        return PriceCalc::default();
    }

    if qty <= MAX_DP_QTY {
        // dp[q] = minimal cost to buy exactly q units, choice[q] = pack used
        let target = qty as usize;
        let mut dp = vec![i64::MAX; target + 1];
        let mut choice = vec![usize::MAX; target + 1];
        dp[0] = 0;
        for q in 1..=target {
            for (i, &(pack_qty, pack_cost)) in packs.iter().enumerate() {
                let pack_qty = pack_qty as usize;
                if pack_qty <= q
                    && dp[q - pack_qty] != i64::MAX
                    && dp[q - pack_qty] + pack_cost < dp[q]
                {
                    dp[q] = dp[q - pack_qty] + pack_cost;
                    choice[q] = i;
                }
            }
        }

        if dp[target] != i64::MAX {
            // walk the choices back into per-pack counts
            let mut counts = vec![0u32; packs.len()];
            let mut q = target;
            while q > 0 && choice[q] != usize::MAX {
                let i = choice[q];
                counts[i] += 1;
                q -= packs[i].0 as usize;
            }

            let mut out_packs: Vec<PriceCalcPack> = counts
                .iter()
                .enumerate()
                .filter(|&(_, &count)| count > 0)
                .map(|(i, &count)| {
                    let (pack_qty, pack_cost) = packs[i];
                    PriceCalcPack {
                        qty: pack_qty as f64,
                        count,
                        bundle_price: pack_cost as f64,
                        subtotal: (count as i64 * pack_cost) as f64,
                    }
                })
                .collect();
            out_packs.sort_by(|a, b| a.qty.total_cmp(&b.qty));

            return PriceCalc {
                total: dp[target] as f64,
                method: PriceMethod::Dp,
                packs: out_packs,
            };
        }
    }

    // not exactly coverable: best unit price, rounded up
    let &(pack_qty, pack_cost) = packs
        .iter()
        .min_by(|a, b| (a.1 * b.0).cmp(&(b.1 * a.0)))
        .expect("packs is non-empty");
    let count = (qty as u64).div_ceil(pack_qty as u64) as i64;
    let subtotal = count * pack_cost;

    PriceCalc {
        total: subtotal as f64,
        method: PriceMethod::GreedyCeil,
        packs: vec![PriceCalcPack {
            qty: pack_qty as f64,
            count: count as u32,
            bundle_price: pack_cost as f64,
            subtotal: subtotal as f64,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(qty: f64, bundle_price: f64) -> PricePack {
        PricePack { qty, bundle_price }
    }

    #[test]
    fn exact_cover_picks_cheapest_combination() {
        // two 2-packs plus a single beats five singles
        let calc = compute_min_cost(&[pack(2.0, 90000.0), pack(1.0, 50000.0)], 5.0);
        assert_eq!(calc.method, PriceMethod::Dp);
        assert_eq!(calc.total, 230000.0);
        assert_eq!(calc.packs.len(), 2);
        assert_eq!(calc.packs[0].qty, 1.0);
        assert_eq!(calc.packs[0].count, 1);
        assert_eq!(calc.packs[1].qty, 2.0);
        assert_eq!(calc.packs[1].count, 2);
    }

    #[test]
    fn uncoverable_qty_falls_back_to_greedy_ceil() {
        let calc = compute_min_cost(&[pack(3.0, 100000.0)], 4.0);
        assert_eq!(calc.method, PriceMethod::GreedyCeil);
        assert_eq!(calc.total, 200000.0);
        assert_eq!(calc.packs[0].count, 2);
    }

    #[test]
    fn greedy_ceil_uses_best_unit_price() {
        // 5 for 150k (30k/unit) beats 4 for 140k (35k/unit)
        let calc = compute_min_cost(&[pack(4.0, 140000.0), pack(5.0, 150000.0)], 7.0);
        assert_eq!(calc.method, PriceMethod::GreedyCeil);
        assert_eq!(calc.packs[0].qty, 5.0);
        assert_eq!(calc.packs[0].count, 2);
        assert_eq!(calc.total, 300000.0);
    }

    #[test]
    fn no_packs_or_no_qty_is_fallback_none() {
        let calc = compute_min_cost(&[], 5.0);
        assert_eq!(calc.method, PriceMethod::FallbackNone);
        assert_eq!(calc.total, 0.0);

        let calc = compute_min_cost(&[pack(1.0, 50000.0)], 0.0);
        assert_eq!(calc.method, PriceMethod::FallbackNone);
    }

    #[test]
    fn unusable_packs_are_ignored() {
        let calc = compute_min_cost(&[pack(0.0, 10000.0), pack(-2.0, 1.0), pack(1.0, 50000.0)], 2.0);
        assert_eq!(calc.method, PriceMethod::Dp);
        assert_eq!(calc.total, 100000.0);
    }

    #[test]
    fn fractional_wire_values_truncate() {
        let calc = compute_min_cost(&[pack(2.9, 100000.9)], 4.0);
        // pack counts as qty 2, price 100000
        assert_eq!(calc.method, PriceMethod::Dp);
        assert_eq!(calc.total, 200000.0);
    }
}
