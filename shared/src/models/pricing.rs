//! Pricing models
//!
//! An item is priced either by a flat per-unit price or by quantity-tiered
//! price packs ("buy 3 for 120 000"). Pack calculations are computed on
//! the console and stored verbatim by the backend.

use serde::{Deserialize, Serialize};

/// A price pack: buy `qty` units for `bundle_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePack {
    pub qty: f64,
    pub bundle_price: f64,
}

/// A product option extracted from a post description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: Option<String>,
    /// Option label matched against order comments ("size M", "red", ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub prices: Vec<PricePack>,
}

/// How a price calculation was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceMethod {
    /// Exact cover over pack multiples at minimal cost.
    #[serde(rename = "dp")]
    Dp,
    /// Quantity not exactly coverable: best unit-price pack, rounded up.
    #[serde(rename = "greedy-ceil")]
    GreedyCeil,
    /// No usable packs.
    #[default]
    #[serde(rename = "fallback-none")]
    FallbackNone,
}

/// One pack used in a price calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCalcPack {
    pub qty: f64,
    pub count: u32,
    pub bundle_price: f64,
    pub subtotal: f64,
}

/// Full pack-based price calculation for an order.
///
/// When present on an order it takes display precedence over the flat
/// `unit_price * qty` total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceCalc {
    pub total: f64,
    pub method: PriceMethod,
    #[serde(default)]
    pub packs: Vec<PriceCalcPack>,
}
