//! Reference-number integration tests for the strategy analyzer.
//!
//! These pin the public-API behavior to known brokerage-convention figures:
//! single-leg positions, bull call / bear put spreads, rounding, and the
//! payoff curve's agreement with max profit/loss at the extremes.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strategy_engine::{
    LegAction, OptionContract, OptionLeg, OptionType, PayoffEvaluator, ProfitLoss, Strategy,
    StrategyCalculator, ValidationError, DEFAULT_CURVE_POINTS,
};

fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
}

fn leg(
    action: LegAction,
    option_type: OptionType,
    strike: Decimal,
    bid: Decimal,
    ask: Decimal,
) -> OptionLeg {
    let contract = OptionContract::new(
        format!("AAPL250117{option_type}{strike}"),
        strike,
        expiry(),
        option_type,
        bid,
        ask,
    )
    .unwrap();
    OptionLeg::new(action, contract, 1).unwrap()
}

fn strategy(legs: Vec<OptionLeg>) -> Strategy {
    Strategy::new(legs, "AAPL", Utc::now()).unwrap()
}

#[test]
fn single_bought_call_reference() {
    let s = strategy(vec![leg(
        LegAction::Buy,
        OptionType::Call,
        dec!(150),
        dec!(5.00),
        dec!(5.40),
    )]);
    let m = StrategyCalculator::new().calculate(&s).unwrap();

    assert_eq!(m.net_premium, dec!(-5.40));
    assert_eq!(m.max_loss, ProfitLoss::Bounded(dec!(5.40)));
    assert!(m.max_profit.is_unbounded());
    assert_eq!(m.breakeven_points, vec![dec!(155.40)]);
    assert_eq!(m.return_on_margin, Decimal::ZERO);
}

#[test]
fn single_sold_call_reference() {
    let s = strategy(vec![leg(
        LegAction::Sell,
        OptionType::Call,
        dec!(150),
        dec!(6.80),
        dec!(7.00),
    )]);
    let m = StrategyCalculator::new().calculate(&s).unwrap();

    assert_eq!(m.net_premium, dec!(6.80));
    assert_eq!(m.max_profit, ProfitLoss::Bounded(dec!(6.80)));
    assert!(m.max_loss.is_unbounded());
    assert_eq!(m.breakeven_points, vec![dec!(156.80)]);
    assert_eq!(m.return_on_margin, Decimal::ZERO);
}

#[test]
fn bull_call_spread_reference() {
    let s = strategy(vec![
        leg(LegAction::Buy, OptionType::Call, dec!(145), dec!(12.00), dec!(12.20)),
        leg(LegAction::Sell, OptionType::Call, dec!(155), dec!(6.80), dec!(7.00)),
    ]);
    let m = StrategyCalculator::new().calculate(&s).unwrap();

    assert_eq!(m.net_premium, dec!(-5.40));
    assert_eq!(m.max_profit, ProfitLoss::Bounded(dec!(994.60)));
    assert_eq!(m.max_loss, ProfitLoss::Bounded(dec!(5.40)));
    assert_eq!(m.breakeven_points, vec![dec!(144.95)]);
    assert_eq!(m.margin_requirement, ProfitLoss::Bounded(dec!(5.40)));
    assert_eq!(m.return_on_margin, dec!(18418.52));
}

#[test]
fn bear_put_spread_reference() {
    let s = strategy(vec![
        leg(LegAction::Buy, OptionType::Put, dec!(150), dec!(9.50), dec!(9.70)),
        leg(LegAction::Sell, OptionType::Put, dec!(140), dec!(5.20), dec!(5.40)),
    ]);
    let m = StrategyCalculator::new().calculate(&s).unwrap();

    assert_eq!(m.net_premium, dec!(-4.50));
    assert_eq!(m.max_profit, ProfitLoss::Bounded(dec!(995.50)));
    assert_eq!(m.max_loss, ProfitLoss::Bounded(dec!(4.50)));
}

#[test]
fn three_decimal_quotes_round_half_up() {
    let s = strategy(vec![leg(
        LegAction::Buy,
        OptionType::Call,
        dec!(150),
        dec!(8.555),
        dec!(8.777),
    )]);
    let m = StrategyCalculator::new().calculate(&s).unwrap();

    assert_eq!(m.net_premium, dec!(-8.78));
    assert_eq!(m.max_loss, ProfitLoss::Bounded(dec!(8.78)));
}

#[test]
fn payoff_extremes_agree_with_metrics() {
    let calc = StrategyCalculator::new();
    let eval = PayoffEvaluator::new();

    let debit = strategy(vec![
        leg(LegAction::Buy, OptionType::Call, dec!(145), dec!(12.00), dec!(12.20)),
        leg(LegAction::Sell, OptionType::Call, dec!(155), dec!(6.80), dec!(7.00)),
    ]);
    let m = calc.calculate(&debit).unwrap();
    assert_eq!(m.max_profit.bounded(), Some(eval.payoff_at(&debit, dec!(400))));
    assert_eq!(m.max_loss.bounded(), Some(-eval.payoff_at(&debit, dec!(10))));

    let credit = strategy(vec![
        leg(LegAction::Sell, OptionType::Put, dec!(150), dec!(9.50), dec!(9.70)),
        leg(LegAction::Buy, OptionType::Put, dec!(140), dec!(5.20), dec!(5.40)),
    ]);
    let m = calc.calculate(&credit).unwrap();
    assert_eq!(m.max_profit.bounded(), Some(eval.payoff_at(&credit, dec!(400))));
    assert_eq!(m.max_loss.bounded(), Some(-eval.payoff_at(&credit, dec!(10))));
}

#[test]
fn curve_spans_half_to_one_and_a_half_reference() {
    let s = strategy(vec![leg(
        LegAction::Buy,
        OptionType::Call,
        dec!(150),
        dec!(5.00),
        dec!(5.40),
    )]);
    let curve = PayoffEvaluator::new().sample_curve(&s, dec!(150));

    assert_eq!(curve.len(), DEFAULT_CURVE_POINTS);
    assert_eq!(curve.first().unwrap().price, dec!(75));
    assert_eq!(curve.last().unwrap().price, dec!(225));
}

#[test]
fn calculate_twice_yields_identical_metrics() {
    let s = strategy(vec![
        leg(LegAction::Sell, OptionType::Call, dec!(145), dec!(12.00), dec!(12.20)),
        leg(LegAction::Buy, OptionType::Call, dec!(155), dec!(6.80), dec!(7.00)),
    ]);
    let calc = StrategyCalculator::new();
    let first = calc.calculate(&s).unwrap();
    let second = calc.calculate(&s).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn leg_count_violations_are_rejected_at_construction() {
    assert_eq!(
        Strategy::new(vec![], "AAPL", Utc::now()).unwrap_err(),
        ValidationError::LegCountOutOfRange { count: 0 }
    );

    let legs = vec![
        leg(LegAction::Buy, OptionType::Call, dec!(140), dec!(1), dec!(2)),
        leg(LegAction::Buy, OptionType::Call, dec!(150), dec!(1), dec!(2)),
        leg(LegAction::Buy, OptionType::Call, dec!(160), dec!(1), dec!(2)),
    ];
    assert_eq!(
        Strategy::new(legs, "AAPL", Utc::now()).unwrap_err(),
        ValidationError::LegCountOutOfRange { count: 3 }
    );
}

#[test]
fn metrics_survive_a_storage_round_trip() {
    // Unbounded sides serialize as the legacy 99999 figure and come back
    // tagged, so old journal rows and new ones read identically.
    let s = strategy(vec![leg(
        LegAction::Buy,
        OptionType::Call,
        dec!(150),
        dec!(5.00),
        dec!(5.40),
    )]);
    let m = StrategyCalculator::new().calculate(&s).unwrap();

    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains("99999"));
    let back: strategy_engine::StrategyMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}
