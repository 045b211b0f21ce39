use replenishment_dp::solver::bottom_up::BottomUpSolver;
use replenishment_dp::solver::top_down::TopDownSolver;
use replenishment_dp::solver::traits::DecisionPolicy;
use replenishment_dp::{solve, verify, CostParams, PlanError, SolveResult, SolverKind, TieBreak};

fn solve_lowest(
    kind: SolverKind,
    demand: &[u32],
    initial_stock: i64,
    params: &CostParams,
) -> SolveResult {
    solve(kind, demand, initial_stock, params, TieBreak::LowestOrder).unwrap()
}

fn example_params() -> CostParams {
    CostParams::new(1, 1, 4, 20, 20).unwrap()
}

#[test]
fn worked_example_orders_to_cover_first_day() {
    let demand = [10, 0, 5];
    let bu = solve_lowest(SolverKind::BottomUp, &demand, 0, &example_params());
    let td = solve_lowest(SolverKind::TopDown, &demand, 0, &example_params());

    assert!(bu.orders[0] >= 10);
    assert_eq!(bu.total_cost, 15);
    assert_eq!(bu.orders, vec![10, 0, 5]);
    assert_eq!(bu.trajectory, vec![0, 0, 0, 0]);
    assert_eq!(bu.days.iter().map(|d| d.shortage).sum::<u32>(), 0);
    assert_eq!(td.total_cost, bu.total_cost);
    assert_eq!(td.orders, bu.orders);
    assert_eq!(td.days, bu.days);
    assert!(verify::compare(&bu, &td).is_ok());
}

#[test]
fn empty_horizon_costs_nothing() {
    for kind in [SolverKind::BottomUp, SolverKind::TopDown] {
        let result = solve_lowest(kind, &[], 7, &example_params());
        assert_eq!(result.total_cost, 0);
        assert!(result.orders.is_empty());
        assert_eq!(result.trajectory, vec![7]);
        assert!(result.days.is_empty());
    }
}

#[test]
fn initial_stock_above_capacity_is_clamped() {
    let result = solve_lowest(SolverKind::TopDown, &[3], 500, &example_params());
    assert_eq!(result.trajectory, vec![20, 17]);
    assert_eq!(result.orders, vec![0]);
    assert_eq!(result.total_cost, 17);
}

#[test]
fn negative_parameters_rejected_before_solving() {
    let err = CostParams::new(1, 1, -4, 20, 20).unwrap_err();
    assert_eq!(
        err,
        PlanError::NegativeParameter {
            name: "shortage_penalty",
            value: -4
        }
    );
}

#[test]
fn tie_break_changes_plan_but_not_cost() {
    // free holding: stocking up early costs the same as ordering daily
    let params = CostParams::new(1, 0, 5, 10, 10).unwrap();
    let demand = [2, 2];
    let low = solve_lowest(SolverKind::BottomUp, &demand, 0, &params);
    let high = solve(SolverKind::BottomUp, &demand, 0, &params, TieBreak::HighestOrder).unwrap();
    assert_eq!(low.total_cost, high.total_cost);
    assert_eq!(low.orders, vec![2, 2]);
    assert_eq!(high.orders, vec![4, 0]);
    assert!(!verify::solutions_agree(&low, &high));

    let high_td = solve(SolverKind::TopDown, &demand, 0, &params, TieBreak::HighestOrder)
        .unwrap();
    assert!(verify::solutions_agree(&high, &high_td));
}

#[test]
fn lazy_solver_matches_full_table_on_whole_grid() {
    let params = CostParams::new(2, 1, 6, 7, 15).unwrap();
    let demand = [4, 0, 9, 3, 3, 11, 1];
    let mut table = BottomUpSolver::new(&demand, params, TieBreak::LowestOrder);
    let mut lazy = TopDownSolver::new(&demand, params, TieBreak::LowestOrder);
    for day in 0..=demand.len() {
        for stock in 0..=15 {
            assert_eq!(lazy.value(day, stock), table.value(day, stock), "V({day}, {stock})");
            if day < demand.len() {
                assert_eq!(lazy.best_order(day, stock), table.best_order(day, stock));
            }
        }
    }
    assert_eq!(lazy.cached_states(), demand.len() * 16);
}

#[test]
fn non_negative_cost_on_simulated_demand() {
    let levels = [250, 80, 60, 50, 170];
    let schedule = replenishment_dp::io::demand::simulate_consumption(&levels, 7, 42);
    let params = CostParams::new(1, 1, 4, 100, 150).unwrap();
    let bu = solve_lowest(SolverKind::BottomUp, &schedule, 20, &params);
    let td = solve_lowest(SolverKind::TopDown, &schedule, 20, &params);
    assert!(verify::compare(&bu, &td).is_ok());
    assert_eq!(bu.orders.len(), 7);
}
