// src/solver/top_down.rs

use crate::model::{transition, CostParams, TieBreak};
use crate::solver::bellman::{best_choice, Choice};
use crate::solver::traits::DecisionPolicy;
use log::debug;
use std::collections::HashMap;

/// Pending work on the explicit stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    day: usize,
    stock: u32,
    /// Successors have already been scheduled; resolve on next visit.
    expanded: bool,
}

/// Memoized search that only evaluates states reachable from the queries it
/// receives.
///
/// The recursion `V(t, s) = min_q cost + V(t + 1, s')` runs on an explicit
/// stack, so call depth does not grow with the horizon. Each `(day, stock)`
/// pair is resolved at most once and kept in `cache`.
#[derive(Debug, Clone)]
pub struct TopDownSolver {
    demand: Vec<u32>,
    params: CostParams,
    tie_break: TieBreak,
    cache: HashMap<(usize, u32), Choice>,
    /// Largest work-stack length seen by any query.
    peak_frames: usize,
}

impl TopDownSolver {
    pub fn new(demand: &[u32], params: CostParams, tie_break: TieBreak) -> Self {
        Self {
            demand: demand.to_vec(),
            params,
            tie_break,
            cache: HashMap::new(),
            peak_frames: 0,
        }
    }

    /// `V(day, stock)` and its minimizing order, computing whatever is missing.
    ///
    /// `stock` is clamped into `[0, Smax]`. At `day >= T` returns the boundary
    /// `(0, 0)` without touching the cache.
    pub fn evaluate(&mut self, day: usize, stock: u32) -> Choice {
        let horizon = self.demand.len();
        let stock = stock.min(self.params.max_stock);
        if day >= horizon {
            return Choice::TERMINAL;
        }
        if let Some(hit) = self.cache.get(&(day, stock)) {
            return *hit;
        }

        let before = self.cache.len();
        let mut stack = vec![Frame {
            day,
            stock,
            expanded: false,
        }];

        while let Some(frame) = stack.pop() {
            self.peak_frames = self.peak_frames.max(stack.len() + 1);
            if self.cache.contains_key(&(frame.day, frame.stock)) {
                continue;
            }

            if frame.expanded {
                let choice = self.resolve(frame.day, frame.stock);
                self.cache.insert((frame.day, frame.stock), choice);
                continue;
            }

            stack.push(Frame {
                expanded: true,
                ..frame
            });

            let next_day = frame.day + 1;
            if next_day == horizon {
                continue;
            }
            // next_stock is non-decreasing in the order, so comparing with the
            // previous candidate is enough to schedule each successor once.
            let demand = self.demand[frame.day];
            let mut previous = None;
            for order in 0..=self.params.max_order {
                let step = transition(frame.stock, order, demand, &self.params);
                if previous != Some(step.next_stock)
                    && !self.cache.contains_key(&(next_day, step.next_stock))
                {
                    stack.push(Frame {
                        day: next_day,
                        stock: step.next_stock,
                        expanded: false,
                    });
                }
                previous = Some(step.next_stock);
                // larger orders are all capped at the same stock
                if step.replenished == self.params.max_stock {
                    break;
                }
            }
        }

        debug!(
            "top-down: query ({}, {}) added {} states, cache holds {}",
            day,
            stock,
            self.cache.len() - before,
            self.cache.len()
        );

        self.cache[&(day, stock)]
    }

    /// Bellman step for a state whose successors are all cached.
    fn resolve(&self, day: usize, stock: u32) -> Choice {
        let next_day = day + 1;
        let terminal = next_day == self.demand.len();
        let cache = &self.cache;

        best_choice(stock, self.demand[day], &self.params, self.tie_break, |next| {
            if terminal {
                0
            } else {
                cache[&(next_day, next)].cost
            }
        })
    }

    /// Number of `(day, stock)` states resolved so far.
    pub fn cached_states(&self) -> usize {
        self.cache.len()
    }

    /// Peak length of the explicit work stack. At most one frame per
    /// distinct successor, so bounded by `T * (Smax + 2)`.
    pub fn peak_stack_frames(&self) -> usize {
        self.peak_frames
    }

    pub fn is_cached(&self, day: usize, stock: u32) -> bool {
        self.cache.contains_key(&(day, stock))
    }

    /// Drops every cached state. Later queries recompute from scratch.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.peak_frames = 0;
    }
}

impl DecisionPolicy for TopDownSolver {
    fn best_order(&mut self, day: usize, stock: u32) -> u32 {
        self.evaluate(day, stock).order
    }

    fn value(&mut self, day: usize, stock: u32) -> u64 {
        self.evaluate(day, stock).cost
    }
}
