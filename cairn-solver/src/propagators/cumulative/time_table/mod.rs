//! Contains the time-table propagator which is used when the cumulative constraint has to be
//! decomposed because a duration, a demand or the capacity is not fixed.
//!
//! # Theoretical
//!
//! Time-table reasoning is based on the **compulsory part** of a task; informally, the compulsory
//! part of a task is the set of time points at which the task *has* to execute given its current
//! bounds. With the notation of [`crate::propagators::cumulative`], the compulsory part of task
//! *i* is the interval `[LST_i, ECT_i)`.
//!
//! The **time-table** tracks the cumulative usage of the compulsory parts over time. If it exceeds
//! the capacity the constraint is violated. Otherwise, a task which would overflow the capacity
//! when it overlaps a part of the time-table (to which it does not contribute itself) cannot start
//! at any time which makes it overlap that part.
//!
//! The simplest example of this is if we have a resource with capacity 1 and we have the following
//! two tasks:
//! - Task 1: Start times: [0, 5], Processing time: 4, Resource usage: 1
//! - Task 2: Start times: [3, 3], Processing time: 2, Resource usage: 1
//!
//! Task 2 has the compulsory part `[3, 5)`. If Task 1 started at any time before 5 it would overlap
//! this compulsory part, so the lower bound of its start is raised to 5.
//!
//! When durations, demands and the capacity are variables, the reasoning uses the smallest
//! duration and demand of every task and the largest capacity; it also raises the lower bound of
//! the capacity to the height of the time-table.
mod time_table_propagator;

pub use time_table_propagator::TimeTablePropagator;
