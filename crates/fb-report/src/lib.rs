//! `fb-report`: reduces simulation stats to a report with one best agent.
//!
//! The best agent has the **lowest** efficiency (distance per package) among
//! agents that delivered at least one package.  Idle agents stay in the
//! report but never win.  When every agent is idle the report carries
//! [`BestAgent::NoQualifyingAgent`] instead of an arbitrary pick.

pub mod report;


pub use report::{BestAgent, Report, generate_report, select_best_agent};
