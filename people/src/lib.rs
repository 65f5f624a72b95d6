//! A small model of people and a set of arithmetic helpers.
//!
//! - **[`core`]**: Pure, deterministic logic: name formatting, the [`Person`]
//!   entity with its optional [`Role`], the explicit [`Census`] population
//!   counter, and the arithmetic helpers in [`core::arith`].
//! - **[`io`]**: Roster TOML loading and the [`Announcer`] that writes what
//!   people say.
//!
//! [`cli`] and [`roster`] coordinate the two to implement the `people` binary.
//!
//! [`Person`]: core::person::Person
//! [`Role`]: core::person::Role
//! [`Census`]: core::census::Census
//! [`Announcer`]: io::announce::Announcer

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod roster;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
