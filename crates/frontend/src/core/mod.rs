//! Pure state core of the portal: page classification, filter keys,
//! navigation click handling and the cross-page filter handoff.
//!
//! Nothing in here touches the DOM or browser storage directly, so the
//! whole module tree is unit-testable on the host target.

pub mod filter;
pub mod handoff;
pub mod nav;
pub mod page;
