//! Target-independent model of the portfolio site: content tables, the
//! gallery view-model, the contact form state machine and the language
//! preference. Nothing here touches the browser.

pub mod domain;
pub mod shared;
pub mod system;
