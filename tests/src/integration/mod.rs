//! Cross-module integration flows.

mod profile_flows;
mod registry_flows;
