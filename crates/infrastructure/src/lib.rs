//! Ferrous SplitDNS Infrastructure Layer
pub mod http;
pub mod storage;
