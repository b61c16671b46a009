pub mod bundle;
pub mod completion;
pub mod create_rsp;
